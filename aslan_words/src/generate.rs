// Aslan word and name generation.
//
// Pipeline for one word:
// 1. Validate the options (fail fast, nothing is drawn on failure)
// 2. Resolve the syllable count (one draw if it is a range)
// 3. Build the syllable sequence (`aslan_lang::build_sequence`)
// 4. Compile the composite template with collapsing on and expand it
// 5. Capitalize if the word type is a name
//
// Every draw comes from the one source passed in, so a seeded `WordRng`
// reproduces the same word, syllable count included.

use aslan_lang::{Pattern, build_sequence, composite_template, shape_key_sequence};
use aslan_prng::{IntegerSource, WordRng};

use crate::config::GeneratorConfig;
use crate::error::GenerateResult;
use crate::options::{Gender, GeneratorOptions, WordType};

/// A generated word together with how it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWord {
    /// The final text.
    pub text: String,
    pub word_type: WordType,
    /// Shape keys of the syllables, e.g. `["CV", "VC"]`.
    pub shapes: Vec<&'static str>,
    /// The composite alternation template the text was expanded from.
    pub template: String,
}

/// Generate one word with a `WordRng`.
pub fn generate(options: &GeneratorOptions, rng: &mut WordRng) -> GenerateResult<GeneratedWord> {
    generate_with(options, rng)
}

/// Generate one word, drawing from any integer source.
pub fn generate_with<S>(options: &GeneratorOptions, source: &mut S) -> GenerateResult<GeneratedWord>
where
    S: IntegerSource + ?Sized,
{
    options.validate()?;

    let syllables = options.syllables().resolve(source);
    let sequence = build_sequence(syllables, source);
    let template = composite_template(&sequence);
    let pattern = Pattern::compile(&template, true)?;
    let raw = pattern.generate(source);

    let word_type = options.word_type();
    let text = if word_type.is_name() {
        capitalize(&raw)
    } else {
        raw
    };
    log::debug!("generated {word_type} '{text}' from {syllables} syllables");

    Ok(GeneratedWord {
        text,
        word_type,
        shapes: shape_key_sequence(&sequence),
        template,
    })
}

/// Generate a name for `gender`, keeping any explicit syllable count from
/// `options`.
pub fn generate_name(
    gender: Gender,
    options: &GeneratorOptions,
    rng: &mut WordRng,
) -> GenerateResult<GeneratedWord> {
    let options = options.with_type(gender.word_type());
    generate(&options, rng)
}

/// Generate `config.count` words from one source. Fails before drawing
/// anything if the config's options are invalid.
pub fn generate_batch<S>(config: &GeneratorConfig, source: &mut S) -> GenerateResult<Vec<GeneratedWord>>
where
    S: IntegerSource + ?Sized,
{
    let options = config.options();
    options.validate()?;
    (0..config.count)
        .map(|_| generate_with(&options, source))
        .collect()
}

/// Capitalize the first character of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}
