// Aslan constructed language: syllable-level word construction.
//
// Turns a syllable count into a pronounceable Aslan word in two stages:
// first a sequence of syllable shapes obeying the language's phonotactics,
// then a concrete string expanded from that sequence's alternation template.
// No I/O, no global state.
//
// Architecture:
// - `catalog.rs`: Syllable shapes (V, CV, VC, CVC), weights, legal successors,
//   phoneme pools, vowel subsets, per-shape template rendering
// - `sequence.rs`: Weighted picking and the sequence builder (adjacency and
//   no-repeated-single-vowel rules)
// - `template.rs`: Composite template, per-syllable templates, shape keys
// - `pattern.rs`: Compiles and expands alternation templates, with optional
//   duplicate-letter collapsing
//
// Determinism constraint: every random decision goes through an
// `aslan_prng::IntegerSource` supplied by the caller, in a fixed call order.
// The same source state always yields the same sequence and the same word.

pub mod catalog;
pub mod pattern;
pub mod sequence;
pub mod template;

// Re-export key types at crate root for convenience.
pub use aslan_prng::IntegerSource;
pub use catalog::{PhonemePool, SingleVowel, SyllableShape, VowelSubset};
pub use pattern::{Pattern, PatternError};
pub use sequence::{SyllableInstance, SyllableSequence, build_sequence, pick_weighted};
pub use template::{composite_template, shape_key_sequence, template_sequence};

/// Build an `n`-syllable sequence and expand it into a word, drawing both
/// stages from the same source. Collapsing is always on.
///
/// Returns an empty string for `n < 1`.
pub fn generate_word<S>(n: i32, source: &mut S) -> Result<String, PatternError>
where
    S: IntegerSource + ?Sized,
{
    let sequence = build_sequence(n, source);
    let pattern = Pattern::compile(&composite_template(&sequence), true)?;
    Ok(pattern.generate(source))
}
