// Template rendering: flattening a syllable sequence for the pattern expander.
//
// The composite template is the in-order concatenation of every syllable's
// alternation template. The per-syllable template list and the shape-key list
// exist for tests and diagnostics (the CLI's `--show-template`), not for
// rendering.

use std::fmt;

use crate::sequence::SyllableSequence;

/// Concatenate every syllable's template, in order. An empty sequence renders
/// as an empty string.
pub fn composite_template(sequence: &SyllableSequence) -> String {
    sequence.iter().map(|s| s.rendered_template()).collect()
}

/// One template per syllable, in sequence order.
pub fn template_sequence(sequence: &SyllableSequence) -> Vec<String> {
    sequence.iter().map(|s| s.rendered_template()).collect()
}

/// Uppercase shape tags, e.g. `["V", "CV", "VC"]`.
pub fn shape_key_sequence(sequence: &SyllableSequence) -> Vec<&'static str> {
    sequence.iter().map(|s| s.shape().key()).collect()
}

impl fmt::Display for SyllableSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for syllable in self {
            f.write_str(&syllable.rendered_template())?;
        }
        Ok(())
    }
}
