// Pattern expansion: compiling and expanding alternation templates.
//
// Grammar accepted by `Pattern::compile`:
//
//   sequence     := item*
//   item         := '<' alternatives '>'     random group
//                 | '(' alternatives ')'     literal group
//                 | any other character      literal text
//   alternatives := sequence ('|' sequence)*
//
// Both group kinds pick one alternative uniformly when expanded; they differ
// only in intent (a literal group usually holds a single phoneme). Groups
// nest, and empty alternatives are allowed, so `<(a)|>` is "a" or nothing.
// A `|` outside every group is an error, as are unbalanced brackets.
//
// Expansion draws from an injected `IntegerSource`, once per group with two
// or more alternatives. With collapse enabled, the expanded text is then
// post-processed: repeated letters from `COLLAPSE_TO_ONE` shrink to a single
// letter, and any other character repeated three or more times shrinks to two.

use aslan_prng::IntegerSource;
use thiserror::Error;

/// Letters that never appear doubled after collapsing.
pub const COLLAPSE_TO_ONE: &[char] = &['a', 'h', 'i', 'j', 'q', 'u', 'v', 'w', 'x', 'y'];

/// Errors from compiling a malformed template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("group opened with '{open}' at byte {position} is never closed")]
    UnclosedGroup { open: char, position: usize },

    #[error("unexpected '{found}' at byte {position} with no open group")]
    UnexpectedClose { found: char, position: usize },

    #[error("expected '{expected}' at byte {position}, found '{found}'")]
    MismatchedClose {
        expected: char,
        found: char,
        position: usize,
    },

    #[error("'|' at byte {position} is outside any group")]
    StraySeparator { position: usize },
}

/// One node of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Literal(String),
    /// Uniform choice between alternatives, each a sequence of nodes.
    Choice(Vec<Vec<Node>>),
}

/// A compiled template, ready to expand any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    nodes: Vec<Node>,
    collapse: bool,
}

/// Group being parsed: its closing bracket, where it opened, finished
/// alternatives, and the alternative in progress.
struct OpenGroup {
    close: char,
    open: char,
    position: usize,
    alternatives: Vec<Vec<Node>>,
    current: Vec<Node>,
}

impl Pattern {
    /// Compile `template`. `collapse` enables duplicate-letter collapsing
    /// on every expansion.
    pub fn compile(template: &str, collapse: bool) -> Result<Pattern, PatternError> {
        let mut root: Vec<Node> = Vec::new();
        let mut stack: Vec<OpenGroup> = Vec::new();

        for (position, c) in template.char_indices() {
            match c {
                '<' | '(' => stack.push(OpenGroup {
                    close: if c == '<' { '>' } else { ')' },
                    open: c,
                    position,
                    alternatives: Vec::new(),
                    current: Vec::new(),
                }),
                '>' | ')' => {
                    let Some(mut group) = stack.pop() else {
                        return Err(PatternError::UnexpectedClose { found: c, position });
                    };
                    if group.close != c {
                        return Err(PatternError::MismatchedClose {
                            expected: group.close,
                            found: c,
                            position,
                        });
                    }
                    group.alternatives.push(group.current);
                    let node = Node::Choice(group.alternatives);
                    match stack.last_mut() {
                        Some(parent) => parent.current.push(node),
                        None => root.push(node),
                    }
                }
                '|' => {
                    let Some(group) = stack.last_mut() else {
                        return Err(PatternError::StraySeparator { position });
                    };
                    let finished = std::mem::take(&mut group.current);
                    group.alternatives.push(finished);
                }
                _ => {
                    let target = match stack.last_mut() {
                        Some(group) => &mut group.current,
                        None => &mut root,
                    };
                    push_char(target, c);
                }
            }
        }

        if let Some(group) = stack.pop() {
            return Err(PatternError::UnclosedGroup {
                open: group.open,
                position: group.position,
            });
        }

        Ok(Pattern {
            nodes: root,
            collapse,
        })
    }

    /// Expand the pattern into one concrete string.
    pub fn generate<S>(&self, source: &mut S) -> String
    where
        S: IntegerSource + ?Sized,
    {
        let mut out = String::new();
        expand(&self.nodes, source, &mut out);
        if self.collapse {
            collapse(&out)
        } else {
            out
        }
    }
}

/// Append a literal character, merging with a preceding literal node.
fn push_char(nodes: &mut Vec<Node>, c: char) {
    if let Some(Node::Literal(text)) = nodes.last_mut() {
        text.push(c);
    } else {
        nodes.push(Node::Literal(c.to_string()));
    }
}

fn expand<S>(nodes: &[Node], source: &mut S, out: &mut String)
where
    S: IntegerSource + ?Sized,
{
    for node in nodes {
        match node {
            Node::Literal(text) => out.push_str(text),
            Node::Choice(alternatives) => {
                let index = match alternatives.len() {
                    0 => continue,
                    1 => 0,
                    n => source.next_below(n).min(n - 1),
                };
                expand(&alternatives[index], source, out);
            }
        }
    }
}

/// Shrink runs of repeated characters: letters in `COLLAPSE_TO_ONE` to one,
/// everything else to at most two.
pub fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    let mut run = 0usize;

    for c in text.chars() {
        if Some(c) == last {
            run += 1;
        } else {
            last = Some(c);
            run = 1;
        }
        let limit = if COLLAPSE_TO_ONE.contains(&c.to_ascii_lowercase()) {
            1
        } else {
            2
        };
        if run <= limit {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aslan_prng::{ScriptedSource, WordRng};

    #[test]
    fn test_literal_text_passes_through() {
        let pattern = Pattern::compile("kht'", false).unwrap();
        let mut source = ScriptedSource::new(vec![]);
        assert_eq!(pattern.generate(&mut source), "kht'");
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn test_choice_uses_one_draw_per_group() {
        let pattern = Pattern::compile("<(f)|(k)|(t)><(a)|(e)>", false).unwrap();
        let mut source = ScriptedSource::new(vec![2, 1]);
        assert_eq!(pattern.generate(&mut source), "te");
        assert_eq!(source.bounds(), &[3, 2]);
    }

    #[test]
    fn test_empty_alternative_renders_nothing() {
        let pattern = Pattern::compile("<(a)|>", false).unwrap();
        assert_eq!(pattern.generate(&mut ScriptedSource::new(vec![1])), "");
        assert_eq!(pattern.generate(&mut ScriptedSource::new(vec![0])), "a");
    }

    #[test]
    fn test_nested_groups() {
        let pattern = Pattern::compile("<(k)<(a)|(o)>|(s)>", false).unwrap();
        assert_eq!(pattern.generate(&mut ScriptedSource::new(vec![0, 1])), "ko");
        assert_eq!(pattern.generate(&mut ScriptedSource::new(vec![1])), "s");
    }

    #[test]
    fn test_out_of_range_draw_is_clamped() {
        let pattern = Pattern::compile("<(a)|(e)|(i)>", false).unwrap();
        assert_eq!(pattern.generate(&mut ScriptedSource::new(vec![99])), "i");
    }

    #[test]
    fn test_malformed_patterns_are_rejected() {
        assert_eq!(
            Pattern::compile("<(a)|(e)", false),
            Err(PatternError::UnclosedGroup {
                open: '<',
                position: 0
            })
        );
        assert_eq!(
            Pattern::compile("(a))", false),
            Err(PatternError::UnexpectedClose {
                found: ')',
                position: 3
            })
        );
        assert_eq!(
            Pattern::compile("<(a>", false),
            Err(PatternError::MismatchedClose {
                expected: ')',
                found: '>',
                position: 3
            })
        );
        assert_eq!(
            Pattern::compile("a|b", false),
            Err(PatternError::StraySeparator { position: 1 })
        );
    }

    #[test]
    fn test_error_messages_name_the_position() {
        let err = Pattern::compile("<(a)", false).unwrap_err();
        assert_eq!(err.to_string(), "group opened with '<' at byte 0 is never closed");
    }

    #[test]
    fn test_collapse_rules() {
        assert_eq!(collapse("haa"), "ha");
        assert_eq!(collapse("kkk"), "kk");
        assert_eq!(collapse("ee"), "ee");
        assert_eq!(collapse("eee"), "ee");
        assert_eq!(collapse("hhwwii"), "hwi");
        assert_eq!(collapse("''''"), "''");
        assert_eq!(collapse(""), "");
    }

    #[test]
    fn test_collapse_applies_on_generate() {
        let pattern = Pattern::compile("<(a)>(a)", true).unwrap();
        assert_eq!(pattern.generate(&mut ScriptedSource::new(vec![])), "a");
        let raw = Pattern::compile("<(a)>(a)", false).unwrap();
        assert_eq!(raw.generate(&mut ScriptedSource::new(vec![])), "aa");
    }

    #[test]
    fn test_generated_templates_compile_and_expand() {
        for seed in 0..100 {
            let mut rng = WordRng::new(seed);
            let sequence = crate::sequence::build_sequence(4, &mut rng);
            let template = crate::template::composite_template(&sequence);
            let pattern = Pattern::compile(&template, true).unwrap();
            let word = pattern.generate(&mut rng);
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase() || c == '\''),
                "seed {seed}: unexpected character in '{word}'"
            );
        }
    }
}
