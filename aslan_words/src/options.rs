// Generator options: what to generate and how many syllables.
//
// A request is a `WordType` plus an optional explicit `SyllableCount`. When no
// count is given, the word type supplies its own default range (words 2-6,
// male names 3-5, female names 2-4). Options are plain values; `validate()`
// must pass before any generation work starts.
//
// Both types derive serde so they can be embedded directly in the JSON
// config (`config.rs`).

use std::fmt;
use std::str::FromStr;

use aslan_prng::IntegerSource;
use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, GenerateResult};

/// Upper sanity bound on a syllable range. `to` must stay below it.
pub const MAX_SYLLABLES_EXCLUSIVE: i32 = 15;

/// What kind of word to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WordType {
    /// A common word, lower case.
    #[default]
    #[serde(rename = "word")]
    Word,
    /// A male given name, capitalized.
    #[serde(rename = "male")]
    MaleName,
    /// A female given name, capitalized.
    #[serde(rename = "female")]
    FemaleName,
}

impl WordType {
    /// Syllable count used when the caller does not set one.
    pub fn default_syllables(self) -> SyllableCount {
        match self {
            WordType::Word => SyllableCount::Between { from: 2, to: 6 },
            WordType::MaleName => SyllableCount::Between { from: 3, to: 5 },
            WordType::FemaleName => SyllableCount::Between { from: 2, to: 4 },
        }
    }

    pub fn is_name(self) -> bool {
        !matches!(self, WordType::Word)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WordType::Word => "word",
            WordType::MaleName => "male",
            WordType::FemaleName => "female",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordType {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "word" => Ok(WordType::Word),
            "male" => Ok(WordType::MaleName),
            "female" => Ok(WordType::FemaleName),
            _ => Err(GenerateError::UnknownWordType(s.to_string())),
        }
    }
}

/// Gender of a generated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn word_type(self) -> WordType {
        match self {
            Gender::Male => WordType::MaleName,
            Gender::Female => WordType::FemaleName,
        }
    }
}

/// How many syllables to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyllableCount {
    /// Exactly this many.
    Fixed(i32),
    /// Uniformly chosen in `[from, to]`.
    Between { from: i32, to: i32 },
}

impl SyllableCount {
    pub fn validate(&self) -> GenerateResult<()> {
        match *self {
            SyllableCount::Fixed(n) if n < 1 => Err(GenerateError::InvalidSyllableCount(n)),
            SyllableCount::Fixed(_) => Ok(()),
            SyllableCount::Between { from, .. } if from < 1 => {
                Err(GenerateError::InvalidSyllableCount(from))
            }
            SyllableCount::Between { from, to } if from > to => Err(GenerateError::InvalidRange {
                from,
                to,
                reason: "'from' cannot be greater than 'to'",
            }),
            SyllableCount::Between { from, to } if to >= MAX_SYLLABLES_EXCLUSIVE => {
                Err(GenerateError::InvalidRange {
                    from,
                    to,
                    reason: "'to' must be less than 15",
                })
            }
            SyllableCount::Between { .. } => Ok(()),
        }
    }

    /// Settle on a concrete count, drawing once from `source` for a range.
    /// Assumes `validate()` passed.
    pub fn resolve<S>(&self, source: &mut S) -> i32
    where
        S: IntegerSource + ?Sized,
    {
        match *self {
            SyllableCount::Fixed(n) => n,
            SyllableCount::Between { from, to } => {
                let span = (to - from + 1) as usize;
                from + source.next_below(span).min(span - 1) as i32
            }
        }
    }
}

/// A complete generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorOptions {
    word_type: WordType,
    syllables: Option<SyllableCount>,
}

impl GeneratorOptions {
    /// A common word with the default 2-6 syllables.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, word_type: WordType) -> Self {
        self.word_type = word_type;
        self
    }

    /// Exactly `n` syllables, overriding the word type's default.
    pub fn with_syllables(mut self, n: i32) -> Self {
        self.syllables = Some(SyllableCount::Fixed(n));
        self
    }

    /// A random count in `[from, to]`, overriding the word type's default.
    pub fn with_syllables_between(mut self, from: i32, to: i32) -> Self {
        self.syllables = Some(SyllableCount::Between { from, to });
        self
    }

    pub fn with_syllable_count(mut self, count: Option<SyllableCount>) -> Self {
        self.syllables = count;
        self
    }

    pub fn word_type(&self) -> WordType {
        self.word_type
    }

    /// The count that will be used: the explicit one, or the type's default.
    pub fn syllables(&self) -> SyllableCount {
        self.syllables
            .unwrap_or_else(|| self.word_type.default_syllables())
    }

    pub fn validate(&self) -> GenerateResult<()> {
        self.syllables().validate()
    }
}
