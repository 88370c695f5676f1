// Error type for the word generation layer.
//
// Everything here is raised before or around generation, never from inside
// the syllable builder: the builder is total over its inputs. Options are
// validated up front so a bad request fails without producing partial output.

use aslan_lang::PatternError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("number of syllables must be one or greater, got {0}")]
    InvalidSyllableCount(i32),

    #[error("invalid syllable range {from}..={to}: {reason}")]
    InvalidRange {
        from: i32,
        to: i32,
        reason: &'static str,
    },

    #[error("invalid word type '{0}', valid types are: word, male, female")]
    UnknownWordType(String),

    #[error("malformed word template: {0}")]
    Pattern(#[from] PatternError),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("config file error: {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type GenerateResult<T> = Result<T, GenerateError>;
