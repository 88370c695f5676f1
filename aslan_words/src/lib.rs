// Aslan word and name generator.
//
// The caller-facing layer over `aslan_lang`: turns a validated request into
// finished words. Also home of the `generate-word` binary (`main.rs`).
//
// Architecture:
// - `options.rs`: `WordType`, `Gender`, `SyllableCount`, `GeneratorOptions`
//   and their validation
// - `config.rs`: `GeneratorConfig`, the JSON form of a batch request
// - `generate.rs`: Word/name generation pipeline and `GeneratedWord`
// - `error.rs`: `GenerateError`
//
// Randomness is always passed in. This crate never seeds anything on its own;
// the binary decides between a user seed and fresh entropy.

pub mod config;
pub mod error;
pub mod generate;
pub mod options;

pub use config::GeneratorConfig;
pub use error::{GenerateError, GenerateResult};
pub use generate::{GeneratedWord, generate, generate_batch, generate_name, generate_with};
pub use options::{Gender, GeneratorOptions, SyllableCount, WordType};
