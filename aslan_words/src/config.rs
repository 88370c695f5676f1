// JSON generator configuration.
//
// A config file describes a batch request: the word type, an optional
// explicit syllable count, an optional seed for reproducible output, and how
// many words to produce. JSON string in, typed struct out, with serde
// defaults for omitted fields and unknown fields rejected.
//
// Example:
//
//   {
//     "word_type": "female",
//     "syllables": { "between": { "from": 2, "to": 3 } },
//     "seed": 42,
//     "count": 5
//   }

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, GenerateResult};
use crate::options::{GeneratorOptions, SyllableCount, WordType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub word_type: WordType,
    /// Explicit syllable count; the word type's default range when absent.
    #[serde(default)]
    pub syllables: Option<SyllableCount>,
    /// Seed for reproducible output; fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of words to generate.
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            word_type: WordType::default(),
            syllables: None,
            seed: None,
            count: default_count(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> GenerateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> GenerateResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GenerateError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// The generation options this config describes.
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions::new()
            .with_type(self.word_type)
            .with_syllable_count(self.syllables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.count, 1);
        assert_eq!(config.options(), GeneratorOptions::new());
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "word_type": "female",
            "syllables": {"between": {"from": 2, "to": 3}},
            "seed": 42,
            "count": 5
        }"#;
        let config = GeneratorConfig::from_json(json).unwrap();
        assert_eq!(config.word_type, WordType::FemaleName);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.count, 5);
        assert_eq!(
            config.options().syllables(),
            SyllableCount::Between { from: 2, to: 3 }
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = GeneratorConfig::from_json(r#"{"syllabels": {"fixed": 2}}"#).unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));
    }

    #[test]
    fn test_unknown_word_type_is_rejected() {
        assert!(GeneratorConfig::from_json(r#"{"word_type": "dragon"}"#).is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = GeneratorConfig::load(Path::new("/nonexistent/aslan.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/aslan.json"));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GeneratorConfig {
            word_type: WordType::MaleName,
            syllables: Some(SyllableCount::Fixed(3)),
            seed: Some(7),
            count: 2,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
    }
}
