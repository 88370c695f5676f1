// Aslan word generator: CLI entry point.
//
// Prints one or more generated Aslan words or names, one per line.
//
// Usage:
//   cargo run -p aslan_words -- [--syllables N | --min A --max B]
//     [--type word|male|female] [--count K] [--seed N] [--config FILE]
//     [--show-template] [--log-level LEVEL]
//
// Flags given on the command line override the config file. Invalid options
// print an error to stderr and exit with status 1.

use std::path::PathBuf;

use anyhow::{Context, Result};
use aslan_prng::WordRng;
use aslan_words::{GeneratorConfig, SyllableCount, WordType, generate_batch};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "generate-word")]
#[command(about = "Generate random words and names in the Aslan language")]
struct Cli {
    /// Exact number of syllables; overrides the word type's default range
    #[arg(short, long, allow_negative_numbers = true, conflicts_with_all = ["min", "max"])]
    syllables: Option<i32>,

    /// Lower bound of a random syllable count (requires --max)
    #[arg(long, requires = "max", allow_negative_numbers = true)]
    min: Option<i32>,

    /// Upper bound of a random syllable count (requires --min)
    #[arg(long, requires = "min", allow_negative_numbers = true)]
    max: Option<i32>,

    /// Type of word to generate: word, male or female
    #[arg(short = 't', long = "type")]
    word_type: Option<String>,

    /// Number of words to print
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also print each word's syllable shapes and template
    #[arg(long)]
    show_template: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG also applies
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Merge command-line flags over the config file (or the defaults).
    fn into_config(self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(word_type) = &self.word_type {
            config.word_type = word_type.parse::<WordType>()?;
        }
        if let Some(n) = self.syllables {
            config.syllables = Some(SyllableCount::Fixed(n));
        }
        if let (Some(from), Some(to)) = (self.min, self.max) {
            config.syllables = Some(SyllableCount::Between { from, to });
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let show_template = cli.show_template;
    let config = cli.into_config()?;
    log::info!("generating with {config:?}");

    let seed = config.seed.unwrap_or_else(rand::random);
    log::debug!("seed {seed}");
    let mut rng = WordRng::new(seed);

    let words = generate_batch(&config, &mut rng)
        .with_context(|| format!("unable to generate an Aslan {}", config.word_type))?;

    for word in words {
        println!("{}", word.text);
        if show_template {
            println!("  shapes: {}", word.shapes.join(" "));
            println!("  template: {}", word.template);
        }
    }
    Ok(())
}
