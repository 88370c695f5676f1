// End-to-end tests for the library API and the `generate-word` binary.
//
// The library half drives `aslan_words` the way a caller would: options in,
// words out, with seeded RNGs. The binary half runs the built executable and
// checks stdout, stderr, and the exit status for the flag combinations the
// tool supports.

use std::io::Write;
use std::process::{Command, Output};

use aslan_prng::WordRng;
use aslan_words::{
    Gender, GenerateError, GeneratorConfig, GeneratorOptions, WordType, generate, generate_batch,
    generate_name,
};

/// Run the binary with `args` and capture everything.
fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_generate-word"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

#[test]
fn test_every_word_type_generates_text() {
    for word_type in [WordType::Word, WordType::MaleName, WordType::FemaleName] {
        let options = GeneratorOptions::new().with_type(word_type);
        let word = generate(&options, &mut WordRng::new(100)).unwrap();
        assert_eq!(word.word_type, word_type);
        assert!(!word.shapes.is_empty());
        assert!(!word.template.is_empty());
    }
}

#[test]
fn test_range_option_bounds_syllables() {
    let options = GeneratorOptions::new().with_syllables_between(2, 4);
    for seed in 0..50 {
        let word = generate(&options, &mut WordRng::new(seed)).unwrap();
        assert!((2..=4).contains(&word.shapes.len()));
    }
}

#[test]
fn test_invalid_requests_fail() {
    let zero = GeneratorOptions::new().with_syllables(0);
    assert!(generate(&zero, &mut WordRng::new(1)).is_err());
    assert!(generate_name(Gender::Male, &zero, &mut WordRng::new(1)).is_err());
    assert!(generate_name(Gender::Female, &zero, &mut WordRng::new(1)).is_err());

    let reversed = GeneratorOptions::new().with_syllables_between(5, 3);
    assert!(matches!(
        generate(&reversed, &mut WordRng::new(1)),
        Err(GenerateError::InvalidRange { .. })
    ));
}

#[test]
fn test_seeded_batches_repeat() {
    let config = GeneratorConfig::from_json(r#"{"word_type": "male", "count": 3}"#).unwrap();
    let a = generate_batch(&config, &mut WordRng::new(8)).unwrap();
    let b = generate_batch(&config, &mut WordRng::new(8)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 3);
}

// ---------------------------------------------------------------------------
// Binary
// ---------------------------------------------------------------------------

#[test]
fn test_cli_default_prints_one_word() {
    let output = run(&[]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_cli_accepts_supported_flags() {
    let cases: &[&[&str]] = &[
        &["-s3"],
        &["--type", "male"],
        &["-t", "female"],
        &["--type", "male", "--syllables", "3"],
        &["--type", "female", "-s", "2"],
        &["--min", "2", "--max", "4"],
    ];
    for args in cases {
        let output = run(args);
        assert!(output.status.success(), "{args:?} failed: {output:?}");
        assert_eq!(stdout_lines(&output).len(), 1, "{args:?}");
    }
}

#[test]
fn test_cli_rejects_bad_input() {
    let cases: &[(&[&str], &str)] = &[
        (&["--type", "xyz"], "invalid word type 'xyz'"),
        (
            &["--type", "male", "--syllables", "0"],
            "number of syllables must be one or greater",
        ),
        (&["-s0"], "number of syllables must be one or greater"),
        (&["--min", "5", "--max", "3"], "'from' cannot be greater than 'to'"),
    ];
    for (args, message) in cases {
        let output = run(args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(output.stdout.is_empty(), "{args:?} printed to stdout");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(message), "{args:?}: stderr was {stderr}");
    }
}

#[test]
fn test_cli_help_exits_zero() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

#[test]
fn test_cli_seed_and_count() {
    let a = run(&["--seed", "42", "-n", "5"]);
    let b = run(&["--seed", "42", "-n", "5"]);
    assert!(a.status.success());
    assert_eq!(stdout_lines(&a).len(), 5);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_cli_show_template() {
    let output = run(&["--seed", "1", "-s", "2", "--show-template"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("  shapes: "));
    assert_eq!(lines[1].split_whitespace().count(), 3);
    assert!(lines[2].starts_with("  template: <"));
}

#[test]
fn test_cli_reads_config_and_flags_override() {
    let path = std::env::temp_dir().join(format!("aslan_words_cli_{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{"word_type": "female", "syllables": {{"fixed": 2}}, "seed": 5, "count": 2}}"#
    )
    .unwrap();
    drop(file);

    let path_arg = path.to_str().unwrap();
    let from_file = run(&["--config", path_arg]);
    assert!(from_file.status.success(), "{from_file:?}");
    assert_eq!(stdout_lines(&from_file).len(), 2);

    let overridden = run(&["--config", path_arg, "-n", "4"]);
    assert_eq!(stdout_lines(&overridden).len(), 4);

    let broken = run(&["--config", "/nonexistent/aslan_words.json"]);
    assert_eq!(broken.status.code(), Some(1));

    std::fs::remove_file(&path).unwrap();
}
