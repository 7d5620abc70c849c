// Resource loading failures and degenerate inputs
// WHY: Loading errors must surface before analysis; degenerate inputs must never error

use std::path::PathBuf;
use tonal::{load_resources, read_file_async, Action, Analyzer, ResourcePaths};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{TestFixture, DICTIONARY, LEXICON, NEGATIONS};

/// Test that a missing resource file names the path
#[tokio::test]
async fn test_missing_resource_file() {
    let fixture = TestFixture::new();
    let mut paths = fixture.create_default_resources();
    paths.dictionary = fixture.root_path.join("missing-dictionary.txt");

    let error = load_resources(&paths).await.expect_err("Missing dictionary should fail");
    assert!(
        format!("{error:#}").contains("missing-dictionary.txt"),
        "Error should name the missing file: {error:#}"
    );
}

/// Test that a malformed lexicon line is reported with its line number
#[tokio::test]
async fn test_malformed_lexicon() {
    let fixture = TestFixture::new();
    let paths = fixture.create_resources("good\t3\nbad\tworse\n", NEGATIONS, DICTIONARY);

    let error = load_resources(&paths).await.expect_err("Malformed lexicon should fail");
    let message = format!("{error:#}");
    assert!(message.contains("Invalid lexicon"), "Unexpected error: {message}");
    assert!(message.contains("line 2"), "Unexpected error: {message}");
}

/// Test that non-UTF-8 input files are rejected
#[tokio::test]
async fn test_invalid_utf8_input() {
    let fixture = TestFixture::new();
    let input_path = fixture.root_path.join("invalid.txt");
    std::fs::write(&input_path, [0xFF, 0xFE, 0xFD]).expect("Failed to write invalid UTF-8 file");

    assert!(read_file_async(&input_path).await.is_err());
}

/// Test default resource paths fail cleanly when absent from the working directory
#[tokio::test]
async fn test_absent_default_paths() {
    let fixture = TestFixture::new();
    let paths = ResourcePaths {
        lexicon: fixture.root_path.join(PathBuf::from("AFINN-en-165.txt")),
        ..ResourcePaths::default()
    };

    assert!(load_resources(&paths).await.is_err());
}

/// Test resource parsing rules applied through the loader
#[tokio::test]
async fn test_loaded_resource_contents() {
    let fixture = TestFixture::new();
    let resources = load_resources(&fixture.create_default_resources()).await.unwrap();

    assert_eq!(resources.lexicon.len(), LEXICON.lines().count());
    assert_eq!(resources.negations.len(), 3, "Blank lines are ignored");
    assert!(!resources.dictionary.contains("2nd"), "Non-alphabetic entries are dropped");
    assert!(!resources.dictionary.contains("can't"));
    assert_eq!(resources.dictionary.max_word_len(), "terrible".len());
}

/// Test inputs that produce no or only degenerate sentences
#[tokio::test]
async fn test_degenerate_inputs_do_not_error() {
    let fixture = TestFixture::new();
    let resources = load_resources(&fixture.create_default_resources()).await.unwrap();
    let analyzer = Analyzer::with_default_config(&resources).unwrap();

    // Nothing in the dictionary: every character is dropped
    let result = analyzer.analyze("xyz qqq", Action::RemoveSpace);
    assert_eq!(result.reconstructed_text.as_deref(), Some(""));
    assert!(result.is_empty());
    assert!(result.extreme_segments.is_absent());

    // A lone dot sentence is skipped by the scorer
    let result = analyzer.analyze("Happy. . Sad.", Action::AnalyzeSentiment);
    let texts: Vec<_> = result.sentences.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Happy.", "Sad."]);
}
