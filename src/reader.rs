use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::lexicon::{Dictionary, Lexicon, NegationSet, Resources};

/// Locations of the three resource files
#[derive(Debug, Clone)]
pub struct ResourcePaths {
    /// `term<TAB>score` sentiment lexicon
    pub lexicon: PathBuf,
    /// One negation word per line
    pub negations: PathBuf,
    /// One dictionary word per line
    pub dictionary: PathBuf,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            lexicon: PathBuf::from("AFINN-en-165.txt"),
            negations: PathBuf::from("negations.txt"),
            dictionary: PathBuf::from("2of12.txt"),
        }
    }
}

/// Read a whole UTF-8 file asynchronously
pub async fn read_file_async<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading {}", path.display());

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Load and parse all three resources concurrently
/// WHY: any failure here is fatal, so it surfaces before the first analysis runs
pub async fn load_resources(paths: &ResourcePaths) -> Result<Resources> {
    let start_time = std::time::Instant::now();

    let (lexicon_text, negation_text, dictionary_text) = tokio::try_join!(
        read_file_async(&paths.lexicon),
        read_file_async(&paths.negations),
        read_file_async(&paths.dictionary),
    )?;

    let lexicon = Lexicon::parse(&lexicon_text)
        .with_context(|| format!("Invalid lexicon {}", paths.lexicon.display()))?;
    let negations = NegationSet::parse(&negation_text);
    let dictionary = Dictionary::parse(&dictionary_text);

    info!(
        lexicon_entries = lexicon.len(),
        negation_words = negations.len(),
        dictionary_words = dictionary.len(),
        max_word_len = dictionary.max_word_len(),
        duration_ms = start_time.elapsed().as_millis() as u64,
        "Loaded analysis resources"
    );

    Ok(Resources::new(lexicon, negations, dictionary))
}

/// Pick the text to analyze: typed text wins over file contents unless it is empty
pub fn select_input(typed: Option<String>, file_text: Option<String>) -> Option<String> {
    match typed {
        Some(text) if !text.is_empty() => Some(text),
        _ => file_text.filter(|text| !text.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_text_wins() {
        let picked = select_input(Some("typed".into()), Some("file".into()));
        assert_eq!(picked.as_deref(), Some("typed"));
    }

    #[test]
    fn test_empty_typed_text_falls_back_to_file() {
        let picked = select_input(Some(String::new()), Some("file".into()));
        assert_eq!(picked.as_deref(), Some("file"));
        assert_eq!(select_input(None, Some("file".into())).as_deref(), Some("file"));
    }

    #[test]
    fn test_no_input() {
        assert_eq!(select_input(None, None), None);
        assert_eq!(select_input(Some(String::new()), Some(String::new())), None);
    }

    #[test]
    fn test_default_paths() {
        let paths = ResourcePaths::default();
        assert_eq!(paths.negations, PathBuf::from("negations.txt"));
        assert_eq!(paths.dictionary, PathBuf::from("2of12.txt"));
    }
}
