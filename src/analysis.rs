// WHY: Orchestrates splitting, scoring and the region finders for one request
// Resources are borrowed read-only; every result is freshly built per call

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

use crate::finders::{
    find_extreme_segments, find_extreme_sentences, find_extreme_windows, Extremes, Segment,
};
use crate::lexicon::Resources;
use crate::scoring::{score_sentences, ScoredSentence};
use crate::sentence_splitter::SentenceSplitter;
use crate::word_break::word_break;

/// What to do with the submitted text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Action {
    /// Score the text as written
    #[default]
    #[value(name = "analyze")]
    AnalyzeSentiment,
    /// Strip spaces, rebuild words from the dictionary, then score
    #[value(name = "remove-space")]
    RemoveSpace,
}

impl Action {
    /// Label used by the original form submission
    pub fn label(&self) -> &'static str {
        match self {
            Action::AnalyzeSentiment => "Analyze Sentiment",
            Action::RemoveSpace => "Remove Space",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Analyze Sentiment" | "analyze" => Ok(Action::AnalyzeSentiment),
            "Remove Space" | "remove-space" => Ok(Action::RemoveSpace),
            other => anyhow::bail!("Unknown action: {other:?}"),
        }
    }
}

/// Configuration for analysis behavior
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Number of consecutive sentences in a fixed window
    pub window_size: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { window_size: 3 }
    }
}

/// Everything derived from one analysis request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub extreme_sentences: Extremes<ScoredSentence>,
    pub extreme_windows: Extremes<Segment>,
    pub extreme_segments: Extremes<Segment>,
    /// Every scored sentence in document order
    pub sentences: Vec<ScoredSentence>,
    /// Text rebuilt by the remove-space path
    pub reconstructed_text: Option<String>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Sentiment analyzer over borrowed resources
#[derive(Debug)]
pub struct Analyzer<'a> {
    resources: &'a Resources,
    splitter: SentenceSplitter,
    config: AnalyzerConfig,
}

impl<'a> Analyzer<'a> {
    pub fn new(resources: &'a Resources, config: AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            resources,
            splitter: SentenceSplitter::new()?,
            config,
        })
    }

    pub fn with_default_config(resources: &'a Resources) -> Result<Self> {
        Self::new(resources, AnalyzerConfig::default())
    }

    /// Run the requested action; blank input yields an empty result
    pub fn analyze(&self, text: &str, action: Action) -> AnalysisResult {
        if text.trim().is_empty() {
            debug!("Blank input, returning empty result");
            return AnalysisResult::default();
        }

        let result = match action {
            Action::AnalyzeSentiment => self.analyze_sentiment(text),
            Action::RemoveSpace => {
                let rebuilt = self.reinsert_spaces(text);
                AnalysisResult {
                    reconstructed_text: Some(rebuilt.clone()),
                    ..self.analyze_sentiment(&rebuilt)
                }
            }
        };

        info!(
            action = %action,
            sentences = result.sentences.len(),
            "Analysis completed"
        );
        result
    }

    /// Split, score, then search for extreme sentences, windows and segments
    pub fn analyze_sentiment(&self, text: &str) -> AnalysisResult {
        let sentences = self.splitter.split_spaced(text);
        let scored = score_sentences(&sentences, &self.resources.lexicon, &self.resources.negations);

        AnalysisResult {
            extreme_sentences: find_extreme_sentences(&scored),
            extreme_windows: find_extreme_windows(&scored, self.config.window_size),
            extreme_segments: find_extreme_segments(&scored),
            sentences: scored,
            reconstructed_text: None,
        }
    }

    /// Remove spaces, rebuild words from the dictionary and join them with single spaces
    pub fn reinsert_spaces(&self, text: &str) -> String {
        let unspaced = text.replace(' ', "");
        let fragments = self.splitter.split_unspaced(&unspaced);
        let words = word_break(&fragments, &self.resources.dictionary);

        debug!(
            "Rebuilt {} tokens from {} fragments",
            words.len(),
            fragments.len()
        );
        words.join(" ")
    }
}
