pub mod analysis;
pub mod finders;
pub mod lexicon;
pub mod reader;
pub mod report;
pub mod scoring;
pub mod sentence_splitter;
pub mod word_break;

// Re-export main types for convenient access
pub use analysis::{Action, AnalysisResult, Analyzer, AnalyzerConfig};
pub use finders::{Extremes, Segment};
pub use lexicon::{Dictionary, Lexicon, NegationSet, Resources};
pub use scoring::ScoredSentence;
pub use sentence_splitter::SentenceSplitter;

// Re-export resource loading utilities
pub use reader::{load_resources, read_file_async, select_input, ResourcePaths};
