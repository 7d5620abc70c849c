// WHY: In-memory lookup structures consumed by scoring and word segmentation
// Built once by the host, then shared read-only for every analysis

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Word to sentiment score mapping; unknown words score 0
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    scores: HashMap<String, i32>,
}

impl Lexicon {
    /// Parse `term<TAB>score` lines (AFINN layout)
    /// WHY: the score follows the last tab, so multi-word terms with inner spaces parse cleanly
    pub fn parse(content: &str) -> Result<Self> {
        let mut scores = HashMap::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (term, score) = line
                .rsplit_once('\t')
                .or_else(|| line.rsplit_once(char::is_whitespace))
                .with_context(|| format!("Lexicon line {} has no score: {line:?}", line_no + 1))?;
            let score: i32 = score
                .trim()
                .parse()
                .with_context(|| format!("Lexicon line {} has a non-integer score: {line:?}", line_no + 1))?;

            scores.insert(term.trim().to_lowercase(), score);
        }

        Ok(Self { scores })
    }

    /// Score of a single word, case-insensitive
    pub fn score(&self, word: &str) -> i32 {
        self.scores.get(&*lowercase(word)).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, i32)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        Self {
            scores: iter
                .into_iter()
                .map(|(term, score)| (term.as_ref().to_lowercase(), score))
                .collect(),
        }
    }
}

/// Lower-cased negation words
#[derive(Debug, Clone, Default)]
pub struct NegationSet {
    words: HashSet<String>,
}

impl NegationSet {
    /// Parse one word per line, ignoring blank lines
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&*lowercase(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for NegationSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }
}

/// Lower-cased alphabetic words used to rebuild word boundaries
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
    /// Longest word in characters, bounds the segmentation search window
    max_word_len: usize,
}

impl Dictionary {
    /// Parse one word per line; entries that are not purely alphabetic are skipped
    pub fn parse(content: &str) -> Self {
        let mut skipped = 0usize;
        let dictionary = content
            .lines()
            .map(str::trim)
            .filter(|line| {
                let keep = is_alphabetic_word(line);
                if !keep && !line.is_empty() {
                    skipped += 1;
                }
                keep
            })
            .collect::<Self>();

        debug!("Dictionary skipped {} non-alphabetic entries", skipped);
        dictionary
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words: HashSet<String> = iter
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| is_alphabetic_word(w))
            .collect();
        let max_word_len = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);

        Self { words, max_word_len }
    }
}

/// The three read-only resources an analysis consults
#[derive(Debug, Clone, Default)]
pub struct Resources {
    pub lexicon: Lexicon,
    pub negations: NegationSet,
    pub dictionary: Dictionary,
}

impl Resources {
    pub fn new(lexicon: Lexicon, negations: NegationSet, dictionary: Dictionary) -> Self {
        Self { lexicon, negations, dictionary }
    }
}

fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

fn lowercase(word: &str) -> Cow<'_, str> {
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}
