// WHY: Centralized abbreviation handling for sentence boundary detection
// Dots inside a known abbreviation are reported as protected so splitters never break on them

use anyhow::Result;
use regex_automata::meta::Regex;
use std::collections::HashSet;

/// Abbreviations whose trailing dot must not end a sentence
/// Matching is case-sensitive, which is why both "Fig" and "fig" are listed
pub const ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr",
    "e.g", "i.e", "etc", "vs", "Fig", "fig", "approx",
];

/// Byte offsets of dots that belong to an abbreviation
pub type ProtectedDots = HashSet<usize>;

/// Locates abbreviation dots in spaced and unspaced text
#[derive(Debug)]
pub struct AbbreviationChecker {
    /// `<abbrev>.` starting on a word boundary
    bounded: Regex,
    /// `<abbrev>.` anywhere, filtered by the unspaced rules afterwards
    loose: Regex,
}

impl AbbreviationChecker {
    /// Create checker for the default abbreviation list
    pub fn new() -> Result<Self> {
        Self::with_abbreviations(ABBREVIATIONS)
    }

    /// Create checker for a custom abbreviation list
    pub fn with_abbreviations(abbreviations: &[&str]) -> Result<Self> {
        let alternation = abbreviations
            .iter()
            .map(|abbrev| regex_syntax::escape(abbrev))
            .collect::<Vec<_>>()
            .join("|");

        let bounded = Regex::new(&format!(r"\b(?:{alternation})\."))?;
        let loose = Regex::new(&format!(r"(?:{alternation})\."))?;

        Ok(Self { bounded, loose })
    }

    /// Dots protected in space-preserving text: any `<abbrev>.` on a whole-word start
    pub fn protected_dots_spaced(&self, text: &str) -> ProtectedDots {
        let mut protected = ProtectedDots::new();
        for m in self.bounded.find_iter(text) {
            protect_range(text, m.start(), m.end(), &mut protected);
        }
        protected
    }

    /// Dots protected in space-free text
    /// WHY: without whitespace an abbreviation is either isolated by non-word characters
    /// or glued to the capitalised word that follows it ("Mr.Costner")
    pub fn protected_dots_unspaced(&self, text: &str) -> ProtectedDots {
        let mut protected = ProtectedDots::new();
        for m in self.loose.find_iter(text) {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();

            let isolated = !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char);
            let glued = after.is_some_and(|c| c.is_ascii_uppercase());

            if isolated || glued {
                protect_range(text, m.start(), m.end(), &mut protected);
            }
        }
        protected
    }
}

/// Word character as matched by `\w`
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn protect_range(text: &str, start: usize, end: usize, protected: &mut ProtectedDots) {
    protected.extend(
        text[start..end]
            .char_indices()
            .filter(|&(_, c)| c == '.')
            .map(|(offset, _)| start + offset),
    );
}
