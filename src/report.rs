// WHY: Plain-text rendering of an analysis for terminal output

use std::fmt::Write;

use crate::analysis::AnalysisResult;
use crate::finders::{Extremes, Segment};
use crate::scoring::ScoredSentence;

/// Render every scored sentence followed by the extreme regions
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();

    if result.is_empty() {
        out.push_str("No sentences to analyze.\n");
        return out;
    }

    if let Some(text) = &result.reconstructed_text {
        let _ = writeln!(out, "Reconstructed text:\n  {text}\n");
    }

    out.push_str("Sentences:\n");
    for (i, sentence) in result.sentences.iter().enumerate() {
        let _ = writeln!(out, "  [{i}] {:+} {}", sentence.score, sentence.text);
    }

    out.push('\n');
    write_sentences(&mut out, &result.extreme_sentences);
    write_segments(&mut out, "window", &result.extreme_windows);
    write_segments(&mut out, "segment", &result.extreme_segments);
    out
}

fn write_sentences(out: &mut String, extremes: &Extremes<ScoredSentence>) {
    for (label, sentence) in [
        ("Most positive sentence", &extremes.most_positive),
        ("Most negative sentence", &extremes.most_negative),
    ] {
        match sentence {
            Some(s) => {
                let _ = writeln!(out, "{label} ({:+}): {}", s.score, s.text);
            }
            None => {
                let _ = writeln!(out, "{label}: none");
            }
        }
    }
}

fn write_segments(out: &mut String, kind: &str, extremes: &Extremes<Segment>) {
    for (direction, segment) in [
        ("positive", &extremes.most_positive),
        ("negative", &extremes.most_negative),
    ] {
        match segment {
            Some(seg) => {
                let text: Vec<&str> = seg.sentences.iter().map(|s| s.text.as_str()).collect();
                let _ = writeln!(
                    out,
                    "Most {direction} {kind} [{}..={}] ({:+}): {}",
                    seg.start,
                    seg.end,
                    seg.score,
                    text.join(" ")
                );
            }
            None => {
                let _ = writeln!(out, "Most {direction} {kind}: none");
            }
        }
    }
}
