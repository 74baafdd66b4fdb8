use std::path::Path;

use ragprobe_common::Result;
use tracing::debug;

/// Minimum characters for a normalized segment to be kept.
/// Shorter segments are extraction noise (page numbers, running headers).
const MIN_SEGMENT_CHARS: usize = 50;

/// Common upstream-extraction mojibake and the intended character.
const MOJIBAKE_FIXES: &[(&str, &str)] = &[
    ("â€“", "–"),
    ("â€”", "—"),
    ("â€™", "’"),
    ("â€œ", "“"),
    ("â€\u{fffd}", "”"),
    ("â†’", "→"),
    ("â‰¥", "≥"),
    ("â‰¤", "≤"),
    ("Âµ", "µ"),
    ("Â°", "°"),
    ("Ã—", "×"),
    ("Ã·", "÷"),
    ("Â±", "±"),
    ("Â²", "²"),
    ("Â³", "³"),
    ("â€¢", "•"),
    ("âˆ‘", "∑"),
    ("âˆš", "√"),
];

/// Best-effort fixes for common extraction encoding artifacts.
/// This is not a complete normalization solution.
pub fn fix_mojibake(text: &str) -> String {
    let mut text = text.to_string();
    for (bad, good) in MOJIBAKE_FIXES {
        if text.contains(bad) {
            text = text.replace(bad, good);
        }
    }
    text
}

/// Load one extracted plain-text document and normalize it.
///
/// Upstream text extraction (PDF or otherwise) is a collaborator; this
/// loader only adapts its output. Each paragraph is whitespace-collapsed
/// and mojibake-corrected; segments below [`MIN_SEGMENT_CHARS`] and
/// segments repeating the previous kept one are dropped.
pub fn load_document(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;

    let mut text = String::new();
    let mut previous_segment = String::new();

    for segment in raw.split("\n\n") {
        let segment = fix_mojibake(segment);
        let normalized: String = segment.split_whitespace().collect::<Vec<_>>().join(" ");

        if normalized.chars().count() < MIN_SEGMENT_CHARS {
            continue;
        }

        // Repeated running headers/footers show up as duplicate segments
        if normalized == previous_segment {
            continue;
        }

        text.push_str(&normalized);
        text.push('\n');
        previous_segment = normalized;
    }

    debug!(
        "Loaded document {}: {} chars after normalization",
        path.display(),
        text.chars().count()
    );

    Ok(text)
}
