// src/extract/streaming.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use tracing::trace;

use crate::process::utils::clean_text;

/// Path data of the "X" icon used for non-streamable signals.
pub const CROSS_GLYPH: &str = "M11.9996 12.7054L18.397 19.1026L19.1023 18.3973L12.705 12L19.1023 5.60268L18.397 4.89734L11.9996 11.2947L5.60232 4.89734L4.89697 5.60268L11.2943 12L4.89697 18.3973L5.60232 19.1026L11.9996 12.7054Z";

const TRUE_WORDS: [&str; 3] = ["true", "ja", "yes"];
const FALSE_WORDS: [&str; 3] = ["false", "nein", "no"];

static SVG: Lazy<Selector> = Lazy::new(|| Selector::parse("svg").unwrap());
static PATH: Lazy<Selector> = Lazy::new(|| Selector::parse("path").unwrap());

/// Work out whether a "Streamingfähig" cell says yes, no, or nothing.
///
/// The icon wins over the text. A cross anywhere in the icon means `false`;
/// otherwise the first drawable path is taken to be a checkmark. Cells
/// without a usable icon fall back to keywords in their text, and `None`
/// is returned when neither says anything.
pub fn detect_streaming_capability(cell: ElementRef<'_>) -> Option<bool> {
    if let Some(flag) = detect_from_icon(cell) {
        return Some(flag);
    }
    let text: String = cell.text().collect();
    detect_from_text(&text)
}

fn detect_from_icon(cell: ElementRef<'_>) -> Option<bool> {
    let svg = cell.select(&SVG).next()?;
    let shapes: Vec<&str> = svg
        .select(&PATH)
        .map(|p| p.value().attr("d").unwrap_or("").trim())
        .collect();

    if shapes.iter().any(|d| *d == CROSS_GLYPH) {
        trace!("cross glyph");
        return Some(false);
    }
    if shapes.iter().any(|d| starts_with_move(d)) {
        trace!("checkmark glyph");
        return Some(true);
    }
    trace!(paths = shapes.len(), "icon carries no signal, using text");
    None
}

fn starts_with_move(d: &str) -> bool {
    matches!(d.chars().next(), Some('M') | Some('m'))
}

/// Keyword fallback: positive words take priority over negative ones.
pub fn detect_from_text(raw: &str) -> Option<bool> {
    let text = clean_text(raw).to_lowercase();
    if TRUE_WORDS.iter().any(|w| text.contains(w)) {
        Some(true)
    } else if FALSE_WORDS.iter().any(|w| text.contains(w)) {
        Some(false)
    } else {
        None
    }
}
