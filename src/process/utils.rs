use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Zero-width space, zero-width non-joiner, zero-width joiner and BOM.
const INVISIBLE: [char; 4] = ['\u{200b}', '\u{200c}', '\u{200d}', '\u{feff}'];

/// Normalize text pulled out of an HTML cell.
///
/// Invisible characters are deleted, NBSP becomes a plain space, and every
/// whitespace run collapses to a single space with both ends trimmed.
pub fn clean_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let visible: String = raw
        .chars()
        .filter(|c| !INVISIBLE.contains(c))
        .map(|c| if c == '\u{a0}' { ' ' } else { c })
        .collect();
    WHITESPACE_RUN.replace_all(visible.trim(), " ").into_owned()
}

/// Same as [`clean_text`] for values that may be missing altogether.
pub fn clean_opt(raw: Option<&str>) -> String {
    raw.map(clean_text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_invisible_and_collapses() {
        assert_eq!(clean_text("a\u{200b} b\u{a0}\u{a0}c"), "a b c");
    }

    #[test]
    fn newlines_and_tabs_collapse() {
        assert_eq!(clean_text("  Vehicle\n\t speed \r\n"), "Vehicle speed");
    }

    #[test]
    fn bom_and_joiners_are_deleted_not_replaced() {
        assert_eq!(clean_text("\u{feff}Kilo\u{200c}meter\u{200d}"), "Kilometer");
    }

    #[test]
    fn invisible_between_spaces_leaves_one_space() {
        assert_eq!(clean_text("a \u{200b} b"), "a b");
    }

    #[test]
    fn empty_and_missing() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \u{a0}\u{200b} "), "");
        assert_eq!(clean_opt(None), "");
        assert_eq!(clean_opt(Some(" x ")), "x");
    }

    #[test]
    fn keeps_umlauts() {
        assert_eq!(clean_text(" Streaming\u{a0}fähig "), "Streaming fähig");
    }
}
