//! Text heuristics for contact entries.
//!
//! Opening-hours texts are split into paragraphs: at a lunch/day-off marker
//! when one is present, otherwise at sentence terminators. Marker words are
//! fixed RU/KZ/EN literals; this is a heuristic, not a schedule parser.

use std::sync::LazyLock;

use regex::Regex;

/// Leftmost match wins; alternation order only matters at the same offset.
static SCHEDULE_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Обед:|Lunch:|Ас:|Ас таймағы:|Демалыс:|Түскі ас:)")
        .expect("schedule marker pattern is valid")
});

/// Split schedule text into display paragraphs.
///
/// - marker found: `before` and `marker + " " + after`, both trimmed, empty ones dropped
/// - no marker, several `.`/`。` fragments: one paragraph each, `.` re-appended
///   to all but the last
/// - otherwise: the whole text, unchanged
pub fn split_schedule(text: &str) -> Vec<String> {
    if let Some(marker) = SCHEDULE_MARKERS.find(text) {
        let before = text[..marker.start()].trim();
        let after = text[marker.end()..].trim();

        let mut lines = Vec::with_capacity(2);
        if !before.is_empty() {
            lines.push(before.to_string());
        }
        if !after.is_empty() {
            lines.push(format!("{} {}", marker.as_str(), after));
        }
        return lines;
    }

    let fragments: Vec<&str> = text
        .split(['.', '。'])
        .filter(|fragment| !fragment.trim().is_empty())
        .collect();

    if fragments.len() > 1 {
        let last = fragments.len() - 1;
        return fragments
            .iter()
            .enumerate()
            .map(|(idx, fragment)| {
                if idx < last {
                    format!("{}.", fragment.trim())
                } else {
                    fragment.trim().to_string()
                }
            })
            .collect();
    }

    vec![text.to_string()]
}

/// Display form of a stored phone link: first `tel:` dropped, first `+7`
/// replaced by `"8 "`. No other normalisation.
pub fn phone_display(raw: &str) -> String {
    raw.replacen("tel:", "", 1).replacen("+7", "8 ", 1)
}
