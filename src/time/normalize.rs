//! Pure text cleanup applied to sidecar date strings before parsing.
//!
//! The backup service emits human-readable Russian dates such as
//! `15 июл. 2021 г., 14:30:00`, padded with narrow no-break spaces and month
//! abbreviations that no generic parser dictionary knows. Expansion must
//! happen here, before any calendar parsing is attempted.

/// Month abbreviations used by the export, mapped to the full genitive forms
/// the parser understands. `мая` is already unabbreviated but kept so the
/// table covers all twelve months.
const MONTH_ABBREVIATIONS: [(&str, &str); 12] = [
    ("янв.", "января"),
    ("февр.", "февраля"),
    ("мар.", "марта"),
    ("апр.", "апреля"),
    ("мая", "мая"),
    ("июн.", "июня"),
    ("июл.", "июля"),
    ("авг.", "августа"),
    ("сент.", "сентября"),
    ("окт.", "октября"),
    ("нояб.", "ноября"),
    ("дек.", "декабря"),
];

/// The trailing year decoration token (`2021 г., 14:30` reads "2021, 14:30").
const YEAR_TOKEN: &str = "г.,";

/// Strips space variants and locale decoration, then expands month
/// abbreviations. Pure string-to-string; no calendar knowledge.
pub fn clean(raw: &str) -> String {
    let mut cleaned: String = raw
        .chars()
        .map(|c| match c {
            '\u{202f}' | '\u{a0}' => ' ',
            other => other,
        })
        .collect();
    cleaned = cleaned.replace(YEAR_TOKEN, "");

    for (abbreviation, full) in MONTH_ABBREVIATIONS {
        if cleaned.contains(abbreviation) {
            cleaned = cleaned.replace(abbreviation, full);
        }
    }

    cleaned.trim().to_string()
}
