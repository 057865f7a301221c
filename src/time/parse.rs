//! Calendar parsing of cleaned date strings.

use super::error::DateParseError;
use super::normalize::clean;
use super::structs::NormalizedTimestamp;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// A parser turning a cleaned date string into a calendar datetime.
///
/// Kept behind a trait so the locale-specific implementation can be swapped
/// without touching the normalization rules feeding it.
pub trait DateParser {
    fn parse(&self, cleaned: &str) -> Option<NaiveDateTime>;
}

/// Matches `15 июля 2021 14:30:00` with optional comma and optional time.
static RUSSIAN_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{1,2})\s+(\p{Cyrillic}+)\.?\s+(\d{4})(?:[\s,]+(\d{1,2}):(\d{2})(?::(\d{2}))?)?$",
    )
    .expect("date pattern is valid")
});

static DEFAULT_PARSER: LazyLock<RussianDateParser> = LazyLock::new(RussianDateParser::default);

/// Parses Russian-locale dates with unabbreviated genitive month names, plus
/// the canonical machine formats so already normalized strings round-trip.
#[derive(Debug, Default, Clone, Copy)]
pub struct RussianDateParser;

impl RussianDateParser {
    fn month_number(name: &str) -> Option<u32> {
        let month = match name.to_lowercase().as_str() {
            "января" => 1,
            "февраля" => 2,
            "марта" => 3,
            "апреля" => 4,
            "мая" => 5,
            "июня" => 6,
            "июля" => 7,
            "августа" => 8,
            "сентября" => 9,
            "октября" => 10,
            "ноября" => 11,
            "декабря" => 12,
            _ => return None,
        };
        Some(month)
    }

    fn parse_machine_formats(s: &str) -> Option<NaiveDateTime> {
        let formats = ["%Y:%m:%d %H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
        formats
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    }

    fn parse_locale_format(s: &str) -> Option<NaiveDateTime> {
        let caps = RUSSIAN_DATE_RE.captures(s)?;

        let day: u32 = caps.get(1)?.as_str().parse().ok()?;
        let month = Self::month_number(caps.get(2)?.as_str())?;
        let year: i32 = caps.get(3)?.as_str().parse().ok()?;

        // Missing time components default to midnight.
        let hour = caps.get(4).map_or(Some(0), |m| m.as_str().parse().ok())?;
        let minute = caps.get(5).map_or(Some(0), |m| m.as_str().parse().ok())?;
        let second = caps.get(6).map_or(Some(0), |m| m.as_str().parse().ok())?;

        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
    }
}

impl DateParser for RussianDateParser {
    fn parse(&self, cleaned: &str) -> Option<NaiveDateTime> {
        Self::parse_machine_formats(cleaned).or_else(|| Self::parse_locale_format(cleaned))
    }
}

/// Normalizes a raw sidecar date string: cleanup first, then the given parser.
pub fn normalize_with(
    parser: &dyn DateParser,
    raw: &str,
) -> Result<NormalizedTimestamp, DateParseError> {
    let cleaned = clean(raw);
    parser
        .parse(&cleaned)
        .map(NormalizedTimestamp::new)
        .ok_or_else(|| DateParseError::Unparseable(raw.to_string()))
}

/// [`normalize_with`] using the default Russian-locale parser.
pub fn normalize(raw: &str) -> Result<NormalizedTimestamp, DateParseError> {
    normalize_with(&*DEFAULT_PARSER, raw)
}
