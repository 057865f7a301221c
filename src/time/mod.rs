//! Module for turning locale-formatted capture-time strings into canonical timestamps.
mod normalize;
mod parse;
pub mod error;
pub mod structs;
pub use normalize::clean;
pub use parse::{DateParser, RussianDateParser, normalize, normalize_with};
pub use structs::NormalizedTimestamp;
