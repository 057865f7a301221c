use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateParseError {
    #[error("Could not resolve \"{0}\" to a calendar date and time")]
    Unparseable(String),
}
