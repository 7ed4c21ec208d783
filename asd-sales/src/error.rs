use std::fmt;

/// A single CSV field that could not be converted into its typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownMonth(String),
    InvalidRecessionFlag(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownMonth(raw) => write!(f, "unknown month: {:?}", raw),
            ParseError::InvalidRecessionFlag(raw) => {
                write!(f, "recession flag must be 0 or 1, got {:?}", raw)
            }
        }
    }
}

impl std::error::Error for ParseError {}
