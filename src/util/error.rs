/// Error type for maidenhead-rs operations.
#[derive(Debug, PartialEq)]
pub enum MaidenheadError {
    /// The locator string matches none of the supported
    /// length/alphabet patterns.
    InvalidFormat(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
}

impl std::fmt::Display for MaidenheadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaidenheadError::InvalidFormat(locator) => {
                write!(f, "Invalid locator format: '{}'", locator)
            }
            MaidenheadError::IoError(msg) => write!(f, "IO error: {}", msg),
            MaidenheadError::CsvError(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for MaidenheadError {}
