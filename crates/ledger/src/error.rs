//! Ledger error type.

use std::fmt;
use std::io;

/// Why a leaderboard could not be read or written
#[derive(Debug)]
pub enum LedgerError {
    /// Reading, writing or replacing the file failed
    Io(io::Error),
    /// The file exists but is not a JSON array
    Parse(serde_json::Error),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Io(e) => write!(f, "highscore file I/O failed: {e}"),
            LedgerError::Parse(e) => write!(f, "highscore file is malformed: {e}"),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedgerError::Io(e) => Some(e),
            LedgerError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for LedgerError {
    fn from(e: io::Error) -> Self {
        LedgerError::Io(e)
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(e: serde_json::Error) -> Self {
        LedgerError::Parse(e)
    }
}

impl LedgerError {
    /// True when the file simply does not exist yet
    pub fn is_missing(&self) -> bool {
        matches!(self, LedgerError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
