// ---------------------------------------------------------------------------
// SaveError: typed errors for session save/load operations
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while persisting or restoring an edit session.
///
/// A load either succeeds completely or fails with one of these; the engine
/// never partially restores a history.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error (file not found, permission denied, disk full, etc.)
    Io(std::io::Error),
    /// Payload bytes could not be decoded (or decompressed).
    Decode(String),
    /// The file is structurally broken: bad magic, truncated header,
    /// checksum mismatch, or internally inconsistent session data.
    Corrupted(String),
    /// The session was written by a newer build than this one supports.
    VersionMismatch { expected_max: u32, found: u32 },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            SaveError::Corrupted(msg) => write!(f, "Corrupted session file: {msg}"),
            SaveError::VersionMismatch {
                expected_max,
                found,
            } => write!(
                f,
                "Version mismatch: session is v{found}, but this build only supports up to v{expected_max}"
            ),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<bitcode::Error> for SaveError {
    fn from(e: bitcode::Error) -> Self {
        SaveError::Decode(e.to_string())
    }
}
