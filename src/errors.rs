//! The errors fqtally can return; only when opening or tallying a source

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::Path;

/// The type of error that occurred while opening or reading a source
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TallyErrorKind {
    /// The given path does not exist
    SourceNotFound,
    /// The source carries a compressed suffix but could not be decompressed
    Decode,
    /// Any other error during input/output
    Io,
}

/// The only error type that fqtally returns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TallyError {
    /// A description of what went wrong
    pub msg: String,
    /// The type of error that occurred
    pub kind: TallyErrorKind,
}

impl TallyError {
    pub fn new_source_not_found(path: &Path) -> Self {
        Self {
            msg: format!("{} does not exist", path.display()),
            kind: TallyErrorKind::SourceNotFound,
        }
    }

    pub fn new_decode(path: &Path, msg: &str) -> Self {
        Self {
            msg: format!("could not decompress {}: {}", path.display(), msg),
            kind: TallyErrorKind::Decode,
        }
    }

    #[cfg(not(feature = "compression"))]
    pub(crate) fn new_unsupported_compression(path: &Path) -> Self {
        Self {
            msg: format!(
                "{} has a compressed suffix but fqtally was built without the 'compression' feature",
                path.display()
            ),
            kind: TallyErrorKind::Decode,
        }
    }
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TallyErrorKind::SourceNotFound => write!(f, "source not found: {}", self.msg),
            TallyErrorKind::Decode => write!(f, "decode error: {}", self.msg),
            TallyErrorKind::Io => write!(f, "I/O error: {}", self.msg),
        }
    }
}

impl From<io::Error> for TallyError {
    fn from(err: io::Error) -> Self {
        Self {
            msg: err.to_string(),
            kind: TallyErrorKind::Io,
        }
    }
}

impl StdError for TallyError {}
