//! Opening an input path as a buffered line source, decompressing by suffix
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

#[cfg(feature = "compression")]
use bzip2::read::BzDecoder;
#[cfg(feature = "compression")]
use flate2::read::MultiGzDecoder;
#[cfg(feature = "compression")]
use xz2::read::XzDecoder;

use crate::errors::TallyError;

/// How the bytes of a source are encoded.
///
/// Decided once at open time from the file name alone, never from the
/// content: a gzip file renamed to `.fastq` will be read as garbled text and
/// a text file named `.gz` will fail with a decode error, rather than either
/// being re-detected from magic bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Encoding {
    Plain,
    Gzip,
    Bzip2,
    Xz,
}

impl Encoding {
    /// Picks the encoding from the path suffix.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let name = path.as_ref().to_string_lossy();
        if name.ends_with(".gz") {
            Self::Gzip
        } else if name.ends_with(".bz2") {
            Self::Bzip2
        } else if name.ends_with(".xz") {
            Self::Xz
        } else {
            Self::Plain
        }
    }

    pub fn is_compressed(&self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// Opens the file at `path` as a buffered reader, wrapping it in the decoder
/// matching its suffix. A missing file is reported as `SourceNotFound`; any
/// other open failure keeps its I/O flavor.
/// gz, bz2 and xz are supported, and only if the `compression` feature is
/// enabled (it is by default).
pub fn open_source<P: AsRef<Path>>(path: P) -> Result<Box<dyn io::BufRead + Send>, TallyError> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TallyError::new_source_not_found(path),
        _ => TallyError::from(e),
    })?;

    match Encoding::from_path(path) {
        Encoding::Plain => Ok(Box::new(BufReader::new(f))),
        #[cfg(feature = "compression")]
        Encoding::Gzip => Ok(Box::new(BufReader::new(MultiGzDecoder::new(f)))),
        #[cfg(feature = "compression")]
        Encoding::Bzip2 => Ok(Box::new(BufReader::new(BzDecoder::new(f)))),
        #[cfg(feature = "compression")]
        Encoding::Xz => Ok(Box::new(BufReader::new(XzDecoder::new(f)))),
        #[cfg(not(feature = "compression"))]
        _ => Err(TallyError::new_unsupported_compression(path)),
    }
}
