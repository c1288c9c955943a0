//! fqtally streams a FASTQ file once, line by line, and reports how many
//! distinct sequences it contains. Inputs named `*.gz`, `*.bz2` or `*.xz`
//! are decompressed transparently; the choice is made from the suffix, not
//! from the content.
//!
//! ```no_run
//! use fqtally::tally_file;
//!
//! let summary = tally_file("reads.fastq.gz")?;
//! println!("Number of unique sequences: {}", summary.unique_sequences);
//! # Ok::<(), fqtally::TallyError>(())
//! ```
pub mod errors;
pub mod source;
pub mod tally;

pub use errors::{TallyError, TallyErrorKind};
pub use source::{open_source, Encoding};
pub use tally::{tally_file, tally_reader, LineRole, ReadTally, TallySummary};
