//! The single-pass tally over a 4-line-per-read stream

use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use std::path::Path;

use crate::errors::{TallyError, TallyErrorKind};
use crate::source::{open_source, Encoding};

/// The role a line plays within the fixed 4-line read layout.
/// Driven by the 1-based line number alone; there is no look-ahead.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineRole {
    Identifier,
    Sequence,
    Separator,
    Quality,
}

impl LineRole {
    #[inline]
    pub fn of_line(line_number: u64) -> Self {
        match line_number % 4 {
            1 => Self::Identifier,
            2 => Self::Sequence,
            3 => Self::Separator,
            _ => Self::Quality,
        }
    }
}

/// Remove a final '\n' or '\r\n' from a byte slice
#[inline]
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = if let Some((&b'\n', remaining)) = line.split_last() {
        remaining
    } else {
        line
    };
    if let Some((&b'\r', remaining)) = line.split_last() {
        remaining
    } else {
        line
    }
}

/// A read whose identifier line has been seen but whose quality line hasn't.
#[derive(Debug)]
struct PendingRead {
    id: String,
    seq: Option<String>,
}

/// Accumulator for one pass over one stream.
///
/// State is mutated one line at a time via [`add_line`](ReadTally::add_line)
/// and collapsed into a [`TallySummary`] exactly once by
/// [`finish`](ReadTally::finish). There is a single owner and no sharing.
///
/// A read is committed to the maps only once its quality line has been
/// consumed. A stream that ends mid-read leaves a pending read that is
/// dropped without contributing a sequence; it still counts toward
/// `read_count` since the read did start. On well-formed input (line count a
/// multiple of 4) this is indistinguishable from committing eagerly per line.
#[derive(Debug, Default)]
pub struct ReadTally {
    line_count: u64,
    read_count: u64,
    occurrences: HashMap<String, u64>,
    sequences: HashMap<String, String>,
    pending: Option<PendingRead>,
}

impl ReadTally {
    /// Fresh, zeroed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one line, terminator included or not.
    ///
    /// # Example:
    ///
    /// ```
    /// use fqtally::ReadTally;
    ///
    /// let mut tally = ReadTally::new();
    /// tally.add_line(b"@read1");
    /// tally.add_line(b"ACGT");
    /// tally.add_line(b"+");
    /// tally.add_line(b"IIII");
    /// assert_eq!(tally.read_count(), 1);
    /// ```
    pub fn add_line(&mut self, line: &[u8]) {
        self.line_count += 1;
        let line = trim_line_ending(line);

        match LineRole::of_line(self.line_count) {
            LineRole::Identifier => {
                self.read_count += 1;
                let id = String::from_utf8_lossy(line).into_owned();
                // A repeated identifier keeps its running occurrence total
                // rather than starting over at zero, while its stored
                // sequence gets overwritten below.
                self.occurrences.entry(id.clone()).or_insert(0);
                self.pending = Some(PendingRead { id, seq: None });
            }
            LineRole::Sequence => {
                if let Some(pending) = self.pending.as_mut() {
                    pending.seq = Some(String::from_utf8_lossy(line).into_owned());
                }
            }
            LineRole::Separator => {}
            LineRole::Quality => {
                if let Some(PendingRead { id, seq: Some(seq) }) = self.pending.take() {
                    *self.occurrences.entry(id.clone()).or_insert(0) += 1;
                    self.sequences.insert(id, seq);
                }
            }
        }
    }

    /// Number of lines consumed so far (1-based once the first line is in)
    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    /// Number of identifier lines seen so far
    pub fn read_count(&self) -> u64 {
        self.read_count
    }

    /// The last committed sequence for `id`, if any
    pub fn sequence_of(&self, id: &str) -> Option<&str> {
        self.sequences.get(id).map(String::as_str)
    }

    /// How many committed reads carried `id`, if it has been seen
    pub fn occurrences_of(&self, id: &str) -> Option<u64> {
        self.occurrences.get(id).copied()
    }

    /// Collapses the accumulated state into the end-of-stream summary.
    pub fn finish(self) -> TallySummary {
        let unique: HashSet<&String> = self.sequences.values().collect();
        TallySummary {
            line_count: self.line_count,
            read_count: self.read_count,
            unique_sequences: unique.len(),
        }
    }
}

/// Computed once at end of stream; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallySummary {
    /// Total lines consumed
    pub line_count: u64,
    /// Total reads started
    pub read_count: u64,
    /// Number of distinct sequences among the surviving id → sequence entries
    pub unique_sequences: usize,
}

/// Tallies every line of an already-open source.
/// Use this directly if you hold a reader; for a path on disk
/// [`tally_file`](fn.tally_file.html) handles decompression as well.
pub fn tally_reader<R: BufRead>(mut reader: R) -> Result<TallySummary, TallyError> {
    let mut tally = ReadTally::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        tally.add_line(&line);
    }
    Ok(tally.finish())
}

/// The main entry point of fqtally.
/// Opens the file at `path`, transparently decompressing when the name
/// carries a `.gz`, `.bz2` or `.xz` suffix, and tallies it in one pass.
/// The source is released on every exit path, error or not.
pub fn tally_file<P: AsRef<Path>>(path: P) -> Result<TallySummary, TallyError> {
    let path = path.as_ref();
    let encoding = Encoding::from_path(path);
    let reader = open_source(path)?;
    tally_reader(reader).map_err(|e| {
        // A read failure surfacing through a decoder means the source could
        // not be decompressed, not that the disk misbehaved.
        if encoding.is_compressed() && e.kind == TallyErrorKind::Io {
            TallyError::new_decode(path, &e.msg)
        } else {
            e
        }
    })
}
