//! FASTA alignment parser.
//!
//! This module reads a column-aligned FASTA file into a `SequenceSet`.
//!
//! ## FASTA Format
//!
//! ```text
//! >gi|123|ref|AB123456.1| description
//! ACGT--ACGT
//! ACGT
//!
//! >seq2
//! AC-T--ACGTACGT
//! ```
//!
//! ## Parsing rules
//!
//! - A `>` line starts a record. Every `>` is removed from it and the rest is
//!   normalized by `normalize_name`.
//! - Following non-blank lines are concatenated into the record body.
//! - A blank line closes the current record. Lines after it are ignored until
//!   the next header.
//! - Input without any header yields an empty set, not an error.
//! - A header with no body line is not stored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::model::SequenceSet;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read FASTA input: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid FASTA header at line {line}: '{header}'")]
    InvalidHeader { line: usize, header: String },
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Reduces a raw header (without `>`) to a record name.
///
/// Pipe-separated NCBI style headers (`gi|123|ref|AB123456.1|desc`) keep
/// only the accession field with its version stripped. Any other header is
/// returned as is.
///
/// Returns `None` when a pipe-separated header has fewer than four fields or
/// the resulting name is empty.
pub fn normalize_name(raw: &str) -> Option<&str> {
    let name = if raw.contains('|') {
        let accession = raw.split('|').nth(3)?;
        accession.split('.').next().unwrap_or(accession)
    } else {
        raw
    };

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Parser state for the record being accumulated.
enum Record {
    /// No header seen yet
    Preamble,
    /// Collecting body lines for a named record
    Open { name: String, body: String },
    /// Blank line seen; waiting for the next header
    Closed,
}

/// Incremental FASTA line consumer shared by the string and reader entry points.
struct FastaBuilder {
    set: SequenceSet,
    record: Record,
}

impl FastaBuilder {
    fn new() -> Self {
        Self {
            set: SequenceSet::new(),
            record: Record::Preamble,
        }
    }

    fn push_line(&mut self, line_number: usize, line: &str) -> FastaResult<()> {
        let line = line.trim();

        if let Some(header) = line.strip_prefix('>') {
            self.flush();
            // Stray '>' characters inside the header are dropped too
            let header = header.replace('>', "");
            let name = normalize_name(&header).ok_or_else(|| FastaError::InvalidHeader {
                line: line_number,
                header: line.to_string(),
            })?;
            self.record = Record::Open {
                name: name.to_string(),
                body: String::new(),
            };
            return Ok(());
        }

        if line.is_empty() {
            self.flush();
            return Ok(());
        }

        match &mut self.record {
            Record::Open { body, .. } => {
                // Fast append: most FASTA lines don't have internal whitespace
                if line.bytes().all(|b| !b.is_ascii_whitespace()) {
                    body.push_str(line);
                } else {
                    body.extend(line.chars().filter(|c| !c.is_whitespace()));
                }
            }
            Record::Preamble => {
                warn!("Ignoring sequence data before the first header (line {})", line_number);
            }
            Record::Closed => {
                debug!("Ignoring line {} after a blank line", line_number);
            }
        }
        Ok(())
    }

    /// Stores the open record, if it has a body, and closes it.
    fn flush(&mut self) {
        let record = std::mem::replace(&mut self.record, Record::Closed);
        match record {
            Record::Open { name, body } if !body.is_empty() => {
                self.set.insert(name, body);
            }
            Record::Open { name, .. } => {
                debug!("Header '{}' has no sequence data, skipping", name);
            }
            Record::Preamble => self.record = Record::Preamble,
            Record::Closed => {}
        }
    }

    fn finish(mut self) -> SequenceSet {
        self.flush();
        self.set
    }
}

/// Parses FASTA content from a reader.
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<SequenceSet> {
    let mut builder = FastaBuilder::new();
    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        builder.push_line(idx + 1, &line)?;
    }
    Ok(builder.finish())
}

/// Parses FASTA content from a string.
///
/// Useful for testing or processing in-memory data.
pub fn parse_fasta_str(content: &str) -> FastaResult<SequenceSet> {
    let mut builder = FastaBuilder::new();
    for (idx, line) in content.lines().enumerate() {
        builder.push_line(idx + 1, line)?;
    }
    Ok(builder.finish())
}

/// Parses a FASTA file.
///
/// # Examples
///
/// ```no_run
/// use alignconv::formats::fasta::parse_fasta_file;
///
/// let set = parse_fasta_file("alignment.fasta").unwrap();
/// println!("Loaded {} sequences of width {}", set.ntax(), set.nchar());
/// ```
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<SequenceSet> {
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}
