//! Alignment file formats.
//!
//! Input is always FASTA:
//! - FASTA (.fa, .fas, .fasta)
//!
//! Output formats:
//! - PHYLIP (.phy) - relaxed, sequential
//! - NEXUS (.nex) - DATA block followed by a MrBayes command block
//!
//! Both writers pad flanking gaps to `?` on their own copy of the residues
//! and never modify the parsed `SequenceSet`.

pub mod fasta;
pub mod nexus;
pub mod phylip;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::model::SequenceSet;

/// Input suffixes recognized when deriving output names, in match order.
pub const FASTA_SUFFIXES: [&str; 3] = [".fa", ".fas", ".fasta"];

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Phylip,
    Nexus,
}

impl OutputFormat {
    /// File suffix for this format, including the dot.
    pub fn suffix(self) -> &'static str {
        match self {
            OutputFormat::Phylip => ".phy",
            OutputFormat::Nexus => ".nex",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Phylip => write!(f, "PHYLIP"),
            OutputFormat::Nexus => write!(f, "NEXUS"),
        }
    }
}

/// Errors that can occur while writing an output format.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Sequence '{name}' has length {found}, expected {expected}. Input is not aligned.")]
    MisalignedRecords {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("No sequences to write")]
    EmptySet,
}

/// Result type for writer operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Destination chosen for one output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub path: PathBuf,
    /// False when the base name had no FASTA suffix and was reused as is
    pub suffix_replaced: bool,
}

/// Derives the output path for `format` from a FASTA base name.
///
/// The first suffix of `FASTA_SUFFIXES` that ends the name is swapped for the
/// format suffix. If none matches, the name is used unchanged.
pub fn output_target(base: &str, format: OutputFormat) -> OutputTarget {
    for suffix in FASTA_SUFFIXES {
        if let Some(stem) = base.strip_suffix(suffix) {
            return OutputTarget {
                path: PathBuf::from(format!("{}{}", stem, format.suffix())),
                suffix_replaced: true,
            };
        }
    }

    OutputTarget {
        path: PathBuf::from(base),
        suffix_replaced: false,
    }
}

/// Checks the invariants every writer needs before producing output.
pub(crate) fn ensure_writable(set: &SequenceSet) -> FormatResult<()> {
    if set.is_empty() {
        return Err(FormatError::EmptySet);
    }
    set.check_aligned()
        .map_err(|conflict| FormatError::MisalignedRecords {
            name: conflict.name,
            expected: conflict.expected,
            found: conflict.found,
        })?;
    Ok(())
}

/// Renders `set` in `format`, returning the file content.
pub fn render(set: &SequenceSet, format: OutputFormat, mrbayes: &nexus::MrBayesConfig) -> FormatResult<String> {
    match format {
        OutputFormat::Phylip => phylip::format_phylip(set),
        OutputFormat::Nexus => nexus::format_nexus(set, mrbayes),
    }
}

/// Writes `content` to `path`, replacing any existing file.
pub(crate) fn write_output(path: &Path, content: &str) -> FormatResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Renders `set` in `format` and writes it to `path`.
pub fn write_file<P: AsRef<Path>>(
    set: &SequenceSet,
    format: OutputFormat,
    mrbayes: &nexus::MrBayesConfig,
    path: P,
) -> FormatResult<()> {
    let content = render(set, format, mrbayes)?;
    write_output(path.as_ref(), &content)?;
    info!(
        "Wrote {} sequences to {} ({})",
        set.ntax(),
        path.as_ref().display(),
        format
    );
    Ok(())
}
