//! Conversion pipeline.
//!
//! Parses one FASTA file and writes each enabled output format next to it:
//!
//! ```text
//! FASTA -> SequenceSet -> pad_missing (per writer) -> .phy / .nex
//! ```
//!
//! All options arrive through `ConvertConfig`; nothing is read from global
//! state.

use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::formats::fasta::{parse_fasta_file, FastaError};
use crate::formats::nexus::MrBayesConfig;
use crate::formats::{output_target, write_file, FormatError, OutputFormat};
use crate::model::SequenceSet;

/// Errors that can occur during a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{0}")]
    Fasta(#[from] FastaError),

    #[error("{0}")]
    Format(#[from] FormatError),

    #[error("Refusing to overwrite the input file {0}. Use an input name ending in .fa, .fas or .fasta, or set --output")]
    OverwritesInput(PathBuf),
}

/// Result type for conversion runs.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Options for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// FASTA alignment to read
    pub input_path: PathBuf,
    /// Prefix for output names; the input path is used when absent
    pub output_prefix: Option<String>,
    pub emit_nexus: bool,
    pub emit_phylip: bool,
    pub mrbayes: MrBayesConfig,
}

impl ConvertConfig {
    /// Creates a configuration writing both formats next to `input_path`.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_prefix: None,
            emit_nexus: true,
            emit_phylip: true,
            mrbayes: MrBayesConfig::default(),
        }
    }

    /// Base name the output suffix rule is applied to.
    pub fn output_base(&self) -> String {
        match &self.output_prefix {
            Some(prefix) => format!("{}.fa", prefix),
            None => self.input_path.to_string_lossy().into_owned(),
        }
    }

    /// Enabled formats, in write order.
    pub fn formats(&self) -> Vec<OutputFormat> {
        let mut formats = Vec::with_capacity(2);
        if self.emit_phylip {
            formats.push(OutputFormat::Phylip);
        }
        if self.emit_nexus {
            formats.push(OutputFormat::Nexus);
        }
        formats
    }
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub ntax: usize,
    pub nchar: usize,
    /// Files written, with their format
    pub written: Vec<(OutputFormat, PathBuf)>,
}

/// Resolves the destination of each enabled format.
///
/// A base name without a FASTA suffix is reused unchanged for every format,
/// which would make all writers target the input file. That case is refused
/// before anything is written.
pub fn plan_outputs(config: &ConvertConfig) -> ConvertResult<Vec<(OutputFormat, PathBuf)>> {
    let base = config.output_base();
    let mut plan = Vec::new();

    for format in config.formats() {
        let target = output_target(&base, format);
        if !target.suffix_replaced {
            warn!(
                "'{}' has no .fa/.fas/.fasta suffix: {} output would reuse the name unchanged",
                base, format
            );
        }
        if same_file(&target.path, &config.input_path) {
            return Err(ConvertError::OverwritesInput(target.path));
        }
        plan.push((format, target.path));
    }

    Ok(plan)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Writes every enabled format for an already parsed set.
pub fn write_outputs(set: &SequenceSet, config: &ConvertConfig) -> ConvertResult<ConversionSummary> {
    let mut summary = ConversionSummary {
        ntax: set.ntax(),
        nchar: set.nchar(),
        written: Vec::new(),
    };

    if set.is_empty() {
        warn!(
            "Zero records found in {}; no output written",
            config.input_path.display()
        );
        return Ok(summary);
    }

    for (format, path) in plan_outputs(config)? {
        write_file(set, format, &config.mrbayes, &path)?;
        summary.written.push((format, path));
    }

    Ok(summary)
}

/// Runs a full conversion: parse the input, then write every enabled format.
pub fn run_conversion(config: &ConvertConfig) -> ConvertResult<ConversionSummary> {
    let set = parse_fasta_file(&config.input_path)?;
    info!(
        "Parsed {} sequences ({} columns) from {}",
        set.ntax(),
        set.nchar(),
        config.input_path.display()
    );
    write_outputs(&set, config)
}
