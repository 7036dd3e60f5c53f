//! Ambiguity-aware comparison of two aligned nucleotide sequences.
//!
//! Each column gets a score:
//! - `0` when the symbols are identical, or both are in `{-, N}`
//! - `0.5` when one side is a two-base IUPAC code (R, Y, S, W, K, M) and the
//!   other is one of the bases it stands for
//! - `1` otherwise
//!
//! The equalness of two sequences is the percentage of columns scored `0`.
//! Partial matches count as differences.
//!
//! Nothing here draws anything: `ComparisonReport` bundles the plain values
//! a chart needs.

use thiserror::Error;

use crate::iupac::{classify, is_compatible, is_wildcard, SymbolClass};
use crate::model::Sequence;

/// Errors that can occur when comparing sequences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("The two sequences must have the same length (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("'{name}' is not a nucleotide sequence: symbol '{symbol}' at position {position}")]
    TypeMismatch {
        name: String,
        symbol: char,
        position: usize,
    },
}

/// Result type for comparison operations.
pub type CompareResult<T> = Result<T, CompareError>;

/// Compatibility of one aligned column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// Identical or both undetermined
    Match,
    /// An ambiguity code against one of its bases
    Partial,
    /// Incompatible symbols
    Mismatch,
}

impl Score {
    /// Numeric value of the score: 0, 0.5 or 1.
    pub fn value(self) -> f64 {
        match self {
            Score::Match => 0.0,
            Score::Partial => 0.5,
            Score::Mismatch => 1.0,
        }
    }

    pub fn is_match(self) -> bool {
        self == Score::Match
    }
}

/// Scores one column. Rules are tried in order; the first that applies wins.
pub fn score_symbols(s1: char, s2: char) -> Score {
    if s1 == s2 {
        return Score::Match;
    }
    if is_wildcard(s1) && is_wildcard(s2) {
        return Score::Match;
    }
    if is_compatible(s1, s2) || is_compatible(s2, s1) {
        return Score::Partial;
    }
    Score::Mismatch
}

/// Per-column scores of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub scores: Vec<Score>,
}

impl ComparisonResult {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores as numbers, in column order.
    pub fn values(&self) -> Vec<f64> {
        self.scores.iter().map(|s| s.value()).collect()
    }

    /// Number of columns not scored as a match.
    pub fn differences(&self) -> usize {
        self.scores.iter().filter(|s| !s.is_match()).count()
    }

    /// Percentage of matching columns, rounded to two decimals with ties
    /// going to the even digit (29 of 32 gives 90.62).
    ///
    /// Two empty sequences are 100% equal.
    pub fn equalness(&self) -> f64 {
        let n = self.scores.len();
        if n == 0 {
            return 100.0;
        }
        let percent = (n - self.differences()) as f64 / n as f64 * 100.0;
        (percent * 100.0).round_ties_even() / 100.0
    }
}

fn check_nucleotide(seq: &Sequence) -> CompareResult<()> {
    match seq.first_foreign_symbol() {
        Some((position, symbol)) => Err(CompareError::TypeMismatch {
            name: seq.name.clone(),
            symbol,
            position,
        }),
        None => Ok(()),
    }
}

/// Scores every aligned column of `a` against `b`.
pub fn difference(a: &Sequence, b: &Sequence) -> CompareResult<ComparisonResult> {
    if a.len() != b.len() {
        return Err(CompareError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    check_nucleotide(a)?;
    check_nucleotide(b)?;

    let scores = a
        .residues
        .chars()
        .zip(b.residues.chars())
        .map(|(s1, s2)| score_symbols(s1, s2))
        .collect();

    Ok(ComparisonResult { scores })
}

/// Percentage of columns of `a` and `b` that fully match.
pub fn equalness(a: &Sequence, b: &Sequence) -> CompareResult<f64> {
    Ok(difference(a, b)?.equalness())
}

/// Everything a renderer needs to chart one comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub name_a: String,
    pub name_b: String,
    pub result: ComparisonResult,
    pub equalness: f64,
    /// Residue classes of `a`, for colouring
    pub classes_a: Vec<SymbolClass>,
    /// Residue classes of `b`, for colouring
    pub classes_b: Vec<SymbolClass>,
}

impl ComparisonReport {
    /// Compares `a` and `b` and collects the report.
    pub fn new(a: &Sequence, b: &Sequence) -> CompareResult<Self> {
        let result = difference(a, b)?;
        Ok(Self {
            name_a: a.name.clone(),
            name_b: b.name.clone(),
            equalness: result.equalness(),
            result,
            classes_a: classify(&a.residues),
            classes_b: classify(&b.residues),
        })
    }

    /// Chart title: both names and the equalness.
    pub fn title(&self) -> String {
        format!(
            "Match of {} and {}\nEqualness: {}%",
            self.name_a, self.name_b, self.equalness
        )
    }
}
