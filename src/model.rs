//! Data model for named nucleotide sequences.
//!
//! This module contains:
//! - `Sequence`: a single named residue string
//! - `SequenceSet`: an insertion-ordered collection of sequences keyed by name
//!
//! A `SequenceSet` is built once by the FASTA parser and then only read.
//! Writers pad their own copies of the residues and never mutate the set,
//! so one parse can feed several output formats.

use std::collections::HashMap;

use log::warn;

use crate::iupac::is_nucleotide_symbol;

/// Represents a single sequence with its name and residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The normalized record name
    pub name: String,
    /// The aligned residues (nucleotides, ambiguity codes and gaps)
    pub residues: String,
}

impl Sequence {
    /// Creates a new sequence.
    pub fn new(name: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            residues: residues.into(),
        }
    }

    /// Returns the number of residues.
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    /// Returns true if the sequence has no residues.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Returns the residues as a string slice.
    pub fn as_str(&self) -> &str {
        &self.residues
    }

    /// Returns the position and value of the first residue outside the
    /// nucleotide alphabet, if any.
    pub fn first_foreign_symbol(&self) -> Option<(usize, char)> {
        self.residues
            .chars()
            .enumerate()
            .find(|&(_, c)| !is_nucleotide_symbol(c))
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.residues)
    }
}

/// Records whose lengths disagree with the rest of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthConflict {
    /// Name of the first record with an unexpected length
    pub name: String,
    /// Length of the first record in the set
    pub expected: usize,
    /// Length of the offending record
    pub found: usize,
}

/// An ordered mapping from record name to residues.
///
/// Iteration follows first-seen order. Inserting an existing name replaces
/// its residues but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct SequenceSet {
    sequences: Vec<Sequence>,
    index: HashMap<String, usize>,
    /// Length of the most recently stored record
    last_len: Option<usize>,
}

impl SequenceSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from sequences, applying the same last-wins rule as `insert`.
    pub fn from_sequences<I>(sequences: I) -> Self
    where
        I: IntoIterator<Item = Sequence>,
    {
        let mut set = Self::new();
        for seq in sequences {
            set.insert(seq.name, seq.residues);
        }
        set
    }

    /// Stores residues under `name`.
    ///
    /// Returns the previous residues when the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, residues: impl Into<String>) -> Option<String> {
        let name = name.into();
        let residues = residues.into();
        self.last_len = Some(residues.chars().count());

        if let Some(&idx) = self.index.get(&name) {
            warn!("Duplicate sequence name '{}': keeping the last occurrence", name);
            return Some(std::mem::replace(&mut self.sequences[idx].residues, residues));
        }

        self.index.insert(name.clone(), self.sequences.len());
        self.sequences.push(Sequence::new(name, residues));
        None
    }

    /// Number of taxa (distinct names).
    pub fn ntax(&self) -> usize {
        self.sequences.len()
    }

    /// Alignment width, taken from the most recently stored record.
    ///
    /// This is not checked against the other records; see `check_aligned`.
    pub fn nchar(&self) -> usize {
        self.last_len.unwrap_or(0)
    }

    /// Looks up a sequence by name.
    pub fn get(&self, name: &str) -> Option<&Sequence> {
        self.index.get(name).map(|&idx| &self.sequences[idx])
    }

    /// Returns true if the set holds a sequence named `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over sequences in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Returns the longest name length, in characters.
    pub fn max_name_length(&self) -> usize {
        self.sequences
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Verifies that all records share one length.
    pub fn check_aligned(&self) -> Result<usize, LengthConflict> {
        let Some(first) = self.sequences.first() else {
            return Ok(0);
        };
        let expected = first.len();

        match self.sequences.iter().find(|s| s.len() != expected) {
            Some(offender) => Err(LengthConflict {
                name: offender.name.clone(),
                expected,
                found: offender.len(),
            }),
            None => Ok(expected),
        }
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
