//! # alignconv - FASTA alignment conversion and comparison
//!
//! Converts column-aligned FASTA files to relaxed PHYLIP and NEXUS, and
//! compares nucleotide sequences while honouring IUPAC ambiguity codes.
//!
//! ## Architecture
//!
//! - `model`: `Sequence` and the insertion-ordered `SequenceSet`
//! - `iupac`: ambiguity codes and symbol classes
//! - `padding`: flanking gaps to missing data (`pad_missing`)
//! - `formats`: FASTA parsing, PHYLIP and NEXUS writers, output naming
//! - `compare`: per-column scores and equalness between two sequences
//! - `convert`: the parse-then-write pipeline driven by `ConvertConfig`

pub mod compare;
pub mod convert;
pub mod formats;
pub mod iupac;
pub mod model;
pub mod padding;
