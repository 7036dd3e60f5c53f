//! IUPAC nucleotide symbols.
//!
//! This module provides:
//! - The two-base ambiguity codes and the canonical bases each one stands for
//! - The nucleotide alphabet accepted by the comparator
//! - A coarse classification of symbols, used to colour residues
//!
//! Only the six two-base codes take part in partial matching. `N` and the
//! gap `-` are wildcards that match each other; they are not expanded.

/// Gap symbol inside an alignment.
pub const GAP: char = '-';

/// Missing-data symbol used for padded flanking gaps.
pub const MISSING: char = '?';

/// Undetermined base.
pub const UNKNOWN: char = 'N';

/// Two-base ambiguity codes with their compatible canonical bases.
pub static AMBIGUITY_CODES: &[(char, &[char])] = &[
    ('R', &['A', 'G']),
    ('Y', &['C', 'T']),
    ('S', &['G', 'C']),
    ('W', &['A', 'T']),
    ('K', &['G', 'T']),
    ('M', &['A', 'C']),
];

/// Every symbol a nucleotide sequence may contain.
pub const NUCLEOTIDE_ALPHABET: &str = "ACGTUN-RYSWKM";

/// Returns the canonical bases an ambiguity code represents.
pub fn expand(code: char) -> Option<&'static [char]> {
    AMBIGUITY_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, bases)| *bases)
}

/// Returns true if `code` is a two-base ambiguity code and `base` is one of
/// the bases it stands for.
pub fn is_compatible(code: char, base: char) -> bool {
    expand(code).is_some_and(|bases| bases.contains(&base))
}

/// Returns true for the symbols that match anything else in `{-, N}`.
pub fn is_wildcard(symbol: char) -> bool {
    symbol == GAP || symbol == UNKNOWN
}

/// Returns true if `symbol` belongs to the nucleotide alphabet.
pub fn is_nucleotide_symbol(symbol: char) -> bool {
    NUCLEOTIDE_ALPHABET.contains(symbol)
}

/// Broad category of a residue, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    /// Gap or `N`
    Undetermined,
    Adenine,
    Cytosine,
    Guanine,
    /// `T` or `U`
    Thymine,
    /// Any other symbol, including ambiguity codes
    Ambiguous,
}

impl SymbolClass {
    /// Classifies one residue.
    pub fn of(symbol: char) -> Self {
        match symbol {
            '-' | 'N' => SymbolClass::Undetermined,
            'A' => SymbolClass::Adenine,
            'C' => SymbolClass::Cytosine,
            'G' => SymbolClass::Guanine,
            'T' | 'U' => SymbolClass::Thymine,
            _ => SymbolClass::Ambiguous,
        }
    }
}

/// Classifies every residue of a sequence.
pub fn classify(residues: &str) -> Vec<SymbolClass> {
    residues.chars().map(SymbolClass::of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand() {
        assert_eq!(expand('R'), Some(&['A', 'G'][..]));
        assert_eq!(expand('Y'), Some(&['C', 'T'][..]));
        assert_eq!(expand('M'), Some(&['A', 'C'][..]));
        assert_eq!(expand('A'), None);
        assert_eq!(expand('N'), None);
    }

    #[test]
    fn test_is_compatible() {
        assert!(is_compatible('R', 'A'));
        assert!(is_compatible('R', 'G'));
        assert!(!is_compatible('R', 'C'));
        assert!(is_compatible('S', 'C'));
        assert!(is_compatible('K', 'T'));
        // U is not part of any two-base code
        assert!(!is_compatible('Y', 'U'));
        // Only the code side expands
        assert!(!is_compatible('A', 'R'));
    }

    #[test]
    fn test_wildcards() {
        assert!(is_wildcard('-'));
        assert!(is_wildcard('N'));
        assert!(!is_wildcard('?'));
        assert!(!is_wildcard('A'));
    }

    #[test]
    fn test_alphabet() {
        for c in "ACGTUN-RYSWKM".chars() {
            assert!(is_nucleotide_symbol(c), "{} should be accepted", c);
        }
        assert!(!is_nucleotide_symbol('a'));
        assert!(!is_nucleotide_symbol('?'));
        assert!(!is_nucleotide_symbol('B'));
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify("-NACGTUR"),
            vec![
                SymbolClass::Undetermined,
                SymbolClass::Undetermined,
                SymbolClass::Adenine,
                SymbolClass::Cytosine,
                SymbolClass::Guanine,
                SymbolClass::Thymine,
                SymbolClass::Thymine,
                SymbolClass::Ambiguous,
            ]
        );
    }
}
