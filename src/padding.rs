//! Flanking gap padding.
//!
//! Phylogenetics programs read a leading or trailing run of gaps as an
//! aligned deletion. For partial sequences those runs are really unsequenced
//! data, so they are written as `?` instead. Internal gaps stay as `-`.
//!
//! ```text
//! --AC-GT---   ->   ??AC-GT???
//! ```

use crate::iupac::{GAP, MISSING};

/// Replaces the leading and trailing gap runs of `residues` with the
/// missing-data symbol.
///
/// The result always has the same length as the input. A sequence made only
/// of gaps becomes only missing symbols.
pub fn pad_missing(residues: &str) -> String {
    let core = residues.trim_start_matches(GAP);
    let leading = residues.len() - core.len();
    let core = core.trim_end_matches(GAP);
    let trailing = residues.len() - leading - core.len();

    let mut padded = String::with_capacity(residues.len());
    padded.extend(std::iter::repeat(MISSING).take(leading));
    padded.push_str(core);
    padded.extend(std::iter::repeat(MISSING).take(trailing));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_both_ends() {
        assert_eq!(pad_missing("--ACGT--"), "??ACGT??");
    }

    #[test]
    fn test_internal_gaps_untouched() {
        assert_eq!(pad_missing("-AC--GT-"), "?AC--GT?");
    }

    #[test]
    fn test_no_edge_gaps() {
        assert_eq!(pad_missing("AC-GT"), "AC-GT");
    }

    #[test]
    fn test_all_gaps() {
        assert_eq!(pad_missing("-----"), "?????");
    }

    #[test]
    fn test_empty() {
        assert_eq!(pad_missing(""), "");
    }

    #[test]
    fn test_one_sided() {
        assert_eq!(pad_missing("---A"), "???A");
        assert_eq!(pad_missing("A---"), "A???");
    }

    #[test]
    fn test_idempotent() {
        for s in ["--ACGT--", "-----", "ACGT", "-A-C-", "N--N", ""] {
            let once = pad_missing(s);
            assert_eq!(pad_missing(&once), once);
        }
    }

    #[test]
    fn test_length_preserved() {
        for s in ["--ACGT--", "-----", "ACGT", "-A-C-", "?-A", ""] {
            assert_eq!(pad_missing(s).len(), s.len());
        }
    }
}
