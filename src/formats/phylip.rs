//! PHYLIP format writer.
//!
//! Writes relaxed sequential PHYLIP: names are not cut to 10 characters but
//! padded to one more than the longest name, so every row starts its data in
//! the same column.
//!
//! ```text
//!  2 10
//! seq1     ??GTACGTAC
//! longseq2 TGCATGC-TG
//! ```

use crate::model::SequenceSet;
use crate::padding::pad_missing;

use super::{ensure_writable, FormatResult};

/// Renders `set` as relaxed PHYLIP text.
pub fn format_phylip(set: &SequenceSet) -> FormatResult<String> {
    ensure_writable(set)?;

    let width = set.max_name_length() + 1;
    let mut output = format!(" {} {}\n", set.ntax(), set.nchar());
    output.reserve(set.ntax() * (width + set.nchar() + 1));

    for seq in set {
        output.push_str(&format!("{:<width$}{}\n", seq.name, pad_missing(&seq.residues)));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::fasta::parse_fasta_str;
    use crate::formats::nexus::MrBayesConfig;
    use crate::formats::{write_file, FormatError, OutputFormat};
    use crate::model::Sequence;

    #[test]
    fn test_two_records() {
        let set = parse_fasta_str(">seq1\nACGT\n\n>seq2\nAC-T\n").unwrap();
        let output = format_phylip(&set).unwrap();
        assert_eq!(output, " 2 4\nseq1 ACGT\nseq2 AC-T\n");

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " 2 4");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_names_padded_to_common_width() {
        let set = SequenceSet::from_sequences(vec![
            Sequence::new("a", "--ACGT--"),
            Sequence::new("longname", "ACGTACGT"),
        ]);
        let output = format_phylip(&set).unwrap();
        assert_eq!(output, " 2 8\na        ??ACGT??\nlongname ACGTACGT\n");

        // Data starts in the same column on every row
        let starts: Vec<usize> = output
            .lines()
            .skip(1)
            .map(|l| l.find(|c: char| c == '?' || c == 'A').unwrap())
            .collect();
        assert_eq!(starts, vec![9, 9]);
    }

    #[test]
    fn test_does_not_mutate_set() {
        let set = SequenceSet::from_sequences(vec![Sequence::new("seq1", "--AC")]);
        format_phylip(&set).unwrap();
        assert_eq!(set.get("seq1").unwrap().as_str(), "--AC");
    }

    #[test]
    fn test_rejects_misaligned() {
        let set = SequenceSet::from_sequences(vec![
            Sequence::new("seq1", "ACGT"),
            Sequence::new("seq2", "ACGTA"),
        ]);
        assert!(matches!(
            format_phylip(&set),
            Err(FormatError::MisalignedRecords { .. })
        ));
    }

    #[test]
    fn test_write_file_overwrites_phylip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aln.phy");
        std::fs::write(&path, "stale content that is longer than the output\n").unwrap();

        let set = SequenceSet::from_sequences(vec![Sequence::new("s", "AC")]);
        write_file(&set, OutputFormat::Phylip, &MrBayesConfig::default(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), " 1 2\ns AC\n");
    }
}
