//! NEXUS format writer.
//!
//! Output is a DATA block holding the padded alignment, followed by a
//! MrBayes block that configures the analysis:
//!
//! ```text
//! #NEXUS
//! begin data;
//!     dimensions ntax=2 nchar=4;
//!     format datatype=dna missing=? gap=-;
//!     matrix
//!     seq1    ACGT
//!     seq2    ?C-T
//!
//! ;
//! end;
//!
//! begin mrbayes;
//! outgroup HQ224958;
//! ...
//! ```
//!
//! Matrix rows are `TAB name TAB sequence`; names are not padded.
//! The MrBayes parameters are fixed defaults held in `MrBayesConfig`. They
//! are never derived from the data.

use crate::model::SequenceSet;
use crate::padding::pad_missing;

use super::{ensure_writable, FormatResult};

/// Parameters of the MrBayes command block.
///
/// `Default` gives the values used for every conversion unless the caller
/// overrides them.
#[derive(Debug, Clone, PartialEq)]
pub struct MrBayesConfig {
    /// Taxon used to root the tree
    pub outgroup: String,
    /// `lset nst`: number of substitution types (6 = GTR)
    pub nst: u32,
    /// `lset rates`
    pub rates: String,
    /// `lset ngammacat`
    pub ngammacat: u32,
    /// Fixed proportion of invariable sites
    pub pinvar: f64,
    /// Fixed base frequencies (A, C, G, T)
    pub state_freqs: [f64; 4],
    /// Fixed gamma shape parameter
    pub shape: f64,
    /// Fixed GTR exchangeabilities (AC, AG, AT, CG, CT, GT)
    pub revmat: [f64; 6],
    /// Number of MCMC generations
    pub ngen: u64,
    /// Fraction of samples discarded as burn-in
    pub burnin_frac: f64,
    pub print_freq: u64,
    pub sample_freq: u64,
    pub nchains: u32,
    /// Burn-in (in samples) for `sump` and `sumt`
    pub summary_burnin: u64,
}

impl Default for MrBayesConfig {
    fn default() -> Self {
        Self {
            outgroup: "HQ224958".to_string(),
            nst: 6,
            rates: "gamma".to_string(),
            ngammacat: 4,
            pinvar: 0.4210,
            state_freqs: [0.3585, 0.1240, 0.1938, 0.3238],
            shape: 0.6730,
            revmat: [1.0000, 8.1005, 2.0532, 2.0532, 8.1005, 1.0000],
            ngen: 10_000_000,
            burnin_frac: 0.25,
            print_freq: 1000,
            sample_freq: 1000,
            nchains: 4,
            summary_burnin: 2500,
        }
    }
}

fn fixed_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.4}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

impl MrBayesConfig {
    /// Renders the `begin mrbayes;` block.
    ///
    /// The block is left open: it has no closing `end;`.
    pub fn command_block(&self) -> String {
        let mut block = String::from("begin mrbayes;\n");
        block.push_str(&format!("outgroup {};\n", self.outgroup));
        block.push_str("set autoclose=yes nowarn=yes;\n");
        block.push_str(&format!(
            "lset nst={} rates={} ngammacat={};\n",
            self.nst, self.rates, self.ngammacat
        ));
        block.push_str(&format!(
            "prset applyto=(all) pinvar=fixed({:.4}) statefreqpr=fixed({}) shape=fixed({:.4}) revmatpr=fixed({});\n",
            self.pinvar,
            fixed_list(&self.state_freqs),
            self.shape,
            fixed_list(&self.revmat)
        ));
        block.push_str(&format!(
            "mcmcp ngen= {} relburnin=yes burninfrac={} printfreq={} samplefreq={} nchains={} savebrlens=yes;\n",
            self.ngen, self.burnin_frac, self.print_freq, self.sample_freq, self.nchains
        ));
        block.push_str("mcmc;\n");
        block.push_str(&format!("sump burnin={};\n", self.summary_burnin));
        block.push_str(&format!("sumt burnin={};\n", self.summary_burnin));
        block
    }
}

/// Renders `set` as a NEXUS file with the given MrBayes block.
pub fn format_nexus(set: &SequenceSet, mrbayes: &MrBayesConfig) -> FormatResult<String> {
    ensure_writable(set)?;

    let mut output = String::from("#NEXUS\n");
    output.push_str("begin data;\n");
    output.push_str(&format!(
        "\tdimensions ntax={} nchar={};\n",
        set.ntax(),
        set.nchar()
    ));
    output.push_str("\tformat datatype=dna missing=? gap=-;\n");
    output.push_str("\tmatrix\n");
    for seq in set {
        output.push_str(&format!("\t{}\t{}\n", seq.name, pad_missing(&seq.residues)));
    }
    output.push_str("\n;\nend;\n\n");
    output.push_str(&mrbayes.command_block());

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::fasta::parse_fasta_str;
    use crate::formats::{write_file, FormatError, OutputFormat};
    use crate::model::Sequence;

    const DEFAULT_BLOCK: &str = "begin mrbayes;
outgroup HQ224958;
set autoclose=yes nowarn=yes;
lset nst=6 rates=gamma ngammacat=4;
prset applyto=(all) pinvar=fixed(0.4210) statefreqpr=fixed(0.3585, 0.1240, 0.1938, 0.3238) shape=fixed(0.6730) revmatpr=fixed(1.0000, 8.1005, 2.0532, 2.0532, 8.1005, 1.0000);
mcmcp ngen= 10000000 relburnin=yes burninfrac=0.25 printfreq=1000 samplefreq=1000 nchains=4 savebrlens=yes;
mcmc;
sump burnin=2500;
sumt burnin=2500;
";

    #[test]
    fn test_default_command_block() {
        assert_eq!(MrBayesConfig::default().command_block(), DEFAULT_BLOCK);
    }

    #[test]
    fn test_full_document() {
        let set = parse_fasta_str(">seq1\nACGT\n\n>seq2\n-C-T\n").unwrap();
        let output = format_nexus(&set, &MrBayesConfig::default()).unwrap();

        let expected_data = "#NEXUS
begin data;
\tdimensions ntax=2 nchar=4;
\tformat datatype=dna missing=? gap=-;
\tmatrix
\tseq1\tACGT
\tseq2\t?C-T

;
end;

";
        assert_eq!(output, format!("{}{}", expected_data, DEFAULT_BLOCK));
    }

    #[test]
    fn test_overridden_config() {
        let config = MrBayesConfig {
            outgroup: "seq2".to_string(),
            ngen: 5000,
            ..MrBayesConfig::default()
        };
        let block = config.command_block();
        assert!(block.contains("outgroup seq2;\n"));
        assert!(block.contains("mcmcp ngen= 5000 relburnin=yes"));
    }

    #[test]
    fn test_names_not_padded() {
        let set = SequenceSet::from_sequences(vec![
            Sequence::new("a", "AC"),
            Sequence::new("longname", "GT"),
        ]);
        let output = format_nexus(&set, &MrBayesConfig::default()).unwrap();
        assert!(output.contains("\ta\tAC\n"));
        assert!(output.contains("\tlongname\tGT\n"));
    }

    #[test]
    fn test_empty_set_rejected() {
        let result = format_nexus(&SequenceSet::new(), &MrBayesConfig::default());
        assert!(matches!(result, Err(FormatError::EmptySet)));
    }

    #[test]
    fn test_write_file_as_nexus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aln.nex");
        let set = SequenceSet::from_sequences(vec![Sequence::new("s", "A-")]);

        write_file(&set, OutputFormat::Nexus, &MrBayesConfig::default(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("#NEXUS\n"));
        assert!(written.contains("\ts\tA?\n"));
        assert!(written.ends_with("sumt burnin=2500;\n"));
    }
}
