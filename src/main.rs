//! alignconv - FASTA alignment converter
//!
//! ## Usage
//!
//! ```bash
//! alignconv alignment.fasta                 # writes alignment.phy and alignment.nex
//! alignconv alignment.fasta -o run1 -n      # writes run1.phy only
//! alignconv alignment.fasta --compare seqA seqB --scores
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default: `info`).

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use alignconv::compare::ComparisonReport;
use alignconv::convert::{run_conversion, ConvertConfig};
use alignconv::formats::fasta::parse_fasta_file;
use alignconv::formats::nexus::MrBayesConfig;

/// Runs comparison mode: parse the file, compare two named records, print the result.
fn run_compare_mode(file_path: &Path, name_a: &str, name_b: &str, print_scores: bool) -> Result<()> {
    let set = parse_fasta_file(file_path)
        .with_context(|| format!("Cannot read {}", file_path.display()))?;

    let a = set
        .get(name_a)
        .ok_or_else(|| anyhow::anyhow!("No sequence named '{}' in {}", name_a, file_path.display()))?;
    let b = set
        .get(name_b)
        .ok_or_else(|| anyhow::anyhow!("No sequence named '{}' in {}", name_b, file_path.display()))?;

    let report = ComparisonReport::new(a, b)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", report.title())?;
    if print_scores {
        for (pos, score) in report.result.values().iter().enumerate() {
            writeln!(handle, "{}\t{}", pos + 1, score)?;
        }
    }

    Ok(())
}

/// alignconv - convert FASTA alignments to PHYLIP and NEXUS
///
/// By default writes both formats next to the input, replacing its
/// .fa/.fas/.fasta suffix. With --compare, prints how similar two records are.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FASTA alignment to read
    input: PathBuf,

    /// Prefix of output files (default: reuse the input name)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Turn off NEXUS conversion
    #[arg(short = 'n', long = "no-nexus")]
    no_nexus: bool,

    /// Turn off PHYLIP conversion
    #[arg(short = 'p', long = "no-phylip")]
    no_phylip: bool,

    /// Outgroup taxon written to the MrBayes block
    #[arg(long = "outgroup")]
    outgroup: Option<String>,

    /// Number of MCMC generations written to the MrBayes block
    #[arg(long = "ngen")]
    ngen: Option<u64>,

    /// Compare two records by name instead of converting
    #[arg(long = "compare", num_args = 2, value_names = ["NAME_A", "NAME_B"])]
    compare: Option<Vec<String>>,

    /// With --compare, also print the score of every column
    #[arg(long = "scores", requires = "compare")]
    scores: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Some(names) = &args.compare {
        let [name_a, name_b] = names.as_slice() else {
            anyhow::bail!("--compare takes exactly two sequence names");
        };
        return run_compare_mode(&args.input, name_a, name_b, args.scores);
    }

    if args.ngen == Some(0) {
        anyhow::bail!("--ngen must be greater than 0");
    }

    let mut mrbayes = MrBayesConfig::default();
    if let Some(outgroup) = args.outgroup {
        mrbayes.outgroup = outgroup;
    }
    if let Some(ngen) = args.ngen {
        mrbayes.ngen = ngen;
    }

    let config = ConvertConfig {
        input_path: args.input,
        output_prefix: args.output,
        emit_nexus: !args.no_nexus,
        emit_phylip: !args.no_phylip,
        mrbayes,
    };

    let summary = run_conversion(&config)?;
    info!(
        "Converted {} sequences into {} file(s)",
        summary.ntax,
        summary.written.len()
    );

    Ok(())
}
