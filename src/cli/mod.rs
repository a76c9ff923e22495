//! Command-line interface for seqstat.
//!
//! This module implements the CLI using clap. Available reports:
//!
//! - **--length**: Length of each sequence
//! - **--gc**: GC content of each sequence
//! - **--revcomp**: Reverse complement of each sequence
//! - **--basecount**: Count of every alphabet symbol per sequence
//! - **--summary**: Lengths, GC content and base composition together
//!
//! Without any report flag the summary is printed.
//!
//! ## Usage
//!
//! ```text
//! # Full summary
//! seqstat --file sample.fa
//!
//! # GC content and reverse complement
//! seqstat -f sample.fa --gc --revcomp
//!
//! # Read from stdin
//! zcat sample.fa.gz | seqstat -f - --length
//!
//! # JSON output for scripting
//! seqstat -f sample.fa --summary --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod report;

#[derive(Parser)]
#[command(name = "seqstat")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Per-record statistics for DNA/RNA FASTA files")]
#[command(
    long_about = "seqstat reads a FASTA file and reports, for each record:\n- Sequence length\n- GC content\n- Reverse complement\n- Counts of every IUPAC nucleotide code and gap symbol"
)]
pub struct Cli {
    /// Path to the FASTA file (plain, .gz or .bgz); use '-' for stdin
    #[arg(short, long, required = true)]
    pub file: PathBuf,

    /// Report sequence length per record
    #[arg(short, long)]
    pub length: bool,

    /// Report GC content per record
    #[arg(short, long)]
    pub gc: bool,

    /// Report the reverse complement per record
    #[arg(short, long, visible_alias = "rc")]
    pub revcomp: bool,

    /// Report base counts per record
    #[arg(short, long)]
    pub basecount: bool,

    /// Report lengths, GC content and base counts
    #[arg(short, long)]
    pub summary: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short = 'F', long, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    /// Selected reports in output order; the summary when none is selected
    #[must_use]
    pub fn reports(&self) -> Vec<Report> {
        let selected: Vec<Report> = [
            (self.length, Report::Length),
            (self.gc, Report::Gc),
            (self.revcomp, Report::ReverseComplement),
            (self.basecount, Report::BaseCount),
            (self.summary, Report::Summary),
        ]
        .into_iter()
        .filter_map(|(on, report)| on.then_some(report))
        .collect();

        if selected.is_empty() {
            vec![Report::Summary]
        } else {
            selected
        }
    }
}

/// A per-record report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Length,
    Gc,
    ReverseComplement,
    BaseCount,
    Summary,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
