//! Report rendering for the CLI.
//!
//! Every statistic is obtained from [`Sequence`]; this module only selects,
//! formats and prints.

use std::io;
use std::path::Path;

use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::{info, warn};

use crate::cli::{Cli, OutputFormat, Report};
use crate::core::alphabet::ALPHABET;
use crate::core::composition::BaseComposition;
use crate::core::sequence::{Sequence, SequenceError};
use crate::parsing;
use crate::utils::validation::require_sequences;

/// Execute the selected reports
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, contains no
/// records, or a record-level computation fails.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let sequences = read_input(&cli.file)?;
    let sequences = require_sequences(&sequences)?;

    if cli.verbose {
        let total: usize = sequences.iter().map(Sequence::len).sum();
        info!("Loaded {} record(s), {total} residues", sequences.len());
    }

    let reports = cli.reports();
    match cli.format {
        OutputFormat::Text => {
            for report in &reports {
                let text = render_text(*report, sequences)?;
                println!("{}\n", text.trim_end());
            }
        }
        OutputFormat::Json => println!("{}", render_json(&reports, sequences)?),
        OutputFormat::Tsv => print!("{}", render_tsv(&reports, sequences)?),
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<Vec<Sequence>> {
    // Handle stdin
    if path.to_string_lossy() == "-" {
        return Ok(parsing::fasta::parse_fasta_reader(io::stdin().lock())?);
    }

    if !parsing::fasta::is_fasta_file(path) {
        warn!(
            "{} does not have a FASTA extension; parsing it as FASTA anyway",
            path.display()
        );
    }

    Ok(parsing::fasta::parse_fasta_file(path)?)
}

/// Which statistics a set of reports needs
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Columns {
    length: bool,
    gc: bool,
    reverse_complement: bool,
    base_count: bool,
}

impl Columns {
    fn from_reports(reports: &[Report]) -> Self {
        let mut columns = Self::default();
        for report in reports {
            match report {
                Report::Length => columns.length = true,
                Report::Gc => columns.gc = true,
                Report::ReverseComplement => columns.reverse_complement = true,
                Report::BaseCount => columns.base_count = true,
                Report::Summary => {
                    columns.length = true;
                    columns.gc = true;
                    columns.base_count = true;
                }
            }
        }
        columns
    }
}

/// Statistics for one record, limited to the selected columns
#[derive(Debug, Serialize)]
struct RecordStats<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gc_content: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reverse_complement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    base_count: Option<BaseComposition>,
}

impl<'a> RecordStats<'a> {
    fn compute(sequence: &'a Sequence, columns: Columns) -> Result<Self, SequenceError> {
        Ok(Self {
            id: sequence.id(),
            length: columns.length.then(|| sequence.len()),
            gc_content: columns.gc.then(|| sequence.gc_content()).transpose()?,
            reverse_complement: columns
                .reverse_complement
                .then(|| sequence.reverse_complement())
                .transpose()?,
            base_count: columns.base_count.then(|| sequence.base_count()),
        })
    }
}

fn format_gc(gc: f64) -> String {
    format!("{gc:.2}%")
}

fn grid(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}

fn length_table(sequences: &[Sequence]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Sequence ID", "Length"]);
    for seq in sequences {
        builder.push_record([seq.id().to_string(), seq.len().to_string()]);
    }
    grid(builder)
}

fn gc_table(sequences: &[Sequence]) -> Result<String, SequenceError> {
    let mut builder = Builder::default();
    builder.push_record(["Sequence", "GC%"]);
    for seq in sequences {
        builder.push_record([seq.id().to_string(), format_gc(seq.gc_content()?)]);
    }
    Ok(grid(builder))
}

fn reverse_complement_text(sequences: &[Sequence]) -> Result<String, SequenceError> {
    let mut out = String::new();
    for seq in sequences {
        out.push_str(&format!(
            ">{} reverse complement\n{}\n{}\n",
            seq.id(),
            seq.reverse_complement()?,
            "-".repeat(30)
        ));
    }
    Ok(out)
}

fn base_count_table(sequences: &[Sequence]) -> String {
    let mut builder = Builder::default();
    builder.push_record(
        std::iter::once("Sequence".to_string())
            .chain(ALPHABET.iter().map(|&b| char::from(b).to_string())),
    );
    for seq in sequences {
        let counts = seq.base_count();
        builder.push_record(
            std::iter::once(seq.id().to_string())
                .chain(counts.iter().map(|(_, n)| n.to_string())),
        );
    }
    grid(builder)
}

fn render_text(report: Report, sequences: &[Sequence]) -> Result<String, SequenceError> {
    let text = match report {
        Report::Length => length_table(sequences),
        Report::Gc => gc_table(sequences)?,
        Report::ReverseComplement => reverse_complement_text(sequences)?,
        Report::BaseCount => base_count_table(sequences),
        Report::Summary => format!(
            "SEQUENCE LENGTHS\n{}\n\nGC CONTENT\n{}\n\nBASE COMPOSITION\n{}",
            length_table(sequences),
            gc_table(sequences)?,
            base_count_table(sequences)
        ),
    };
    Ok(text)
}

fn render_json(reports: &[Report], sequences: &[Sequence]) -> anyhow::Result<String> {
    let columns = Columns::from_reports(reports);
    let stats = sequences
        .iter()
        .map(|seq| RecordStats::compute(seq, columns))
        .collect::<Result<Vec<_>, _>>()?;

    let output = serde_json::json!({
        "record_count": stats.len(),
        "records": stats,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

fn render_tsv(reports: &[Report], sequences: &[Sequence]) -> Result<String, SequenceError> {
    let columns = Columns::from_reports(reports);

    let mut header = vec!["id".to_string()];
    if columns.length {
        header.push("length".to_string());
    }
    if columns.gc {
        header.push("gc_content".to_string());
    }
    if columns.reverse_complement {
        header.push("reverse_complement".to_string());
    }
    if columns.base_count {
        header.extend(ALPHABET.iter().map(|&b| char::from(b).to_string()));
    }

    let mut out = header.join("\t");
    out.push('\n');

    for seq in sequences {
        let stats = RecordStats::compute(seq, columns)?;
        let mut row = vec![stats.id.to_string()];
        if let Some(length) = stats.length {
            row.push(length.to_string());
        }
        if let Some(gc) = stats.gc_content {
            row.push(format!("{gc:.4}"));
        }
        if let Some(rc) = stats.reverse_complement {
            row.push(rc);
        }
        if let Some(counts) = &stats.base_count {
            row.extend(counts.iter().map(|(_, n)| n.to_string()));
        }
        out.push_str(&row.join("\t"));
        out.push('\n');
    }

    Ok(out)
}
