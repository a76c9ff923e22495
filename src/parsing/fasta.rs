//! Parser for FASTA files.
//!
//! Builds validated [`Sequence`] records in input order. Any invalid record
//! aborts the whole parse. Supports both uncompressed and gzip/bgzip
//! compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna`, `.fas` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz`, `.fas.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz`, `.fas.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::core::sequence::Sequence;
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// Line-start character introducing a record
pub const RECORD_MARKER: char = '>';

const FASTA_EXTENSIONS: [&str; 4] = ["fa", "fasta", "fna", "fas"];

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for compressed FASTA
    for ext in FASTA_EXTENSIONS {
        if path_str.ends_with(&format!(".{ext}.gz")) || path_str.ends_with(&format!(".{ext}.bgz"))
        {
            return true;
        }
    }

    // Check for uncompressed FASTA
    path.extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase)
        .is_some_and(|ext| FASTA_EXTENSIONS.contains(&ext.as_str()))
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Accumulates lines into records.
///
/// The pending record's identifier and residue text are held until the
/// next marker line (or end of input) completes it.
#[derive(Default)]
struct RecordCollector {
    records: Vec<Sequence>,
    current: Option<(String, String)>,
}

impl RecordCollector {
    fn push_line(&mut self, line: &str) -> Result<(), ParseError> {
        if let Some(header) = line.strip_prefix(RECORD_MARKER) {
            self.finish_record()?;
            self.current = Some((header.trim().to_string(), String::new()));
        } else if let Some((_, residues)) = self.current.as_mut() {
            residues.push_str(line);
        }
        // Lines before the first marker are ignored
        Ok(())
    }

    fn finish_record(&mut self) -> Result<(), ParseError> {
        let Some((id, residues)) = self.current.take() else {
            return Ok(());
        };

        // Check record limit for DOS protection
        if check_record_limit(self.records.len()).is_some() {
            return Err(ParseError::TooManyRecords(self.records.len()));
        }

        let sequence = Sequence::new(id, &residues)?;
        debug!(
            "Parsed record '{}' ({} residues)",
            sequence.id(),
            sequence.len()
        );
        self.records.push(sequence);
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Sequence>, ParseError> {
        self.finish_record()?;
        Ok(self.records)
    }
}

/// Parse FASTA text into records.
///
/// Records come back in the order their marker lines appear. Input without
/// any marker line yields an empty list.
///
/// # Errors
///
/// Returns `ParseError::Sequence` for the first record that fails
/// validation (empty or containing invalid characters), or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_fasta_text(text: &str) -> Result<Vec<Sequence>, ParseError> {
    let mut collector = RecordCollector::default();
    for line in text.lines() {
        collector.push_line(line)?;
    }
    collector.finish()
}

/// Parse FASTA records from a buffered reader.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails (including non-UTF-8 input),
/// otherwise the same errors as [`parse_fasta_text`].
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<Vec<Sequence>, ParseError> {
    let mut collector = RecordCollector::default();
    for line in reader.lines() {
        collector.push_line(&line?)?;
    }
    collector.finish()
}

/// Parse a FASTA file, decompressing `.gz`/`.bgz` files.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, otherwise the same
/// errors as [`parse_fasta_text`].
pub fn parse_fasta_file(path: &Path) -> Result<Vec<Sequence>, ParseError> {
    let file = std::fs::File::open(path)?;

    let records = if is_gzipped(path) {
        parse_fasta_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        parse_fasta_reader(BufReader::new(file))?
    };

    debug!("Read {} record(s) from {}", records.len(), path.display());
    Ok(records)
}
