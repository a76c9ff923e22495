//! Parsers for reading sequence records.
//!
//! Input is the FASTA record format:
//!
//! ```text
//! >identifier [optional annotation]
//! RESIDUE-LINE-1
//! RESIDUE-LINE-2
//! >identifier2
//! ...
//! ```
//!
//! ## Example
//!
//! ```rust
//! use seqstat::parsing::fasta::parse_fasta_text;
//!
//! let records = parse_fasta_text(">s1\nACGT\n>s2\nGGCC\n").unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].gc_content().unwrap(), 100.0);
//! ```

use thiserror::Error;

use crate::core::sequence::SequenceError;
use crate::utils::validation::MAX_RECORDS;

pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("Too many records: {0} exceeds maximum allowed ({MAX_RECORDS})")]
    TooManyRecords(usize),
}
