//! # seqstat
//!
//! A library for computing per-record statistics of DNA/RNA sequences read
//! from FASTA files.
//!
//! Each record is validated once, at construction, against the IUPAC
//! nucleotide alphabet extended with the gap markers `-` and `.`. A
//! validated [`Sequence`] then answers queries without re-checking its
//! residues.
//!
//! ## Features
//!
//! - **Validation**: Rejects empty records and reports every invalid character
//! - **Length**: Residue count per record
//! - **Base composition**: Counts for every alphabet symbol, in a fixed order
//! - **GC content**: Percentage of `G`/`C` residues
//! - **Reverse complement**: Including IUPAC ambiguity codes
//!
//! ## Example
//!
//! ```rust
//! use seqstat::parsing::fasta::parse_fasta_text;
//!
//! let records = parse_fasta_text(">seq1\nacgtn\n").unwrap();
//! let seq = &records[0];
//!
//! assert_eq!(seq.len(), 5);
//! assert_eq!(seq.base_count().get('A'), 1);
//! assert_eq!(seq.reverse_complement().unwrap(), "NACGT");
//! println!("{}: {:.2}% GC", seq.id(), seq.gc_content().unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alphabet, sequence record and base composition types
//! - [`parsing`]: FASTA parser
//! - [`utils`]: Input limits and record-count checks
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::composition::{BaseComposition, CountAnomaly};
pub use crate::core::sequence::{Sequence, SequenceError};
pub use crate::parsing::ParseError;
