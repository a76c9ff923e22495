//! Core data types for sequence analysis.
//!
//! - [`alphabet`]: The residue alphabet and complement map
//! - [`Sequence`](sequence::Sequence): A validated, immutable sequence record
//! - [`BaseComposition`](composition::BaseComposition): Per-symbol counts in alphabet order
//!
//! ## Alphabet
//!
//! | Symbols | Meaning | Complement |
//! |---------|---------|------------|
//! | A C G T | Canonical DNA bases | T G C A |
//! | U       | Uracil (RNA) | A |
//! | R Y     | Purine / pyrimidine | Y R |
//! | S W     | Strong / weak | S W |
//! | K M     | Keto / amino | M K |
//! | B D H V | Not A / C / G / T | V H D B |
//! | N       | Any base | N |
//! | - .     | Gap / unknown | - . |
//!
//! Input is case-insensitive; residues are stored uppercased.

pub mod alphabet;
pub mod composition;
pub mod sequence;
