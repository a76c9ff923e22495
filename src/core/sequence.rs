use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::core::alphabet::{complement, is_valid};
use crate::core::composition::BaseComposition;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Sequence for ID '{0}' is empty")]
    EmptySequence(String),

    #[error("Sequence '{id}' contains invalid characters: {}", format_symbols(.invalid))]
    InvalidCharacters { id: String, invalid: BTreeSet<char> },

    #[error("Sequence '{id}' has no complement for residue '{symbol}'")]
    NoComplement { id: String, symbol: char },

    #[error("Inconsistent state in sequence '{0}': no alphabet residues in a non-empty sequence")]
    InconsistentState(String),
}

fn format_symbols(symbols: &BTreeSet<char>) -> String {
    let quoted: Vec<String> = symbols.iter().map(|c| format!("'{c}'")).collect();
    format!("{{{}}}", quoted.join(", "))
}

/// Helper function to convert usize count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// A validated nucleotide sequence record.
///
/// Residues are stored uppercased and are guaranteed non-empty and inside
/// [`ALPHABET`](crate::core::alphabet::ALPHABET). The value is immutable
/// after construction, so queries on distinct records need no coordination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    id: String,
    residues: Vec<u8>,
}

impl Sequence {
    /// Validate `raw` and build a sequence from it.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::EmptySequence` if `raw` is empty, or
    /// `SequenceError::InvalidCharacters` with every offending symbol if any
    /// character (after uppercasing) is outside the alphabet.
    pub fn new(id: impl Into<String>, raw: &str) -> Result<Self, SequenceError> {
        let id = id.into();

        if raw.is_empty() {
            return Err(SequenceError::EmptySequence(id));
        }

        let invalid: BTreeSet<char> = raw
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|&c| !u8::try_from(c).is_ok_and(is_valid))
            .collect();

        if !invalid.is_empty() {
            return Err(SequenceError::InvalidCharacters { id, invalid });
        }

        // Only ASCII remains at this point
        let residues = raw.bytes().map(|b| b.to_ascii_uppercase()).collect();

        Ok(Self { id, residues })
    }

    /// Build a sequence without validating it
    #[cfg(test)]
    pub(crate) fn new_unchecked(id: impl Into<String>, residues: &[u8]) -> Self {
        Self {
            id: id.into(),
            residues: residues.to_vec(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Uppercased residues
    #[must_use]
    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    /// Number of residues
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always `false` for a validated sequence
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Count every alphabet symbol, in alphabet order.
    ///
    /// Never fails: residues outside the alphabet (impossible for a
    /// validated sequence) are logged and reported as anomalies.
    #[must_use]
    pub fn base_count(&self) -> BaseComposition {
        BaseComposition::count(&self.id, &self.residues)
    }

    /// Number of `G` and `C` residues
    #[must_use]
    pub fn gc_count(&self) -> usize {
        self.residues
            .iter()
            .filter(|&&b| matches!(b, b'G' | b'C'))
            .count()
    }

    /// GC content as a percentage in `[0, 100]`.
    ///
    /// The denominator is the number of residues inside the alphabet, which
    /// equals [`len`](Self::len) for any validated sequence. An empty
    /// sequence yields `0.0`.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InconsistentState` if the sequence is
    /// non-empty but holds no alphabet residues at all.
    pub fn gc_content(&self) -> Result<f64, SequenceError> {
        if self.residues.is_empty() {
            return Ok(0.0);
        }

        let total = self.residues.iter().filter(|&&b| is_valid(b)).count();
        if total == 0 {
            return Err(SequenceError::InconsistentState(self.id.clone()));
        }

        Ok(count_to_f64(self.gc_count()) / count_to_f64(total) * 100.0)
    }

    /// Reverse the residues and complement each one.
    ///
    /// Gap markers `-` and `.` are carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::NoComplement` for a residue outside the
    /// alphabet, which a validated sequence never contains.
    pub fn reverse_complement(&self) -> Result<String, SequenceError> {
        self.residues
            .iter()
            .rev()
            .map(|&b| {
                complement(b).map(char::from).ok_or_else(|| SequenceError::NoComplement {
                    id: self.id.clone(),
                    symbol: char::from(b),
                })
            })
            .collect()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Residues are ASCII by construction
        f.write_str(&String::from_utf8_lossy(&self.residues))
    }
}

// Serialized as `{"id": ..., "sequence": ...}`
impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Sequence", 2)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("sequence", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uppercases() {
        let seq = Sequence::new("seq1", "acgtn").unwrap();
        assert_eq!(seq.id(), "seq1");
        assert_eq!(seq.residues(), b"ACGTN");
        assert_eq!(seq.to_string(), "ACGTN");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            Sequence::new("x", ""),
            Err(SequenceError::EmptySequence("x".to_string()))
        );
    }

    #[test]
    fn test_new_rejects_invalid_characters() {
        let err = Sequence::new("x", "ACGZ").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidCharacters {
                id: "x".to_string(),
                invalid: BTreeSet::from(['Z']),
            }
        );
    }

    #[test]
    fn test_new_reports_every_invalid_character() {
        let err = Sequence::new("x", "AxZzQ C").unwrap_err();
        let SequenceError::InvalidCharacters { invalid, .. } = err else {
            panic!("expected InvalidCharacters");
        };
        // Lowercase is folded before comparison, so 'x' and 'z' appear uppercased
        assert_eq!(invalid, BTreeSet::from([' ', 'Q', 'X', 'Z']));
    }

    #[test]
    fn test_new_rejects_non_ascii() {
        let err = Sequence::new("x", "ACGé").unwrap_err();
        assert!(matches!(
            err,
            SequenceError::InvalidCharacters { ref invalid, .. } if invalid.contains(&'é')
        ));
    }

    #[test]
    fn test_invalid_characters_message() {
        let err = Sequence::new("chr1", "AZB1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sequence 'chr1' contains invalid characters: {'1', 'Z'}"
        );
    }

    #[test]
    fn test_empty_message() {
        let err = Sequence::new("chr1", "").unwrap_err();
        assert_eq!(err.to_string(), "Sequence for ID 'chr1' is empty");
    }

    #[test]
    fn test_concrete_example() {
        let seq = Sequence::new("seq1", "acgtn").unwrap();
        assert_eq!(seq.len(), 5);
        assert!(!seq.is_empty());
        assert!((seq.gc_content().unwrap() - 40.0).abs() < 1e-9);
        assert_eq!(seq.base_count().get('A'), 1);
        assert_eq!(seq.reverse_complement().unwrap(), "NACGT");
    }

    #[test]
    fn test_gc_content_extremes() {
        let all_gc = Sequence::new("x", "GGCC").unwrap();
        assert!((all_gc.gc_content().unwrap() - 100.0).abs() < 1e-9);

        let no_gc = Sequence::new("x", "ATATU").unwrap();
        assert!(no_gc.gc_content().unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_gc_content_counts_gaps_in_denominator() {
        let seq = Sequence::new("x", "GC--").unwrap();
        assert!((seq.gc_content().unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_gc_content_empty_is_zero() {
        let seq = Sequence::new_unchecked("x", b"");
        assert!(seq.gc_content().unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_gc_content_without_alphabet_residues_is_inconsistent() {
        let seq = Sequence::new_unchecked("broken", b"ZZ");
        assert_eq!(
            seq.gc_content(),
            Err(SequenceError::InconsistentState("broken".to_string()))
        );
    }

    #[test]
    fn test_reverse_complement_ambiguity_codes() {
        let seq = Sequence::new("x", "RYSWKMBDHVN").unwrap();
        assert_eq!(seq.reverse_complement().unwrap(), "NBDHVKMWSRY");
    }

    #[test]
    fn test_reverse_complement_uracil_maps_to_adenine() {
        let seq = Sequence::new("x", "UUG").unwrap();
        assert_eq!(seq.reverse_complement().unwrap(), "CAA");
    }

    #[test]
    fn test_reverse_complement_passes_gaps_through() {
        let seq = Sequence::new("x", "A-C.G").unwrap();
        assert_eq!(seq.reverse_complement().unwrap(), "C.G-T");
    }

    #[test]
    fn test_reverse_complement_outside_alphabet_fails() {
        let seq = Sequence::new_unchecked("broken", b"ACZ");
        assert_eq!(
            seq.reverse_complement(),
            Err(SequenceError::NoComplement {
                id: "broken".to_string(),
                symbol: 'Z',
            })
        );
    }

    #[test]
    fn test_base_count_on_unvalidated_sequence_does_not_fail() {
        // Unlike construction, counting tolerates stray residues.
        let seq = Sequence::new_unchecked("broken", b"AAZ");
        let counts = seq.base_count();
        assert_eq!(counts.get('A'), 2);
        assert_eq!(counts.total(), 2);
        assert_eq!(counts.anomalies().len(), 1);
        assert_eq!(counts.anomalies()[0].symbol, 'Z');
    }

    #[test]
    fn test_serialize() {
        let seq = Sequence::new("s1", "acg").unwrap();
        let json = serde_json::to_value(&seq).unwrap();
        assert_eq!(json, serde_json::json!({"id": "s1", "sequence": "ACG"}));
    }
}
