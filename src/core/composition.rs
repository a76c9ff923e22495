use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::warn;

use crate::core::alphabet::{index_of, ALPHABET, ALPHABET_SIZE};

/// A residue that could not be counted because it is outside the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountAnomaly {
    /// Zero-based offset of the residue in the sequence
    pub position: usize,
    /// The offending byte, as a character
    pub symbol: char,
}

/// Per-symbol residue counts for one sequence.
///
/// Every alphabet symbol has an entry, zero counts included, and iteration
/// follows [`ALPHABET`] order. Residues outside the alphabet are never
/// counted; they are collected in [`BaseComposition::anomalies`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseComposition {
    counts: [usize; ALPHABET_SIZE],
    anomalies: Vec<CountAnomaly>,
}

impl BaseComposition {
    /// Count the residues of `residues`. `id` is only used for diagnostics.
    pub(crate) fn count(id: &str, residues: &[u8]) -> Self {
        let mut counts = [0usize; ALPHABET_SIZE];
        let mut anomalies = Vec::new();

        for (position, &b) in residues.iter().enumerate() {
            match index_of(b) {
                Some(i) => counts[i] += 1,
                None => anomalies.push(CountAnomaly {
                    position,
                    symbol: char::from(b),
                }),
            }
        }

        if !anomalies.is_empty() {
            warn!(
                "Sequence '{}' has {} residue(s) outside the alphabet; they were not counted",
                id,
                anomalies.len()
            );
        }

        Self { counts, anomalies }
    }

    /// Count for a symbol (case-insensitive). Symbols outside the alphabet count 0.
    #[must_use]
    pub fn get(&self, symbol: char) -> usize {
        u8::try_from(symbol.to_ascii_uppercase())
            .ok()
            .and_then(index_of)
            .map_or(0, |i| self.counts[i])
    }

    /// `(symbol, count)` pairs in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        ALPHABET
            .iter()
            .zip(self.counts.iter())
            .map(|(&b, &n)| (char::from(b), n))
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Residues that were skipped because they are outside the alphabet
    #[must_use]
    pub fn anomalies(&self) -> &[CountAnomaly] {
        &self.anomalies
    }

    #[must_use]
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}

// Serialized as an ordered `{symbol: count}` map
impl Serialize for BaseComposition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALPHABET_SIZE))?;
        for (symbol, count) in self.iter() {
            map.serialize_entry(&symbol, &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_includes_zero_entries() {
        let comp = BaseComposition::count("x", b"AAC");
        assert_eq!(comp.iter().count(), ALPHABET_SIZE);
        assert_eq!(comp.get('A'), 2);
        assert_eq!(comp.get('C'), 1);
        assert_eq!(comp.get('G'), 0);
        assert_eq!(comp.get('-'), 0);
        assert_eq!(comp.total(), 3);
        assert!(!comp.has_anomalies());
    }

    #[test]
    fn test_iteration_follows_alphabet_order() {
        let comp = BaseComposition::count("x", b"..--TTA");
        let symbols: String = comp.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, "ACGTUNRYSWKMBDHV-.");
        let counts: Vec<usize> = comp.iter().map(|(_, n)| n).collect();
        assert_eq!(counts[0], 1);
        assert_eq!(counts[3], 2);
        assert_eq!(counts[16], 2);
        assert_eq!(counts[17], 2);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let comp = BaseComposition::count("x", b"GG");
        assert_eq!(comp.get('g'), 2);
        assert_eq!(comp.get('Z'), 0);
        assert_eq!(comp.get('é'), 0);
    }

    #[test]
    fn test_out_of_alphabet_residues_are_reported_not_fatal() {
        // Counting is lenient where construction is strict: unknown bytes
        // become anomalies instead of errors.
        let comp = BaseComposition::count("x", b"AZCx");
        assert_eq!(comp.total(), 2);
        assert_eq!(
            comp.anomalies(),
            &[
                CountAnomaly { position: 1, symbol: 'Z' },
                CountAnomaly { position: 3, symbol: 'x' },
            ]
        );
    }

    #[test]
    fn test_serialize_as_ordered_map() {
        let comp = BaseComposition::count("x", b"ACGT");
        let json = serde_json::to_string(&comp).unwrap();
        assert!(json.starts_with(r#"{"A":1,"C":1,"G":1,"T":1,"U":0"#));
        assert!(json.ends_with(r#""-":0,".":0}"#));
    }
}
