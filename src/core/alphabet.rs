//! The residue alphabet shared by validation, counting and complementation.

/// Valid residue symbols (uppercase): IUPAC nucleotide codes plus the gap
/// markers `-` and `.`. Iteration order here is the reporting order.
pub const ALPHABET: &[u8; ALPHABET_SIZE] = b"ACGTUNRYSWKMBDHV-.";

/// Number of symbols in [`ALPHABET`]
pub const ALPHABET_SIZE: usize = 18;

/// Position of an (uppercase) symbol in [`ALPHABET`]
#[must_use]
pub fn index_of(symbol: u8) -> Option<usize> {
    ALPHABET.iter().position(|&b| b == symbol)
}

/// Check whether an (uppercase) symbol belongs to the alphabet
#[must_use]
pub fn is_valid(symbol: u8) -> bool {
    index_of(symbol).is_some()
}

/// Complement of an (uppercase) symbol.
///
/// Total over [`ALPHABET`]: ambiguity codes map to their complementary
/// ambiguity code, `S`, `W` and `N` map to themselves, `U` maps to `A`,
/// and the gap markers `-` and `.` pass through unchanged. Returns `None`
/// only for symbols outside the alphabet.
#[must_use]
pub const fn complement(symbol: u8) -> Option<u8> {
    let c = match symbol {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'U' => b'A',
        b'R' => b'Y',
        b'Y' => b'R',
        b'S' => b'S',
        b'W' => b'W',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'N' => b'N',
        b'-' => b'-',
        b'.' => b'.',
        _ => return None,
    };
    Some(c)
}
