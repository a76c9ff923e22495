//! Centralized validation and helper functions.

use crate::core::sequence::Sequence;

/// Maximum number of records allowed in a single input (DOS protection)
pub const MAX_RECORDS: usize = 1_000_000;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
///
/// # Example
/// ```ignore
/// if check_record_limit(records.len()).is_some() {
///     return Err(...);
/// }
/// records.push(new_record); // Safe to add
/// ```
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No sequences found in FASTA file")]
    NoSequences,
}

/// Require at least one record before running record-level reports.
///
/// The parser accepts inputs without any record; callers that need data
/// use this to fail explicitly.
///
/// # Errors
///
/// Returns `ValidationError::NoSequences` if `sequences` is empty.
pub fn require_sequences(sequences: &[Sequence]) -> Result<&[Sequence], ValidationError> {
    if sequences.is_empty() {
        Err(ValidationError::NoSequences)
    } else {
        Ok(sequences)
    }
}
