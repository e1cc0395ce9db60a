use thiserror::Error;

/// Everything the engine or the API layer can reject a request with.
///
/// The `Display` strings are the exact messages clients receive in the
/// `{"error": ...}` body, so they are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("Required field missing")]
    MissingField,
    #[error("Required field(s) missing")]
    MissingFields,
    #[error("Expected puzzle to be 81 characters long")]
    BadLength,
    #[error("Invalid characters in puzzle")]
    BadCharacter,
    #[error("Invalid coordinate")]
    BadCoordinate,
    #[error("Invalid value")]
    BadValue,
    #[error("Puzzle cannot be solved")]
    Unsolvable,
}
