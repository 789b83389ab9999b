//! Failure taxonomy shared by the loader, the engine and the HTTP layer.

use thiserror::Error;

/// Machine-distinguishable failure kinds. Callers branch on these, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Menu data unreadable or not a JSON object.
    ConfigurationLoadFailure,
    /// Menu data parsed but failed shape/count checks.
    ConfigurationIntegrityFailure,
    UnknownGenre,
    ArityMismatch,
    OutOfRange,
    /// A lookup failed even though the data passed loading checks.
    MalformedConfiguration,
    MissingDice,
    InvalidDiceInput,
    /// Menu data failed to load at startup; generation is disabled.
    MenuUnavailable,
}

impl ErrorKind {
    /// Stable wire code rendered in error bodies.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::ConfigurationLoadFailure => "CONFIGURATION_LOAD_FAILURE",
            ErrorKind::ConfigurationIntegrityFailure => "CONFIGURATION_INTEGRITY_FAILURE",
            ErrorKind::UnknownGenre => "UNKNOWN_GENRE",
            ErrorKind::ArityMismatch => "ARITY_MISMATCH",
            ErrorKind::OutOfRange => "OUT_OF_RANGE",
            ErrorKind::MalformedConfiguration => "MALFORMED_CONFIGURATION",
            ErrorKind::MissingDice => "MISSING_DICE",
            ErrorKind::InvalidDiceInput => "INVALID_DICE_INPUT",
            ErrorKind::MenuUnavailable => "MENU_UNAVAILABLE",
        }
    }
}

/// A recoverable failure from parsing dice input or resolving a menu.
///
/// The `Display` text is for logs. User-facing text comes from
/// [`MessageTable::render`](crate::menu::messages::MessageTable::render).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("unknown genre '{genre}'")]
    UnknownGenre { genre: String },

    #[error("genre '{genre}' needs {expected} dice values, got {actual}")]
    ArityMismatch {
        genre: String,
        expected: usize,
        actual: usize,
    },

    #[error("die value {value} is outside 1..={dice_type}")]
    OutOfRange { value: i64, dice_type: u32 },

    #[error("genre '{genre}' has no fragment for part '{part}' at face {face}")]
    MalformedConfiguration {
        genre: String,
        part: String,
        face: i64,
    },

    #[error("{expected} dice values required but at least one is blank")]
    MissingDice { expected: usize },

    #[error("dice value '{input}' is not an integer")]
    InvalidDiceInput { input: String },
}

impl MenuError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MenuError::UnknownGenre { .. } => ErrorKind::UnknownGenre,
            MenuError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            MenuError::OutOfRange { .. } => ErrorKind::OutOfRange,
            MenuError::MalformedConfiguration { .. } => ErrorKind::MalformedConfiguration,
            MenuError::MissingDice { .. } => ErrorKind::MissingDice,
            MenuError::InvalidDiceInput { .. } => ErrorKind::InvalidDiceInput,
        }
    }
}
