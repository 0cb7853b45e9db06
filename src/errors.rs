use thiserror::Error;

/// The result type for the `nelua_scanner` crate.
pub type Result<T> = std::result::Result<T, ScanError>;

/// The error type for the `nelua_scanner` crate.
///
/// Scanning itself never fails. Errors are only raised at the edges of the crate, i.e. when
/// restoring a serialized state, converting raw token kind numbers or loading a configuration.
#[derive(Error, Debug)]
pub struct ScanError {
    /// The source of the error.
    pub source: Box<ScanErrorKind>,
}

impl ScanError {
    /// Create a new `ScanError`.
    pub fn new(kind: ScanErrorKind) -> Self {
        ScanError {
            source: Box::new(kind),
        }
    }

    /// Access the error kind.
    pub fn kind(&self) -> &ScanErrorKind {
        &self.source
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum ScanErrorKind {
    /// A byte of a serialized state can't be held by the named state field.
    #[error("Invalid byte {value:#04x} for state field '{field}'")]
    InvalidStateByte {
        /// The name of the state field.
        field: &'static str,
        /// The offending byte.
        value: u8,
    },

    /// The serialized state is longer than the three persisted fields.
    #[error("Serialized state too long: {0} bytes, at most 3 expected")]
    StateBufferTooLong(usize),

    /// The buffer handed to the serializer can't hold the three persisted fields.
    #[error("State buffer too short: {0} bytes, at least 3 needed")]
    StateBufferTooShort(usize),

    /// A token kind number outside the known token kinds.
    #[error("Unknown token kind: {0}")]
    UnknownTokenKind(usize),

    /// A raw valid-kind slice doesn't have one entry per token kind.
    #[error("Expected {expected} valid-kind flags, got {actual}")]
    ValidKindsLength {
        /// The number of token kinds.
        expected: usize,
        /// The length of the given slice.
        actual: usize,
    },

    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// A configuration couldn't be deserialized.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl From<ScanErrorKind> for ScanError {
    fn from(kind: ScanErrorKind) -> Self {
        ScanError::new(kind)
    }
}

impl From<std::io::Error> for ScanError {
    fn from(error: std::io::Error) -> Self {
        ScanError::new(ScanErrorKind::IoError(error))
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(error: serde_json::Error) -> Self {
        ScanError::new(ScanErrorKind::JsonError(error))
    }
}
