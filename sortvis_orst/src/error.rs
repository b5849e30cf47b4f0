use std::result::Result as StdResult;

/// Alias for `Result<T, sortvis_orst::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Everything that can stop a run before it starts.
///
/// Once the input has been accepted a sort never fails, so none of these are raised midway
/// through an animation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Raised when the requested array size is outside the playable range.
    #[error("array size {size} is outside the supported range {min}..={max}")]
    InvalidSize { size: usize, min: usize, max: usize },

    /// Raised when a distribution sort is handed a negative value.
    #[error("{algorithm} sort only accepts non-negative values, found {value}")]
    NegativeValue { algorithm: &'static str, value: i64 },

    /// Raised when counting sort would need more count slots than it is allowed to allocate.
    #[error("value range of {range} exceeds the counting sort limit of {limit}")]
    RangeTooLarge { range: u64, limit: u64 },

    /// Raised when an algorithm name does not match any registered sorter.
    #[error("unsupported algorithm `{0}`")]
    UnsupportedAlgorithm(String),
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    UnsupportedOperation,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidSize { .. } | Error::NegativeValue { .. } | Error::RangeTooLarge { .. } => {
                ErrorKind::InvalidInput
            }
            Error::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedOperation,
        }
    }
}
