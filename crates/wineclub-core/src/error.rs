//! Error types for the wine-club core.

use crate::ids::IdError;

/// Result type for wine-club core operations.
pub type Result<T> = std::result::Result<T, ClubError>;

/// Errors that can occur in wine-club core operations.
///
/// The core is deliberately forgiving: missing plan prices resolve to zero,
/// bad postal codes fall back to the caller-supplied cost, and unknown status
/// codes are echoed back as their own label. The one hard error is an
/// unsupported billing frequency, which indicates a caller bug and must not
/// be swallowed.
#[derive(Debug, thiserror::Error)]
pub enum ClubError {
    /// The frequency value is not one of the supported billing cadences.
    #[error("unsupported billing frequency: {value}")]
    UnsupportedFrequency {
        /// The rejected input value.
        value: String,
    },

    /// Invalid identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(#[from] IdError),
}
