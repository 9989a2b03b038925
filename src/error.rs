//! The error taxonomy surfaced by the engine's fallible operations.

use thiserror::Error;

/// Errors surfaced by the engine's public API.
///
/// Operations documented as "no-op" or "returns `None`" on an out-of-range index
/// (`resize_view`, `get_view_size`) deliberately do not return this type: those are benign
/// queries against a caller-supplied index, not programmer errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitViewError {
    /// An index passed to `remove_view`, `set_view_visible`, `is_view_visible`, or `move_view`
    /// was not a valid view-item index.
    #[error("index out of bounds: {index} (have {len} views)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A view descriptor's `minimum_size` exceeded its `maximum_size`.
    #[error("invalid bounds: minimum {minimum} exceeds maximum {maximum}")]
    InvalidBounds { minimum: u32, maximum: u32 },

    /// A caller-supplied default-sizes vector did not match the number of registered views.
    #[error("mismatched defaults: expected {expected} sizes, got {actual}")]
    MismatchedDefaults { expected: usize, actual: usize },
}

pub type Result<T> = core::result::Result<T, SplitViewError>;

#[cfg(test)]
mod tests {
    use super::SplitViewError;

    #[test]
    fn index_out_of_bounds_message() {
        let error = SplitViewError::IndexOutOfBounds { index: 3, len: 2 };
        assert_eq!(error.to_string(), "index out of bounds: 3 (have 2 views)");
    }

    #[test]
    fn invalid_bounds_message() {
        let error = SplitViewError::InvalidBounds {
            minimum: 100,
            maximum: 50,
        };
        assert_eq!(
            error.to_string(),
            "invalid bounds: minimum 100 exceeds maximum 50"
        );
    }

    #[test]
    fn mismatched_defaults_message() {
        let error = SplitViewError::MismatchedDefaults {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            error.to_string(),
            "mismatched defaults: expected 3 sizes, got 2"
        );
    }
}
