//! Structured error types for the warikan core.
//!
//! Every fallible operation in this crate returns [`SplitResult`]. The error
//! carries enough context to be shown to the user as a single message, and
//! callers can use [`SplitError::category`] and [`SplitError::is_user_error`]
//! to decide how to report it.

use thiserror::Error;
use warikan_types::RoleId;

/// Result type used throughout the core.
pub type SplitResult<T> = Result<T, SplitError>;

/// All error conditions a split session can produce.
///
/// Validation errors reference roles by 1-based position so messages line up
/// with what the user sees in the roster listing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    /// The total amount is missing, non-finite or not positive.
    #[error("Invalid total amount: {message}")]
    InvalidTotalAmount {
        /// What was wrong with the amount.
        message: String,
    },

    /// The rounding unit is below one currency unit.
    #[error("Invalid rounding unit: {message}")]
    InvalidRoundingUnit {
        /// What was wrong with the unit.
        message: String,
    },

    /// A role's name is empty once surrounding whitespace is removed.
    #[error("Role #{position} has an empty name")]
    EmptyRoleName {
        /// 1-based position of the offending role.
        position: usize,
    },

    /// A role's weight is non-finite or below the minimum.
    #[error("Invalid weight for role '{role}': {message}")]
    InvalidWeight {
        /// Name of the offending role.
        role: String,
        /// 1-based position of the offending role.
        position: usize,
        /// What was wrong with the weight.
        message: String,
    },

    /// A role's participant count is zero.
    #[error("Invalid count for role '{role}': {message}")]
    InvalidCount {
        /// Name of the offending role.
        role: String,
        /// 1-based position of the offending role.
        position: usize,
        /// What was wrong with the count.
        message: String,
    },

    /// Every weight-times-count product summed to zero, so there is no basis
    /// for a proportional split.
    #[error("Total weight is zero; nothing to allocate")]
    ZeroTotalWeight,

    /// The roster must always keep at least one role.
    #[error("At least one role is required; the last role cannot be removed")]
    CannotRemoveLastRole,

    /// No role with the given id exists in the roster.
    #[error("No role with id {id}")]
    RoleNotFound {
        /// The id that failed to resolve.
        id: RoleId,
    },

    /// Persisted state exists under the key but cannot be decoded.
    #[error("Persisted state '{key}' is corrupt: {message}")]
    CorruptPersistedState {
        /// Storage key holding the unreadable state.
        key: String,
        /// Decoder error text.
        message: String,
    },

    /// The underlying store failed to read or write.
    #[error("Storage {operation} failed for '{key}': {message}")]
    Storage {
        /// Storage key being accessed.
        key: String,
        /// The operation that failed, e.g. `read` or `write`.
        operation: String,
        /// Underlying failure text.
        message: String,
    },

    /// The clipboard hand-off failed. The attempt is not retried.
    #[error("Clipboard write failed: {message}")]
    ClipboardWriteFailed {
        /// Underlying failure text.
        message: String,
    },

    /// Export was requested before any calculation produced a result.
    #[error("No calculation result available; run a calculation first")]
    NoResultAvailable,
}

impl SplitError {
    /// Creates an invalid total amount error.
    pub fn invalid_total_amount(message: impl Into<String>) -> Self {
        Self::InvalidTotalAmount {
            message: message.into(),
        }
    }

    /// Creates an invalid rounding unit error.
    pub fn invalid_rounding_unit(message: impl Into<String>) -> Self {
        Self::InvalidRoundingUnit {
            message: message.into(),
        }
    }

    /// Creates an empty role name error for the role at `position` (1-based).
    #[must_use]
    pub const fn empty_role_name(position: usize) -> Self {
        Self::EmptyRoleName { position }
    }

    /// Creates an invalid weight error.
    pub fn invalid_weight(
        role: impl Into<String>,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidWeight {
            role: role.into(),
            position,
            message: message.into(),
        }
    }

    /// Creates an invalid count error.
    pub fn invalid_count(
        role: impl Into<String>,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidCount {
            role: role.into(),
            position,
            message: message.into(),
        }
    }

    /// Creates a corrupt persisted state error.
    pub fn corrupt_state(key: impl Into<String>, message: impl ToString) -> Self {
        Self::CorruptPersistedState {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Creates a storage access error.
    pub fn storage(
        key: impl Into<String>,
        operation: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        Self::Storage {
            key: key.into(),
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    /// Creates a clipboard write error.
    pub fn clipboard_write(message: impl ToString) -> Self {
        Self::ClipboardWriteFailed {
            message: message.to_string(),
        }
    }

    /// Returns the error category for logging and reporting.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidTotalAmount { .. }
            | Self::InvalidRoundingUnit { .. }
            | Self::EmptyRoleName { .. }
            | Self::InvalidWeight { .. }
            | Self::InvalidCount { .. }
            | Self::ZeroTotalWeight => "validation",
            Self::CannotRemoveLastRole | Self::RoleNotFound { .. } => "roster",
            Self::CorruptPersistedState { .. } | Self::Storage { .. } => "storage",
            Self::ClipboardWriteFailed { .. } => "clipboard",
            Self::NoResultAvailable => "export",
        }
    }

    /// True when the user can fix the problem by changing their input and
    /// trying again; false for environment failures such as storage or the
    /// clipboard helper.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::CorruptPersistedState { .. }
                | Self::Storage { .. }
                | Self::ClipboardWriteFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_user_errors() {
        let err = SplitError::invalid_total_amount("expected a positive amount, got -5");
        assert_eq!(err.category(), "validation");
        assert!(err.is_user_error());
    }

    #[test]
    fn storage_errors_are_environment_errors() {
        let err = SplitError::storage("roles", "write", "disk full");
        assert_eq!(err.category(), "storage");
        assert!(!err.is_user_error());
    }

    #[test]
    fn messages_name_the_offending_role() {
        let err = SplitError::invalid_weight("staff", 2, "expected at least 0.1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid weight for role 'staff': expected at least 0.1, got 0"
        );
    }
}
