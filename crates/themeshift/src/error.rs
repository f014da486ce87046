//! Error types for switcher operations.

use thiserror::Error;

use themeshift_types::{RoleId, ThemeId};

use crate::store::StoreError;

/// A save submission referenced something the host doesn't have.
///
/// Raised by validation only, before any store call, so nothing has been
/// written when one of these surfaces. Hosts typically map the variants
/// onto per-field form errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An entry names a role the registry doesn't know.
    #[error("unknown role: {0}")]
    UnknownRole(RoleId),

    /// An entry names a theme that is not installed, or is hidden.
    #[error("role '{role}': '{theme}' is not an installed, visible theme")]
    UnknownTheme { role: RoleId, theme: ThemeId },

    /// The same role appears in more than one entry.
    #[error("duplicate role in submission: {0}")]
    DuplicateRole(RoleId),
}

/// Errors from switcher operations.
///
/// "No theme resolved" is not in here: resolution returning nothing is a
/// normal outcome (`Ok(None)`), the host falls back to its default theme.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// A save submission failed validation; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The settings store failed; passed through unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_offender() {
        let err = ValidationError::UnknownRole(RoleId::from("ghost"));
        assert_eq!(err.to_string(), "unknown role: ghost");

        let err = ValidationError::UnknownTheme {
            role: RoleId::from("editor"),
            theme: ThemeId::from("missing"),
        };
        assert!(err.to_string().contains("editor"));
        assert!(err.to_string().contains("missing"));

        let err = ValidationError::DuplicateRole(RoleId::from("editor"));
        assert_eq!(err.to_string(), "duplicate role in submission: editor");
    }

    #[test]
    fn test_switch_error_is_transparent() {
        // The wrapped message surfaces unchanged at the top level.
        let inner = ValidationError::UnknownRole(RoleId::from("ghost"));
        let outer = SwitchError::from(inner.clone());
        assert_eq!(outer.to_string(), inner.to_string());

        let store = StoreError::Backend("key service unavailable".into());
        let msg = store.to_string();
        let outer = SwitchError::from(store);
        assert_eq!(outer.to_string(), msg);
    }
}
