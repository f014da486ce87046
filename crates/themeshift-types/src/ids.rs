//! Typed identifiers for roles and themes.
//!
//! Both IDs wrap the host platform's machine names: short, human-chosen
//! strings like `editor` or `bartik`. They are opaque to resolution (only
//! equality matters) and serialize transparently as bare strings, so the
//! persisted record stays hand-readable.
//!
//! `RoleId` carries two well-known constructors: every host exposes the
//! unauthenticated visitor as the `anonymous` pseudo-role, and signed-in
//! users as `authenticated`, each one role among others rather than a
//! special case.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A role machine name (e.g. `editor`, `anonymous`).
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(String);

/// An installed theme machine name (e.g. `bartik`).
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

// ── Shared behavior ─────────────────────────────────────────────────────────

macro_rules! impl_name_id {
    ($T:ident, $name:literal) => {
        impl $T {
            /// Wrap a machine name.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// The raw machine name.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $T {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $T {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<$T> for String {
            fn from(id: $T) -> String {
                id.0
            }
        }

        impl AsRef<str> for $T {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl fmt::Debug for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $name, self.0)
            }
        }
    };
}

impl_name_id!(RoleId, "RoleId");
impl_name_id!(ThemeId, "ThemeId");

// ── RoleId well-knowns ──────────────────────────────────────────────────────

/// Machine name of the built-in unauthenticated pseudo-role.
pub const ANONYMOUS_ROLE: &str = "anonymous";

/// Machine name of the built-in catch-all role for signed-in users.
pub const AUTHENTICATED_ROLE: &str = "authenticated";

impl RoleId {
    /// The well-known anonymous pseudo-role.
    ///
    /// Hosts represent the unauthenticated visitor with this role, so an
    /// anonymous visitor resolves through the same priority table as
    /// everyone else.
    pub fn anonymous() -> Self {
        Self(ANONYMOUS_ROLE.to_string())
    }

    /// The well-known catch-all role every signed-in user holds.
    pub fn authenticated() -> Self {
        Self(AUTHENTICATED_ROLE.to_string())
    }

    /// Whether this is the anonymous pseudo-role.
    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_ROLE
    }
}

// ============================================================================
// Tests
// ============================================================================
