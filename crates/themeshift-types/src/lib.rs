//! Shared data model for themeshift.
//!
//! This crate holds the vocabulary of role-based theme resolution: typed
//! identifiers, the priority-table rows, and the persisted settings record.
//! It has **no internal themeshift dependencies** and no host-platform
//! dependencies, a pure leaf crate that hosts and the core crate build on.
//!
//! # Model Overview
//!
//! ```text
//! RoleId ("editor", "anonymous", ...)  <- machine name the host assigns a role
//!     └── appears once per AssignmentTable row
//!
//! RoleAssignment  <- one row: role + label + Option<ThemeId> + weight
//!     └── collected into an AssignmentTable, ascending by weight
//!
//! RoleSettings  <- what the host settings store persists:
//!     └── { schema, roles: { role_id: { theme, weight } } }
//! ```
//!
//! A `theme` of `None` (persisted as the empty string) means the host's
//! system default theme applies for that role; resolution skips the row and
//! keeps scanning.

pub mod assignment;
pub mod ids;
pub mod settings;

// Re-export primary types at crate root for convenience.
pub use assignment::{AssignmentTable, RoleAssignment};
pub use ids::{ANONYMOUS_ROLE, AUTHENTICATED_ROLE, RoleId, ThemeId};
pub use settings::{RoleSettings, SETTINGS_SCHEMA, StoredAssignment};
