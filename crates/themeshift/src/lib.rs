//! Role-based theme selection for multi-theme hosts.
//!
//! Administrators assign a theme and an ordering weight to visitor roles;
//! when a page is served, the visitor's roles are matched against the
//! stored table and the lightest themed row wins. Hosts plug in three
//! surfaces: a [`RoleRegistry`] listing assignable roles, a
//! [`ThemeRegistry`] listing installed themes, and a [`SettingsStore`]
//! holding the persisted table. [`ThemeSwitcher`] does the rest.
//!
//! ```
//! use themeshift::{
//!     MemoryStore, RoleAssignment, RoleId, StaticRoles, StaticThemes, ThemeSwitcher,
//! };
//!
//! let roles = StaticRoles::with_builtins().with_role("editor", "Editor");
//! let themes = StaticThemes::new().with_theme("claro", "Claro");
//! let mut store = MemoryStore::new();
//!
//! let mut switcher = ThemeSwitcher::new(&roles, &themes, &mut store);
//! switcher.save(&[
//!     RoleAssignment::new("editor", "Editor")
//!         .with_theme("claro")
//!         .with_weight(-5),
//! ])?;
//!
//! let theme = switcher.effective_theme(&[RoleId::from("editor")])?;
//! assert_eq!(theme.unwrap().as_str(), "claro");
//! # Ok::<(), themeshift::SwitchError>(())
//! ```
//!
//! A visitor whose roles have no themed assignment resolves to `Ok(None)`,
//! which tells the host to render its default theme. That outcome is
//! ordinary, not an error.

mod error;
pub mod registry;
pub mod store;
mod switcher;

pub use error::{SwitchError, ValidationError};
pub use registry::{RoleRegistry, StaticRoles, StaticThemes, ThemeRegistry};
pub use store::{JsonFileStore, MemoryStore, SettingsStore, StoreError};
pub use switcher::{SETTINGS_KEY, ThemeSwitcher};

// The domain types live in their own dependency-light crate; re-export the
// lot so most hosts only ever name this one.
pub use themeshift_types::{
    ANONYMOUS_ROLE, AUTHENTICATED_ROLE, AssignmentTable, RoleAssignment, RoleId, RoleSettings,
    SETTINGS_SCHEMA, StoredAssignment, ThemeId,
};

pub type Result<T, E = SwitchError> = std::result::Result<T, E>;
