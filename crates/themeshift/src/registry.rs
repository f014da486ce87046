//! Role and theme registries, the host lookup surfaces.
//!
//! The host platform owns the set of roles a visitor can hold and the set
//! of themes an administrator can pick from. The switcher never reaches
//! into host globals for either; it takes these two traits as explicit
//! collaborators. `StaticRoles` and `StaticThemes` are insertion-ordered
//! in-memory implementations for tests and for hosts whose listings are
//! fixed at startup.

use indexmap::IndexMap;

use themeshift_types::{RoleId, ThemeId};

/// Host surface listing the roles a visitor can hold.
pub trait RoleRegistry {
    /// Ordered mapping of role machine name to display label.
    ///
    /// Includes the anonymous pseudo-role as one role among others; there
    /// is no separate path for unauthenticated visitors.
    fn list_roles(&self) -> IndexMap<RoleId, String>;
}

/// Host surface listing installed themes.
pub trait ThemeRegistry {
    /// Ordered mapping of installed theme machine name to display label.
    ///
    /// Themes the host flags hidden (internal skins never offered to
    /// administrators) are excluded here, which is what makes them
    /// unassignable.
    fn list_themes(&self) -> IndexMap<ThemeId, String>;
}

impl<R: RoleRegistry + ?Sized> RoleRegistry for &R {
    fn list_roles(&self) -> IndexMap<RoleId, String> {
        (**self).list_roles()
    }
}

impl<T: ThemeRegistry + ?Sized> ThemeRegistry for &T {
    fn list_themes(&self) -> IndexMap<ThemeId, String> {
        (**self).list_themes()
    }
}

// ── Static implementations ──────────────────────────────────────────────────

/// Fixed, insertion-ordered role listing.
#[derive(Clone, Debug, Default)]
pub struct StaticRoles {
    roles: IndexMap<RoleId, String>,
}

impl StaticRoles {
    /// An empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The two roles every host starts with: anonymous and authenticated.
    pub fn with_builtins() -> Self {
        Self::new()
            .with_role(RoleId::anonymous(), "Anonymous user")
            .with_role(RoleId::authenticated(), "Authenticated user")
    }

    /// Add a role, keeping listing order.
    pub fn insert(&mut self, role: impl Into<RoleId>, label: impl Into<String>) {
        self.roles.insert(role.into(), label.into());
    }

    /// Chainable [`insert`](Self::insert).
    pub fn with_role(mut self, role: impl Into<RoleId>, label: impl Into<String>) -> Self {
        self.insert(role, label);
        self
    }
}

impl RoleRegistry for StaticRoles {
    fn list_roles(&self) -> IndexMap<RoleId, String> {
        self.roles.clone()
    }
}

/// One installed theme as the host sees it.
#[derive(Clone, Debug)]
struct ThemeEntry {
    label: String,
    hidden: bool,
}

/// Fixed theme listing with hidden-theme filtering.
#[derive(Clone, Debug, Default)]
pub struct StaticThemes {
    themes: IndexMap<ThemeId, ThemeEntry>,
}

impl StaticThemes {
    /// An empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an installed, visible theme.
    pub fn insert(&mut self, theme: impl Into<ThemeId>, label: impl Into<String>) {
        self.themes.insert(
            theme.into(),
            ThemeEntry {
                label: label.into(),
                hidden: false,
            },
        );
    }

    /// Add an installed theme that stays hidden from administrators.
    pub fn insert_hidden(&mut self, theme: impl Into<ThemeId>, label: impl Into<String>) {
        self.themes.insert(
            theme.into(),
            ThemeEntry {
                label: label.into(),
                hidden: true,
            },
        );
    }

    /// Chainable [`insert`](Self::insert).
    pub fn with_theme(mut self, theme: impl Into<ThemeId>, label: impl Into<String>) -> Self {
        self.insert(theme, label);
        self
    }

    /// Chainable [`insert_hidden`](Self::insert_hidden).
    pub fn with_hidden_theme(mut self, theme: impl Into<ThemeId>, label: impl Into<String>) -> Self {
        self.insert_hidden(theme, label);
        self
    }
}

impl ThemeRegistry for StaticThemes {
    fn list_themes(&self) -> IndexMap<ThemeId, String> {
        self.themes
            .iter()
            .filter(|(_, entry)| !entry.hidden)
            .map(|(id, entry)| (id.clone(), entry.label.clone()))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roles_present_and_ordered() {
        let roles = StaticRoles::with_builtins().list_roles();
        let names: Vec<&str> = roles.keys().map(|r| r.as_str()).collect();
        assert_eq!(names, ["anonymous", "authenticated"]);
        assert_eq!(roles[&RoleId::anonymous()], "Anonymous user");
    }

    #[test]
    fn test_roles_keep_insertion_order() {
        let roles = StaticRoles::with_builtins()
            .with_role("editor", "Editor")
            .with_role("admin", "Administrator")
            .list_roles();
        let names: Vec<&str> = roles.keys().map(|r| r.as_str()).collect();
        assert_eq!(names, ["anonymous", "authenticated", "editor", "admin"]);
    }

    #[test]
    fn test_hidden_themes_are_not_listed() {
        let themes = StaticThemes::new()
            .with_theme("bartik", "Bartik")
            .with_hidden_theme("stark", "Stark")
            .with_theme("claro", "Claro")
            .list_themes();
        let names: Vec<&str> = themes.keys().map(|t| t.as_str()).collect();
        assert_eq!(names, ["bartik", "claro"]);
        assert!(!themes.contains_key(&ThemeId::from("stark")));
    }

    #[test]
    fn test_reinsert_replaces_label() {
        let mut roles = StaticRoles::new();
        roles.insert("editor", "Editor");
        roles.insert("editor", "Content editor");
        let listed = roles.list_roles();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[&RoleId::from("editor")], "Content editor");
    }

    #[test]
    fn test_registry_works_through_references() {
        let roles = StaticRoles::with_builtins();
        let themes = StaticThemes::new().with_theme("claro", "Claro");

        fn count_roles(reg: impl RoleRegistry) -> usize {
            reg.list_roles().len()
        }
        fn count_themes(reg: impl ThemeRegistry) -> usize {
            reg.list_themes().len()
        }

        assert_eq!(count_roles(&roles), 2);
        assert_eq!(count_themes(&themes), 1);
        // The originals are still usable afterwards.
        assert_eq!(roles.list_roles().len(), 2);
    }
}
