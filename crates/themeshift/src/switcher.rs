//! The switcher itself: merge, resolve, validate, persist.
//!
//! [`ThemeSwitcher`] ties the three collaborator surfaces together. It is
//! cheap to construct and holds no cache; build one per request or per
//! administrative operation and let it borrow the registries and store.

use std::collections::HashSet;

use tracing::{debug, warn};

use themeshift_types::{AssignmentTable, RoleAssignment, RoleId, RoleSettings, SETTINGS_SCHEMA, ThemeId};

use crate::Result;
use crate::error::ValidationError;
use crate::registry::{RoleRegistry, ThemeRegistry};
use crate::store::{SettingsStore, StoreError};

/// Store key under which the whole assignment record lives.
pub const SETTINGS_KEY: &str = "themeshift.settings";

/// Role-based theme negotiation over host-provided registries and storage.
pub struct ThemeSwitcher<R, T, S> {
    roles: R,
    themes: T,
    store: S,
}

impl<R: RoleRegistry, T: ThemeRegistry, S: SettingsStore> ThemeSwitcher<R, T, S> {
    pub fn new(roles: R, themes: T, store: S) -> Self {
        Self {
            roles,
            themes,
            store,
        }
    }

    /// The current assignment table: one row per listed role, stored theme
    /// and weight merged in where the role has a stored entry, defaults
    /// (no theme, weight 0) where it does not.
    ///
    /// Stored entries for roles the host no longer lists are ignored; they
    /// reappear if the role comes back before the next save.
    pub fn load(&self) -> Result<AssignmentTable> {
        let settings = self.read_settings()?;
        let known = self.roles.list_roles();

        let stale = settings
            .roles
            .keys()
            .filter(|role| !known.contains_key(*role))
            .count();
        if stale > 0 {
            debug!("ignoring {} stored assignment(s) for unknown roles", stale);
        }

        let entries = known.into_iter().map(|(role, label)| {
            let mut entry = RoleAssignment::new(role, label);
            if let Some(stored) = settings.get(&entry.role) {
                entry.theme = stored.theme_id();
                entry.weight = stored.weight;
            }
            entry
        });
        let table = AssignmentTable::from_entries(entries);
        debug!("loaded assignment table with {} role(s)", table.len());
        Ok(table)
    }

    /// Resolve the theme for a visitor holding `visitor_roles`.
    ///
    /// `Ok(None)` means no assignment applies and the host should fall
    /// back to its default theme; it is the expected outcome for any
    /// visitor whose roles are unthemed.
    pub fn effective_theme(&self, visitor_roles: &[RoleId]) -> Result<Option<ThemeId>> {
        let table = self.load()?;
        match table.resolve(visitor_roles) {
            Some(theme) => {
                debug!("role-based theme '{}' selected", theme);
                Ok(Some(theme.clone()))
            }
            None => {
                debug!("no role-based theme applies");
                Ok(None)
            }
        }
    }

    /// Validate `entries` and replace the whole stored table with them.
    ///
    /// On a validation error nothing is written; the previously stored
    /// table stays in effect. Roles absent from `entries` lose their
    /// stored values and load as defaults afterwards.
    pub fn save(&mut self, entries: &[RoleAssignment]) -> Result<()> {
        self.validate(entries)?;
        let settings = RoleSettings::from_entries(entries);
        let value = serde_json::to_value(&settings).map_err(StoreError::Format)?;
        self.store.set(SETTINGS_KEY, value)?;
        self.store.save()?;
        debug!("stored assignments for {} role(s)", entries.len());
        Ok(())
    }

    /// Check a submission without touching the store.
    ///
    /// Every role must be listed by the role registry, appear at most
    /// once, and name an installed, visible theme when it names one at
    /// all. Rows that keep the default theme always pass.
    pub fn validate(&self, entries: &[RoleAssignment]) -> Result<(), ValidationError> {
        let known = self.roles.list_roles();
        let installed = self.themes.list_themes();

        let mut seen = HashSet::new();
        for entry in entries {
            if !known.contains_key(&entry.role) {
                return Err(ValidationError::UnknownRole(entry.role.clone()));
            }
            if !seen.insert(&entry.role) {
                return Err(ValidationError::DuplicateRole(entry.role.clone()));
            }
            if let Some(theme) = &entry.theme
                && !installed.contains_key(theme)
            {
                return Err(ValidationError::UnknownTheme {
                    role: entry.role.clone(),
                    theme: theme.clone(),
                });
            }
        }
        Ok(())
    }

    fn read_settings(&self) -> Result<RoleSettings> {
        let Some(value) = self.store.get(SETTINGS_KEY)? else {
            return Ok(RoleSettings::new());
        };
        let settings: RoleSettings = serde_json::from_value(value).map_err(StoreError::Format)?;
        if settings.schema > SETTINGS_SCHEMA {
            warn!(
                "stored settings use schema {} but this build understands {}; loading best-effort",
                settings.schema, SETTINGS_SCHEMA
            );
        }
        Ok(settings)
    }
}

// ============================================================================
// Tests
// ============================================================================
