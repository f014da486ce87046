//! The persisted settings record.
//!
//! This is the durable value a host settings store holds for themeshift:
//! a schema number and an insertion-ordered map from role machine name to
//! stored theme and weight.
//!
//! ```json
//! {
//!   "schema": 1,
//!   "roles": {
//!     "editor":    { "theme": "claro", "weight": -10 },
//!     "anonymous": { "theme": "",      "weight": 0 }
//!   }
//! }
//! ```
//!
//! Presence in `roles` is what "configured" means. A stored weight of 0 or
//! a stored empty theme is an explicit value; only roles missing from the
//! map entirely fall back to defaults when a table is built. Display
//! labels are not persisted, they belong to the role registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assignment::RoleAssignment;
use crate::ids::{RoleId, ThemeId};

/// Persisted schema number written by this build.
pub const SETTINGS_SCHEMA: u32 = 1;

fn default_schema() -> u32 {
    SETTINGS_SCHEMA
}

/// Stored theme and weight for one role.
///
/// `theme` persists as a plain string with empty meaning "system default",
/// keeping the record shape the host's existing blobs use. Both fields
/// default when absent so a hand-edited record missing one stays loadable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAssignment {
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub weight: i32,
}

impl StoredAssignment {
    /// Build from an optional theme and a weight.
    pub fn new(theme: Option<&ThemeId>, weight: i32) -> Self {
        Self {
            theme: theme.map(|t| t.as_str().to_string()).unwrap_or_default(),
            weight,
        }
    }

    /// The stored theme, with the empty string mapped back to `None`.
    pub fn theme_id(&self) -> Option<ThemeId> {
        if self.theme.is_empty() {
            None
        } else {
            Some(ThemeId::from(self.theme.as_str()))
        }
    }
}

/// The whole persisted record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSettings {
    /// Record schema number. Absent in pre-versioned blobs, which read as 1.
    #[serde(default = "default_schema")]
    pub schema: u32,
    /// Per-role stored assignment, in submission order.
    #[serde(default)]
    pub roles: IndexMap<RoleId, StoredAssignment>,
}

impl Default for RoleSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleSettings {
    /// An empty record at the current schema.
    pub fn new() -> Self {
        Self {
            schema: SETTINGS_SCHEMA,
            roles: IndexMap::new(),
        }
    }

    /// Build the record from submitted rows, preserving their order and
    /// weights exactly. Later duplicates of a role overwrite earlier ones;
    /// callers that care validate uniqueness before getting here.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a RoleAssignment>) -> Self {
        let mut settings = Self::new();
        for entry in entries {
            settings.roles.insert(
                entry.role.clone(),
                StoredAssignment::new(entry.theme.as_ref(), entry.weight),
            );
        }
        settings
    }

    /// Stored assignment for a role, if the role is configured at all.
    pub fn get(&self, role: &RoleId) -> Option<&StoredAssignment> {
        self.roles.get(role)
    }

    /// Whether a role has a stored entry. This is the presence check that
    /// decides defaulting; values inside the entry are never re-tested.
    pub fn contains(&self, role: &RoleId) -> bool {
        self.roles.contains_key(role)
    }

    /// Number of configured roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether no role is configured.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Stored assignment ───────────────────────────────────────────────

    #[test]
    fn test_stored_theme_roundtrips_option() {
        let with_theme = StoredAssignment::new(Some(&ThemeId::from("claro")), 3);
        assert_eq!(with_theme.theme, "claro");
        assert_eq!(with_theme.theme_id(), Some(ThemeId::from("claro")));

        let default_theme = StoredAssignment::new(None, 3);
        assert_eq!(default_theme.theme, "");
        assert_eq!(default_theme.theme_id(), None);
    }

    #[test]
    fn test_stored_fields_default_when_absent() {
        let parsed: StoredAssignment = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.theme, "");
        assert_eq!(parsed.weight, 0);

        let weight_only: StoredAssignment = serde_json::from_value(json!({"weight": 7})).unwrap();
        assert_eq!(weight_only.theme, "");
        assert_eq!(weight_only.weight, 7);
    }

    #[test]
    fn test_explicit_zero_weight_is_kept() {
        // 0 is a value, not "unset": it survives a roundtrip unchanged.
        let stored = StoredAssignment::new(Some(&ThemeId::from("claro")), 0);
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value, json!({"theme": "claro", "weight": 0}));
        let parsed: StoredAssignment = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, stored);
    }

    // ── Record shape ────────────────────────────────────────────────────

    #[test]
    fn test_record_json_shape() {
        let entries = [
            RoleAssignment::new("editor", "Editor")
                .with_theme("claro")
                .with_weight(-10),
            RoleAssignment::new("anonymous", "Anonymous user"),
        ];
        let settings = RoleSettings::from_entries(&entries);
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            value,
            json!({
                "schema": 1,
                "roles": {
                    "editor": { "theme": "claro", "weight": -10 },
                    "anonymous": { "theme": "", "weight": 0 }
                }
            })
        );
    }

    #[test]
    fn test_labels_are_not_persisted() {
        let entries = [RoleAssignment::new("editor", "Some Fancy Label")];
        let settings = RoleSettings::from_entries(&entries);
        let text = serde_json::to_string(&settings).unwrap();
        assert!(!text.contains("Fancy"));
    }

    #[test]
    fn test_submission_order_is_preserved() {
        let entries = [
            RoleAssignment::new("zebra", "Z"),
            RoleAssignment::new("alpha", "A"),
            RoleAssignment::new("mid", "M"),
        ];
        let settings = RoleSettings::from_entries(&entries);
        let keys: Vec<&str> = settings.roles.keys().map(|r| r.as_str()).collect();
        assert_eq!(keys, ["zebra", "alpha", "mid"]);

        // And the order survives serialization.
        let json = serde_json::to_string(&settings).unwrap();
        let reparsed: RoleSettings = serde_json::from_str(&json).unwrap();
        let keys: Vec<&str> = reparsed.roles.keys().map(|r| r.as_str()).collect();
        assert_eq!(keys, ["zebra", "alpha", "mid"]);
    }

    #[test]
    fn test_schema_defaults_to_current_when_absent() {
        let parsed: RoleSettings =
            serde_json::from_value(json!({"roles": {}})).unwrap();
        assert_eq!(parsed.schema, SETTINGS_SCHEMA);
    }

    #[test]
    fn test_empty_value_parses_as_empty_record() {
        let parsed: RoleSettings = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed, RoleSettings::new());
        assert!(parsed.is_empty());
        assert_eq!(parsed.len(), 0);
    }

    // ── Presence semantics ──────────────────────────────────────────────

    #[test]
    fn test_presence_check_is_by_key() {
        let entries = [RoleAssignment::new("editor", "Editor")];
        let settings = RoleSettings::from_entries(&entries);

        // Configured with all-default values is still configured.
        assert!(settings.contains(&RoleId::from("editor")));
        let stored = settings.get(&RoleId::from("editor")).unwrap();
        assert_eq!(stored.weight, 0);
        assert_eq!(stored.theme_id(), None);

        assert!(!settings.contains(&RoleId::from("anonymous")));
        assert!(settings.get(&RoleId::from("anonymous")).is_none());
    }

    #[test]
    fn test_roundtrip_preserves_tuples() {
        let entries = [
            RoleAssignment::new("editor", "E").with_theme("claro").with_weight(-10),
            RoleAssignment::new("authenticated", "A").with_theme("bartik").with_weight(5),
            RoleAssignment::new("anonymous", "N").with_weight(10),
        ];
        let settings = RoleSettings::from_entries(&entries);
        let json = serde_json::to_string(&settings).unwrap();
        let reparsed: RoleSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, settings);
        for entry in &entries {
            let stored = reparsed.get(&entry.role).unwrap();
            assert_eq!(stored.theme_id(), entry.theme);
            assert_eq!(stored.weight, entry.weight);
        }
    }
}
