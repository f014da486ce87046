//! Priority-table rows and the weight-ordered table.
//!
//! A `RoleAssignment` is one row: which theme (if any) a role gets, and at
//! what weight. An `AssignmentTable` is the whole table, sorted once at
//! construction: ascending by weight, equal weights keeping the order the
//! rows were handed in. Resolution is a linear first-match scan over that
//! order; it is a priority list, not a scoring scheme.

use serde::{Deserialize, Serialize};

use crate::ids::{RoleId, ThemeId};

/// One row of the role priority table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Role machine name. Unique within a table.
    pub role: RoleId,
    /// Display label for the role. Carried for hosts; resolution ignores it.
    pub label: String,
    /// Assigned theme. `None` means the system default theme applies.
    pub theme: Option<ThemeId>,
    /// Sort priority. Lower weight is evaluated first.
    pub weight: i32,
}

impl RoleAssignment {
    /// A row with no theme assigned and weight 0, the state every role
    /// starts in before an administrator touches it.
    pub fn new(role: impl Into<RoleId>, label: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            label: label.into(),
            theme: None,
            weight: 0,
        }
    }

    /// Assign a theme.
    pub fn with_theme(mut self, theme: impl Into<ThemeId>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Set the sort weight.
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Whether this row falls through to the system default theme.
    pub fn uses_default_theme(&self) -> bool {
        self.theme.is_none()
    }
}

/// The weight-ordered role priority table.
///
/// Holds one row per known role. Built wholesale (an edit replaces the
/// entire table, there is no row-level patching) and read-only afterwards;
/// a resolution call works on a transient copy like this one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssignmentTable {
    entries: Vec<RoleAssignment>,
}

impl AssignmentTable {
    /// Build a table from rows in any order.
    ///
    /// Applies the stable ascending weight sort: equal weights keep the
    /// order they arrive in, which is what makes tie-breaking predictable
    /// across reloads.
    pub fn from_entries(entries: impl IntoIterator<Item = RoleAssignment>) -> Self {
        let mut entries: Vec<RoleAssignment> = entries.into_iter().collect();
        entries.sort_by_key(|e| e.weight);
        Self { entries }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in stored (weight-ascending) order.
    pub fn entries(&self) -> &[RoleAssignment] {
        &self.entries
    }

    /// Iterate rows in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, RoleAssignment> {
        self.entries.iter()
    }

    /// Look up the row for a role.
    pub fn get(&self, role: &RoleId) -> Option<&RoleAssignment> {
        self.entries.iter().find(|e| &e.role == role)
    }

    /// First matching theme for a visitor's role set.
    ///
    /// Scans rows in stored order and returns the first whose role the
    /// visitor holds and whose theme is assigned. Rows on the system
    /// default theme never decide the outcome; the scan keeps going past
    /// them. `None` means the system default applies, which is the normal
    /// outcome for an empty role set or an unconfigured site, not an
    /// error.
    pub fn resolve(&self, visitor_roles: &[RoleId]) -> Option<&ThemeId> {
        self.entries
            .iter()
            .find(|e| e.theme.is_some() && visitor_roles.contains(&e.role))
            .and_then(|e| e.theme.as_ref())
    }
}

impl<'a> IntoIterator for &'a AssignmentTable {
    type Item = &'a RoleAssignment;
    type IntoIter = std::slice::Iter<'a, RoleAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
