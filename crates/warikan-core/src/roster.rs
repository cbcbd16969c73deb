//! The role roster: an ordered collection of payer groups.
//!
//! Display order is insertion order and never changes on edits. Roles removed
//! from the middle leave no hole; later placeholder names simply continue from
//! wherever the naming counter got to.

use tracing::debug;
use warikan_types::{Role, RoleEdit, RoleId, RoleRecord};

use crate::error::{SplitError, SplitResult};

/// Stem used when synthesizing a name for a role added without one.
const PLACEHOLDER_STEM: &str = "role";

/// Weight a freshly added role starts with.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Participant count a freshly added role starts with.
pub const DEFAULT_COUNT: u32 = 1;

/// Ordered collection of roles with stable ids and placeholder naming.
///
/// The roster always holds at least one role. The naming counter advances on
/// every add, named or not, so placeholder numbering can show gaps after
/// removals. That mirrors what users expect from a running tally rather than
/// a dense renumbering.
#[derive(Debug, Clone)]
pub struct RoleRoster {
    roles: Vec<Role>,
    next_id: RoleId,
    name_seq: u32,
}

impl RoleRoster {
    /// Creates the default roster: a single role named `role1` with the
    /// default weight and count.
    #[must_use]
    pub fn new() -> Self {
        let mut roster = Self {
            roles: Vec::new(),
            next_id: 1,
            name_seq: 0,
        };
        roster.add(None, DEFAULT_WEIGHT, DEFAULT_COUNT);
        roster
    }

    /// Rebuilds a roster from persisted records, reseeding ids and the
    /// naming counter from the record count. An empty record list falls back
    /// to the default roster.
    #[must_use]
    pub fn from_records(records: &[RoleRecord]) -> Self {
        if records.is_empty() {
            return Self::new();
        }
        let roles = records
            .iter()
            .enumerate()
            .map(|(index, record)| Role::from_record(index as RoleId + 1, record))
            .collect::<Vec<_>>();
        let next_id = roles.len() as RoleId + 1;
        let name_seq = roles.len() as u32;
        Self {
            roles,
            next_id,
            name_seq,
        }
    }

    /// Appends a role and returns its id.
    ///
    /// When `name` is `None` or blank, a placeholder `role<n>` is synthesized
    /// from the naming counter. The counter advances on every call, so a run
    /// of named adds still moves the numbering along.
    pub fn add(&mut self, name: Option<&str>, weight: f64, count: u32) -> RoleId {
        self.name_seq += 1;
        let label = match name {
            Some(given) if !given.trim().is_empty() => given.to_string(),
            _ => format!("{PLACEHOLDER_STEM}{}", self.name_seq),
        };
        let id = self.next_id;
        self.next_id += 1;
        debug!(role_id = id, name = %label, weight, count, "Adding role");
        self.roles.push(Role::new(id, label, weight, count));
        id
    }

    /// Removes the role with the given id and returns it.
    ///
    /// Fails with [`SplitError::RoleNotFound`] for an unknown id and with
    /// [`SplitError::CannotRemoveLastRole`] when only one role remains. The
    /// naming counter is not rewound.
    pub fn remove(&mut self, id: RoleId) -> SplitResult<Role> {
        let index = self
            .position(id)
            .ok_or(SplitError::RoleNotFound { id })?;
        if self.roles.len() == 1 {
            return Err(SplitError::CannotRemoveLastRole);
        }
        debug!(role_id = id, "Removing role");
        Ok(self.roles.remove(index))
    }

    /// Applies a single-field edit to the role with the given id.
    ///
    /// Values are stored as given; range checks happen at calculation time so
    /// a half-finished edit never blocks further editing.
    pub fn update(&mut self, id: RoleId, edit: RoleEdit) -> SplitResult<()> {
        let role = self
            .roles
            .iter_mut()
            .find(|role| role.id == id)
            .ok_or(SplitError::RoleNotFound { id })?;
        debug!(role_id = id, field = edit.field(), "Updating role");
        match edit {
            RoleEdit::Name(name) => role.name = name,
            RoleEdit::Weight(weight) => role.weight = weight,
            RoleEdit::Count(count) => role.count = count,
        }
        Ok(())
    }

    /// Returns the role with the given id, if present.
    #[must_use]
    pub fn get(&self, id: RoleId) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    /// The roles in display order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Number of roles in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Always false: the roster invariant keeps at least one role.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Captures the persistable snapshot of the roster, in display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RoleRecord> {
        self.roles.iter().map(Role::record).collect()
    }

    /// Replaces the roster contents with persisted records, reseeding ids
    /// and the naming counter. An empty list restores the default roster.
    pub fn restore(&mut self, records: &[RoleRecord]) {
        *self = Self::from_records(records);
    }

    fn position(&self, id: RoleId) -> Option<usize> {
        self.roles.iter().position(|role| role.id == id)
    }
}

impl Default for RoleRoster {
    fn default() -> Self {
        Self::new()
    }
}
