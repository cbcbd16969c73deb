//! The split session: command handlers tying the roster, validator,
//! calculator, formatter and store together.
//!
//! Every mutation writes through to the store before returning, so the
//! persisted snapshot always matches the last committed roster. Reads of
//! persisted state are resilient: corrupt data is logged and replaced with
//! defaults instead of failing the session.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use warikan_types::{PaymentResult, Role, RoleEdit, RoleId, SplitConfig};

use crate::error::{SplitError, SplitResult};
use crate::format::{self, ReportStyle};
use crate::roster::RoleRoster;
use crate::split;
use crate::storage::StateStore;
use crate::validator;

/// A bill-splitting session bound to a storage backend.
pub struct SplitSession {
    roster: RoleRoster,
    store: Arc<dyn StateStore>,
}

// The store trait object has no Debug bound, so derive is unavailable.
impl fmt::Debug for SplitSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitSession")
            .field("roster", &self.roster)
            .finish_non_exhaustive()
    }
}

impl SplitSession {
    /// Opens a session, loading the persisted roster from the store.
    ///
    /// A missing snapshot starts the default roster; a corrupt one is logged
    /// and replaced the same way. Any other storage failure is propagated:
    /// the snapshot may still be intact, and the next write-through must not
    /// overwrite it with the default roster.
    #[instrument(skip(store))]
    pub fn open(store: Arc<dyn StateStore>) -> SplitResult<Self> {
        let roster = match store.load_roles() {
            Ok(Some(records)) => {
                debug!(roles = records.len(), "Loaded persisted roster");
                RoleRoster::from_records(&records)
            }
            Ok(None) => {
                debug!("No persisted roster; starting with the default role");
                RoleRoster::new()
            }
            Err(err @ SplitError::CorruptPersistedState { .. }) => {
                warn!(error = %err, "Persisted roster corrupt; starting with the default role");
                RoleRoster::new()
            }
            Err(err) => return Err(err),
        };
        Ok(Self { roster, store })
    }

    /// The roles in display order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        self.roster.roles()
    }

    /// Looks up a single role by id.
    #[must_use]
    pub fn role(&self, id: RoleId) -> Option<&Role> {
        self.roster.get(id)
    }

    /// Adds a role and persists the new snapshot.
    #[instrument(skip(self))]
    pub fn add_role(&mut self, name: Option<&str>, weight: f64, count: u32) -> SplitResult<RoleId> {
        let id = self.roster.add(name, weight, count);
        self.persist_roster()?;
        info!(role_id = id, "Added role");
        Ok(id)
    }

    /// Removes a role and persists the new snapshot.
    #[instrument(skip(self))]
    pub fn remove_role(&mut self, id: RoleId) -> SplitResult<Role> {
        let removed = self.roster.remove(id)?;
        self.persist_roster()?;
        info!(role_id = id, name = %removed.name, "Removed role");
        Ok(removed)
    }

    /// Applies a single-field edit and persists the new snapshot.
    #[instrument(skip(self))]
    pub fn update_role(&mut self, id: RoleId, edit: RoleEdit) -> SplitResult<()> {
        self.roster.update(id, edit)?;
        self.persist_roster()?;
        info!(role_id = id, "Updated role");
        Ok(())
    }

    /// Validates the current roster against `config`, computes the payment
    /// schedule and persists both the roster snapshot and the result.
    #[instrument(skip(self))]
    pub fn calculate(&self, config: &SplitConfig) -> SplitResult<PaymentResult> {
        let input = validator::validate(self.roster.roles(), config)?;
        let result = split::compute(&input);
        // Both keys are written before the result is handed back, so a copy
        // that follows sees this calculation and not an older one.
        self.persist_roster()?;
        self.store.save_result(&result)?;
        info!(
            roles = result.roles.len(),
            collected = result.total_collected_amount,
            excess = result.excess_amount,
            "Calculated split"
        );
        Ok(result)
    }

    /// Reads the most recent calculation result, if any.
    ///
    /// A corrupt stored result is disposable state: it is logged and treated
    /// as absent rather than surfaced as an error.
    pub fn last_result(&self) -> SplitResult<Option<PaymentResult>> {
        match self.store.load_result() {
            Ok(result) => Ok(result),
            Err(err @ SplitError::CorruptPersistedState { .. }) => {
                warn!(error = %err, "Stored result unreadable; treating it as absent");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Renders the most recent result as plain text for export.
    ///
    /// Fails with [`SplitError::NoResultAvailable`] when no calculation has
    /// been stored yet.
    pub fn export_text(&self, style: &ReportStyle) -> SplitResult<String> {
        let result = self.last_result()?.ok_or(SplitError::NoResultAvailable)?;
        Ok(format::plain_text_report(&result, style))
    }

    /// Restores the default roster and drops any stored result.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> SplitResult<()> {
        self.roster = RoleRoster::new();
        self.store.clear_result()?;
        self.persist_roster()?;
        info!("Roster reset to the default role");
        Ok(())
    }

    fn persist_roster(&self) -> SplitResult<()> {
        self.store.save_roles(&self.roster.snapshot())
    }
}
