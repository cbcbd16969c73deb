use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session-scoped identifier for a role.
///
/// Ids are assigned by the roster when a role is created or restored and are
/// never persisted; the durable snapshot identifies roles by position only.
pub type RoleId = u64;

/// A named allocation category with a weight and a participant count.
///
/// This is the live, session-owned form. Out-of-range values (blank name,
/// zero count) are representable here; rejecting them is the validator's job,
/// so that a half-edited roster can exist between keystrokes without panics.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    /// Session-scoped id, unique within one roster.
    pub id: RoleId,
    /// Display label. Unique-ish in practice but uniqueness is not enforced.
    pub name: String,
    /// Relative share multiplier per person.
    pub weight: f64,
    /// Number of people in this role.
    pub count: u32,
}

impl Role {
    /// Creates a role from its parts.
    #[must_use]
    pub fn new(id: RoleId, name: impl Into<String>, weight: f64, count: u32) -> Self {
        Self { id, name: name.into(), weight, count }
    }

    /// Rebuilds a live role from a persisted record under a fresh id.
    #[must_use]
    pub fn from_record(id: RoleId, record: &RoleRecord) -> Self {
        Self::new(id, record.name.clone(), record.weight, record.count)
    }

    /// Produces the persisted form of this role.
    #[must_use]
    pub fn record(&self) -> RoleRecord {
        RoleRecord {
            name: self.name.clone(),
            weight: self.weight,
            count: self.count,
        }
    }
}

/// One field edit applied to an existing role.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleEdit {
    /// Replace the display label.
    Name(String),
    /// Replace the per-person weight.
    Weight(f64),
    /// Replace the participant count.
    Count(u32),
}

impl RoleEdit {
    /// Name of the edited field, for logs and messages.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Weight(_) => "weight",
            Self::Count(_) => "count",
        }
    }
}

/// Persisted form of a role: the durable store holds an ordered list of
/// these as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecord {
    /// Display label.
    pub name: String,
    /// Relative share multiplier per person.
    pub weight: f64,
    /// Number of people in this role.
    pub count: u32,
}

/// Per-calculation request parameters, re-read for every calculation.
///
/// `rounding_unit` is signed on purpose: the raw input may be non-positive
/// and the validator rejects it, rather than the type silently forbidding it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    /// Total amount to split, in currency units.
    pub total_amount: f64,
    /// Smallest increment individual payments are rounded up to.
    pub rounding_unit: i64,
}

impl SplitConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub const fn new(total_amount: f64, rounding_unit: i64) -> Self {
        Self { total_amount, rounding_unit }
    }
}

/// One role's line in a computed payment schedule.
///
/// Serialized field names follow the ephemeral-store schema
/// (`finalIndividualPayment` etc.), which is also what the export path reads
/// back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePayment {
    /// Role label at calculation time.
    pub name: String,
    /// Weight used for this role.
    pub weight: f64,
    /// Participant count used for this role.
    pub count: u32,
    /// Per-person payment, an exact multiple of the rounding unit.
    pub final_individual_payment: u64,
}

impl RolePayment {
    /// Amount collected from this role as a group, saturating at `u64::MAX`.
    #[must_use]
    pub const fn group_total(&self) -> u64 {
        self.final_individual_payment.saturating_mul(self.count as u64)
    }
}

/// Result of one split calculation.
///
/// Ephemeral by contract: recomputed on every calculation, overwritten by the
/// next one, and held only long enough to support an export action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    /// Per-role schedule lines, in roster order.
    pub roles: Vec<RolePayment>,
    /// The original total amount the schedule was computed for.
    pub total_amount: f64,
    /// Sum of all group totals; never less than `total_amount`.
    pub total_collected_amount: u64,
    /// Rounding surplus retained by the designated collector.
    pub excess_amount: f64,
    /// When this schedule was computed.
    pub calculated_at: DateTime<Utc>,
}

impl PaymentResult {
    /// Number of people across all roles in the schedule, saturating at
    /// `u32::MAX`.
    #[must_use]
    pub fn head_count(&self) -> u32 {
        self.roles
            .iter()
            .fold(0, |acc, r| acc.saturating_add(r.count))
    }
}
