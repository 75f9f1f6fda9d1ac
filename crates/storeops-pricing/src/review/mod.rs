//! Human review state layered over engine output.
//!
//! The session is plain data: each action consumes the current session and
//! returns the next one, so callers decide when (and whether) to persist it
//! through a [`ReviewSessionStore`].

mod store;

pub use store::{InMemorySessionStore, JsonFileSessionStore, ReviewSessionStore, SessionStoreError};

use crate::pricing::{PricedUnitGroup, TenantDecision};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reasons offered to reviewers when modifying or skipping a rent increase.
pub const OVERRIDE_REASONS: [&str; 7] = [
    "Tenant Retention Risk",
    "Recent Complaint or Service Issue",
    "Pending Move-Out",
    "Multi-Unit Relationship",
    "Market Conditions",
    "Manager Discretion",
    "Other",
];

/// Reasons offered to reviewers when overriding a street-rate recommendation.
pub const VP_OVERRIDE_REASONS: [&str; 6] = [
    "Competitor Promotion",
    "Hierarchy Adjustment",
    "Seasonal Demand",
    "Local Market Event",
    "Manager Discretion",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Modified,
    Skipped,
}

impl ReviewStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Pending, Self::Approved, Self::Modified, Self::Skipped]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Modified => "Modified",
            Self::Skipped => "Skipped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub status: ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewError {
    #[error("a reason is required to {action} '{id}'")]
    MissingReason { id: String, action: &'static str },
    #[error("override rate {rate} for '{id}' must be a positive amount")]
    InvalidRate { id: String, rate: f64 },
}

/// Review progress keyed by tenant or unit-group id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewSession {
    #[serde(default)]
    entries: BTreeMap<String, ReviewEntry>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, id: &str) -> Option<&ReviewEntry> {
        self.entries.get(id)
    }

    pub fn status(&self, id: &str) -> ReviewStatus {
        self.entries
            .get(id)
            .map(|entry| entry.status)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ReviewEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Accepts the engine recommendation as-is.
    pub fn approve(mut self, id: &str) -> Self {
        let entry = self.entries.entry(id.to_string()).or_default();
        entry.status = ReviewStatus::Approved;
        entry.override_rate = None;
        entry.reason = None;
        self
    }

    /// Replaces the recommended rate with a reviewer-chosen one.
    pub fn modify(mut self, id: &str, rate: f64, reason: &str) -> Result<Self, ReviewError> {
        let reason = required_reason(id, reason, "modify")?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ReviewError::InvalidRate {
                id: id.to_string(),
                rate,
            });
        }

        let entry = self.entries.entry(id.to_string()).or_default();
        entry.status = ReviewStatus::Modified;
        entry.override_rate = Some(rate);
        entry.reason = Some(reason);
        Ok(self)
    }

    /// Leaves the current rate in place for this cycle.
    pub fn skip(mut self, id: &str, reason: &str) -> Result<Self, ReviewError> {
        let reason = required_reason(id, reason, "skip")?;

        let entry = self.entries.entry(id.to_string()).or_default();
        entry.status = ReviewStatus::Skipped;
        entry.override_rate = None;
        entry.reason = Some(reason);
        Ok(self)
    }

    /// Returns an entity to pending, keeping its notes.
    pub fn reset(mut self, id: &str) -> Self {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.status = ReviewStatus::Pending;
            entry.override_rate = None;
            entry.reason = None;
        }
        self
    }

    pub fn annotate(mut self, id: &str, note: &str) -> Self {
        let note = note.trim();
        if !note.is_empty() {
            self.entries
                .entry(id.to_string())
                .or_default()
                .notes
                .push(note.to_string());
        }
        self
    }

    pub fn apply_to_tenant(&self, decision: &mut TenantDecision) {
        decision.status = self.status(decision.id());
    }

    /// Rent that will actually be charged: a reviewer override, the current
    /// rent when skipped, or the recommendation.
    pub fn final_rent(&self, decision: &TenantDecision) -> f64 {
        match self.entries.get(decision.id()) {
            Some(ReviewEntry {
                status: ReviewStatus::Skipped,
                ..
            }) => decision.record.current_rent,
            Some(ReviewEntry {
                override_rate: Some(rate),
                ..
            }) => *rate,
            _ => decision.recommended_new_rent,
        }
    }

    pub fn apply_to_group(&self, group: &mut PricedUnitGroup) {
        match self.entries.get(group.id()) {
            Some(ReviewEntry {
                status: ReviewStatus::Modified,
                override_rate: Some(rate),
                reason,
                ..
            }) => group.set_override(*rate, reason.clone().unwrap_or_default()),
            _ => group.clear_override(),
        }
    }
}

fn required_reason(id: &str, reason: &str, action: &'static str) -> Result<String, ReviewError> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err(ReviewError::MissingReason {
            id: id.to_string(),
            action,
        });
    }
    Ok(trimmed.to_string())
}
