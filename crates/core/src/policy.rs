//! Lifecycle policies for catalog products.
//!
//! A deployment chooses which rows reads may observe ([`VisibilityPolicy`])
//! and what `remove` does to a row ([`DeletionPolicy`]). Both are loaded from
//! configuration strings at startup.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// String values
// ---------------------------------------------------------------------------

pub const VISIBILITY_ALL: &str = "all";
pub const VISIBILITY_AVAILABLE_ONLY: &str = "available-only";

pub const DELETION_HARD: &str = "hard";
pub const DELETION_SOFT: &str = "soft";

// ---------------------------------------------------------------------------
// VisibilityPolicy
// ---------------------------------------------------------------------------

/// Which product rows are visible to get / list / update / remove.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisibilityPolicy {
    /// Every row, regardless of `available`.
    All,
    /// Only rows with `available = true`.
    #[default]
    AvailableOnly,
}

impl VisibilityPolicy {
    /// Parse from a configuration string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            VISIBILITY_ALL => Ok(Self::All),
            VISIBILITY_AVAILABLE_ONLY => Ok(Self::AvailableOnly),
            _ => Err(CoreError::Validation(format!(
                "Invalid visibility policy '{s}'. Must be one of: \
                 {VISIBILITY_ALL}, {VISIBILITY_AVAILABLE_ONLY}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => VISIBILITY_ALL,
            Self::AvailableOnly => VISIBILITY_AVAILABLE_ONLY,
        }
    }

    /// Whether unavailable rows are hidden under this policy.
    pub fn hides_unavailable(&self) -> bool {
        matches!(self, Self::AvailableOnly)
    }
}

// ---------------------------------------------------------------------------
// DeletionPolicy
// ---------------------------------------------------------------------------

/// What `remove` does to a product row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeletionPolicy {
    /// Physically delete the row.
    Hard,
    /// Set `available = false` and keep the row.
    #[default]
    Soft,
}

impl DeletionPolicy {
    /// Parse from a configuration string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            DELETION_HARD => Ok(Self::Hard),
            DELETION_SOFT => Ok(Self::Soft),
            _ => Err(CoreError::Validation(format!(
                "Invalid deletion policy '{s}'. Must be one of: {DELETION_HARD}, {DELETION_SOFT}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => DELETION_HARD,
            Self::Soft => DELETION_SOFT,
        }
    }
}

// ---------------------------------------------------------------------------
// CatalogPolicy
// ---------------------------------------------------------------------------

/// The pair of policies a catalog service runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPolicy {
    pub visibility: VisibilityPolicy,
    pub deletion: DeletionPolicy,
}

impl CatalogPolicy {
    pub fn new(visibility: VisibilityPolicy, deletion: DeletionPolicy) -> Self {
        Self {
            visibility,
            deletion,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn defaults_are_available_only_and_soft() {
        let policy = CatalogPolicy::default();
        assert_eq!(policy.visibility, VisibilityPolicy::AvailableOnly);
        assert_eq!(policy.deletion, DeletionPolicy::Soft);
    }

    #[test]
    fn visibility_round_trips_through_config_string() {
        for v in [VisibilityPolicy::All, VisibilityPolicy::AvailableOnly] {
            assert_eq!(VisibilityPolicy::from_str_value(v.as_str()).unwrap(), v);
        }
    }

    #[test]
    fn deletion_round_trips_through_config_string() {
        for d in [DeletionPolicy::Hard, DeletionPolicy::Soft] {
            assert_eq!(DeletionPolicy::from_str_value(d.as_str()).unwrap(), d);
        }
    }

    #[test]
    fn unknown_visibility_is_rejected() {
        assert_matches!(
            VisibilityPolicy::from_str_value("active"),
            Err(CoreError::Validation(msg)) if msg.contains("available-only")
        );
    }

    #[test]
    fn unknown_deletion_is_rejected() {
        assert_matches!(
            DeletionPolicy::from_str_value("archive"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn only_available_only_hides_rows() {
        assert!(VisibilityPolicy::AvailableOnly.hides_unavailable());
        assert!(!VisibilityPolicy::All.hides_unavailable());
    }

    #[test]
    fn serde_uses_config_spelling() {
        let json = serde_json::to_string(&VisibilityPolicy::AvailableOnly).unwrap();
        assert_eq!(json, "\"available-only\"");
    }
}
