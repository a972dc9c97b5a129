// SafetyBoard - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Incident
// =============================================================================

/// A reported AI safety incident.
///
/// Fields are private: an incident is built only by the store, and nothing
/// may rewrite it afterwards (in particular `reported_at`). Read access goes
/// through the getters below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Incident {
    id: u64,
    title: String,
    description: String,
    severity: Severity,
    reported_at: DateTime<Utc>,
}

impl Incident {
    pub(crate) fn new(id: u64, fields: NewIncident, reported_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            severity: fields.severity,
            reported_at,
        }
    }

    /// Store-assigned identifier, unique within the store.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Creation instant, assigned by the store.
    pub fn reported_at(&self) -> DateTime<Utc> {
        self.reported_at
    }
}

/// Caller-supplied fields for a new incident.
///
/// The store does not validate these; the report form trims and checks
/// required fields before they get here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl NewIncident {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }
}

// =============================================================================
// Severity
// =============================================================================

/// Incident priority level, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Severity] {
        &[Severity::Low, Severity::Medium, Severity::High]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// Exact (case-sensitive) inverse of [`Severity::label`].
    pub fn from_label(label: &str) -> Option<Severity> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// View selection
// =============================================================================

/// Which severities the incident list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// All choices in the order the filter selector lists them.
    pub fn all() -> [SeverityFilter; 4] {
        [
            SeverityFilter::All,
            SeverityFilter::Only(Severity::Low),
            SeverityFilter::Only(Severity::Medium),
            SeverityFilter::Only(Severity::High),
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::Only(s) => s.label(),
        }
    }

    /// Whether an incident of `severity` passes this filter.
    pub fn admits(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(s) => *s == severity,
        }
    }

    /// Heading for the incident list under this filter.
    pub fn heading(&self) -> String {
        match self {
            SeverityFilter::All => "All Incidents".to_string(),
            SeverityFilter::Only(s) => format!("{} Severity Incidents", s.label()),
        }
    }
}

/// Display order of the incident list by `reported_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Latest first.
    #[default]
    Newest,
    /// Earliest first.
    Oldest,
}

impl SortOrder {
    pub fn all() -> [SortOrder; 2] {
        [SortOrder::Newest, SortOrder::Oldest]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
        }
    }
}

/// Transient list selection: severity filter plus sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSelection {
    pub severity_filter: SeverityFilter,
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_label_round_trip() {
        for s in Severity::all() {
            assert_eq!(Severity::from_label(s.label()), Some(*s));
        }
        assert_eq!(Severity::from_label("Unknown"), None);
        assert_eq!(Severity::from_label("low"), None);
    }

    #[test]
    fn test_view_selection_defaults() {
        let sel = ViewSelection::default();
        assert_eq!(sel.severity_filter, SeverityFilter::All);
        assert_eq!(sel.sort_order, SortOrder::Newest);
    }

    #[test]
    fn test_filter_headings() {
        assert_eq!(SeverityFilter::All.heading(), "All Incidents");
        assert_eq!(
            SeverityFilter::Only(Severity::High).heading(),
            "High Severity Incidents"
        );
    }

    #[test]
    fn test_filter_admits() {
        assert!(SeverityFilter::All.admits(Severity::Low));
        assert!(SeverityFilter::Only(Severity::Low).admits(Severity::Low));
        assert!(!SeverityFilter::Only(Severity::Low).admits(Severity::High));
    }

    #[test]
    fn test_severity_serialises_as_label() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"High\"");
    }
}
