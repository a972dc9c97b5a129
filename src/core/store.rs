// SafetyBoard - core/store.rs
//
// In-memory incident collection. Storage order carries no meaning; display
// order always comes from core::view.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Incident, NewIncident, Severity};
use chrono::{DateTime, TimeZone, Utc};

/// Ordered, in-memory collection of incidents for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
}

impl IncidentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the three demonstration incidents.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (title, description, severity, at) in seed_incidents() {
            store.add_at(NewIncident::new(title, description, severity), at);
        }
        store
    }

    /// Add an incident reported now. Returns the assigned id.
    pub fn add(&mut self, fields: NewIncident) -> u64 {
        self.add_at(fields, Utc::now())
    }

    /// Add an incident with an explicit report time. Returns the assigned id.
    ///
    /// Fields are stored as given; validation is the caller's job.
    pub fn add_at(&mut self, fields: NewIncident, reported_at: DateTime<Utc>) -> u64 {
        let id = self.next_id();
        tracing::debug!(
            id,
            severity = %fields.severity,
            reported_at = %reported_at.to_rfc3339(),
            "Incident added"
        );
        self.incidents.push(Incident::new(id, fields, reported_at));
        id
    }

    /// Remove the incident with `id`. Returns false (and changes nothing)
    /// when no such incident exists.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.incidents.len();
        self.incidents.retain(|i| i.id() != id);
        let removed = self.incidents.len() != before;
        if removed {
            tracing::debug!(id, "Incident deleted");
        } else {
            tracing::debug!(id, "Delete ignored: no incident with this id");
        }
        removed
    }

    /// All incidents in storage order.
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn get(&self, id: u64) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id() == id)
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Next id: one more than the largest id currently held (1 when empty).
    ///
    /// Recomputed from the current contents, so deleting the highest id
    /// makes that id available again.
    fn next_id(&self) -> u64 {
        self.incidents.iter().map(Incident::id).max().unwrap_or(0) + 1
    }
}

/// Demonstration incidents loaded at startup.
fn seed_incidents() -> Vec<(&'static str, &'static str, Severity, DateTime<Utc>)> {
    vec![
        (
            "Biased Recommendation Algorithm",
            "Algorithm consistently favored certain demographics in a way that created unfair \
             advantages for specific user groups. This bias was detected during routine fairness \
             auditing and has since been mitigated through algorithmic adjustments and expanded \
             training data.",
            Severity::Medium,
            utc(2025, 3, 15, 10, 0),
        ),
        (
            "LLM Hallucination in Critical Info",
            "LLM provided incorrect safety procedure information when queried about emergency \
             protocols. This hallucination could have led to dangerous physical outcomes if \
             followed in a real emergency situation. The model has been retrained with \
             safety-critical information and guardrails implemented.",
            Severity::High,
            utc(2025, 4, 1, 14, 30),
        ),
        (
            "Minor Data Leak via Chatbot",
            "Chatbot inadvertently exposed non-sensitive user metadata in its responses. The \
             leaked information included interaction timestamps and generic session identifiers \
             but no personally identifiable information. The issue was patched within hours of \
             discovery.",
            Severity::Low,
            utc(2025, 3, 20, 9, 15),
        ),
    ]
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn fields(title: &str) -> NewIncident {
        NewIncident::new(title, "details", Severity::Low)
    }

    #[test]
    fn test_seeded_store_has_three_incidents() {
        let store = IncidentStore::seeded();
        let ids: Vec<u64> = store.incidents().iter().map(Incident::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            store.get(2).map(Incident::title),
            Some("LLM Hallucination in Critical Info")
        );
        assert_eq!(
            store.get(1).map(|i| i.reported_at().to_rfc3339()),
            Some("2025-03-15T10:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_first_id_is_one() {
        let mut store = IncidentStore::new();
        assert_eq!(store.add(fields("a")), 1);
        assert_eq!(store.add(fields("b")), 2);
    }

    #[test]
    fn test_add_assigns_id_above_max_and_current_time() {
        let mut store = IncidentStore::seeded();
        let latest = store
            .incidents()
            .iter()
            .map(Incident::reported_at)
            .max()
            .unwrap();
        let id = store.add(fields("new"));
        assert_eq!(id, 4);
        let added = store.get(id).unwrap();
        assert!(added.reported_at() >= latest);
        assert_eq!(added.title(), "new");
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = IncidentStore::seeded();
        assert!(!store.delete(99));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_then_delete_restores_contents() {
        let mut store = IncidentStore::seeded();
        let before = store.incidents().to_vec();
        let id = store.add(fields("temporary"));
        assert!(store.delete(id));
        assert_eq!(store.incidents(), before.as_slice());
    }

    #[test]
    fn test_next_id_recomputed_from_remaining_max() {
        let mut store = IncidentStore::new();
        let t0 = utc(2025, 1, 1, 0, 0);
        store.add_at(fields("a"), t0);
        store.add_at(fields("b"), t0 + Duration::minutes(1));
        let c = store.add_at(fields("c"), t0 + Duration::minutes(2));
        assert!(store.delete(c));
        // Highest id freed, so it is handed out again.
        assert_eq!(store.add_at(fields("d"), t0 + Duration::minutes(3)), c);
        // Gaps below the maximum are never refilled.
        assert!(store.delete(1));
        assert_eq!(store.add_at(fields("e"), t0 + Duration::minutes(4)), 4);
    }

    #[test]
    fn test_store_does_not_validate_fields() {
        let mut store = IncidentStore::new();
        let id = store.add(NewIncident::new("", "", Severity::High));
        assert_eq!(store.get(id).map(Incident::title), Some(""));
    }
}
