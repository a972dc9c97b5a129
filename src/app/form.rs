// SafetyBoard - app/form.rs
//
// "Report New Incident" form state and submission.
// Required-field validation lives here, in front of the store: the store
// itself accepts whatever it is given.

use crate::core::model::{NewIncident, Severity};
use crate::core::store::IncidentStore;
use crate::util::error::ValidationError;

/// Editable contents of the report form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentForm {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// Whether the form is currently shown.
    pub visible: bool,
}

impl IncidentForm {
    /// Show or hide the form without touching its contents.
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    /// Check required fields. Whitespace-only counts as empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "title" });
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "description",
            });
        }
        Ok(())
    }

    /// Validate and, if valid, add the incident to `store`.
    ///
    /// On success the form is cleared and hidden and the new id returned.
    /// On failure nothing changes: neither the store nor the form contents.
    pub fn submit(&mut self, store: &mut IncidentStore) -> Result<u64, ValidationError> {
        if let Err(e) = self.validate() {
            tracing::info!(error = %e, "Incident submission rejected");
            return Err(e);
        }

        let fields = NewIncident::new(
            std::mem::take(&mut self.title),
            std::mem::take(&mut self.description),
            self.severity,
        );
        let id = store.add(fields);
        tracing::info!(id, total = store.len(), "Incident reported");

        *self = Self::default();
        Ok(id)
    }
}
