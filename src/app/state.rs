// SafetyBoard - app/state.rs
//
// Application state management. Holds the incident store, theme state,
// list selection, report form, and transient dialog flags.
// Owned by the eframe::App implementation and handed to panels by reference.

use crate::app::form::IncidentForm;
use crate::core::export;
use crate::core::model::{Incident, SeverityFilter, SortOrder, ViewSelection};
use crate::core::store::IncidentStore;
use crate::core::theme::ThemeState;
use crate::core::view;
use crate::util::constants;
use crate::util::error::Result;
use std::collections::HashSet;

/// Clipboard export formats offered in the Edit menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// All incidents known to this session.
    pub store: IncidentStore,

    /// Active palette selection.
    pub theme: ThemeState,

    /// Current severity filter and sort order.
    pub selection: ViewSelection,

    /// Report form contents and visibility.
    pub form: IncidentForm,

    /// Ids of incident cards whose details are expanded.
    pub expanded: HashSet<u64>,

    /// Incident awaiting delete confirmation, if the dialog is open.
    pub pending_delete: Option<u64>,

    /// Blocking notice text (validation failures). Shown until dismissed.
    pub notice: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether the decorative particle background is drawn.
    pub particles_enabled: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state around an incident store.
    pub fn new(store: IncidentStore, theme: ThemeState, debug_mode: bool) -> Self {
        Self {
            store,
            theme,
            selection: ViewSelection::default(),
            form: IncidentForm::default(),
            expanded: HashSet::new(),
            pending_delete: None,
            notice: None,
            status_message: "Ready.".to_string(),
            particles_enabled: true,
            debug_mode,
        }
    }

    /// Incidents to display under the current filter and sort order.
    pub fn visible(&self) -> Vec<&Incident> {
        view::view_with(self.store.incidents(), &self.selection)
    }

    pub fn set_severity_filter(&mut self, filter: SeverityFilter) {
        if self.selection.severity_filter != filter {
            tracing::debug!(filter = filter.label(), "Severity filter changed");
            self.selection.severity_filter = filter;
        }
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        if self.selection.sort_order != order {
            tracing::debug!(order = order.label(), "Sort order changed");
            self.selection.sort_order = order;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    /// Expand or collapse an incident card's details.
    pub fn toggle_expanded(&mut self, id: u64) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: u64) -> bool {
        self.expanded.contains(&id)
    }

    /// Submit the report form. A validation failure raises the blocking
    /// notice instead of touching the store.
    pub fn submit_form(&mut self) {
        match self.form.submit(&mut self.store) {
            Ok(id) => {
                self.status_message = format!("Reported incident #{id}.");
            }
            Err(e) => {
                tracing::debug!(error = %e, "Showing validation notice");
                self.notice = Some(constants::VALIDATION_NOTICE.to_string());
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Open the delete confirmation dialog for `id`.
    pub fn request_delete(&mut self, id: u64) {
        self.pending_delete = Some(id);
    }

    /// Delete the incident awaiting confirmation and close the dialog.
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        if self.store.delete(id) {
            self.expanded.remove(&id);
            self.status_message = format!("Deleted incident #{id}.");
            tracing::info!(id, remaining = self.store.len(), "Incident deleted");
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Render the visible incidents in `format` for the clipboard.
    pub fn export_visible(&self, format: ExportFormat) -> Result<String> {
        let visible = self.visible();
        let text = match format {
            ExportFormat::Csv => export::csv_string(&visible)?,
            ExportFormat::Json => export::json_string(&visible)?,
        };
        Ok(text)
    }
}
