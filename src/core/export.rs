// SafetyBoard - core/export.rs
//
// CSV and JSON rendering of the visible incident list, for the clipboard.
// Core layer: writes to any Write trait object; no file I/O.

use crate::core::model::Incident;
use crate::util::error::ExportError;
use std::io::Write;

/// Write incidents as CSV.
///
/// Columns: id, title, severity, reported_at, description
pub fn export_csv<W: Write>(incidents: &[&Incident], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["id", "title", "severity", "reported_at", "description"])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for incident in incidents {
        csv_writer
            .write_record([
                &incident.id().to_string(),
                incident.title(),
                incident.severity().label(),
                &incident.reported_at().to_rfc3339(),
                incident.description(),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Write incidents as a pretty-printed JSON array.
pub fn export_json<W: Write>(incidents: &[&Incident], writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, incidents).map_err(|e| ExportError::Json { source: e })?;
    Ok(incidents.len())
}

/// Render incidents to a CSV string.
pub fn csv_string(incidents: &[&Incident]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    export_csv(incidents, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ExportError::Encoding { source: e })
}

/// Render incidents to a JSON string.
pub fn json_string(incidents: &[&Incident]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    export_json(incidents, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ExportError::Encoding { source: e })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::IncidentStore;

    #[test]
    fn test_csv_export() {
        let store = IncidentStore::seeded();
        let visible: Vec<&Incident> = store.incidents().iter().collect();
        let mut buf = Vec::new();
        let count = export_csv(&visible, &mut buf).unwrap();
        assert_eq!(count, 3);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("id,title,severity,reported_at,description"));
        assert!(output.contains("Biased Recommendation Algorithm"));
        assert!(output.contains("2025-04-01T14:30:00+00:00"));
    }

    #[test]
    fn test_json_export() {
        let store = IncidentStore::seeded();
        let visible: Vec<&Incident> = store.incidents().iter().take(1).collect();
        let output = json_string(&visible).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], 1);
        assert_eq!(parsed[0]["severity"], "Medium");
        assert_eq!(parsed[0]["reported_at"], "2025-03-15T10:00:00Z");
    }

    #[test]
    fn test_empty_csv_has_header_only() {
        let output = csv_string(&[]).unwrap();
        assert_eq!(output.lines().count(), 1);
    }
}
