// SafetyBoard - core/view.rs
//
// View-model: the filtered, sorted incident list the dashboard displays.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Incident, SeverityFilter, SortOrder, ViewSelection};

/// Produce the displayed incident order from the full collection.
///
/// Keeps incidents admitted by `filter`, then orders them by `reported_at`
/// (latest first for `Newest`, earliest first for `Oldest`). The sort is
/// stable, so incidents reported at the same instant keep storage order.
/// The input is never modified.
pub fn view(all: &[Incident], filter: SeverityFilter, order: SortOrder) -> Vec<&Incident> {
    let mut visible: Vec<&Incident> = all
        .iter()
        .filter(|incident| filter.admits(incident.severity()))
        .collect();

    match order {
        SortOrder::Newest => visible.sort_by(|a, b| b.reported_at().cmp(&a.reported_at())),
        SortOrder::Oldest => visible.sort_by_key(|incident| incident.reported_at()),
    }

    visible
}

/// [`view`] driven by a [`ViewSelection`].
pub fn view_with<'a>(all: &'a [Incident], selection: &ViewSelection) -> Vec<&'a Incident> {
    view(all, selection.severity_filter, selection.sort_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{NewIncident, Severity};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn make_incident(id: u64, severity: Severity, minutes: i64) -> Incident {
        Incident::new(
            id,
            NewIncident::new(format!("Incident {id}"), "details", severity),
            base() + Duration::minutes(minutes),
        )
    }

    fn ids(list: &[&Incident]) -> Vec<u64> {
        list.iter().map(|i| i.id()).collect()
    }

    fn sample() -> Vec<Incident> {
        vec![
            make_incident(1, Severity::Medium, 10),
            make_incident(2, Severity::High, 30),
            make_incident(3, Severity::Low, 20),
            make_incident(4, Severity::High, 5),
        ]
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(view(&[], SeverityFilter::All, SortOrder::Newest).is_empty());
        assert!(view(&[], SeverityFilter::Only(Severity::Low), SortOrder::Oldest).is_empty());
    }

    #[test]
    fn test_all_filter_keeps_everything_newest_first() {
        let all = sample();
        let out = view(&all, SeverityFilter::All, SortOrder::Newest);
        assert_eq!(ids(&out), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_oldest_first() {
        let all = sample();
        let out = view(&all, SeverityFilter::All, SortOrder::Oldest);
        assert_eq!(ids(&out), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_severity_filter_keeps_only_matching() {
        let all = sample();
        for severity in Severity::all() {
            let out = view(&all, SeverityFilter::Only(*severity), SortOrder::Newest);
            assert!(out.iter().all(|i| i.severity() == *severity));
            let expected = all.iter().filter(|i| i.severity() == *severity).count();
            assert_eq!(out.len(), expected);
        }
        let high = view(&all, SeverityFilter::Only(Severity::High), SortOrder::Oldest);
        assert_eq!(ids(&high), vec![4, 2]);
    }

    #[test]
    fn test_output_is_monotonic() {
        let all = sample();
        for filter in SeverityFilter::all() {
            let newest = view(&all, filter, SortOrder::Newest);
            assert!(newest
                .windows(2)
                .all(|w| w[0].reported_at() >= w[1].reported_at()));
            let oldest = view(&all, filter, SortOrder::Oldest);
            assert!(oldest
                .windows(2)
                .all(|w| w[0].reported_at() <= w[1].reported_at()));
        }
    }

    #[test]
    fn test_ties_keep_storage_order() {
        let all = vec![
            make_incident(7, Severity::Low, 0),
            make_incident(3, Severity::Low, 0),
            make_incident(5, Severity::Low, 0),
        ];
        assert_eq!(ids(&view(&all, SeverityFilter::All, SortOrder::Newest)), vec![7, 3, 5]);
        assert_eq!(ids(&view(&all, SeverityFilter::All, SortOrder::Oldest)), vec![7, 3, 5]);
    }

    #[test]
    fn test_input_untouched_and_repeatable() {
        let all = sample();
        let snapshot = all.clone();
        let first = ids(&view(&all, SeverityFilter::All, SortOrder::Oldest));
        let second = ids(&view(&all, SeverityFilter::All, SortOrder::Oldest));
        assert_eq!(first, second);
        assert_eq!(all, snapshot);
    }

    #[test]
    fn test_view_with_selection() {
        let all = sample();
        let selection = ViewSelection {
            severity_filter: SeverityFilter::Only(Severity::Medium),
            sort_order: SortOrder::Oldest,
        };
        assert_eq!(ids(&view_with(&all, &selection)), vec![1]);
    }

    #[test]
    fn test_view_with_result_outlives_selection() {
        let all = sample();
        let visible = {
            let selection = ViewSelection::default();
            view_with(&all, &selection)
        };
        assert_eq!(visible.len(), all.len());
        assert!(visible.windows(2).all(|w| w[0].reported_at() >= w[1].reported_at()));
    }
}
