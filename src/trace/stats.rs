//! Post-filtering and aggregation of extracted events.

use log::debug;

use super::error::TraceError;
use super::parse::TraceEvent;

/// Usage-pattern filter: the statement text must contain this fragment.
pub const TEXT_DATA_FILTER: &str = "declare";

/// Keep the events whose statement text matches the usage filter and that
/// actually consumed CPU.
///
/// This predicate is layered on top of the relevance screen rather than
/// merged into it: application identity and usage shape stay independent.
pub fn filter_events(events: Vec<TraceEvent>) -> Vec<TraceEvent> {
    let total = events.len();
    let kept: Vec<TraceEvent> = events
        .into_iter()
        .filter(|event| event.text_data.contains(TEXT_DATA_FILTER) && event.cpu > 0)
        .collect();

    debug!(
        "{} of {} events match the text and CPU filters",
        kept.len(),
        total
    );
    kept
}

/// Aggregate statistics over the filtered event set. Constructed once by
/// [`summarize`], never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSummary {
    pub sample_size: usize,
    pub min_cpu: i64,
    pub max_cpu: i64,
    pub min_duration: i64,
    pub max_duration: i64,
    pub average_cpu: f64,
    pub average_duration: f64,
    pub average_reads: f64,
    pub average_writes: f64,
}

/// Reduce the filtered events to a summary in one pass.
///
/// `min`, `max` and `average` are undefined over an empty set, so an empty
/// input fails instead of reporting zeros.
pub fn summarize(events: &[TraceEvent]) -> Result<TraceSummary, TraceError> {
    if events.is_empty() {
        return Err(TraceError::NoMatchingEvents);
    }

    let mut min_cpu = i64::MAX;
    let mut max_cpu = i64::MIN;
    let mut min_duration = i64::MAX;
    let mut max_duration = i64::MIN;
    let mut cpu_total: i64 = 0;
    let mut duration_total: i64 = 0;
    let mut reads_total: i64 = 0;
    let mut writes_total: i64 = 0;

    for event in events {
        min_cpu = min_cpu.min(event.cpu);
        max_cpu = max_cpu.max(event.cpu);
        min_duration = min_duration.min(event.duration);
        max_duration = max_duration.max(event.duration);
        cpu_total += event.cpu;
        duration_total += event.duration;
        reads_total += event.reads;
        writes_total += event.writes;
    }

    let count = events.len() as f64;
    Ok(TraceSummary {
        sample_size: events.len(),
        min_cpu,
        max_cpu,
        min_duration,
        max_duration,
        average_cpu: cpu_total as f64 / count,
        average_duration: duration_total as f64 / count,
        average_reads: reads_total as f64 / count,
        average_writes: writes_total as f64 / count,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn event(text_data: &str, cpu: i64) -> TraceEvent {
        TraceEvent {
            text_data: text_data.to_string(),
            cpu,
            ..TraceEvent::default()
        }
    }

    #[rstest]
    #[case::plain_declare("declare @p1 int", 10, true)]
    #[case::substring_not_whole_word("i declare war", 1, true)]
    #[case::case_sensitive("DECLARE @p1 int", 10, false)]
    #[case::no_fragment("select 1", 10, false)]
    #[case::zero_cpu("declare @p1 int", 0, false)]
    #[case::negative_cpu("declare @p1 int", -5, false)]
    fn filter_boundaries(#[case] text_data: &str, #[case] cpu: i64, #[case] kept: bool) {
        let filtered = filter_events(vec![event(text_data, cpu)]);
        assert_eq!(!filtered.is_empty(), kept);
    }

    #[test]
    fn filter_preserves_order_of_kept_events() {
        let events = vec![
            event("declare a", 3),
            event("select 1", 9),
            event("declare b", 7),
        ];
        let kept = filter_events(events);

        let cpus: Vec<i64> = kept.iter().map(|e| e.cpu).collect();
        assert_eq!(cpus, [3, 7]);
    }

    #[test]
    fn summarizes_the_worked_example() {
        let events = vec![
            TraceEvent {
                text_data: "declare x".to_string(),
                cpu: 10,
                duration: 100,
                reads: 5,
                writes: 2,
                ..TraceEvent::default()
            },
            TraceEvent {
                text_data: "declare y".to_string(),
                cpu: 20,
                duration: 300,
                reads: 15,
                writes: 8,
                ..TraceEvent::default()
            },
        ];

        let summary = summarize(&events).unwrap();
        assert_eq!(
            summary,
            TraceSummary {
                sample_size: 2,
                min_cpu: 10,
                max_cpu: 20,
                min_duration: 100,
                max_duration: 300,
                average_cpu: 15.0,
                average_duration: 200.0,
                average_reads: 10.0,
                average_writes: 5.0,
            }
        );
    }

    #[test]
    fn single_event_collapses_min_max_and_average() {
        let events = vec![TraceEvent {
            cpu: 7,
            duration: 42,
            ..TraceEvent::default()
        }];

        let summary = summarize(&events).unwrap();
        assert_eq!(summary.min_cpu, 7);
        assert_eq!(summary.max_cpu, 7);
        assert_eq!(summary.average_cpu, 7.0);
        assert_eq!(summary.min_duration, 42);
        assert_eq!(summary.max_duration, 42);
        assert_eq!(summary.average_duration, 42.0);
    }

    #[test]
    fn averages_use_floating_point_division() {
        let events = vec![
            TraceEvent { cpu: 1, ..TraceEvent::default() },
            TraceEvent { cpu: 2, ..TraceEvent::default() },
        ];

        let summary = summarize(&events).unwrap();
        assert_eq!(summary.average_cpu, 1.5);
    }

    #[test]
    fn average_stays_between_min_and_max() {
        let events = vec![
            TraceEvent { cpu: 3, duration: 900, ..TraceEvent::default() },
            TraceEvent { cpu: 11, duration: 20, ..TraceEvent::default() },
            TraceEvent { cpu: 5, duration: 70, ..TraceEvent::default() },
        ];

        let summary = summarize(&events).unwrap();
        assert!(summary.min_cpu as f64 <= summary.average_cpu);
        assert!(summary.average_cpu <= summary.max_cpu as f64);
        assert!(summary.min_duration as f64 <= summary.average_duration);
        assert!(summary.average_duration <= summary.max_duration as f64);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = summarize(&[]).unwrap_err();
        assert!(matches!(err, TraceError::NoMatchingEvents));
    }
}
