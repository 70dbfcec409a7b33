//! Fixed-width rendering of a trace summary.

use super::stats::TraceSummary;

/// Field width for the label column and the value column.
const FIELD_WIDTH: usize = 20;

/// Render the nine summary lines.
///
/// Each line is the label right-aligned to 20 columns, a colon, then the
/// value right-aligned to 20 columns. Values use the default `Display`
/// rendering for integers and floats, so whole-number averages print
/// without a decimal point.
pub fn render_summary(summary: &TraceSummary) -> String {
    let rows = [
        ("Sample Size", summary.sample_size.to_string()),
        ("Min CPU", summary.min_cpu.to_string()),
        ("Max CPU", summary.max_cpu.to_string()),
        ("Average CPU", summary.average_cpu.to_string()),
        ("Min Duration", summary.min_duration.to_string()),
        ("Max Duration", summary.max_duration.to_string()),
        ("Average Duration", summary.average_duration.to_string()),
        ("Average Reads", summary.average_reads.to_string()),
        ("Average Writes", summary.average_writes.to_string()),
    ];

    let width = FIELD_WIDTH;
    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{label:>width$}:{value:>width$}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> TraceSummary {
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
    }

    #[test]
    fn renders_nine_lines_in_fixed_order() {
        let rendered = render_summary(&sample_summary());
        let labels: Vec<&str> = rendered
            .lines()
            .map(|line| line.split(':').next().unwrap().trim_start())
            .collect();

        assert_eq!(
            labels,
            [
                "Sample Size",
                "Min CPU",
                "Max CPU",
                "Average CPU",
                "Min Duration",
                "Max Duration",
                "Average Duration",
                "Average Reads",
                "Average Writes",
            ]
        );
    }

    #[test]
    fn pads_label_and_value_to_twenty_columns() {
        let rendered = render_summary(&sample_summary());

        for line in rendered.lines() {
            assert_eq!(line.len(), 41, "line {line:?} is not 20 + 1 + 20 wide");
            assert_eq!(line.as_bytes()[20], b':');
        }

        let first = rendered.lines().next().unwrap();
        assert_eq!(first, "         Sample Size:                   2");
    }

    #[test]
    fn whole_number_averages_print_without_decimals() {
        let rendered = render_summary(&sample_summary());
        let average_cpu_line = rendered.lines().nth(3).unwrap();

        assert_eq!(average_cpu_line, "         Average CPU:                  15");
    }

    #[test]
    fn fractional_averages_keep_their_decimals() {
        let summary = TraceSummary {
            average_cpu: 1.5,
            ..sample_summary()
        };
        let rendered = render_summary(&summary);

        assert!(rendered.lines().nth(3).unwrap().ends_with("1.5"));
    }
}
