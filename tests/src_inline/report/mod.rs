use super::*;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

fn summary() -> RadarSummary {
    RadarSummary {
        tool: "kira-netradar".to_string(),
        version: "0.1.0".to_string(),
        input: "scan.json".to_string(),
        profile: "network_v1".to_string(),
        frame: AxisRange::new(0.0, 10.0),
        axes: vec![
            AxisSummary {
                label: "ips".to_string(),
                metric: "ips",
                low: 0.0,
                high: 10.0,
                inverted: false,
                raw: 5.0,
                scaled: 5.0,
            },
            AxisSummary {
                label: "latency".to_string(),
                metric: "response_avg",
                low: 10.0,
                high: 0.0,
                inverted: true,
                raw: 8.0,
                scaled: 2.0,
            },
        ],
    }
}

#[test]
fn test_format_f64_6() {
    assert_eq!(format_f64_6(0.5), "0.500000");
}

#[test]
fn test_summary_json_roundtrips_through_value() {
    let json = render_summary_json(&summary()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"], "kira-netradar");
    assert_eq!(value["frame"]["high"], 10.0);
    assert_eq!(value["axes"][1]["metric"], "response_avg");
    assert_eq!(value["axes"][1]["inverted"], true);
    assert_eq!(value["axes"][1]["scaled"], 2.0);
}

#[test]
fn test_report_text_lists_axes() {
    let text = render_report_text(&summary());
    assert!(text.starts_with("Network Radar Report\n"));
    assert!(text.contains("Target frame: [0.000000, 10.000000] (axis ips)"));
    assert!(text.contains("latency (inv)"));
    assert!(text.contains("Inverted axes (lower is better): latency\n"));
    let rows = text.lines().filter(|l| l.contains("8.000000")).count();
    assert_eq!(rows, 1);
}
