use crate::report::{RadarSummary, format_f64_6};

pub fn render_report_text(data: &RadarSummary) -> String {
    let mut out = String::new();

    out.push_str("Network Radar Report\n");
    out.push_str("====================\n\n");

    out.push_str(&format!("Input: {}\n", data.input));
    out.push_str(&format!("Profile: {}\n", data.profile));
    out.push_str(&format!(
        "Target frame: [{}, {}] (axis {})\n\n",
        format_f64_6(data.frame.low),
        format_f64_6(data.frame.high),
        data.axes.first().map(|a| a.label.as_str()).unwrap_or("-")
    ));

    let width = data
        .axes
        .iter()
        .map(|a| a.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("axis".len())
        + " (inv)".len();
    out.push_str(&format!(
        "{:<width$}  {:>14}  {:>14}  {:>14}  {:>14}\n",
        "axis", "low", "high", "raw", "scaled"
    ));
    for axis in &data.axes {
        let label = if axis.inverted {
            format!("{} (inv)", axis.label)
        } else {
            axis.label.clone()
        };
        out.push_str(&format!(
            "{:<width$}  {:>14}  {:>14}  {:>14}  {:>14}\n",
            label,
            format_f64_6(axis.low),
            format_f64_6(axis.high),
            format_f64_6(axis.raw),
            format_f64_6(axis.scaled)
        ));
    }

    let inverted: Vec<&str> = data
        .axes
        .iter()
        .filter(|a| a.inverted)
        .map(|a| a.label.as_str())
        .collect();
    if !inverted.is_empty() {
        out.push_str(&format!(
            "\nInverted axes (lower is better): {}\n",
            inverted.join(", ")
        ));
    }

    out
}
