use super::*;
use crate::model::axes::{AxisRange, scale};
use crate::render::geometry::build_chart;

fn sample_chart() -> RadarChart {
    let ranges = [
        AxisRange::new(0.0, 2000.0),
        AxisRange::new(0.0, 4.0),
        AxisRange::new(0.0, 1000.0),
        AxisRange::new(3.0, 0.0),
    ];
    let scaled = scale(&[120.0, 1.5, 3.0, 0.75], &ranges).unwrap();
    build_chart(&["ips", "resp<avg>", "ports", "q1"], &ranges, &scaled, 6, 600).unwrap()
}

fn text_contents(svg: &str) -> Vec<String> {
    svg.split("<text")
        .skip(1)
        .filter_map(|chunk| {
            let body = &chunk[chunk.find('>')? + 1..];
            Some(body[..body.find("</text>")?].trim().to_string())
        })
        .collect()
}

#[test]
fn test_render_svg_structure() {
    let svg = render_radar_svg(&sample_chart()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("width=\"600\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    // Filled data polygon.
    assert_eq!(svg.matches("<polygon").count(), 1);
    // Five grid rings, four spokes, one outline.
    assert_eq!(svg.matches("<polyline").count(), 10);
    assert!(svg.to_ascii_uppercase().contains("#1F77B4"));
}

#[test]
fn test_render_svg_escapes_labels() {
    let svg = render_radar_svg(&sample_chart()).unwrap();
    assert!(svg.contains("resp&lt;avg&gt;"));
    assert!(!svg.contains("resp<avg>"));
}

#[test]
fn test_render_svg_skips_blank_origin_labels() {
    let svg = render_radar_svg(&sample_chart()).unwrap();
    let texts = text_contents(&svg);
    // Five grid labels per axis plus one axis label each.
    assert_eq!(texts.len(), 24);
    assert!(texts.iter().all(|t| !t.is_empty()));
    assert!(texts.iter().any(|t| t == "2000"));
    assert!(texts.iter().any(|t| t == "400"));
    // Inverted axis: its origin value (3) is blank, its outer value (0) is shown.
    assert!(!texts.iter().any(|t| t == "3"));
    assert!(texts.iter().any(|t| t == "0"));
}

#[test]
fn test_label_anchor_points_away_from_centre() {
    let right = label_anchor(100.0, 0.0, 100.0);
    let top = label_anchor(0.0, -100.0, 100.0);
    assert!(matches!(right.h_pos, HPos::Left));
    assert!(matches!(right.v_pos, VPos::Center));
    assert!(matches!(top.h_pos, HPos::Center));
    assert!(matches!(top.v_pos, VPos::Bottom));
}
