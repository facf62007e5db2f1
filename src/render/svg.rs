use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::render::geometry::{RadarChart, RenderError, polar_offset};

const GRID_COLOR: RGBColor = RGBColor(176, 176, 176);
const GRID_LABEL_COLOR: RGBColor = RGBColor(85, 85, 85);
const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const FILL_OPACITY: f64 = 0.2;

type DrawResult = Result<(), DrawingAreaErrorKind<std::io::Error>>;

/// Draws the chart into an in-memory SVG document.
pub fn render_radar_svg(chart: &RadarChart) -> Result<String, RenderError> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (chart.size, chart.size)).into_drawing_area();
        draw_radar(&root, chart).map_err(|e| RenderError::Draw(e.to_string()))?;
        root.present().map_err(|e| RenderError::Draw(e.to_string()))?;
    }
    Ok(buf)
}

fn draw_radar(root: &DrawingArea<SVGBackend<'_>, Shift>, chart: &RadarChart) -> DrawResult {
    root.fill(&WHITE)?;

    let (cx, cy) = chart.center();
    let radius = chart.radial.radius();
    let font = (chart.size as f64 / 50.0).max(8.0);

    // Grid rings share their fractions across axes.
    if let Some(first) = chart.axes.first() {
        for level in first.grid.iter().skip(1) {
            let mut ring: Vec<(i32, i32)> = chart
                .axes
                .iter()
                .map(|axis| at(cx, cy, polar_offset(axis.angle_deg, level.fraction * radius)))
                .collect();
            if let Some(&start) = ring.first() {
                ring.push(start);
            }
            root.draw(&PathElement::new(ring, GRID_COLOR))?;
        }
    }
    for axis in &chart.axes {
        let tip = at(cx, cy, polar_offset(axis.angle_deg, radius));
        root.draw(&PathElement::new(vec![at(cx, cy, (0.0, 0.0)), tip], GRID_COLOR))?;
    }

    let grid_style = FontDesc::new(FontFamily::SansSerif, font * 0.8, FontStyle::Normal)
        .color(&GRID_LABEL_COLOR)
        .pos(Pos::new(HPos::Left, VPos::Bottom));
    for axis in &chart.axes {
        for level in axis.grid.iter().filter(|l| !l.label.is_empty()) {
            let (x, y) = at(cx, cy, polar_offset(axis.angle_deg, level.fraction * radius));
            root.draw(&Text::new(level.label.clone(), (x + 2, y - 2), grid_style.clone()))?;
        }
    }

    for axis in &chart.axes {
        let (dx, dy) = polar_offset(axis.angle_deg, radius * 1.12);
        let style = FontDesc::new(FontFamily::SansSerif, font, FontStyle::Normal)
            .color(&BLACK)
            .pos(label_anchor(dx, dy, radius));
        root.draw(&Text::new(axis.label.clone(), at(cx, cy, (dx, dy)), style))?;
    }

    let outline: Vec<(i32, i32)> = chart
        .polygon()
        .into_iter()
        .map(|(x, y)| (x.round() as i32, y.round() as i32))
        .collect();
    root.draw(&Polygon::new(
        outline.clone(),
        LINE_COLOR.mix(FILL_OPACITY).filled(),
    ))?;
    root.draw(&PathElement::new(outline, LINE_COLOR.stroke_width(2)))?;

    Ok(())
}

fn at(cx: f64, cy: f64, (dx, dy): (f64, f64)) -> (i32, i32) {
    ((cx + dx).round() as i32, (cy + dy).round() as i32)
}

/// Axis labels sit outside the spoke tip, anchored away from the centre.
fn label_anchor(dx: f64, dy: f64, radius: f64) -> Pos {
    let slack = radius * 0.3;
    let h = if dx > slack {
        HPos::Left
    } else if dx < -slack {
        HPos::Right
    } else {
        HPos::Center
    };
    let v = if dy > slack {
        VPos::Top
    } else if dy < -slack {
        VPos::Bottom
    } else {
        VPos::Center
    };
    Pos::new(h, v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/svg.rs"]
mod tests;
