use nalgebra::Vector2;
use std::fmt::Write as _;

use crate::config::LABEL_RADIUS_FACTOR;
use crate::export::gps_macro::format_value;
use crate::geometries::{BoundingBox2D, Geometry2D};
use crate::phantom::Phantom;
use crate::render::PhantomRenderer;

/// Renders a phantom as a standalone SVG document
///
/// The outline is a translucent disk, each section is bounded by its two wedge edges,
/// wells are drawn as circles and every section is labelled with its feature size.
/// Phantom y points up, so it is negated for SVG's downward y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgRenderer {
    /// Output width and height in pixels
    pub size_px: u32,
    pub outline_color: String,
    pub well_color: String,
    pub show_labels: bool,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            size_px: 600,
            outline_color: "gray".to_string(),
            well_color: "green".to_string(),
            show_labels: true,
        }
    }
}

impl SvgRenderer {
    pub fn new(size_px: u32) -> Self {
        Self {
            size_px,
            ..Self::default()
        }
    }

    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    /// Visible region: the outline plus room for the labels
    fn view_box(&self, phantom: &Phantom) -> BoundingBox2D {
        let outline = phantom.outline().bounding_box();
        let margin = (LABEL_RADIUS_FACTOR + 0.1 - 1.0) * phantom.radius();
        let labels = BoundingBox2D::from_points(phantom.sections().iter().map(|s| s.label_position()));
        match labels {
            Some(labels) if self.show_labels => outline.union(&labels).expand(margin),
            _ => outline.expand(margin),
        }
    }
}

fn svg_point(p: Vector2<f64>) -> (String, String) {
    (format_value(p.x), format_value(-p.y))
}

impl PhantomRenderer for SvgRenderer {
    type Output = String;

    fn render(&self, phantom: &Phantom) -> String {
        let view = self.view_box(phantom);
        let r = phantom.radius();
        let stroke = format_value(r / 250.0);
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            self.size_px,
            self.size_px,
            format_value(view.min.x),
            format_value(-view.max.y),
            format_value(view.width()),
            format_value(view.height())
        );
        let _ = writeln!(
            out,
            r#"  <circle cx="0.0" cy="0.0" r="{}" fill="{}" fill-opacity="0.3"/>"#,
            format_value(r),
            self.outline_color
        );

        for section in phantom.sections() {
            let (start, end) = section.wedge().edge_endpoints();
            for edge in [start, end] {
                let (x, y) = svg_point(edge);
                let _ = writeln!(
                    out,
                    r#"  <line x1="0.0" y1="0.0" x2="{}" y2="{}" stroke="black" stroke-width="{}"/>"#,
                    x, y, stroke
                );
            }
        }

        for section in phantom.sections() {
            let _ = writeln!(out, r#"  <g fill="{}" fill-opacity="0.5">"#, self.well_color);
            for well in section.wells() {
                let (cx, cy) = svg_point(well.center);
                let _ = writeln!(
                    out,
                    r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
                    cx,
                    cy,
                    format_value(well.radius)
                );
            }
            let _ = writeln!(out, "  </g>");
        }

        if self.show_labels {
            let font = format_value(r / 12.0);
            for section in phantom.sections() {
                let (x, y) = svg_point(section.label_position());
                let _ = writeln!(
                    out,
                    r#"  <text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle">{} {}</text>"#,
                    x,
                    y,
                    font,
                    format_value(section.feature_size()),
                    phantom.length_unit()
                );
            }
        }

        out.push_str("</svg>\n");
        out
    }
}
