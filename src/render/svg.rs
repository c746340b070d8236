// src/render/svg.rs
//! SVG output for a [`Figure`].

use std::fmt::Write;

use super::figure::{Canvas, Figure};
use super::layout::Point;

const PX_PER_INCH: f64 = 72.0;
const MARGIN: f64 = 40.0;

#[derive(Debug, Default)]
pub struct SvgCanvas {
    out: String,
}

impl SvgCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn into_svg(self) -> String {
        self.out
    }
}

impl Canvas for SvgCanvas {
    fn draw(&mut self, figure: &Figure) {
        let style = &figure.style;
        let width = style.width * PX_PER_INCH;
        let height = style.height * PX_PER_INCH;
        let map = Viewport::fit(figure, width, height);
        let radius = style.node_size.sqrt() / 2.0;

        let _ = writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        let _ = writeln!(
            self.out,
            r#"  <rect width="100%" height="100%" fill="white"/>"#
        );

        for (a, b) in &figure.edges {
            let (Some(pa), Some(pb)) = (figure.nodes.get(a), figure.nodes.get(b)) else {
                continue;
            };
            let (pa, pb) = (map.apply(pa), map.apply(pb));
            let _ = writeln!(
                self.out,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                pa.x,
                pa.y,
                pb.x,
                pb.y,
                escape(&style.edge_color),
                style.edge_width
            );
        }

        for (_, p) in figure.nodes.iter() {
            let p = map.apply(p);
            let _ = writeln!(
                self.out,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="{radius:.2}" fill="{}" fill-opacity="{}"/>"#,
                p.x,
                p.y,
                escape(&style.node_color),
                style.alpha
            );
        }

        for (label, p) in figure.labels.iter() {
            let p = map.apply(p);
            let _ = writeln!(
                self.out,
                r#"  <text x="{:.2}" y="{:.2}" font-size="{}" font-weight="bold" font-family="sans-serif">{}</text>"#,
                p.x,
                p.y,
                style.font_size,
                escape(label)
            );
        }

        self.out.push_str("</svg>\n");
    }
}

/// Maps layout coordinates into the pixel box, y pointing down.
struct Viewport {
    min: Point,
    scale_x: f64,
    scale_y: f64,
    height: f64,
}

impl Viewport {
    fn fit(figure: &Figure, width: f64, height: f64) -> Self {
        let points: Vec<Point> = figure
            .nodes
            .iter()
            .chain(figure.labels.iter())
            .map(|(_, p)| p)
            .collect();

        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        let span = |lo: f64, hi: f64| if hi > lo { hi - lo } else { 1.0 };
        let usable_w = (width - 2.0 * MARGIN).max(1.0);
        let usable_h = (height - 2.0 * MARGIN).max(1.0);

        Self {
            min: Point::new(
                if min_x.is_finite() { min_x } else { 0.0 },
                if min_y.is_finite() { min_y } else { 0.0 },
            ),
            scale_x: usable_w / span(min_x, max_x),
            scale_y: usable_h / span(min_y, max_y),
            height,
        }
    }

    fn apply(&self, p: Point) -> Point {
        Point::new(
            MARGIN + (p.x - self.min.x) * self.scale_x,
            self.height - MARGIN - (p.y - self.min.y) * self.scale_y,
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
