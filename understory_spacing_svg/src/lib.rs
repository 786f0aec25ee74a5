// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spacing_svg --heading-base-level=0

//! SVG export for box-model spacing diagrams.
//!
//! [`render_diagram`] writes a laid-out `understory_box_model` diagram as a
//! standalone SVG document: one `<polygon>` per region, in id order, and one
//! `<text>` per label showing the current value of its spacing field.
//!
//! Polygons carry `id="spacing-polygon:N"` so a host can route DOM events back
//! to region ids. The caller supplies the displayed fill per region, which lets
//! hover and press highlights show up in the output.
//!
//! This is intended for previews and snapshot tests, not as a general renderer.
//!
//! ## Example
//!
//! ```
//! use understory_box_model::layout;
//! use understory_spacing::SpacingValues;
//! use understory_spacing_svg::{render_diagram, resting_fills};
//!
//! let diagram = layout(400.0, 200.0).unwrap();
//! let svg = render_diagram(&diagram, &SpacingValues::uniform(10.0), resting_fills(&diagram));
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<polygon").count(), 9);
//! ```

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use kurbo::Point;
use peniko::Color;
use understory_box_model::{Diagram, Region};
use understory_spacing::SpacingValues;

/// Prefix of every polygon's `id` attribute; the region id follows.
pub const POLYGON_ID_PREFIX: &str = "spacing-polygon:";

/// A fill lookup that always returns each polygon's resting fill.
pub fn resting_fills(diagram: &Diagram) -> impl Fn(Region) -> Color + '_ {
    move |region| diagram.polygon(region).fill
}

/// Render `diagram` showing `values`, filling each region with `fill(region)`.
pub fn render_diagram(
    diagram: &Diagram,
    values: &SpacingValues,
    fill: impl Fn(Region) -> Color,
) -> String {
    let width = fmt_f64(diagram.width());
    let height = fmt_f64(diagram.height());

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );

    for polygon in diagram.polygons() {
        let _ = write!(
            svg,
            "<polygon id=\"{POLYGON_ID_PREFIX}{}\" points=\"{}\"",
            polygon.id(),
            points_attr(&polygon.points())
        );
        write_paint(&mut svg, "fill", fill(polygon.region));
        write_paint(&mut svg, "stroke", polygon.stroke);
        let _ = writeln!(
            svg,
            " stroke-width=\"{}\"/>",
            fmt_f64(polygon.stroke_width)
        );
    }

    for label in diagram.labels() {
        let center = label.center();
        let _ = writeln!(
            svg,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
            fmt_f64(center.x),
            fmt_f64(center.y),
            fmt_f64(label.height),
            fmt_f64(values.get(label.field)),
        );
    }

    svg.push_str("</svg>");
    svg
}

fn points_attr(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", fmt_f64(p.x), fmt_f64(p.y));
    }
    out
}

fn write_paint(out: &mut String, attr: &str, color: Color) {
    let (rgb, a) = color_to_svg(color);
    let _ = write!(out, " {attr}=\"{rgb}\"");
    if a < 1.0 {
        let _ = write!(out, " {attr}-opacity=\"{}\"", fmt_f64(a));
    }
}

fn color_to_svg(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    let a = f64::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn fmt_f64(v: f64) -> String {
    // Integers print bare, everything else with at most three decimals.
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
