// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use peniko::Color;
use understory_spacing::Layer;

use crate::region::Region;

/// Fill and stroke used for the diagram's polygons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagramStyle {
    /// Fill of the content rectangle.
    pub content_fill: Color,
    /// Fill of the four padding bands.
    pub padding_fill: Color,
    /// Fill of the four margin bands.
    pub margin_fill: Color,
    /// Outline color of every polygon.
    pub stroke: Color,
    /// Outline width of every polygon.
    pub stroke_width: f64,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            content_fill: Color::from_rgba8(255, 0, 0, 255),
            padding_fill: Color::from_rgba8(0, 0, 255, 255),
            margin_fill: Color::from_rgba8(0, 128, 0, 255),
            stroke: Color::from_rgba8(0, 0, 0, 255),
            stroke_width: 1.0,
        }
    }
}

impl DiagramStyle {
    /// The resting fill for `region`.
    pub fn fill_for(&self, region: Region) -> Color {
        match region.field().map(|f| f.layer()) {
            None => self.content_fill,
            Some(Layer::Padding) => self.padding_fill,
            Some(Layer::Margin) => self.margin_fill,
        }
    }
}

/// Size of a label box and the inset its own border and padding add.
///
/// Labels are centered using the outer size (`width + inset_x`, `height + inset_y`)
/// so that a rendered input with a border and padding still sits centered in its band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelMetrics {
    /// Inner width of the label box.
    pub width: f64,
    /// Inner height of the label box.
    pub height: f64,
    /// Horizontal border plus padding.
    pub inset_x: f64,
    /// Vertical border plus padding.
    pub inset_y: f64,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 10.0,
            inset_x: 8.0,
            inset_y: 6.0,
        }
    }
}

impl LabelMetrics {
    /// Size of the label including its inset.
    pub fn outer_size(&self) -> Size {
        Size::new(self.width + self.inset_x, self.height + self.inset_y)
    }
}
