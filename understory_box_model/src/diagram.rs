// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagram layout: nine polygons and eight label placements from a size.

use kurbo::{Point, Rect, Size};
use peniko::Color;
use understory_spacing::SpacingField;

use crate::error::LayoutError;
use crate::quad::Quad;
use crate::region::Region;
use crate::style::{DiagramStyle, LabelMetrics};

/// The nine quads of the diagram, one named field per region.
///
/// Built by [`Quads::new`] in dependency order: each band copies the corners it
/// shares with the content box or with an inner band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quads {
    /// Content rectangle.
    pub content: Quad,
    /// Top padding band.
    pub top_padding: Quad,
    /// Top margin band.
    pub top_margin: Quad,
    /// Bottom padding band.
    pub bottom_padding: Quad,
    /// Bottom margin band.
    pub bottom_margin: Quad,
    /// Left padding band, including the two left corner regions of the padding ring.
    pub left_padding: Quad,
    /// Left margin band, including the two left corner regions of the margin ring.
    pub left_margin: Quad,
    /// Right padding band, including the two right corner regions of the padding ring.
    pub right_padding: Quad,
    /// Right margin band, including the two right corner regions of the margin ring.
    pub right_margin: Quad,
}

impl Quads {
    /// Partition `size` into content, padding and margin quads.
    ///
    /// The content box is `size / 3`, centered. The gap on each side is split
    /// evenly between the padding and margin bands.
    pub fn new(size: Size) -> Self {
        let Size { width, height } = size;
        let inner_width = width / 3.0;
        let inner_height = height / 3.0;
        let inner_left = (width - inner_width) / 2.0;
        let inner_top = (height - inner_height) / 2.0;
        let inner_right = inner_left + inner_width;
        let inner_bottom = inner_top + inner_height;
        let band_x = inner_left / 2.0;
        let band_y = inner_top / 2.0;

        let content = Quad::new(
            Point::new(inner_left, inner_top),
            Point::new(inner_right, inner_top),
            Point::new(inner_right, inner_bottom),
            Point::new(inner_left, inner_bottom),
        );
        let top_padding = Quad::new(
            Point::new(band_x, band_y),
            Point::new(inner_right + band_x, band_y),
            content.top_right,
            content.top_left,
        );
        let top_margin = Quad::new(
            Point::ZERO,
            Point::new(width, 0.0),
            top_padding.top_right,
            top_padding.top_left,
        );
        let bottom_padding = Quad::new(
            content.bottom_left,
            content.bottom_right,
            Point::new(inner_right + band_x, inner_bottom + band_y),
            Point::new(band_x, inner_bottom + band_y),
        );
        let bottom_margin = Quad::new(
            bottom_padding.bottom_left,
            bottom_padding.bottom_right,
            Point::new(width, height),
            Point::new(0.0, height),
        );
        let left_padding = Quad::new(
            top_padding.top_left,
            content.top_left,
            content.bottom_left,
            bottom_padding.bottom_left,
        );
        let left_margin = Quad::new(
            top_margin.top_left,
            left_padding.top_left,
            left_padding.bottom_left,
            bottom_margin.bottom_left,
        );
        let right_padding = Quad::new(
            content.top_right,
            top_padding.top_right,
            bottom_padding.bottom_right,
            content.bottom_right,
        );
        let right_margin = Quad::new(
            top_margin.bottom_right,
            top_margin.top_right,
            bottom_margin.bottom_right,
            bottom_margin.top_right,
        );

        Self {
            content,
            top_padding,
            top_margin,
            bottom_padding,
            bottom_margin,
            left_padding,
            left_margin,
            right_padding,
            right_margin,
        }
    }

    /// The quad for `region`.
    pub fn get(&self, region: Region) -> Quad {
        match region {
            Region::Content => self.content,
            Region::Band(field) => match field {
                SpacingField::TopPadding => self.top_padding,
                SpacingField::TopMargin => self.top_margin,
                SpacingField::BottomPadding => self.bottom_padding,
                SpacingField::BottomMargin => self.bottom_margin,
                SpacingField::LeftPadding => self.left_padding,
                SpacingField::LeftMargin => self.left_margin,
                SpacingField::RightPadding => self.right_padding,
                SpacingField::RightMargin => self.right_margin,
            },
        }
    }
}

/// One filled, outlined shape of the diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    /// Which region this polygon draws.
    pub region: Region,
    /// Corner geometry.
    pub quad: Quad,
    /// Resting fill color.
    pub fill: Color,
    /// Outline color.
    pub stroke: Color,
    /// Outline width.
    pub stroke_width: f64,
}

impl Polygon {
    /// Polygon id (see [`Region`]).
    pub const fn id(&self) -> u8 {
        self.region.id()
    }

    /// Closed point ring: top-left, top-right, bottom-right, bottom-left, top-left.
    pub const fn points(&self) -> [Point; 5] {
        self.quad.ring()
    }
}

/// Where to put the label that shows one spacing value.
///
/// `left`/`top` is the outer top-left corner of the label box, in diagram space.
/// `width`/`height` is the inner size; the box occupies `outer` once its border
/// and padding are included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// The value this label displays.
    pub field: SpacingField,
    /// Outer left edge.
    pub left: f64,
    /// Outer top edge.
    pub top: f64,
    /// Inner width.
    pub width: f64,
    /// Inner height.
    pub height: f64,
    /// Size including border and padding.
    pub outer: Size,
}

impl LabelPlacement {
    /// Outer bounds of the label box.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size((self.left, self.top), self.outer)
    }

    /// Center of the label box.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// A laid-out diagram.
///
/// Produced by [`layout`] or [`layout_with`]. Depends only on its size and style,
/// never on the spacing values it displays.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
    size: Size,
    quads: Quads,
    polygons: [Polygon; 9],
    labels: [LabelPlacement; 8],
}

/// Lay out a diagram of `width × height` with the default style and label metrics.
///
/// Fails with [`LayoutError::InvalidDimension`] unless both dimensions are finite and positive.
pub fn layout(width: f64, height: f64) -> Result<Diagram, LayoutError> {
    layout_with(
        Size::new(width, height),
        &DiagramStyle::default(),
        &LabelMetrics::default(),
    )
}

/// Lay out a diagram with an explicit style and label metrics.
pub fn layout_with(
    size: Size,
    style: &DiagramStyle,
    metrics: &LabelMetrics,
) -> Result<Diagram, LayoutError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(size.width) || !valid(size.height) {
        return Err(LayoutError::InvalidDimension {
            width: size.width,
            height: size.height,
        });
    }

    let quads = Quads::new(size);
    let polygons = Region::ALL.map(|region| Polygon {
        region,
        quad: quads.get(region),
        fill: style.fill_for(region),
        stroke: style.stroke,
        stroke_width: style.stroke_width,
    });
    let labels = SpacingField::ALL.map(|field| place_label(size, metrics, field));

    Ok(Diagram {
        size,
        quads,
        polygons,
        labels,
    })
}

/// Center a label in its band along both axes.
fn place_label(size: Size, metrics: &LabelMetrics, field: SpacingField) -> LabelPlacement {
    let Size { width, height } = size;
    let outer = metrics.outer_size();
    let inner_width = width / 3.0;
    let inner_height = height / 3.0;
    let inner_left = (width - inner_width) / 2.0;
    let inner_top = (height - inner_height) / 2.0;
    let band_x = inner_left / 2.0;
    let band_y = inner_top / 2.0;

    // Offsets that center the outer box inside a band of the given thickness.
    let in_band_y = (band_y - outer.height) / 2.0;
    let in_band_x = (band_x - outer.width) / 2.0;
    let centered_x = (width - outer.width) / 2.0;
    let centered_y = (height - outer.height) / 2.0;

    let (left, top) = match field {
        SpacingField::TopMargin => (centered_x, in_band_y),
        SpacingField::TopPadding => (centered_x, band_y + in_band_y),
        SpacingField::BottomPadding => (centered_x, inner_top + inner_height + in_band_y),
        SpacingField::BottomMargin => (centered_x, inner_top + inner_height + band_y + in_band_y),
        SpacingField::LeftMargin => (in_band_x, centered_y),
        SpacingField::LeftPadding => (band_x + in_band_x, centered_y),
        SpacingField::RightPadding => (inner_left + inner_width + in_band_x, centered_y),
        SpacingField::RightMargin => (inner_left + inner_width + band_x + in_band_x, centered_y),
    };

    LabelPlacement {
        field,
        left,
        top,
        width: metrics.width,
        height: metrics.height,
        outer,
    }
}

impl Diagram {
    /// Diagram size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Diagram width.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// Diagram height.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// The named quads.
    pub fn quads(&self) -> &Quads {
        &self.quads
    }

    /// All nine polygons in id order.
    pub fn polygons(&self) -> &[Polygon; 9] {
        &self.polygons
    }

    /// The polygon for `region`.
    pub fn polygon(&self, region: Region) -> &Polygon {
        &self.polygons[region.index()]
    }

    /// All eight label placements in field order.
    pub fn labels(&self) -> &[LabelPlacement; 8] {
        &self.labels
    }

    /// The label placement for `field`.
    pub fn label(&self, field: SpacingField) -> &LabelPlacement {
        &self.labels[field.ordinal()]
    }

    /// The region under `pt`, if `pt` is inside the diagram.
    ///
    /// Regions are tested in id order, so the content box wins over bands.
    pub fn region_at(&self, pt: Point) -> Option<Region> {
        if !self.size.to_rect().contains(pt) {
            return None;
        }
        self.polygons
            .iter()
            .find(|p| p.quad.contains(pt))
            .map(|p| p.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_spacing::Axis;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(matches!(
            layout(0.0, 200.0),
            Err(LayoutError::InvalidDimension { .. })
        ));
        assert!(matches!(
            layout(400.0, -1.0),
            Err(LayoutError::InvalidDimension { .. })
        ));
        assert!(matches!(
            layout(f64::NAN, 200.0),
            Err(LayoutError::InvalidDimension { .. })
        ));
        assert!(matches!(
            layout(f64::INFINITY, 200.0),
            Err(LayoutError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn content_box_is_centered_third() {
        let d = layout(400.0, 200.0).unwrap();
        let c = d.quads().content;
        assert!(approx(c.top_left.x, 400.0 / 3.0));
        assert!(approx(c.top_left.y, 200.0 / 3.0));
        assert!(approx(c.bottom_right.x, 800.0 / 3.0));
        assert!(approx(c.bottom_right.y, 400.0 / 3.0));
    }

    #[test]
    fn every_polygon_ring_is_closed_and_clockwise() {
        let d = layout(400.0, 200.0).unwrap();
        for p in d.polygons() {
            let ring = p.points();
            assert_eq!(ring[0], ring[4]);
            // Clockwise in y-down space means a positive shoelace sum.
            let mut twice = 0.0;
            for w in ring.windows(2) {
                twice += w[0].x * w[1].y - w[1].x * w[0].y;
            }
            assert!(twice > 0.0, "region {:?} is not clockwise", p.region);
        }
    }

    #[test]
    fn polygons_are_in_id_order() {
        let d = layout(300.0, 300.0).unwrap();
        for (i, p) in d.polygons().iter().enumerate() {
            assert_eq!(usize::from(p.id()), i);
        }
    }

    #[test]
    fn shared_edges_are_identical() {
        let q = *layout(123.4, 56.7).unwrap().quads();

        // Padding bands hug the content box.
        assert_eq!(q.top_padding.bottom_left, q.content.top_left);
        assert_eq!(q.top_padding.bottom_right, q.content.top_right);
        assert_eq!(q.bottom_padding.top_left, q.content.bottom_left);
        assert_eq!(q.bottom_padding.top_right, q.content.bottom_right);
        assert_eq!(q.left_padding.top_right, q.content.top_left);
        assert_eq!(q.left_padding.bottom_right, q.content.bottom_left);
        assert_eq!(q.right_padding.top_left, q.content.top_right);
        assert_eq!(q.right_padding.bottom_left, q.content.bottom_right);

        // Margin bands hug the padding ring.
        assert_eq!(q.top_margin.bottom_left, q.top_padding.top_left);
        assert_eq!(q.top_margin.bottom_right, q.top_padding.top_right);
        assert_eq!(q.bottom_margin.top_left, q.bottom_padding.bottom_left);
        assert_eq!(q.bottom_margin.top_right, q.bottom_padding.bottom_right);
        assert_eq!(q.left_margin.top_right, q.left_padding.top_left);
        assert_eq!(q.left_margin.bottom_right, q.left_padding.bottom_left);
        assert_eq!(q.right_margin.top_left, q.right_padding.top_right);
        assert_eq!(q.right_margin.bottom_left, q.right_padding.bottom_right);

        // Side bands meet top/bottom bands along the ring diagonals.
        assert_eq!(q.left_padding.top_left, q.top_padding.top_left);
        assert_eq!(q.left_padding.bottom_left, q.bottom_padding.bottom_left);
        assert_eq!(q.right_padding.top_right, q.top_padding.top_right);
        assert_eq!(q.right_padding.bottom_right, q.bottom_padding.bottom_right);
        assert_eq!(q.left_margin.top_left, q.top_margin.top_left);
        assert_eq!(q.right_margin.top_right, q.top_margin.top_right);
        assert_eq!(q.left_margin.bottom_left, q.bottom_margin.bottom_left);
        assert_eq!(q.right_margin.bottom_right, q.bottom_margin.bottom_right);
    }

    #[test]
    fn polygons_tile_the_diagram() {
        for (w, h) in [(400.0, 200.0), (1.0, 1.0), (33.3, 999.0), (1e6, 3.0)] {
            let d = layout(w, h).unwrap();
            let total: f64 = d.polygons().iter().map(|p| p.quad.area()).sum();
            assert!(
                (total - w * h).abs() <= 1e-9 * w * h,
                "{w}x{h}: covered {total}"
            );
        }
    }

    #[test]
    fn outer_corners_reach_diagram_edges() {
        let d = layout(400.0, 200.0).unwrap();
        let q = d.quads();
        assert_eq!(q.top_margin.top_left, Point::new(0.0, 0.0));
        assert_eq!(q.top_margin.top_right, Point::new(400.0, 0.0));
        assert_eq!(q.bottom_margin.bottom_right, Point::new(400.0, 200.0));
        assert_eq!(q.bottom_margin.bottom_left, Point::new(0.0, 200.0));
    }

    #[test]
    fn layout_is_deterministic() {
        let a = layout(321.0, 123.0).unwrap();
        let b = layout(321.0, 123.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn labels_center_in_their_bands() {
        let (w, h) = (400.0, 200.0);
        let d = layout(w, h).unwrap();
        let q = d.quads();
        let c = q.content;

        // (field, band start, band end) along the field's axis.
        let bands = [
            (SpacingField::TopMargin, 0.0, q.top_padding.top_left.y),
            (SpacingField::TopPadding, q.top_padding.top_left.y, c.top_left.y),
            (SpacingField::BottomPadding, c.bottom_left.y, q.bottom_padding.bottom_left.y),
            (SpacingField::BottomMargin, q.bottom_padding.bottom_left.y, h),
            (SpacingField::LeftMargin, 0.0, q.left_padding.top_left.x),
            (SpacingField::LeftPadding, q.left_padding.top_left.x, c.top_left.x),
            (SpacingField::RightPadding, c.top_right.x, q.right_padding.top_right.x),
            (SpacingField::RightMargin, q.right_margin.top_left.x, w),
        ];
        for (field, start, end) in bands {
            let center = d.label(field).center();
            let mid = (start + end) / 2.0;
            let (along, across, diagram_mid) = match field.axis() {
                Axis::Vertical => (center.y, center.x, w / 2.0),
                Axis::Horizontal => (center.x, center.y, h / 2.0),
            };
            assert!(approx(along, mid), "{field}: {along} vs band mid {mid}");
            assert!(approx(across, diagram_mid), "{field}: {across} vs {diagram_mid}");
        }
    }

    #[test]
    fn label_uses_reference_offsets() {
        let d = layout(400.0, 200.0).unwrap();
        let top_margin = d.label(SpacingField::TopMargin);
        // (400 - (30 + 8)) / 2 and ((200/3)/2 - (10 + 6)) / 2
        assert!(approx(top_margin.left, 181.0));
        assert!(approx(top_margin.top, (100.0 / 3.0 - 16.0) / 2.0));
        assert_eq!(top_margin.width, 30.0);
        assert_eq!(top_margin.height, 10.0);
    }

    #[test]
    fn labels_are_in_field_order() {
        let d = layout(400.0, 200.0).unwrap();
        for (label, field) in d.labels().iter().zip(SpacingField::ALL) {
            assert_eq!(label.field, field);
        }
    }

    #[test]
    fn region_at_routes_points() {
        let d = layout(400.0, 200.0).unwrap();
        let cases = [
            (Point::new(200.0, 100.0), Region::Content),
            (Point::new(200.0, 50.0), Region::Band(SpacingField::TopPadding)),
            (Point::new(200.0, 10.0), Region::Band(SpacingField::TopMargin)),
            (Point::new(200.0, 150.0), Region::Band(SpacingField::BottomPadding)),
            (Point::new(200.0, 190.0), Region::Band(SpacingField::BottomMargin)),
            (Point::new(100.0, 100.0), Region::Band(SpacingField::LeftPadding)),
            (Point::new(10.0, 100.0), Region::Band(SpacingField::LeftMargin)),
            (Point::new(300.0, 100.0), Region::Band(SpacingField::RightPadding)),
            (Point::new(390.0, 100.0), Region::Band(SpacingField::RightMargin)),
        ];
        for (pt, expected) in cases {
            assert_eq!(d.region_at(pt), Some(expected), "{pt:?}");
        }
    }

    #[test]
    fn region_at_outside_is_none() {
        let d = layout(400.0, 200.0).unwrap();
        assert_eq!(d.region_at(Point::new(-1.0, 100.0)), None);
        assert_eq!(d.region_at(Point::new(200.0, 250.0)), None);
    }

    #[test]
    fn custom_style_flows_into_polygons() {
        let style = DiagramStyle {
            stroke_width: 2.5,
            ..DiagramStyle::default()
        };
        let d = layout_with(Size::new(90.0, 60.0), &style, &LabelMetrics::default()).unwrap();
        assert!(d.polygons().iter().all(|p| p.stroke_width == 2.5));
        assert_eq!(
            d.polygon(Region::Band(SpacingField::TopMargin)).fill,
            style.margin_fill
        );
    }
}
