// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinates of a spacing value: side, layer, and the drag axis they imply.

use core::fmt;

/// One of the four sides of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Side {
    /// The top edge.
    Top,
    /// The right edge.
    Right,
    /// The bottom edge.
    Bottom,
    /// The left edge.
    Left,
}

impl Side {
    /// All sides in CSS shorthand order (top, right, bottom, left).
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The axis along which a band on this side grows.
    ///
    /// Top and bottom bands are stacked vertically; left and right bands horizontally.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

/// Whether a value belongs to the padding or the margin ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Layer {
    /// Space between the content box and the border.
    Padding,
    /// Space outside the border.
    Margin,
}

/// A pointer-delta axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The `x` / `dx` component.
    Horizontal,
    /// The `y` / `dy` component.
    Vertical,
}

/// One of the eight named spacing values.
///
/// Variants are declared in diagram order: each side's padding followed by its
/// margin, for top, bottom, left, then right. [`SpacingField::ordinal`] follows
/// the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SpacingField {
    /// `topPadding`
    TopPadding,
    /// `topMargin`
    TopMargin,
    /// `bottomPadding`
    BottomPadding,
    /// `bottomMargin`
    BottomMargin,
    /// `leftPadding`
    LeftPadding,
    /// `leftMargin`
    LeftMargin,
    /// `rightPadding`
    RightPadding,
    /// `rightMargin`
    RightMargin,
}

impl SpacingField {
    /// All fields in diagram order.
    pub const ALL: [Self; 8] = [
        Self::TopPadding,
        Self::TopMargin,
        Self::BottomPadding,
        Self::BottomMargin,
        Self::LeftPadding,
        Self::LeftMargin,
        Self::RightPadding,
        Self::RightMargin,
    ];

    /// The field for a given side and layer.
    pub const fn new(side: Side, layer: Layer) -> Self {
        match (side, layer) {
            (Side::Top, Layer::Padding) => Self::TopPadding,
            (Side::Top, Layer::Margin) => Self::TopMargin,
            (Side::Bottom, Layer::Padding) => Self::BottomPadding,
            (Side::Bottom, Layer::Margin) => Self::BottomMargin,
            (Side::Left, Layer::Padding) => Self::LeftPadding,
            (Side::Left, Layer::Margin) => Self::LeftMargin,
            (Side::Right, Layer::Padding) => Self::RightPadding,
            (Side::Right, Layer::Margin) => Self::RightMargin,
        }
    }

    /// The side this field sits on.
    pub const fn side(self) -> Side {
        match self {
            Self::TopPadding | Self::TopMargin => Side::Top,
            Self::BottomPadding | Self::BottomMargin => Side::Bottom,
            Self::LeftPadding | Self::LeftMargin => Side::Left,
            Self::RightPadding | Self::RightMargin => Side::Right,
        }
    }

    /// The ring this field belongs to.
    pub const fn layer(self) -> Layer {
        match self {
            Self::TopPadding | Self::BottomPadding | Self::LeftPadding | Self::RightPadding => {
                Layer::Padding
            }
            Self::TopMargin | Self::BottomMargin | Self::LeftMargin | Self::RightMargin => {
                Layer::Margin
            }
        }
    }

    /// The pointer-delta component that drives this field.
    ///
    /// Top/bottom fields follow `dy`; left/right fields follow `dx`.
    pub const fn axis(self) -> Axis {
        self.side().axis()
    }

    /// Zero-based position in [`SpacingField::ALL`].
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// The camelCase key hosts use for this field (for example `"topPadding"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::TopPadding => "topPadding",
            Self::TopMargin => "topMargin",
            Self::BottomPadding => "bottomPadding",
            Self::BottomMargin => "bottomMargin",
            Self::LeftPadding => "leftPadding",
            Self::LeftMargin => "leftMargin",
            Self::RightPadding => "rightPadding",
            Self::RightMargin => "rightMargin",
        }
    }
}

impl fmt::Display for SpacingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_and_layer_round_trip_through_new() {
        for field in SpacingField::ALL {
            assert_eq!(SpacingField::new(field.side(), field.layer()), field);
        }
    }

    #[test]
    fn ordinal_matches_all_order() {
        for (i, field) in SpacingField::ALL.iter().enumerate() {
            assert_eq!(field.ordinal(), i);
        }
    }

    #[test]
    fn vertical_sides_follow_dy() {
        assert_eq!(SpacingField::TopPadding.axis(), Axis::Vertical);
        assert_eq!(SpacingField::BottomMargin.axis(), Axis::Vertical);
        assert_eq!(SpacingField::LeftPadding.axis(), Axis::Horizontal);
        assert_eq!(SpacingField::RightMargin.axis(), Axis::Horizontal);
    }

    #[test]
    fn display_uses_camel_case_key() {
        use alloc::string::ToString;
        assert_eq!(SpacingField::RightMargin.to_string(), "rightMargin");
        assert_eq!(SpacingField::TopPadding.key(), "topPadding");
    }
}
