// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The eight spacing values and their reset snapshot.

use crate::field::{Layer, Side, SpacingField};
use crate::shorthand::Shorthand;

/// Padding and margin magnitudes for the four sides of a box.
///
/// Fields are public so hosts can bind them directly, but every mutator on this
/// type clamps at `0`; use [`SpacingValues::clamped`] after writing fields by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpacingValues {
    /// Padding above the content box.
    pub top_padding: f64,
    /// Padding right of the content box.
    pub right_padding: f64,
    /// Padding below the content box.
    pub bottom_padding: f64,
    /// Padding left of the content box.
    pub left_padding: f64,
    /// Margin above the padding.
    pub top_margin: f64,
    /// Margin right of the padding.
    pub right_margin: f64,
    /// Margin below the padding.
    pub bottom_margin: f64,
    /// Margin left of the padding.
    pub left_margin: f64,
}

/// Maps NaN, negatives and `-0.0` to `0.0`.
#[inline]
fn non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}

impl SpacingValues {
    /// All values zero.
    pub const ZERO: Self = Self::uniform(0.0);

    /// All eight values set to `value`.
    ///
    /// `value` is not clamped here so this can stay `const`; pass a non-negative number.
    pub const fn uniform(value: f64) -> Self {
        Self {
            top_padding: value,
            right_padding: value,
            bottom_padding: value,
            left_padding: value,
            top_margin: value,
            right_margin: value,
            bottom_margin: value,
            left_margin: value,
        }
    }

    /// Build from a padding and a margin shorthand.
    pub fn from_shorthands(padding: Shorthand, margin: Shorthand) -> Self {
        let mut values = Self::ZERO;
        values.set_shorthand(Layer::Padding, padding);
        values.set_shorthand(Layer::Margin, margin);
        values
    }

    /// Returns a copy with every field clamped at `0` (NaN also becomes `0`).
    #[must_use]
    pub fn clamped(self) -> Self {
        let mut out = self;
        for field in SpacingField::ALL {
            let v = out.get(field);
            *out.slot(field) = non_negative(v);
        }
        out
    }

    /// Current value of `field`.
    pub const fn get(&self, field: SpacingField) -> f64 {
        match field {
            SpacingField::TopPadding => self.top_padding,
            SpacingField::TopMargin => self.top_margin,
            SpacingField::BottomPadding => self.bottom_padding,
            SpacingField::BottomMargin => self.bottom_margin,
            SpacingField::LeftPadding => self.left_padding,
            SpacingField::LeftMargin => self.left_margin,
            SpacingField::RightPadding => self.right_padding,
            SpacingField::RightMargin => self.right_margin,
        }
    }

    fn slot(&mut self, field: SpacingField) -> &mut f64 {
        match field {
            SpacingField::TopPadding => &mut self.top_padding,
            SpacingField::TopMargin => &mut self.top_margin,
            SpacingField::BottomPadding => &mut self.bottom_padding,
            SpacingField::BottomMargin => &mut self.bottom_margin,
            SpacingField::LeftPadding => &mut self.left_padding,
            SpacingField::LeftMargin => &mut self.left_margin,
            SpacingField::RightPadding => &mut self.right_padding,
            SpacingField::RightMargin => &mut self.right_margin,
        }
    }

    /// Set `field` to `value`, clamped at `0`.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set(&mut self, field: SpacingField, value: f64) -> bool {
        let next = non_negative(value);
        let slot = self.slot(field);
        if *slot == next {
            return false;
        }
        *slot = next;
        true
    }

    /// Increase `field` by `step`.
    ///
    /// Returns `true` if the stored value changed.
    pub fn step_up(&mut self, field: SpacingField, step: f64) -> bool {
        self.set(field, self.get(field) + step)
    }

    /// Decrease `field` by `step`, never going below `0`.
    ///
    /// Returns `true` if the stored value changed; a field already at `0` is left alone.
    pub fn step_down(&mut self, field: SpacingField, step: f64) -> bool {
        self.set(field, self.get(field) - step)
    }

    /// Iterate `(field, value)` pairs in diagram order.
    pub fn iter(&self) -> impl Iterator<Item = (SpacingField, f64)> + '_ {
        SpacingField::ALL.into_iter().map(|f| (f, self.get(f)))
    }

    /// The four values of one ring, in shorthand order.
    pub fn shorthand(&self, layer: Layer) -> Shorthand {
        Shorthand {
            top: self.get(SpacingField::new(Side::Top, layer)),
            right: self.get(SpacingField::new(Side::Right, layer)),
            bottom: self.get(SpacingField::new(Side::Bottom, layer)),
            left: self.get(SpacingField::new(Side::Left, layer)),
        }
    }

    /// Overwrite one ring from a shorthand. Values are clamped at `0`.
    pub fn set_shorthand(&mut self, layer: Layer, shorthand: Shorthand) {
        for side in Side::ALL {
            self.set(SpacingField::new(side, layer), shorthand.get(side));
        }
    }

    /// `padding` as a shorthand.
    pub fn padding_shorthand(&self) -> Shorthand {
        self.shorthand(Layer::Padding)
    }

    /// `margin` as a shorthand.
    pub fn margin_shorthand(&self) -> Shorthand {
        self.shorthand(Layer::Margin)
    }
}

/// An owned copy of [`SpacingValues`] captured once for resetting edits.
///
/// The snapshot never aliases the live values: later edits to the values it was
/// captured from do not reach it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingSnapshot(SpacingValues);

impl SpacingSnapshot {
    /// Capture the current state of `values`.
    pub fn capture(values: &SpacingValues) -> Self {
        Self(*values)
    }

    /// The captured values.
    pub fn values(&self) -> &SpacingValues {
        &self.0
    }

    /// A fresh copy of the captured values.
    pub fn restore(&self) -> SpacingValues {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_down_clamps_at_zero() {
        let mut values = SpacingValues::ZERO;
        values.set(SpacingField::TopPadding, 2.0);

        assert!(values.step_down(SpacingField::TopPadding, 1.0));
        assert_eq!(values.top_padding, 1.0);
        assert!(values.step_down(SpacingField::TopPadding, 1.0));
        assert_eq!(values.top_padding, 0.0);
        assert!(!values.step_down(SpacingField::TopPadding, 1.0));
        assert_eq!(values.top_padding, 0.0);
    }

    #[test]
    fn fractional_value_steps_down_to_zero_not_negative() {
        let mut values = SpacingValues::uniform(0.5);
        values.step_down(SpacingField::RightMargin, 1.0);
        assert_eq!(values.right_margin, 0.0);
    }

    #[test]
    fn step_up_touches_only_one_field() {
        let mut values = SpacingValues::uniform(10.0);
        assert!(values.step_up(SpacingField::LeftMargin, 1.0));

        for (field, v) in values.iter() {
            let expected = if field == SpacingField::LeftMargin { 11.0 } else { 10.0 };
            assert_eq!(v, expected, "{field}");
        }
    }

    #[test]
    fn set_rejects_negative_and_nan() {
        let mut values = SpacingValues::uniform(3.0);
        values.set(SpacingField::BottomPadding, -4.0);
        values.set(SpacingField::BottomMargin, f64::NAN);
        assert_eq!(values.bottom_padding, 0.0);
        assert_eq!(values.bottom_margin, 0.0);
    }

    #[test]
    fn set_same_value_reports_no_change() {
        let mut values = SpacingValues::uniform(3.0);
        assert!(!values.set(SpacingField::TopMargin, 3.0));
    }

    #[test]
    fn clamped_repairs_hand_written_fields() {
        let values = SpacingValues {
            left_padding: -1.0,
            top_margin: f64::NAN,
            ..SpacingValues::uniform(2.0)
        }
        .clamped();
        assert_eq!(values.left_padding, 0.0);
        assert_eq!(values.top_margin, 0.0);
        assert_eq!(values.right_padding, 2.0);
    }

    #[test]
    fn snapshot_is_detached_from_live_values() {
        let mut values = SpacingValues::uniform(10.0);
        let snapshot = SpacingSnapshot::capture(&values);

        values.step_up(SpacingField::TopPadding, 1.0);
        assert_eq!(snapshot.values().top_padding, 10.0);

        let mut restored = snapshot.restore();
        restored.step_up(SpacingField::TopPadding, 5.0);
        assert_eq!(snapshot.values().top_padding, 10.0);
    }

    #[test]
    fn shorthands_split_by_layer() {
        let values = SpacingValues {
            top_padding: 1.0,
            right_padding: 2.0,
            bottom_padding: 3.0,
            left_padding: 4.0,
            ..SpacingValues::uniform(9.0)
        };
        assert_eq!(values.padding_shorthand(), Shorthand::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(values.margin_shorthand(), Shorthand::uniform(9.0));

        let rebuilt =
            SpacingValues::from_shorthands(values.padding_shorthand(), values.margin_shorthand());
        assert_eq!(rebuilt, values);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_camel_case_keys() {
        let values = SpacingValues::uniform(10.0);
        let json = serde_json::to_value(values).unwrap();
        assert_eq!(json["topPadding"], 10.0);
        assert_eq!(json["rightMargin"], 10.0);

        let back: SpacingValues = serde_json::from_value(json).unwrap();
        assert_eq!(back, values);
    }
}
