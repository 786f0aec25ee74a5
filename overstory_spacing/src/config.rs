// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use understory_box_model::{DiagramStyle, LabelMetrics};
use understory_spacing_interaction::{DragStrategy, HighlightColors};

/// Construction-time configuration for a [`SpacingPlugin`](crate::SpacingPlugin).
///
/// Everything here is fixed for the plugin's lifetime except the size, which
/// [`SpacingPlugin::resize`](crate::SpacingPlugin::resize) can change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PluginConfig {
    /// Outer size of the diagram.
    pub size: Size,
    /// How drag movement maps to value changes.
    pub strategy: DragStrategy,
    /// Polygon fills and stroke.
    pub style: DiagramStyle,
    /// Label box dimensions.
    pub labels: LabelMetrics,
    /// Hover and press fills.
    pub highlight: HighlightColors,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            size: Size::new(400.0, 200.0),
            strategy: DragStrategy::default(),
            style: DiagramStyle::default(),
            labels: LabelMetrics::default(),
            highlight: HighlightColors::default(),
        }
    }
}

impl PluginConfig {
    /// Default configuration with the given outer size.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    /// Replace the drag strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: DragStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
