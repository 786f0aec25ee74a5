// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_spacing --heading-base-level=0

//! Overstory Spacing: an interactive box-model editor for padding and margin.
//!
//! [`SpacingPlugin`] draws a CSS box model as nine polygons (content, four padding
//! bands and four margin bands) and lets the user drag any band to change the
//! value it represents. It composes the Understory kernels:
//!
//! - `understory_box_model` for the geometry and hit testing,
//! - `understory_spacing_interaction` for drag and highlight state,
//! - `understory_spacing` for the values, snapshot and CSS shorthand.
//!
//! The plugin owns the values. Every accepted change is pushed to a
//! [`SpacingHost`], and [`SpacingPlugin::reset`] restores what the plugin was
//! constructed with.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::Vec2;
//! use overstory_spacing::{ChangeCause, PluginConfig, SpacingChange, SpacingPlugin};
//! use understory_spacing::SpacingValues;
//!
//! let changes: Vec<SpacingChange> = Vec::new();
//! let mut plugin = SpacingPlugin::with_host(
//!     PluginConfig::default(),
//!     SpacingValues::uniform(10.0),
//!     changes,
//! )
//! .unwrap();
//!
//! // Polygon 1 is the top padding band; dragging down grows it.
//! plugin.drag_start(1);
//! plugin.drag_move(1, Vec2::new(0.0, 1.0));
//! plugin.drag_end(1);
//! assert_eq!(plugin.values().top_padding, 11.0);
//! assert_eq!(plugin.host()[0].padding_shorthand().to_string(), "11 10 10 10");
//!
//! plugin.reset();
//! assert_eq!(plugin.values().top_padding, 10.0);
//! assert_eq!(plugin.host()[1].cause, ChangeCause::Reset);
//! ```
//!
//! ## Features
//!
//! - `std` (default) and `libm`: forwarded to `kurbo` and `peniko`.
//! - `tracing`: `debug` events for edits, resets and ignored polygon ids.
//! - `serde`: serialization of `SpacingValues`.

#![no_std]

extern crate alloc;

mod config;
mod host;
mod plugin;

pub use config::PluginConfig;
pub use host::{ChangeCause, FnHost, SpacingChange, SpacingHost};
pub use plugin::SpacingPlugin;

pub use understory_box_model::{Diagram, LayoutError, Region};
pub use understory_spacing::{Shorthand, SpacingField, SpacingSnapshot, SpacingValues};
pub use understory_spacing_interaction::{
    DragStrategy, Highlight, HighlightColors, HighlightTransition, SpacingEdit,
};
