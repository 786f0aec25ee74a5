// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spacing_interaction --heading-base-level=0

//! Understory Spacing Interaction: state machines for editing a box-model diagram.
//!
//! This crate provides the stateful pieces that sit between raw pointer events and
//! the spacing values shown by an `understory_box_model` diagram:
//!
//! - [`drag`]: track one drag gesture's region and pointer positions, producing
//!   per-event deltas and totals.
//! - [`controller`]: map drag deltas on a region to a bounded edit of exactly one
//!   spacing value, using a [`DragStrategy`] chosen at construction.
//! - [`highlight`]: per-region hover/press state and the fills that go with it.
//!
//! Like the other Understory event-state managers, these types do not route events
//! or render anything. The host decides which region an event belongs to (for
//! example with `Diagram::region_at`) and feeds it in; the managers report what
//! changed.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_box_model::{Region, layout};
//! use understory_spacing::{SpacingField, SpacingValues};
//! use understory_spacing_interaction::DragController;
//! use understory_spacing_interaction::drag::DragState;
//!
//! let diagram = layout(400.0, 200.0).unwrap();
//! let mut values = SpacingValues::uniform(10.0);
//! let mut controller = DragController::default();
//! let mut gesture = DragState::default();
//!
//! // Press inside the left padding band and drag right.
//! let down = Point::new(100.0, 100.0);
//! let region = diagram.region_at(down).unwrap();
//! assert_eq!(region, Region::Band(SpacingField::LeftPadding));
//! gesture.start(region, down);
//! controller.on_drag_start(region, &values);
//!
//! for x in [102.0, 104.0, 106.0] {
//!     let step = gesture.update(Point::new(x, 100.0)).unwrap();
//!     controller.on_drag_move(step.region, step.delta, &mut values);
//! }
//! assert_eq!(values.left_padding, 13.0);
//!
//! if let Some(region) = gesture.end() {
//!     controller.on_drag_end(region);
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `debug` events for accepted edits and ignored drags, and
//!   `trace` events for highlight transitions.
//!
//! This crate is `no_std`.

#![no_std]

pub mod controller;
pub mod drag;
pub mod highlight;

pub use controller::{DragController, DragStrategy, SpacingEdit};
pub use highlight::{Highlight, HighlightColors, HighlightState, HighlightTransition};
