// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spacing --heading-base-level=0

//! Understory Spacing: the eight padding/margin magnitudes edited by a box-model diagram.
//!
//! A CSS box is surrounded by padding and then margin on each of its four sides.
//! This crate models those eight magnitudes as independent, non-negative numbers.
//! It does **not** resolve CSS layout: there are no percentages, `auto` values, or
//! collapsing margins here, only values a user can see and nudge.
//!
//! The core concepts are:
//!
//! - [`Side`] and [`Layer`]: the two coordinates of a spacing value
//!   (top/right/bottom/left and padding/margin).
//! - [`SpacingField`]: one of the eight named values, with the drag [`Axis`] it
//!   responds to.
//! - [`SpacingValues`]: the eight values themselves. Every mutator clamps at `0`.
//! - [`SpacingSnapshot`]: an owned copy captured once, used to reset edits.
//! - [`Shorthand`]: the four-value CSS shorthand (`"top right bottom left"`).
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_spacing::{SpacingField, SpacingSnapshot, SpacingValues};
//!
//! let mut values = SpacingValues::uniform(10.0);
//! let snapshot = SpacingSnapshot::capture(&values);
//!
//! values.step_up(SpacingField::TopPadding, 1.0);
//! assert_eq!(values.top_padding, 11.0);
//!
//! // Stepping down never crosses zero.
//! values.set(SpacingField::LeftMargin, 0.5);
//! values.step_down(SpacingField::LeftMargin, 1.0);
//! assert_eq!(values.left_margin, 0.0);
//!
//! values = snapshot.restore();
//! assert_eq!(values, SpacingValues::uniform(10.0));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` with camelCase keys
//!   (`topPadding`, `rightMargin`, ...).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod field;
mod shorthand;
mod values;

pub use field::{Axis, Layer, Side, SpacingField};
pub use shorthand::{Shorthand, ShorthandError};
pub use values::{SpacingSnapshot, SpacingValues};
