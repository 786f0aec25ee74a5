// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_box_model --heading-base-level=0

//! Understory Box Model: geometry for an interactive box-model diagram.
//!
//! Given only a diagram size, this crate partitions the `width × height`
//! rectangle into nine convex quadrilaterals:
//!
//! - a centered content rectangle (`width / 3 × height / 3`),
//! - four padding bands around it,
//! - four margin bands around those, reaching the diagram edge,
//!
//! and places one label box per band for displaying or editing its value.
//!
//! The diagram is **schematic**: band thickness depends only on the diagram size,
//! never on the spacing values being edited. Editing a value changes the text in a
//! label, not the shapes, so [`layout`] only needs to run again when the size changes.
//!
//! ## Seam-free construction
//!
//! Every band is a [`Quad`] with named corners. Bands are built in a fixed order
//! (content, top padding, top margin, bottom padding, bottom margin, left padding,
//! left margin, right padding, right margin), and each copies the corners it shares
//! with an earlier, inner neighbor instead of recomputing them. Adjacent shapes
//! therefore share bit-identical edges. The left and right bands absorb the four
//! corner regions, giving an octagonal ring topology.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_box_model::{Region, layout};
//! use understory_spacing::SpacingField;
//!
//! let diagram = layout(400.0, 200.0).unwrap();
//!
//! // Content box is centered at a third of the size.
//! let content = diagram.polygon(Region::Content).quad;
//! assert!((content.top_left.x - 400.0 / 3.0).abs() < 1e-9);
//!
//! // The top padding band shares the content box's top edge.
//! let top = diagram.polygon(Region::Band(SpacingField::TopPadding)).quad;
//! assert_eq!(top.bottom_left, content.top_left);
//! assert_eq!(top.bottom_right, content.top_right);
//!
//! // Route a pointer position to a region.
//! assert_eq!(
//!     diagram.region_at(Point::new(200.0, 10.0)),
//!     Some(Region::Band(SpacingField::TopMargin)),
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod diagram;
mod error;
mod quad;
mod region;
mod style;

pub use diagram::{Diagram, LabelPlacement, Polygon, Quads, layout, layout_with};
pub use error::{InvalidRegionId, LayoutError};
pub use quad::Quad;
pub use region::Region;
pub use style::{DiagramStyle, LabelMetrics};
