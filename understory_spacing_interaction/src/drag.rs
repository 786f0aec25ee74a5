// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture tracking: which region is being dragged, and how far the pointer moved.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`DragState::start`], passing the pressed region and pointer position.
//! 2) On each move event, call [`DragState::update`] to get the movement since the last update
//!    together with the total offset since the start.
//! 3) End the gesture with [`DragState::end`].
//!
//! Hosts whose input library already reports per-event deltas can skip this type and
//! feed those deltas straight into [`DragController`](crate::DragController).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_box_model::Region;
//! use understory_spacing::SpacingField;
//! use understory_spacing_interaction::drag::DragState;
//!
//! let region = Region::Band(SpacingField::TopPadding);
//! let mut drag = DragState::default();
//!
//! drag.start(region, Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! let step = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(step.region, region);
//! assert_eq!(step.delta, Vec2::new(5.0, 5.0));
//!
//! let step = drag.update(Point::new(15.0, 40.0)).unwrap();
//! assert_eq!(step.delta, Vec2::new(0.0, 15.0));
//! assert_eq!(step.total, Vec2::new(5.0, 20.0));
//! ```

use kurbo::{Point, Vec2};
use understory_box_model::Region;

/// One pointer movement within a drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    /// Region the gesture started on.
    pub region: Region,
    /// Movement since the previous update.
    pub delta: Vec2,
    /// Movement since the gesture started.
    pub total: Vec2,
}

/// Tracks the pointer positions of a single drag gesture.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Region the active gesture started on.
    pub region: Option<Region>,
    /// Start position of the drag operation.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during drag.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Start tracking a new gesture on `region` from `pos`.
    ///
    /// Any gesture already in progress is replaced.
    pub fn start(&mut self, region: Region, pos: Point) {
        self.region = Some(region);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record a new pointer position.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(&mut self, pos: Point) -> Option<DragStep> {
        let region = self.region?;
        let start = self.start_pos?;
        let last = self.last_pos.replace(pos).unwrap_or(start);
        Some(DragStep {
            region,
            delta: pos - last,
            total: pos - start,
        })
    }

    /// Offset of `current_pos` from the gesture's start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// End the current gesture, returning the region it was on.
    pub fn end(&mut self) -> Option<Region> {
        self.start_pos = None;
        self.last_pos = None;
        self.region.take()
    }

    /// Returns `true` while a gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.region.is_some() && self.start_pos.is_some()
    }
}
