// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: turn drag deltas on a region into bounded edits of one spacing value.
//!
//! The controller does not own the values. Each move call borrows them mutably,
//! applies at most one edit and reports it, so a host always knows which value
//! changed and can notify whoever displays it.
//!
//! ## Strategies
//!
//! - [`DragStrategy::IncrementalStep`] (default): every move event nudges the
//!   region's value by a fixed step. The sign of the delta along the region's axis
//!   picks the direction (`> 0` increments, anything else decrements); its magnitude
//!   is ignored. All eight bands are editable.
//! - [`DragStrategy::AbsoluteShorthand`] (experimental): the value follows the
//!   pointer. It is set to the value at drag start plus the total movement since
//!   then. Only `topPadding` is bound; other regions ignore drags.
//!
//! Both strategies clamp at `0`. Drags on the content region are always ignored.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use understory_box_model::Region;
//! use understory_spacing::{SpacingField, SpacingValues};
//! use understory_spacing_interaction::{DragController, DragStrategy};
//!
//! let top = Region::Band(SpacingField::TopPadding);
//! let mut values = SpacingValues::uniform(10.0);
//! let mut drag = DragController::new(DragStrategy::default());
//!
//! drag.on_drag_start(top, &values);
//! // A 5px move still steps by one.
//! let edit = drag.on_drag_move(top, Vec2::new(0.0, 5.0), &mut values).unwrap();
//! assert_eq!((edit.previous, edit.value), (10.0, 11.0));
//! drag.on_drag_end(top);
//! ```

use kurbo::Vec2;
use understory_box_model::Region;
use understory_spacing::{Axis, SpacingField, SpacingValues};

/// How drag movement maps to value changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragStrategy {
    /// Step the value by `step` per move event, in the direction of the delta's sign.
    IncrementalStep {
        /// Amount added or removed per event.
        ///
        /// A step that is not finite and positive is replaced by `1.0` when the
        /// controller is built.
        step: f64,
    },
    /// Set `topPadding` to its drag-start value plus the vertical movement since then.
    AbsoluteShorthand,
}

impl Default for DragStrategy {
    fn default() -> Self {
        Self::IncrementalStep { step: 1.0 }
    }
}

impl DragStrategy {
    /// Whether drags on `field` can change it under this strategy.
    pub fn binds(&self, field: SpacingField) -> bool {
        match self {
            Self::IncrementalStep { .. } => true,
            Self::AbsoluteShorthand => field == SpacingField::TopPadding,
        }
    }
}

/// A single accepted change to one spacing value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingEdit {
    /// The value that changed.
    pub field: SpacingField,
    /// Value before the edit.
    pub previous: f64,
    /// Value after the edit.
    pub value: f64,
}

#[derive(Clone, Copy, Debug)]
struct ActiveDrag {
    field: SpacingField,
    origin: f64,
    offset: Vec2,
}

/// Maps drag gestures on diagram regions to spacing edits.
///
/// At most one gesture is tracked. While it is active, moves reported for any
/// other region are ignored.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    strategy: DragStrategy,
    active: Option<ActiveDrag>,
}

fn component(delta: Vec2, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => delta.x,
        Axis::Vertical => delta.y,
    }
}

impl DragController {
    /// Create a controller using `strategy`.
    ///
    /// An `IncrementalStep` with a zero, negative or non-finite step falls back to `1.0`.
    pub fn new(strategy: DragStrategy) -> Self {
        let strategy = match strategy {
            DragStrategy::IncrementalStep { step } if !(step.is_finite() && step > 0.0) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(step, "invalid drag step, using 1.0");
                DragStrategy::default()
            }
            other => other,
        };
        Self {
            strategy,
            active: None,
        }
    }

    /// The strategy chosen at construction.
    pub fn strategy(&self) -> DragStrategy {
        self.strategy
    }

    /// Returns `true` while a gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The region of the active gesture.
    pub fn active_region(&self) -> Option<Region> {
        self.active.map(|a| Region::Band(a.field))
    }

    /// Begin a gesture on `region`, remembering the bound value's current state.
    ///
    /// Ignored for the content region.
    pub fn on_drag_start(&mut self, region: Region, values: &SpacingValues) {
        let Some(field) = region.field() else {
            return;
        };
        self.active = Some(ActiveDrag {
            field,
            origin: values.get(field),
            offset: Vec2::ZERO,
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(%field, origin = values.get(field), "drag started");
    }

    /// Apply one move event on `region`.
    ///
    /// Returns the edit when a value actually changed. Moves on the content region,
    /// on a region other than the active gesture's, or on a region the strategy
    /// does not bind return `None`, as do decrements of a value already at `0`.
    pub fn on_drag_move(
        &mut self,
        region: Region,
        delta: Vec2,
        values: &mut SpacingValues,
    ) -> Option<SpacingEdit> {
        let field = region.field()?;
        if let Some(active) = self.active
            && active.field != field
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(%field, active = %active.field, "ignoring move outside active drag");
            return None;
        }
        if !self.strategy.binds(field) {
            return None;
        }

        let previous = values.get(field);
        let changed = match self.strategy {
            DragStrategy::IncrementalStep { step } => {
                if component(delta, field.axis()) > 0.0 {
                    values.step_up(field, step)
                } else {
                    values.step_down(field, step)
                }
            }
            DragStrategy::AbsoluteShorthand => {
                // Needs the drag-start value as its origin.
                let active = self.active.as_mut()?;
                active.offset += delta;
                values.set(field, active.origin + component(active.offset, field.axis()))
            }
        };
        if !changed {
            return None;
        }

        let edit = SpacingEdit {
            field,
            previous,
            value: values.get(field),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(%field, previous, value = edit.value, "spacing edited by drag");
        Some(edit)
    }

    /// End the gesture on `region`. Ends for other regions are ignored.
    pub fn on_drag_end(&mut self, region: Region) {
        if self.active_region() == Some(region) {
            self.active = None;
            #[cfg(feature = "tracing")]
            tracing::debug!(?region, "drag ended");
        }
    }
}
