// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover/press highlighting for diagram regions.
//!
//! Each interactive region moves through a small state machine:
//!
//! ```text
//! Normal --enter--> Hovered --down--> Pressed
//!   ^                 |  ^              |
//!   +------leave------+  +------up------+
//!   ^                                   |
//!   +---------------leave---------------+
//! ```
//!
//! Entering from `Normal` saves the region's current fill and shows the highlight
//! color. Pressing shows the selected color; releasing goes back to the highlight
//! color, since the pointer is still over the region. Leaving restores the saved fill.
//! The content region never changes.
//!
//! Every region keeps its own saved fill, so overlapping hovers (for example from
//! several pointers) restore correctly.
//!
//! ## Minimal example
//!
//! ```
//! use peniko::Color;
//! use understory_box_model::Region;
//! use understory_spacing::SpacingField;
//! use understory_spacing_interaction::highlight::{Highlight, HighlightState};
//!
//! let region = Region::Band(SpacingField::TopMargin);
//! let resting = Color::from_rgba8(0, 128, 0, 255);
//! let mut hl = HighlightState::default();
//!
//! hl.pointer_enter(region, resting);
//! assert_eq!(hl.state(region), Highlight::Hovered);
//! hl.pointer_down(region);
//! assert_eq!(hl.fill(region), Some(hl.colors().selected));
//! hl.pointer_up(region);
//! hl.pointer_leave(region);
//! assert_eq!(hl.fill(region), Some(resting));
//! ```

use peniko::Color;
use understory_box_model::Region;

/// Visual interaction state of one region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Not under the pointer.
    #[default]
    Normal,
    /// Under the pointer.
    Hovered,
    /// Under the pointer with a button held.
    Pressed,
}

/// Colors shown while a region is hovered or pressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightColors {
    /// Fill while hovered.
    pub highlight: Color,
    /// Fill while pressed.
    pub selected: Color,
}

impl Default for HighlightColors {
    fn default() -> Self {
        Self {
            // CSS `ghostwhite` and `gainsboro`.
            highlight: Color::from_rgba8(248, 248, 255, 255),
            selected: Color::from_rgba8(220, 220, 220, 255),
        }
    }
}

/// A state change reported by [`HighlightState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightTransition {
    /// Region that changed.
    pub region: Region,
    /// State before the event.
    pub from: Highlight,
    /// State after the event.
    pub to: Highlight,
    /// Fill to display from now on.
    pub fill: Color,
}

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    state: Highlight,
    saved_fill: Option<Color>,
    fill: Option<Color>,
}

/// Per-region highlight state for the nine diagram regions.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
    colors: HighlightColors,
    slots: [Slot; 9],
}

impl HighlightState {
    /// Create a state machine with the given colors; every region starts `Normal`.
    pub fn new(colors: HighlightColors) -> Self {
        Self {
            colors,
            slots: [Slot::default(); 9],
        }
    }

    /// The highlight colors.
    pub fn colors(&self) -> &HighlightColors {
        &self.colors
    }

    /// Current state of `region`.
    pub fn state(&self, region: Region) -> Highlight {
        self.slots[region.index()].state
    }

    /// Fill set by the last transition of `region`, if any.
    ///
    /// `None` means the region has never been highlighted and shows its resting fill.
    pub fn fill(&self, region: Region) -> Option<Color> {
        self.slots[region.index()].fill
    }

    /// The region currently pressed, if any.
    pub fn pressed(&self) -> Option<Region> {
        Region::ALL
            .into_iter()
            .find(|r| self.state(*r) == Highlight::Pressed)
    }

    /// Pointer entered `region`, which currently shows `current_fill`.
    pub fn pointer_enter(
        &mut self,
        region: Region,
        current_fill: Color,
    ) -> Option<HighlightTransition> {
        if self.state(region) != Highlight::Normal {
            return None;
        }
        let highlight = self.colors.highlight;
        self.transition(region, Highlight::Hovered, highlight, |slot| {
            slot.saved_fill = Some(current_fill);
        })
    }

    /// Pointer left `region`; restores the fill saved on enter.
    pub fn pointer_leave(&mut self, region: Region) -> Option<HighlightTransition> {
        if self.state(region) == Highlight::Normal {
            return None;
        }
        let slot = &self.slots[region.index()];
        let restored = slot.saved_fill.or(slot.fill)?;
        self.transition(region, Highlight::Normal, restored, |slot| {
            slot.saved_fill = None;
        })
    }

    /// Button pressed over `region`.
    pub fn pointer_down(&mut self, region: Region) -> Option<HighlightTransition> {
        if self.state(region) != Highlight::Hovered {
            return None;
        }
        let selected = self.colors.selected;
        self.transition(region, Highlight::Pressed, selected, |_| {})
    }

    /// Button released over `region`.
    pub fn pointer_up(&mut self, region: Region) -> Option<HighlightTransition> {
        if self.state(region) != Highlight::Pressed {
            return None;
        }
        let highlight = self.colors.highlight;
        self.transition(region, Highlight::Hovered, highlight, |_| {})
    }

    /// Return every region to `Normal`, restoring saved fills.
    pub fn clear(&mut self) {
        for region in Region::ALL {
            self.pointer_leave(region);
        }
    }

    fn transition(
        &mut self,
        region: Region,
        to: Highlight,
        fill: Color,
        update: impl FnOnce(&mut Slot),
    ) -> Option<HighlightTransition> {
        if !region.is_interactive() {
            return None;
        }
        let slot = &mut self.slots[region.index()];
        let from = slot.state;
        slot.state = to;
        slot.fill = Some(fill);
        update(slot);
        #[cfg(feature = "tracing")]
        tracing::trace!(?region, ?from, ?to, "highlight transition");
        Some(HighlightTransition {
            region,
            from,
            to,
            fill,
        })
    }
}
