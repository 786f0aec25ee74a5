// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The spacing editor component.

use alloc::string::String;

use kurbo::{Point, Size, Vec2};
use peniko::Color;
use understory_box_model::{Diagram, LayoutError, Region, layout_with};
use understory_spacing::{SpacingField, SpacingSnapshot, SpacingValues};
use understory_spacing_interaction::drag::DragState;
use understory_spacing_interaction::{
    DragController, Highlight, HighlightState, HighlightTransition, SpacingEdit,
};

use crate::config::PluginConfig;
use crate::host::{ChangeCause, SpacingChange, SpacingHost};

/// An interactive padding/margin editor.
///
/// Owns the diagram geometry, the eight spacing values and the snapshot taken at
/// construction. Pointer events come in either by polygon id (for hosts whose
/// event system reports the shape that was hit) or by position (for hosts that
/// only report coordinates). Every accepted change is reported to the host `H`.
///
/// Events naming an unknown polygon id are ignored.
///
/// A host should pick one input style and feed only that. Both styles track the
/// same hovered region, so switching styles between gestures does not leave a
/// band highlighted.
#[derive(Clone, Debug)]
pub struct SpacingPlugin<H = ()> {
    config: PluginConfig,
    diagram: Diagram,
    values: SpacingValues,
    snapshot: SpacingSnapshot,
    controller: DragController,
    highlight: HighlightState,
    gesture: DragState,
    hovered: Option<Region>,
    host: H,
}

impl SpacingPlugin {
    /// Create a plugin that does not notify anyone.
    ///
    /// Negative or NaN values are clamped to `0` before the snapshot is taken.
    pub fn new(config: PluginConfig, values: SpacingValues) -> Result<Self, LayoutError> {
        Self::with_host(config, values, ())
    }
}

fn region_for(id: u8) -> Option<Region> {
    match Region::from_id(id) {
        Ok(region) => Some(region),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(%_err, "ignoring event for unknown polygon");
            None
        }
    }
}

impl<H: SpacingHost> SpacingPlugin<H> {
    /// Create a plugin that reports changes to `host`.
    pub fn with_host(
        config: PluginConfig,
        values: SpacingValues,
        host: H,
    ) -> Result<Self, LayoutError> {
        let diagram = layout_with(config.size, &config.style, &config.labels)?;
        let values = values.clamped();
        Ok(Self {
            diagram,
            values,
            snapshot: SpacingSnapshot::capture(&values),
            controller: DragController::new(config.strategy),
            highlight: HighlightState::new(config.highlight),
            gesture: DragState::default(),
            hovered: None,
            host,
            config,
        })
    }

    /// The configuration this plugin was built with.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Current geometry.
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Current values.
    pub fn values(&self) -> &SpacingValues {
        &self.values
    }

    /// Values captured at construction.
    pub fn snapshot(&self) -> &SpacingSnapshot {
        &self.snapshot
    }

    /// The notification receiver.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the notification receiver.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the plugin, returning its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Highlight state of polygon `id`.
    pub fn highlight(&self, id: u8) -> Option<Highlight> {
        Region::from_id(id).ok().map(|r| self.highlight.state(r))
    }

    /// Fill currently displayed by polygon `id`: the highlight override if any,
    /// otherwise the style's resting fill.
    pub fn fill_of(&self, id: u8) -> Option<Color> {
        Region::from_id(id).ok().map(|r| self.fill(r))
    }

    /// Fill currently displayed by `region`.
    pub fn fill(&self, region: Region) -> Color {
        self.highlight
            .fill(region)
            .unwrap_or_else(|| self.diagram.polygon(region).fill)
    }

    /// Render the diagram as it currently looks, highlights included, as an SVG document.
    pub fn to_svg(&self) -> String {
        understory_spacing_svg::render_diagram(&self.diagram, &self.values, |r| self.fill(r))
    }

    /// Region under `pos`, if any.
    pub fn region_at(&self, pos: Point) -> Option<Region> {
        self.diagram.region_at(pos)
    }

    /// Lay the diagram out again at a new size.
    ///
    /// Values, snapshot and highlight state are kept. On error the old geometry stays.
    pub fn resize(&mut self, size: Size) -> Result<(), LayoutError> {
        self.diagram = layout_with(size, &self.config.style, &self.config.labels)?;
        self.config.size = size;
        Ok(())
    }

    /// Begin a drag on polygon `id`.
    pub fn drag_start(&mut self, id: u8) {
        if let Some(region) = region_for(id) {
            self.controller.on_drag_start(region, &self.values);
        }
    }

    /// Apply one drag move on polygon `id` with the pointer movement `delta`.
    ///
    /// Returns the edit and notifies the host when a value changed.
    pub fn drag_move(&mut self, id: u8, delta: Vec2) -> Option<SpacingEdit> {
        let region = region_for(id)?;
        self.apply_move(region, delta)
    }

    /// End the drag on polygon `id`.
    pub fn drag_end(&mut self, id: u8) {
        if let Some(region) = region_for(id) {
            self.controller.on_drag_end(region);
        }
    }

    /// Pointer entered polygon `id`.
    pub fn pointer_enter(&mut self, id: u8) -> Option<HighlightTransition> {
        let region = region_for(id)?;
        self.hovered = Some(region);
        let fill = self.fill(region);
        self.highlight.pointer_enter(region, fill)
    }

    /// Pointer left polygon `id`.
    pub fn pointer_leave(&mut self, id: u8) -> Option<HighlightTransition> {
        let region = region_for(id)?;
        if self.hovered == Some(region) {
            self.hovered = None;
        }
        self.highlight.pointer_leave(region)
    }

    /// Button pressed over polygon `id`.
    pub fn pointer_down(&mut self, id: u8) -> Option<HighlightTransition> {
        self.highlight.pointer_down(region_for(id)?)
    }

    /// Button released over polygon `id`.
    pub fn pointer_up(&mut self, id: u8) -> Option<HighlightTransition> {
        self.highlight.pointer_up(region_for(id)?)
    }

    /// Button pressed at `pos`.
    ///
    /// Hovers and presses the region under the pointer and starts a drag on it.
    /// Returns the region, or `None` when the press is outside the diagram.
    /// Pressing the content box starts no drag.
    pub fn press_at(&mut self, pos: Point) -> Option<Region> {
        let region = self.diagram.region_at(pos)?;
        self.hover(Some(region));
        if region.is_interactive() {
            self.highlight.pointer_down(region);
            self.gesture.start(region, pos);
            self.controller.on_drag_start(region, &self.values);
        }
        Some(region)
    }

    /// Pointer moved to `pos`.
    ///
    /// During a drag this applies the movement since the last event to the
    /// dragged region, and the hover stays on that region. Otherwise it moves the
    /// hover to whatever region is under `pos`.
    pub fn pointer_move(&mut self, pos: Point) -> Option<SpacingEdit> {
        if let Some(step) = self.gesture.update(pos) {
            return self.apply_move(step.region, step.delta);
        }
        let region = self.diagram.region_at(pos);
        self.hover(region);
        None
    }

    /// Button released at `pos`; ends any drag and updates the hover.
    pub fn release_at(&mut self, pos: Point) {
        if let Some(region) = self.gesture.end() {
            self.controller.on_drag_end(region);
            self.highlight.pointer_up(region);
        }
        let region = self.diagram.region_at(pos);
        self.hover(region);
    }

    /// Set one value directly, as from a text input in its label.
    ///
    /// The value is clamped to `0`. Notifies the host when it changed.
    pub fn set_value(&mut self, field: SpacingField, value: f64) -> Option<SpacingEdit> {
        let previous = self.values.get(field);
        if !self.values.set(field, value) {
            return None;
        }
        let edit = SpacingEdit {
            field,
            previous,
            value: self.values.get(field),
        };
        self.notify(ChangeCause::Input, Some(edit));
        Some(edit)
    }

    /// Restore the values captured at construction and notify the host.
    ///
    /// The host is notified even when nothing changed.
    pub fn reset(&mut self) {
        self.values = self.snapshot.restore();
        #[cfg(feature = "tracing")]
        tracing::debug!("spacing reset to snapshot");
        self.notify(ChangeCause::Reset, None);
    }

    fn apply_move(&mut self, region: Region, delta: Vec2) -> Option<SpacingEdit> {
        let edit = self
            .controller
            .on_drag_move(region, delta, &mut self.values)?;
        self.notify(ChangeCause::Drag, Some(edit));
        Some(edit)
    }

    fn hover(&mut self, region: Option<Region>) {
        if self.hovered == region {
            return;
        }
        if let Some(old) = self.hovered.take() {
            self.highlight.pointer_leave(old);
        }
        if let Some(new) = region {
            let fill = self.fill(new);
            self.highlight.pointer_enter(new, fill);
        }
        self.hovered = region;
    }

    fn notify(&mut self, cause: ChangeCause, edit: Option<SpacingEdit>) {
        let change = SpacingChange {
            cause,
            edit,
            values: self.values,
        };
        self.host.spacing_changed(&change);
    }
}
