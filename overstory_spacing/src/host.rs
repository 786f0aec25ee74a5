// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications sent from the editor to its host.

use alloc::vec::Vec;

use understory_spacing::{Shorthand, SpacingField, SpacingValues};
use understory_spacing_interaction::SpacingEdit;

/// Why the values changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeCause {
    /// A drag move edited one value.
    Drag,
    /// A value was typed into its label.
    Input,
    /// [`SpacingPlugin::reset`](crate::SpacingPlugin::reset) restored the initial values.
    Reset,
}

/// A "value changed" notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingChange {
    /// What triggered the change.
    pub cause: ChangeCause,
    /// The single edit, for drags and input. `None` on reset.
    pub edit: Option<SpacingEdit>,
    /// All values after the change.
    pub values: SpacingValues,
}

impl SpacingChange {
    /// The value that changed, if the change touched a single one.
    pub fn field(&self) -> Option<SpacingField> {
        self.edit.map(|e| e.field)
    }

    /// Padding as a `"top right bottom left"` shorthand.
    pub fn padding_shorthand(&self) -> Shorthand {
        self.values.padding_shorthand()
    }

    /// Margin as a `"top right bottom left"` shorthand.
    pub fn margin_shorthand(&self) -> Shorthand {
        self.values.margin_shorthand()
    }
}

/// Receives change notifications from a [`SpacingPlugin`](crate::SpacingPlugin).
///
/// Called synchronously, once per accepted edit and once per reset.
pub trait SpacingHost {
    /// The values changed.
    fn spacing_changed(&mut self, change: &SpacingChange);
}

/// Ignores notifications; for hosts that poll [`SpacingPlugin::values`](crate::SpacingPlugin::values).
impl SpacingHost for () {
    fn spacing_changed(&mut self, _change: &SpacingChange) {}
}

/// Records every notification.
impl SpacingHost for Vec<SpacingChange> {
    fn spacing_changed(&mut self, change: &SpacingChange) {
        self.push(*change);
    }
}

impl<H: SpacingHost + ?Sized> SpacingHost for &mut H {
    fn spacing_changed(&mut self, change: &SpacingChange) {
        (**self).spacing_changed(change);
    }
}

/// Adapts a closure into a [`SpacingHost`].
///
/// ```
/// use overstory_spacing::{FnHost, PluginConfig, SpacingChange, SpacingPlugin, SpacingValues};
///
/// let mut resets = 0;
/// let host = FnHost(|_: &SpacingChange| resets += 1);
/// let mut plugin = SpacingPlugin::with_host(PluginConfig::default(), SpacingValues::ZERO, host)
///     .unwrap();
/// plugin.reset();
/// drop(plugin);
/// assert_eq!(resets, 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnHost<F>(pub F);

impl<F: FnMut(&SpacingChange)> SpacingHost for FnHost<F> {
    fn spacing_changed(&mut self, change: &SpacingChange) {
        (self.0)(change);
    }
}
