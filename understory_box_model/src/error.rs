// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when a diagram cannot be laid out.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Width or height was zero, negative, or not finite.
    #[error("diagram dimensions must be finite and positive, got {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

/// A polygon id outside `0..=8`.
///
/// The region set is fixed, so callers routing pointer events usually treat this
/// as "nothing to do" rather than propagating it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("no diagram region has id {0}")]
pub struct InvalidRegionId(pub u8);
