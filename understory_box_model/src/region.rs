// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_spacing::SpacingField;

use crate::error::InvalidRegionId;

/// One of the nine shapes of the diagram.
///
/// Region ids are stable and match the polygon ids hosts render:
///
/// | id | region |
/// |---|---|
/// | 0 | content |
/// | 1, 2 | top padding, top margin |
/// | 3, 4 | bottom padding, bottom margin |
/// | 5, 6 | left padding, left margin |
/// | 7, 8 | right padding, right margin |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// The content rectangle. It is never interactive.
    Content,
    /// A padding or margin band bound to one spacing value.
    Band(SpacingField),
}

impl Region {
    /// All regions in id order.
    pub const ALL: [Self; 9] = [
        Self::Content,
        Self::Band(SpacingField::TopPadding),
        Self::Band(SpacingField::TopMargin),
        Self::Band(SpacingField::BottomPadding),
        Self::Band(SpacingField::BottomMargin),
        Self::Band(SpacingField::LeftPadding),
        Self::Band(SpacingField::LeftMargin),
        Self::Band(SpacingField::RightPadding),
        Self::Band(SpacingField::RightMargin),
    ];

    /// Region for a polygon id.
    pub fn from_id(id: u8) -> Result<Self, InvalidRegionId> {
        Self::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(InvalidRegionId(id))
    }

    /// Polygon id of this region.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "ordinals are below 8, ids below 9"
    )]
    pub const fn id(self) -> u8 {
        match self {
            Self::Content => 0,
            Self::Band(field) => field.ordinal() as u8 + 1,
        }
    }

    /// Index into [`Region::ALL`] and into a diagram's polygons.
    pub const fn index(self) -> usize {
        self.id() as usize
    }

    /// The spacing value bound to this region, if any.
    pub const fn field(self) -> Option<SpacingField> {
        match self {
            Self::Content => None,
            Self::Band(field) => Some(field),
        }
    }

    /// Whether pointer interaction (hover, press, drag) applies to this region.
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Band(_))
    }
}

impl TryFrom<u8> for Region {
    type Error = InvalidRegionId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}
