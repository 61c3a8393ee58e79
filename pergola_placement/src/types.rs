// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement resolution: sides, axes, configuration, results.

use kurbo::Rect;

/// The four cardinal placements of an overlay relative to its anchor.
///
/// A side names the anchor edge the overlay attaches to: `Top` puts the
/// overlay above the anchor, `Bottom` below, and so on. Sides come in flip
/// pairs — `Top`↔`Bottom` and `Left`↔`Right` — and
/// [`resolve`](crate::resolve) only ever substitutes a side with its
/// [`opposite`](Side::opposite), never with an unrelated side.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Overlay above the anchor.
    Top,
    /// Overlay below the anchor.
    Bottom,
    /// Overlay to the left of the anchor.
    Left,
    /// Overlay to the right of the anchor.
    Right,
}

impl Side {
    /// All four sides, for exhaustive sweeps in tests and benches.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The paired opposite used by the flip policy.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The axis the overlay is displaced along for this side.
    ///
    /// `Top`/`Bottom` place along the vertical axis, `Left`/`Right` along the
    /// horizontal one. The cross axis carries the centering and the arrow.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Whether the overlay sits on the min-coordinate side of the anchor
    /// (`Top`/`Left`) rather than the max-coordinate side (`Bottom`/`Right`).
    pub(crate) const fn is_before(self) -> bool {
        matches!(self, Self::Top | Self::Left)
    }
}

/// One of the two screen axes, top-left origin.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Geometric tuning for [`resolve`](crate::resolve).
///
/// All values are in the host's coordinate units (typically pixels).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Separation between the anchor edge and the overlay edge on the
    /// placement axis. Positive gaps guarantee anchor/overlay separation
    /// whenever the overlay fits on the resolved side.
    pub gap: f64,
    /// Minimum clearance the overlay keeps from every viewport edge.
    pub edge_margin: f64,
    /// Half the arrow's footprint along the overlay edge; the arrow offset is
    /// clamped so the arrow never pokes past an overlay corner.
    pub arrow_half: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            gap: 8.0,
            edge_margin: 10.0,
            arrow_half: 6.0,
        }
    }
}

bitflags::bitflags! {
    /// Best-effort corrections applied while resolving a placement.
    ///
    /// Empty when the preferred candidate fit as-is. Flip and clamp are part
    /// of normal operation, not failures; the flags make them observable for
    /// diagnostics and tests.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Adjustments: u8 {
        /// The preferred side overflowed and the paired opposite was used.
        const FLIPPED       = 0b0000_0001;
        /// The x coordinate was clamped into the viewport margins.
        const CLAMPED_X     = 0b0000_0010;
        /// The y coordinate was clamped into the viewport margins.
        const CLAMPED_Y     = 0b0000_0100;
        /// The arrow offset was pulled back inside the overlay bounds.
        const ARROW_CLAMPED = 0b0000_1000;
    }
}

/// A resolved overlay placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Final on-screen overlay box.
    pub rect: Rect,
    /// Side actually used for attachment, after any flip. Drives which
    /// overlay edge bears the arrow.
    pub side: Side,
    /// Arrow position measured from the overlay's top-left corner along the
    /// axis perpendicular to [`side`](Self::side), aimed at the anchor's
    /// cross-axis center.
    pub arrow_offset: f64,
    /// Corrections applied to reach this placement.
    pub adjustments: Adjustments,
}
