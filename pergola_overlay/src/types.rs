// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the overlay lifecycle: phases, tickets, configuration, and
//! the host seam.

use kurbo::{Rect, Size};
use pergola_placement::{Placement, PlacementConfig, Side};

/// Externally observable lifecycle phase of one overlay instance.
///
/// A controller cycles `Hidden → Measuring → Positioned → Hidden` many times
/// over its life; only one phase is active at a time and no state other than
/// static configuration survives a return to `Hidden`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Nothing mounted; the resting state.
    Hidden,
    /// Content is mounted invisibly and a measurement is in flight. The
    /// overlay is never shown in this phase.
    Measuring,
    /// A placement has been computed and the content presented.
    Positioned,
}

/// Measurement generation token.
///
/// Issued by `show`, echoed by the host when geometry is ready. Every `hide`
/// (and every new `show`) advances the underlying generation, so a ticket
/// from a cancelled measurement can never match again — late geometry
/// deliveries are silently discarded.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ticket(pub(crate) u64);

/// Width variant for mounted overlay content.
///
/// Purely a sizing hint forwarded to [`GeometryHost::mount_invisible`]; the
/// placement math only ever sees the measured size that comes back.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OverlayWidth {
    /// The default compact width.
    #[default]
    Compact,
    /// A fixed wider variant for dense content.
    Wide,
}

/// Static per-anchor configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    /// Side to try first; flips to its opposite on overflow.
    pub preferred: Side,
    /// Width hint passed through to content measurement.
    pub width: OverlayWidth,
    /// Geometric tuning for the resolver.
    pub placement: PlacementConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            preferred: Side::Top,
            width: OverlayWidth::Compact,
            placement: PlacementConfig::default(),
        }
    }
}

/// Geometry snapshot delivered by the host once a mounted overlay's measured
/// size is stable.
///
/// The anchor rect and viewport size are captured at delivery time, not at
/// `show` time — the gap between the two may span a scroll or resize, and
/// stale geometry would misplace the overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    /// Natural size of the invisibly mounted overlay content.
    pub overlay: Size,
    /// Current on-screen bounding box of the anchor.
    pub anchor: Rect,
    /// Current viewport size.
    pub viewport: Size,
}

/// The rendering host consumed by overlay controllers.
///
/// The host owns everything the engine cannot do itself: mounting content in
/// a measurable but invisible state, presenting it on a top-level surface
/// unaffected by ancestor clipping, and tearing it down. After
/// [`mount_invisible`](Self::mount_invisible) the host must wait until the
/// mounted content has a stable measured box and then call back into the
/// controller (`geometry_ready`) with the [`Ticket`] it was handed and a
/// fresh [`Geometry`] snapshot. A host that never reports back simply leaves
/// the overlay hidden; the controller does not time out.
pub trait GeometryHost {
    /// Host token for a mounted piece of content.
    type Handle: Copy;
    /// Opaque renderable payload supplied by the caller.
    type Content;

    /// Mount `content` without visible output, in the measurable tree.
    fn mount_invisible(&mut self, content: Self::Content, width: OverlayWidth) -> Self::Handle;

    /// Make previously mounted content visible at `placement.rect`, with the
    /// directional arrow oriented per `placement.side` and offset by
    /// `placement.arrow_offset`.
    fn present(&mut self, handle: Self::Handle, placement: &Placement);

    /// Remove or hide the content and release its resources.
    fn dismiss(&mut self, handle: Self::Handle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_prefers_compact_top() {
        let config = OverlayConfig::default();
        assert_eq!(config.preferred, Side::Top);
        assert_eq!(config.width, OverlayWidth::Compact);
        assert_eq!(config.placement, PlacementConfig::default());
    }
}
