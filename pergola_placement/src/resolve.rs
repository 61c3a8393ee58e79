// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution: candidate, overflow test, one-shot flip, clamp, arrow.
//!
//! ## Policy
//!
//! The resolver tries the preferred side first. If the candidate's leading
//! edge would violate the viewport margin on the side it faces, the paired
//! opposite side is substituted — once. No further flipping happens even if
//! the opposite side also overflows; the per-axis clamp is the final safety
//! net and can leave an oversized overlay pinned at the margin. This matches
//! the behavior expected by callers that treat flip as a heuristic
//! improvement rather than a correctness guarantee.
//!
//! The vertical (`Top`/`Bottom`) and horizontal (`Left`/`Right`) pairs are
//! symmetric under axis swap, so candidate/overflow/flip are expressed once
//! over 1-D spans and instantiated per axis.

use kurbo::{Rect, Size};

use crate::types::{Adjustments, Axis, Placement, PlacementConfig, Side};

/// Resolve a final overlay placement for `anchor` inside `viewport`.
///
/// Pure and total: any finite, non-negative input produces a best-effort
/// [`Placement`], never an error. The caller owns the no-negative-sizes
/// precondition. The viewport must be the current one — callers should
/// re-read it for every resolution rather than caching it across shows.
///
/// ```
/// use kurbo::{Rect, Size};
/// use pergola_placement::{Adjustments, PlacementConfig, Side, resolve};
///
/// // Anchor near the top-left corner; no room above, so Top flips to Bottom
/// // and the centered x is clamped to the margin.
/// let anchor = Rect::new(10.0, 10.0, 50.0, 30.0);
/// let placement = resolve(
///     anchor,
///     Size::new(80.0, 40.0),
///     Size::new(1000.0, 800.0),
///     Side::Top,
///     &PlacementConfig::default(),
/// );
/// assert_eq!(placement.side, Side::Bottom);
/// assert_eq!(placement.rect.y0, 38.0);
/// assert_eq!(placement.rect.x0, 10.0);
/// assert!(placement.adjustments.contains(Adjustments::FLIPPED));
/// ```
pub fn resolve(
    anchor: Rect,
    overlay: Size,
    viewport: Size,
    preferred: Side,
    config: &PlacementConfig,
) -> Placement {
    let mut adjustments = Adjustments::empty();

    // Candidate on the preferred side, flipped once if its leading edge
    // violates the margin it faces.
    let main = preferred.axis();
    let (anchor_lo, anchor_hi) = rect_span(anchor, main);
    let main_ext = size_extent(overlay, main);
    let view_main = size_extent(viewport, main);

    let candidate = main_start(anchor_lo, anchor_hi, main_ext, config.gap, preferred);
    let side = if overflows(candidate, main_ext, view_main, config.edge_margin, preferred) {
        adjustments |= Adjustments::FLIPPED;
        preferred.opposite()
    } else {
        preferred
    };
    let main_pos = main_start(anchor_lo, anchor_hi, main_ext, config.gap, side);

    // Centered on the cross axis relative to the anchor.
    let cross = main.cross();
    let (cross_lo, cross_hi) = rect_span(anchor, cross);
    let cross_pos = 0.5 * (cross_lo + cross_hi) - 0.5 * size_extent(overlay, cross);

    let (x, y) = match main {
        Axis::Vertical => (cross_pos, main_pos),
        Axis::Horizontal => (main_pos, cross_pos),
    };

    // Independent per-axis clamp into the margin-inset viewport.
    let (x, clamped_x) = clamp_axis(x, overlay.width, viewport.width, config.edge_margin);
    let (y, clamped_y) = clamp_axis(y, overlay.height, viewport.height, config.edge_margin);
    if clamped_x {
        adjustments |= Adjustments::CLAMPED_X;
    }
    if clamped_y {
        adjustments |= Adjustments::CLAMPED_Y;
    }

    let rect = Rect::new(x, y, x + overlay.width, y + overlay.height);
    let (arrow_offset, arrow_clamped) = arrow_offset(anchor, rect, side, config.arrow_half);
    if arrow_clamped {
        adjustments |= Adjustments::ARROW_CLAMPED;
    }

    Placement {
        rect,
        side,
        arrow_offset,
        adjustments,
    }
}

/// 1-D span of a rect on an axis: `(lo, hi)`.
fn rect_span(rect: Rect, axis: Axis) -> (f64, f64) {
    match axis {
        Axis::Horizontal => (rect.x0, rect.x1),
        Axis::Vertical => (rect.y0, rect.y1),
    }
}

/// 1-D extent of a size on an axis.
fn size_extent(size: Size, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => size.width,
        Axis::Vertical => size.height,
    }
}

/// Leading coordinate of the overlay on the placement axis: before the
/// anchor for `Top`/`Left`, after it for `Bottom`/`Right`, `gap` apart.
fn main_start(anchor_lo: f64, anchor_hi: f64, overlay_ext: f64, gap: f64, side: Side) -> f64 {
    if side.is_before() {
        anchor_lo - gap - overlay_ext
    } else {
        anchor_hi + gap
    }
}

/// Whether the candidate's leading edge violates the margin it faces.
fn overflows(start: f64, overlay_ext: f64, viewport_ext: f64, margin: f64, side: Side) -> bool {
    if side.is_before() {
        start < margin
    } else {
        start + overlay_ext > viewport_ext - margin
    }
}

/// Clamp a start coordinate into `[margin, viewport − extent − margin]`.
///
/// When the range is inverted (overlay larger than the viewport minus
/// margins) the coordinate pins to `margin`: the overlay may exceed the
/// viewport on that axis, which is the accepted degenerate outcome.
fn clamp_axis(start: f64, overlay_ext: f64, viewport_ext: f64, margin: f64) -> (f64, bool) {
    let lo = margin;
    let hi = viewport_ext - overlay_ext - margin;
    if hi < lo {
        (lo, true)
    } else if start < lo {
        (lo, true)
    } else if start > hi {
        (hi, true)
    } else {
        (start, false)
    }
}

/// Arrow position along the overlay edge facing the anchor.
///
/// Aims at the anchor's cross-axis center, re-expressed relative to the
/// overlay's top-left corner, and pulled back so the arrow footprint stays
/// inside the overlay box even after clamping moved the overlay off-center.
fn arrow_offset(anchor: Rect, rect: Rect, side: Side, arrow_half: f64) -> (f64, bool) {
    let cross = side.axis().cross();
    let (anchor_lo, anchor_hi) = rect_span(anchor, cross);
    let (rect_lo, rect_hi) = rect_span(rect, cross);
    let ext = rect_hi - rect_lo;

    let aimed = 0.5 * (anchor_lo + anchor_hi) - rect_lo;
    let lo = arrow_half;
    let hi = ext - arrow_half;
    if hi < lo {
        // Overlay narrower than the arrow itself; park it at the midpoint.
        (0.5 * ext, true)
    } else if aimed < lo {
        (lo, true)
    } else if aimed > hi {
        (hi, true)
    } else {
        (aimed, false)
    }
}
