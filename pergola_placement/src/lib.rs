// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pergola_placement --heading-base-level=0

//! Pergola Placement: a pure, Kurbo-native placement resolver for anchored overlays.
//!
//! ## Overview
//!
//! Given an anchor rectangle, a measured overlay size, the current viewport
//! size, a preferred [`Side`], and a [`PlacementConfig`], [`resolve`] computes
//! where a floating overlay (a tooltip, an info popup) should go:
//!
//! - the overlay sits adjacent to the anchor on the chosen side, separated by
//!   a configurable gap and centered on the cross axis;
//! - if the preferred side would overflow the viewport margin, the paired
//!   opposite side is substituted (one-shot flip, `Top`↔`Bottom`,
//!   `Left`↔`Right`);
//! - each coordinate is independently clamped into the margin-inset viewport
//!   as the final safety net;
//! - a directional arrow offset is computed along the attachment edge, aimed
//!   at the anchor's center and kept inside the overlay box.
//!
//! The resolver is a pure function: no host access, no mutable state, no
//! error cases. Every finite, non-negative input yields a best-effort
//! [`Placement`]; corrections that were applied are reported in
//! [`Adjustments`]. This is the unit boundary for property-based testing —
//! see `tests/resolve_props.rs`.
//!
//! Lifecycle concerns (measuring content invisibly, cancellation, when to
//! present) live in the companion `pergola_overlay` crate; this crate knows
//! nothing about hosts or timing.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use pergola_placement::{PlacementConfig, Side, resolve};
//!
//! let anchor = Rect::new(480.0, 390.0, 520.0, 410.0);
//! let placement = resolve(
//!     anchor,
//!     Size::new(80.0, 40.0),      // measured overlay size
//!     Size::new(1000.0, 800.0),   // current viewport
//!     Side::Right,
//!     &PlacementConfig::default(),
//! );
//! assert_eq!(placement.side, Side::Right);
//! assert_eq!(placement.rect.x0, anchor.x1 + 8.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod resolve;
pub mod types;

pub use resolve::resolve;
pub use types::{Adjustments, Axis, Placement, PlacementConfig, Side};
