// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pergola_overlay --heading-base-level=0

//! Pergola Overlay: flicker-free lifecycle control for anchored overlays.
//!
//! ## Overview
//!
//! Overlay content (a tooltip, an info popup) cannot be placed until it has
//! been measured, and it cannot be measured until it is mounted — but
//! mounting it visibly at a guessed position produces a flash at the wrong
//! place. This crate drives the two-phase lifecycle that avoids that:
//!
//! 1. On a trigger (hover or focus enter), content is mounted *invisibly*
//!    through the [`GeometryHost`](crate::types::GeometryHost) seam and a
//!    measurement [`Ticket`](crate::types::Ticket) is issued.
//! 2. When the host reports the measured size — together with a fresh anchor
//!    rect and viewport snapshot — the placement is resolved with
//!    [`pergola_placement::resolve`] and the content is presented. The
//!    overlay becomes visible only after a computed position exists.
//!
//! A trigger-off (leave or blur) at any point tears down to hidden and
//! invalidates the in-flight measurement; a geometry delivery carrying a
//! stale ticket is silently dropped. This generation-counter scheme removes
//! the race where a late measurement repositions or re-shows an overlay the
//! user already left.
//!
//! ## Inputs and collaborators
//!
//! Trigger bindings and the rendering surface belong to the embedding
//! toolkit. The toolkit implements [`GeometryHost`](crate::types::GeometryHost)
//! (mount-invisible, present, dismiss) and calls back with geometry once the
//! mounted content's box is stable — "after the current layout settles" in
//! most hosts. Everything here is single-threaded and cooperative; no
//! timeouts are modeled, and a host that never reports geometry simply
//! leaves the overlay hidden.
//!
//! ## Per-anchor instances
//!
//! [`OverlayController`](crate::controller::OverlayController) owns one
//! anchor's state machine. [`Overlays`](crate::arena::Overlays) keys
//! controllers by generational [`AnchorId`](crate::arena::AnchorId) so a
//! view full of annotated elements can address them through copyable
//! handles; stale handles are harmless.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use pergola_overlay::{
//!     Geometry, GeometryHost, OverlayConfig, OverlayWidth, Overlays, Phase,
//! };
//! use pergola_placement::Placement;
//!
//! // A toy host: handles are sequence numbers, presentation is a no-op.
//! struct NullHost(u32);
//! impl GeometryHost for NullHost {
//!     type Handle = u32;
//!     type Content = &'static str;
//!     fn mount_invisible(&mut self, _content: &'static str, _width: OverlayWidth) -> u32 {
//!         self.0 += 1;
//!         self.0
//!     }
//!     fn present(&mut self, _handle: u32, _placement: &Placement) {}
//!     fn dismiss(&mut self, _handle: u32) {}
//! }
//!
//! let mut host = NullHost(0);
//! let mut overlays = Overlays::new();
//! let anchor = overlays.insert(OverlayConfig::default());
//!
//! // Hover in: mount invisibly, wait for measurement.
//! let request = overlays.show(&mut host, anchor, "52-week range").unwrap();
//! assert_eq!(overlays.phase(anchor), Some(Phase::Measuring));
//!
//! // The host reports the measured size plus fresh anchor/viewport geometry.
//! let applied = overlays.geometry_ready(&mut host, request, Geometry {
//!     overlay: Size::new(120.0, 48.0),
//!     anchor: Rect::new(300.0, 200.0, 340.0, 220.0),
//!     viewport: Size::new(1024.0, 768.0),
//! });
//! assert!(applied);
//! assert_eq!(overlays.phase(anchor), Some(Phase::Positioned));
//!
//! // Hover out.
//! overlays.hide(&mut host, anchor);
//! assert_eq!(overlays.phase(anchor), Some(Phase::Hidden));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod arena;
pub mod controller;
pub mod types;

pub use arena::{AnchorId, MeasureRequest, Overlays};
pub use controller::OverlayController;
pub use types::{Geometry, GeometryHost, OverlayConfig, OverlayWidth, Phase, Ticket};
