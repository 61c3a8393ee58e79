// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full overlay lifecycle against a simulated host: show → geometry-ready →
//! present, a scroll refresh, and a cancelled measurement whose late
//! geometry is dropped.
//!
//! Run:
//! - `cargo run -p pergola_demos --example overlay_lifecycle`

use kurbo::{Rect, Size};
use pergola_overlay::{
    Geometry, GeometryHost, OverlayConfig, OverlayWidth, Overlays, Phase,
};
use pergola_placement::{Placement, Side};

/// A host that logs every effect instead of rendering.
struct SimHost {
    next_handle: u32,
}

impl GeometryHost for SimHost {
    type Handle = u32;
    type Content = &'static str;

    fn mount_invisible(&mut self, content: &'static str, width: OverlayWidth) -> u32 {
        self.next_handle += 1;
        println!("host: mount #{} ({width:?}) {content:?} — invisible, measurable", self.next_handle);
        self.next_handle
    }

    fn present(&mut self, handle: u32, placement: &Placement) {
        println!(
            "host: present #{handle} at ({:.0},{:.0})-({:.0},{:.0}), arrow on {:?} edge @{:.0}",
            placement.rect.x0,
            placement.rect.y0,
            placement.rect.x1,
            placement.rect.y1,
            placement.side,
            placement.arrow_offset,
        );
    }

    fn dismiss(&mut self, handle: u32) {
        println!("host: dismiss #{handle}");
    }
}

fn main() {
    let mut host = SimHost { next_handle: 0 };
    let mut overlays = Overlays::new();

    let metric = overlays.insert(OverlayConfig {
        preferred: Side::Top,
        ..Default::default()
    });

    // Hover in. The content mounts invisibly; nothing presents yet.
    let request = overlays
        .show(&mut host, metric, "P/E ratio: price relative to earnings")
        .expect("first show starts a measurement");
    println!("phase after show: {:?}", overlays.phase(metric));

    // Layout settles; the host reports the measured box and fresh geometry.
    // The anchor sits near the top of the screen, so Top flips to Bottom.
    let applied = overlays.geometry_ready(
        &mut host,
        request,
        Geometry {
            overlay: Size::new(220.0, 72.0),
            anchor: Rect::new(120.0, 24.0, 160.0, 44.0),
            viewport: Size::new(1280.0, 720.0),
        },
    );
    println!(
        "phase after geometry-ready (applied={applied}): {:?}",
        overlays.phase(metric)
    );

    // The page scrolls; re-resolve against the moved anchor.
    overlays.refresh(
        &mut host,
        metric,
        Geometry {
            overlay: Size::new(220.0, 72.0),
            anchor: Rect::new(120.0, 304.0, 160.0, 324.0),
            viewport: Size::new(1280.0, 720.0),
        },
    );

    // Hover out.
    overlays.hide(&mut host, metric);
    println!("phase after hide: {:?}", overlays.phase(metric));

    // A second hover is cancelled before layout settles; the late geometry
    // delivery is dropped and nothing presents.
    let stale = overlays
        .show(&mut host, metric, "P/E ratio: price relative to earnings")
        .expect("show after hide restarts");
    overlays.hide(&mut host, metric);
    let applied = overlays.geometry_ready(
        &mut host,
        stale,
        Geometry {
            overlay: Size::new(220.0, 72.0),
            anchor: Rect::new(120.0, 304.0, 160.0, 324.0),
            viewport: Size::new(1280.0, 720.0),
        },
    );
    println!("late geometry after hide applied={applied} (expected false)");
    assert_eq!(overlays.phase(metric), Some(Phase::Hidden));
}
