// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver basics: the same anchor near different viewport edges, showing
//! flips, clamps, and arrow offsets.
//!
//! Run:
//! - `cargo run -p pergola_demos --example placement_basics`

use kurbo::{Rect, Size};
use pergola_placement::{PlacementConfig, Side, resolve};

fn main() {
    let viewport = Size::new(1000.0, 800.0);
    let overlay = Size::new(160.0, 56.0);
    let config = PlacementConfig::default();

    let scenarios = [
        ("centered", Rect::new(480.0, 390.0, 520.0, 410.0)),
        ("top-left corner", Rect::new(10.0, 10.0, 50.0, 30.0)),
        ("bottom edge", Rect::new(460.0, 770.0, 540.0, 790.0)),
        ("right edge", Rect::new(960.0, 380.0, 995.0, 420.0)),
    ];

    for (label, anchor) in scenarios {
        println!("anchor at {label}: {anchor:?}");
        for preferred in Side::ALL {
            let p = resolve(anchor, overlay, viewport, preferred, &config);
            let flipped = if p.side == preferred { "" } else { " (flipped)" };
            println!(
                "  prefer {preferred:?}: side={:?}{flipped} rect=({:.0},{:.0})-({:.0},{:.0}) arrow@{:.0} adjustments={:?}",
                p.side, p.rect.x0, p.rect.y0, p.rect.x1, p.rect.y1, p.arrow_offset, p.adjustments,
            );
        }
        println!();
    }
}
