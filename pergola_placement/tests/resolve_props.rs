// Copyright 2025 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for the placement resolver.
//!
//! These properties pin down the resolver's contract:
//! 1. Containment: overlays that fit inside the margin-inset viewport always
//!    end up fully inside it, for every preferred side.
//! 2. The resolved side is only ever the preferred side or its paired
//!    opposite.
//! 3. Separation: when the placement axis needed no clamp rescue, the overlay
//!    never overlaps the anchor along that axis.
//! 4. The arrow always lands inside the overlay box, and aims at the anchor
//!    center whenever it did not have to be pulled back.
//! 5. Determinism: identical inputs give identical output.

use kurbo::{Rect, Size};
use pergola_placement::{Adjustments, Axis, PlacementConfig, Side, resolve};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

#[derive(Clone, Debug)]
struct Scene {
    anchor: Rect,
    overlay: Size,
    viewport: Size,
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![
        Just(Side::Top),
        Just(Side::Bottom),
        Just(Side::Left),
        Just(Side::Right),
    ]
}

// Integer-valued scenes keep the arithmetic exact. The overlay always fits
// within the viewport minus the default 10px margins; the anchor may hang
// partially off-screen, which stresses the clamp.
fn fitting_scene() -> impl Strategy<Value = Scene> {
    (400i64..2000, 300i64..1600)
        .prop_flat_map(|(vw, vh)| {
            (
                Just(vw),
                Just(vh),
                20i64..=(vw - 20),
                20i64..=(vh - 20),
                0i64..vw,
                1i64..=120,
                0i64..vh,
                1i64..=80,
            )
        })
        .prop_map(|(vw, vh, ow, oh, ax, aw, ay, ah)| Scene {
            anchor: Rect::new(ax as f64, ay as f64, (ax + aw) as f64, (ay + ah) as f64),
            overlay: Size::new(ow as f64, oh as f64),
            viewport: Size::new(vw as f64, vh as f64),
        })
}

proptest! {
    #[test]
    fn fitting_overlays_stay_inside_the_margins(
        scene in fitting_scene(),
        preferred in side_strategy(),
    ) {
        let config = PlacementConfig::default();
        let p = resolve(scene.anchor, scene.overlay, scene.viewport, preferred, &config);
        let m = config.edge_margin;
        prop_assert!(p.rect.x0 >= m - EPS);
        prop_assert!(p.rect.y0 >= m - EPS);
        prop_assert!(p.rect.x1 <= scene.viewport.width - m + EPS);
        prop_assert!(p.rect.y1 <= scene.viewport.height - m + EPS);
    }

    #[test]
    fn resolved_side_is_preferred_or_its_opposite(
        scene in fitting_scene(),
        preferred in side_strategy(),
    ) {
        let p = resolve(
            scene.anchor,
            scene.overlay,
            scene.viewport,
            preferred,
            &PlacementConfig::default(),
        );
        prop_assert!(p.side == preferred || p.side == preferred.opposite());
        prop_assert_eq!(
            p.adjustments.contains(Adjustments::FLIPPED),
            p.side != preferred
        );
    }

    #[test]
    fn unclamped_placements_clear_the_anchor(
        scene in fitting_scene(),
        preferred in side_strategy(),
    ) {
        let p = resolve(
            scene.anchor,
            scene.overlay,
            scene.viewport,
            preferred,
            &PlacementConfig::default(),
        );
        let main_clamped = match p.side.axis() {
            Axis::Vertical => p.adjustments.contains(Adjustments::CLAMPED_Y),
            Axis::Horizontal => p.adjustments.contains(Adjustments::CLAMPED_X),
        };
        if !main_clamped {
            match p.side {
                Side::Top => prop_assert!(p.rect.y1 <= scene.anchor.y0),
                Side::Bottom => prop_assert!(p.rect.y0 >= scene.anchor.y1),
                Side::Left => prop_assert!(p.rect.x1 <= scene.anchor.x0),
                Side::Right => prop_assert!(p.rect.x0 >= scene.anchor.x1),
            }
        }
    }

    #[test]
    fn arrow_lands_inside_the_overlay(
        scene in fitting_scene(),
        preferred in side_strategy(),
    ) {
        let config = PlacementConfig::default();
        let p = resolve(scene.anchor, scene.overlay, scene.viewport, preferred, &config);
        let cross_extent = match p.side.axis() {
            Axis::Vertical => p.rect.width(),
            Axis::Horizontal => p.rect.height(),
        };
        prop_assert!(p.arrow_offset >= 0.0);
        prop_assert!(p.arrow_offset <= cross_extent + EPS);
        if !p.adjustments.contains(Adjustments::ARROW_CLAMPED) {
            let aimed = match p.side.axis() {
                Axis::Vertical => 0.5 * (scene.anchor.x0 + scene.anchor.x1) - p.rect.x0,
                Axis::Horizontal => 0.5 * (scene.anchor.y0 + scene.anchor.y1) - p.rect.y0,
            };
            prop_assert!((p.arrow_offset - aimed).abs() < EPS);
        }
    }

    #[test]
    fn identical_inputs_give_identical_placements(
        scene in fitting_scene(),
        preferred in side_strategy(),
    ) {
        let config = PlacementConfig::default();
        let a = resolve(scene.anchor, scene.overlay, scene.viewport, preferred, &config);
        let b = resolve(scene.anchor, scene.overlay, scene.viewport, preferred, &config);
        prop_assert_eq!(a, b);
    }

    // Directed flip property: an anchor too close to the top edge for the
    // overlay plus gap plus margin must flip Top → Bottom.
    #[test]
    fn top_without_headroom_flips_to_bottom(
        (oh, ay) in (20i64..=300).prop_flat_map(|oh| (Just(oh), 0i64..(oh + 18))),
        ax in 100i64..800,
    ) {
        let anchor = Rect::new(ax as f64, ay as f64, (ax + 40) as f64, (ay + 20) as f64);
        let p = resolve(
            anchor,
            Size::new(80.0, oh as f64),
            Size::new(1000.0, 800.0),
            Side::Top,
            &PlacementConfig::default(),
        );
        prop_assert_eq!(p.side, Side::Bottom);
        prop_assert!(p.adjustments.contains(Adjustments::FLIPPED));
    }
}
