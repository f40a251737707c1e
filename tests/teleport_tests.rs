// Host-side tests for the discrete-teleport placement and trigger model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod geometry {
    include!("../src/geometry.rs");
}
mod teleport {
    include!("../src/teleport.rs");
}

use geometry::{Rect, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use teleport::*;

const SIZE: Vec2 = Vec2::new(120.0, 56.0);

fn laptop() -> Viewport {
    Viewport::new(1280.0, 800.0)
}

fn in_some_band(p: Vec2, vp: Viewport, params: &TeleportParams) -> bool {
    let bounds = vp.placement_bounds(SIZE, params.padding);
    EdgeBand::ALL
        .iter()
        .any(|b| b.region(bounds, params.band_depth).contains(p))
}

#[test]
fn placements_without_pointer_stay_in_bands_and_on_screen() {
    let params = TeleportParams::default();
    let vp = laptop();
    let bounds = vp.placement_bounds(SIZE, params.padding);
    let mut rng = StdRng::seed_from_u64(7);
    for i in 0..1000 {
        let p = place(vp, SIZE, None, &params, &mut rng);
        assert!(bounds.contains(p), "placement {i} at {p:?} left {bounds:?}");
        assert!(in_some_band(p, vp, &params), "placement {i} at {p:?} not in an edge band");
    }
}

#[test]
fn band_regions_hug_their_edges() {
    let params = TeleportParams::default();
    let bounds = laptop().placement_bounds(SIZE, params.padding);
    let d = params.band_depth;

    let top = EdgeBand::Top.region(bounds, d);
    assert_eq!(top.min.y, bounds.min.y);
    assert_eq!(top.max.y, bounds.min.y + d);

    let right = EdgeBand::Right.region(bounds, d);
    assert_eq!(right.max.x, bounds.max.x);
    assert_eq!(right.min.x, bounds.max.x - d);

    let bottom = EdgeBand::Bottom.region(bounds, d);
    assert_eq!(bottom.min.y, bounds.max.y - d);

    let left = EdgeBand::Left.region(bounds, d);
    assert_eq!(left.max.x, bounds.min.x + d);
}

#[test]
fn reroll_never_lands_under_the_pointer() {
    let params = TeleportParams::default();
    let vp = laptop();
    let bounds = vp.placement_bounds(SIZE, params.padding);
    for seed in 0..300u64 {
        // Replay the first draw to park the pointer right on the first candidate.
        let mut probe = StdRng::seed_from_u64(seed);
        let band = EdgeBand::ALL[probe.gen_range(0..EdgeBand::ALL.len())];
        let region = band.region(bounds, params.band_depth);
        let first = Vec2::new(
            probe.gen_range(region.min.x..=region.max.x),
            probe.gen_range(region.min.y..=region.max.y),
        );
        let pointer = first + SIZE * 0.5;

        let mut rng = StdRng::seed_from_u64(seed);
        let p = place(vp, SIZE, Some(pointer), &params, &mut rng);
        let dist = (p + SIZE * 0.5).distance(pointer);
        assert!(
            dist > params.reroll_distance,
            "seed {seed}: landed {dist:.1}px from the pointer"
        );
        assert!(bounds.contains(p));
    }
}

#[test]
fn tiny_viewport_pins_to_padding() {
    let params = TeleportParams::default();
    let vp = Viewport::new(100.0, 40.0);
    let mut rng = StdRng::seed_from_u64(1);
    let p = place(vp, SIZE, Some(Vec2::new(20.0, 20.0)), &params, &mut rng);
    assert_eq!(p, Vec2::splat(params.padding));
}

fn measured_model(seed: u64) -> TeleportModel<StdRng> {
    let mut m = TeleportModel::new(TeleportParams::default(), StdRng::seed_from_u64(seed));
    m.measure(Rect::new(640.0, 400.0, SIZE.x, SIZE.y));
    m
}

#[test]
fn unmeasured_model_ignores_every_trigger() {
    let mut m = TeleportModel::new(TeleportParams::default(), StdRng::seed_from_u64(3));
    let vp = laptop();
    let ptr = Vec2::new(100.0, 100.0);
    assert!(m.on_pointer(vp, Some(ptr), 0.0).is_none());
    assert!(m.on_hover(vp, ptr, 0.0).is_none());
    assert!(m.on_press(vp, ptr, 0.0).is_none());
    assert!(m.on_timer(vp, None, 0.0).is_none());
    assert!(m.on_resize(vp, None, 0.0).is_none());
    assert_eq!(m.relocations(), 0);
}

#[test]
fn proximity_triggers_only_inside_danger_radius() {
    let mut m = measured_model(11);
    let vp = laptop();
    let center = m.control_rect().expect("measured").center();
    let danger = m.params().danger_radius;

    assert!(m.on_pointer(vp, None, 0.0).is_none());
    assert!(m
        .on_pointer(vp, Some(center + Vec2::new(danger + 1.0, 0.0)), 0.0)
        .is_none());
    assert_eq!(m.relocations(), 0);

    let moved = m.on_pointer(vp, Some(center + Vec2::new(danger - 20.0, 0.0)), 0.0);
    assert!(moved.is_some());
    assert_eq!(m.relocations(), 1);
    assert_eq!(m.position(), moved);
}

#[test]
fn settle_window_lets_a_quick_press_through() {
    let mut m = measured_model(5);
    let vp = laptop();
    assert!(m.on_timer(vp, None, 1_000.0).is_some());
    let settle = m.params().settle_ms;
    let on_button = m.control_rect().expect("measured").center();

    assert!(m.on_press(vp, on_button, 1_000.0 + settle * 0.5).is_none());
    assert!(m.on_hover(vp, on_button, 1_000.0 + settle * 0.5).is_none());
    assert!(m.on_pointer(vp, Some(on_button), 1_000.0 + settle * 0.5).is_none());
    assert_eq!(m.relocations(), 1);

    assert!(m.on_press(vp, on_button, 1_000.0 + settle + 1.0).is_some());
    assert_eq!(m.relocations(), 2);
}

#[test]
fn only_a_press_inside_the_settle_window_is_remembered() {
    let mut m = measured_model(12);
    let vp = laptop();
    assert!(!m.take_landed_press());

    assert!(m.on_timer(vp, None, 0.0).is_some());
    let on_button = m.control_rect().expect("measured").center();
    assert!(m.on_press(vp, on_button, 40.0).is_none());
    assert!(m.take_landed_press());
    assert!(!m.take_landed_press(), "taking the press clears it");

    // A press after the window jumps and leaves nothing to land.
    assert!(m.on_press(vp, on_button, 500.0).is_some());
    assert!(!m.take_landed_press());

    // A click without a landed press jumps even while settling.
    assert!(m.on_click(vp, Some(on_button), 510.0).is_some());
    assert_eq!(m.relocations(), 3);
}

#[test]
fn timer_and_resize_ignore_settle_window() {
    let mut m = measured_model(9);
    let vp = laptop();
    assert!(m.on_timer(vp, None, 0.0).is_some());
    assert!(m.on_timer(vp, None, 1.0).is_some());
    let small = Viewport::new(640.0, 480.0);
    let p = m.on_resize(small, None, 2.0).expect("measured");
    assert!(small.placement_bounds(SIZE, m.params().padding).contains(p));
    assert_eq!(m.relocations(), 3);
}

#[test]
fn hover_over_control_relocates_once_clear_of_pointer() {
    let mut m = measured_model(21);
    let vp = laptop();
    let ptr = m.control_rect().expect("measured").center();

    let next = m.on_hover(vp, ptr, 500.0).expect("relocated");
    assert_eq!(m.relocations(), 1);

    let rect = Rect { min: next, size: SIZE };
    assert!(!rect.contains(ptr));
    assert!(rect.center().distance(ptr) > m.params().danger_radius);
    // The same hover replayed inside the settle window does nothing.
    assert!(m.on_hover(vp, ptr, 501.0).is_none());
    assert_eq!(m.relocations(), 1);
}

#[test]
fn measure_keeps_position_after_first_jump() {
    let mut m = measured_model(2);
    let vp = laptop();
    let p = m.on_timer(vp, None, 0.0).expect("measured");
    m.measure(Rect::new(0.0, 0.0, 130.0, 60.0));
    assert_eq!(m.position(), Some(p));
    assert_eq!(m.control_rect().expect("measured").size, Vec2::new(130.0, 60.0));
}
