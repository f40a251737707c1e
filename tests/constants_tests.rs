// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_are_positive() {
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SPRING_DAMPING > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 0.1);
    assert!(REPEL_INFLUENCE_RADIUS > 0.0);
    assert!(REPEL_STRENGTH > 0.0);
    assert!(MAX_AXIS_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_factors_are_fractions() {
    assert!(COLLISION_CORRECTION > 0.0 && COLLISION_CORRECTION < 1.0);
    assert!(COLLISION_VELOCITY_DAMP >= 0.0 && COLLISION_VELOCITY_DAMP <= 1.0);
    assert!(TETHER_VELOCITY_DAMP >= 0.0 && TETHER_VELOCITY_DAMP <= 1.0);
    assert!(EDGE_BOUNCE_RESTITUTION >= 0.0 && EDGE_BOUNCE_RESTITUTION <= 1.0);
    assert!(EDGE_SOFT_DAMP >= 0.0 && EDGE_SOFT_DAMP <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Re-rolled placements must land outside the zone that triggers a jump.
    assert!(REROLL_DISTANCE > DANGER_RADIUS);

    // The tether must let the control clear its own influence radius.
    assert!(TETHER_MAX_LEN > REPEL_INFLUENCE_RADIUS);

    // A jump must settle well before the next timer tick.
    assert!(SETTLE_WINDOW_MS < RELOCATE_INTERVAL_MS as f64);

    assert!(EDGE_BAND_DEPTH > VIEWPORT_PADDING);
}
