// Host-side tests for page lifecycle decisions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn cached_page_keeps_loop_running() {
    assert_eq!(on_pagehide(true), HideAction::Keep);
}

#[test]
fn unloading_page_stops_loop() {
    assert_eq!(on_pagehide(false), HideAction::Stop);
}
