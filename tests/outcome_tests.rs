// Host-side tests for the outcome state machine and celebration schedule.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod outcome {
    include!("../src/outcome.rs");
}

use outcome::*;

#[derive(Default)]
struct Recorder {
    calls: Vec<(u32, Burst)>,
}

impl BurstSink for Recorder {
    fn schedule(&mut self, delay_ms: u32, burst: Burst) {
        self.calls.push((delay_ms, burst));
    }
}

#[test]
fn accept_schedules_three_bursts() {
    let mut oc = OutcomeController::new();
    let mut sink = Recorder::default();
    assert!(oc.accept(&mut sink));
    assert_eq!(oc.state(), Outcome::Accepted);

    let delays: Vec<u32> = sink.calls.iter().map(|(d, _)| *d).collect();
    assert_eq!(delays, vec![0, 140, 240]);
    assert_eq!(sink.calls[0].1.particle_count, 120);
    assert_eq!(sink.calls[0].1.origin, [0.5, 0.72]);
    // Side bursts mirror each other.
    assert_eq!(sink.calls[1].1.origin[0] + sink.calls[2].1.origin[0], 1.0);
    assert_eq!(sink.calls[1].1.spread_deg, sink.calls[2].1.spread_deg);
}

#[test]
fn accepting_twice_does_not_fire_again() {
    let mut oc = OutcomeController::new();
    let mut sink = Recorder::default();
    oc.accept(&mut sink);
    assert!(!oc.accept(&mut sink));
    assert_eq!(sink.calls.len(), 3);
}

#[test]
fn decline_only_from_idle() {
    let mut oc = OutcomeController::new();
    assert!(oc.decline());
    assert_eq!(oc.state(), Outcome::Declined);
    assert!(!oc.decline());

    let mut accepted = OutcomeController::new();
    accepted.accept(&mut Recorder::default());
    assert!(!accepted.decline());
    assert_eq!(accepted.state(), Outcome::Accepted);
}

#[test]
fn accept_replaces_declined_panel() {
    let mut oc = OutcomeController::new();
    oc.decline();
    let mut sink = Recorder::default();
    assert!(oc.accept(&mut sink));
    assert_eq!(oc.state(), Outcome::Accepted);
    assert_eq!(sink.calls.len(), 3);
}

#[test]
fn dismiss_returns_to_idle() {
    let mut oc = OutcomeController::new();
    assert_eq!(oc.dismiss(), None);

    oc.accept(&mut Recorder::default());
    assert_eq!(oc.dismiss(), Some(Outcome::Accepted));
    assert!(oc.is_idle());

    oc.decline();
    assert_eq!(oc.dismiss(), Some(Outcome::Declined));
    assert_eq!(oc.state(), Outcome::Idle);
}
