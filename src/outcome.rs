/// Which result panel is showing. At most one is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Idle,
    Accepted,
    Declined,
}

/// Parameters for one particle burst; `origin` is normalized to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Burst {
    pub particle_count: u32,
    pub spread_deg: f32,
    pub origin: [f32; 2],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledBurst {
    pub delay_ms: u32,
    pub burst: Burst,
}

/// Center burst, then one from each side.
pub const CELEBRATION: [ScheduledBurst; 3] = [
    ScheduledBurst {
        delay_ms: 0,
        burst: Burst {
            particle_count: 120,
            spread_deg: 70.0,
            origin: [0.5, 0.72],
        },
    },
    ScheduledBurst {
        delay_ms: 140,
        burst: Burst {
            particle_count: 90,
            spread_deg: 100.0,
            origin: [0.2, 0.6],
        },
    },
    ScheduledBurst {
        delay_ms: 240,
        burst: Burst {
            particle_count: 90,
            spread_deg: 100.0,
            origin: [0.8, 0.6],
        },
    },
];

/// Fire-and-forget receiver of particle bursts.
pub trait BurstSink {
    fn schedule(&mut self, delay_ms: u32, burst: Burst);
}

#[derive(Clone, Debug, Default)]
pub struct OutcomeController {
    state: Outcome,
}

impl OutcomeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Outcome {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == Outcome::Idle
    }

    /// Open the acceptance panel and schedule the celebration. Returns
    /// `false` when it was already open.
    pub fn accept<S: BurstSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.state == Outcome::Accepted {
            return false;
        }
        log::info!("[outcome] {:?} -> Accepted", self.state);
        self.state = Outcome::Accepted;
        for s in &CELEBRATION {
            sink.schedule(s.delay_ms, s.burst);
        }
        true
    }

    /// Only reachable from `Idle`.
    pub fn decline(&mut self) -> bool {
        if self.state != Outcome::Idle {
            return false;
        }
        log::info!("[outcome] Idle -> Declined");
        self.state = Outcome::Declined;
        true
    }

    /// Close whichever panel is open, returning the state that was closed.
    pub fn dismiss(&mut self) -> Option<Outcome> {
        let prev = std::mem::take(&mut self.state);
        if prev == Outcome::Idle {
            return None;
        }
        log::info!("[outcome] {:?} -> Idle", prev);
        Some(prev)
    }
}
