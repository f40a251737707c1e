use crate::config::{MotionMode, PageConfig};
use crate::geometry::{Rect, Viewport};
use crate::outcome::{BurstSink, Outcome, OutcomeController};
use crate::spring::{SpringModel, SpringParams};
use crate::teleport::{TeleportModel, TeleportParams};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Where the evasive control should be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Translation relative to the laid-out anchor.
    Offset(Vec2),
    /// Absolute top-left in viewport coordinates.
    Absolute(Vec2),
}

/// What a click on the evasive control did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickEffect {
    Ignored,
    Declined,
    /// No press landed first, so the control jumped instead.
    Moved(Placement),
}

pub enum Motion {
    Spring(SpringModel),
    Teleport(TeleportModel<StdRng>),
}

/// Owns the evasive control's motion state, the latest pointer sample and
/// the page outcome. One instance per page view; every DOM event and frame
/// is funneled through it.
pub struct EvasiveController {
    motion: Motion,
    outcome: OutcomeController,
    pointer: Option<Vec2>,
    viewport: Viewport,
}

impl EvasiveController {
    pub fn new(config: &PageConfig, viewport: Viewport) -> Self {
        let motion = match config.mode {
            MotionMode::Spring => Motion::Spring(SpringModel::new(SpringParams {
                edge_policy: config.edges,
                ..SpringParams::default()
            })),
            MotionMode::Teleport => {
                let rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Motion::Teleport(TeleportModel::new(TeleportParams::default(), rng))
            }
        };
        Self {
            motion,
            outcome: OutcomeController::new(),
            pointer: None,
            viewport,
        }
    }

    pub fn mode(&self) -> MotionMode {
        match self.motion {
            Motion::Spring(_) => MotionMode::Spring,
            Motion::Teleport(_) => MotionMode::Teleport,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome.state()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn spring(&self) -> Option<&SpringModel> {
        match &self.motion {
            Motion::Spring(m) => Some(m),
            Motion::Teleport(_) => None,
        }
    }

    pub fn teleport(&self) -> Option<&TeleportModel<StdRng>> {
        match &self.motion {
            Motion::Teleport(m) => Some(m),
            Motion::Spring(_) => None,
        }
    }

    /// Whether the control has been measured since the last resize.
    pub fn is_measured(&self) -> bool {
        match &self.motion {
            Motion::Spring(m) => m.anchor().is_some(),
            Motion::Teleport(m) => m.control_rect().is_some(),
        }
    }

    /// Feed the control's laid-out rectangle (taken at zero offset for the
    /// spring model).
    pub fn measure(&mut self, rect: Rect) {
        match &mut self.motion {
            Motion::Spring(m) => m.set_anchor(rect),
            Motion::Teleport(m) => m.measure(rect),
        }
        log::debug!(
            "[controller] measured ({:.0},{:.0}) {:.0}x{:.0}",
            rect.min.x,
            rect.min.y,
            rect.size.x,
            rect.size.y
        );
    }

    /// Latest pointer or touch sample; `None` when it left the surface.
    pub fn on_pointer(&mut self, sample: Option<Vec2>, now_ms: f64) -> Option<Placement> {
        self.pointer = sample;
        match &mut self.motion {
            Motion::Spring(_) => None,
            Motion::Teleport(m) => m
                .on_pointer(self.viewport, sample, now_ms)
                .map(Placement::Absolute),
        }
    }

    /// Pointer entered the control.
    pub fn on_hover(&mut self, sample: Vec2, now_ms: f64) -> Option<Placement> {
        self.pointer = Some(sample);
        match &mut self.motion {
            Motion::Spring(_) => None,
            Motion::Teleport(m) => m
                .on_hover(self.viewport, sample, now_ms)
                .map(Placement::Absolute),
        }
    }

    /// Press started on the control.
    pub fn on_press(&mut self, sample: Vec2, now_ms: f64) -> Option<Placement> {
        self.pointer = Some(sample);
        match &mut self.motion {
            Motion::Spring(_) => None,
            Motion::Teleport(m) => m
                .on_press(self.viewport, sample, now_ms)
                .map(Placement::Absolute),
        }
    }

    /// Keyboard focus landed on the control. The spring model treats its
    /// own center as the pointer so it shoves itself away.
    pub fn on_focus(&mut self, now_ms: f64) -> Option<Placement> {
        match &mut self.motion {
            Motion::Spring(m) => {
                if let Some(rect) = m.control_rect() {
                    self.pointer = Some(rect.center());
                }
                None
            }
            Motion::Teleport(m) => m
                .on_focus(self.viewport, self.pointer, now_ms)
                .map(Placement::Absolute),
        }
    }

    /// A click reached the control. It declines only when the press that
    /// started it landed inside the settle window; a click with no landed
    /// press (Enter/Space on a focused button) makes the control jump.
    pub fn on_evasive_click(&mut self, now_ms: f64) -> ClickEffect {
        let Motion::Teleport(m) = &mut self.motion else {
            return ClickEffect::Ignored;
        };
        let landed = m.take_landed_press();
        if !self.outcome.is_idle() {
            return ClickEffect::Ignored;
        }
        if landed {
            return if self.outcome.decline() {
                ClickEffect::Declined
            } else {
                ClickEffect::Ignored
            };
        }
        m.on_click(self.viewport, self.pointer, now_ms)
            .map(|p| ClickEffect::Moved(Placement::Absolute(p)))
            .unwrap_or(ClickEffect::Ignored)
    }

    /// Fixed-cadence relocation; idle only.
    pub fn on_timer(&mut self, now_ms: f64) -> Option<Placement> {
        if !self.outcome.is_idle() {
            return None;
        }
        match &mut self.motion {
            Motion::Spring(_) => None,
            Motion::Teleport(m) => m
                .on_timer(self.viewport, self.pointer, now_ms)
                .map(Placement::Absolute),
        }
    }

    /// The spring model drops its anchor and rests at zero offset until the
    /// caller measures again; the teleport model jumps inside the new bounds.
    pub fn on_resize(&mut self, viewport: Viewport, now_ms: f64) -> Option<Placement> {
        self.viewport = viewport;
        match &mut self.motion {
            Motion::Spring(m) => {
                m.clear_anchor();
                Some(Placement::Offset(Vec2::ZERO))
            }
            Motion::Teleport(m) => m
                .on_resize(viewport, self.pointer, now_ms)
                .map(Placement::Absolute),
        }
    }

    /// One display refresh. Only the spring model moves continuously.
    pub fn tick(&mut self, dt_sec: f32) -> Option<Placement> {
        match &mut self.motion {
            Motion::Spring(m) => Some(Placement::Offset(m.tick(
                dt_sec,
                self.pointer,
                self.viewport,
            ))),
            Motion::Teleport(_) => None,
        }
    }

    pub fn accept<S: BurstSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        self.outcome.accept(sink)
    }

    /// Close the open panel. The spring model loses its momentum so the
    /// control rebounds calmly.
    pub fn dismiss(&mut self) -> bool {
        if self.outcome.dismiss().is_none() {
            return false;
        }
        if let Motion::Spring(m) = &mut self.motion {
            m.calm();
        }
        true
    }
}
