use crate::constants::*;
use crate::geometry::{Rect, Viewport};
use glam::Vec2;

/// What happens to velocity when the control is pushed back inside the
/// padded viewport. The position is always corrected into bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Partial-elastic bounce: the velocity component flips sign and shrinks.
    Bounce,
    /// The velocity component is damped but keeps its sign.
    #[default]
    SoftStop,
}

/// Shape of the repulsion falloff over normalized proximity `t = 1 - d/R`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    #[default]
    Quadratic,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Quadratic => t * t,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub max_dt: f32,
    pub influence_radius: f32,
    pub repel_strength: f32,
    pub ease: Ease,
    pub collision_margin: f32,
    pub collision_correction: f32,
    pub collision_velocity_damp: f32,
    pub max_axis_speed: f32,
    pub tether_len: f32,
    pub tether_velocity_damp: f32,
    pub padding: f32,
    pub edge_policy: EdgePolicy,
    /// Fraction of edge-normal speed kept (and reversed) by [`EdgePolicy::Bounce`].
    pub edge_restitution: f32,
    /// Fraction of edge-normal speed kept by [`EdgePolicy::SoftStop`].
    pub edge_soft_damp: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            max_dt: MAX_FRAME_DT_SEC,
            influence_radius: REPEL_INFLUENCE_RADIUS,
            repel_strength: REPEL_STRENGTH,
            ease: Ease::default(),
            collision_margin: COLLISION_MARGIN,
            collision_correction: COLLISION_CORRECTION,
            collision_velocity_damp: COLLISION_VELOCITY_DAMP,
            max_axis_speed: MAX_AXIS_SPEED,
            tether_len: TETHER_MAX_LEN,
            tether_velocity_damp: TETHER_VELOCITY_DAMP,
            padding: VIEWPORT_PADDING,
            edge_policy: EdgePolicy::default(),
            edge_restitution: EDGE_BOUNCE_RESTITUTION,
            edge_soft_damp: EDGE_SOFT_DAMP,
        }
    }
}

/// Offset from the anchor and its velocity, both in px / px·s⁻¹.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub offset: Vec2,
    pub velocity: Vec2,
}

/// Acceleration pushing the control center away from the pointer.
///
/// Exactly zero at or beyond the influence radius.
pub fn repulsion(center: Vec2, pointer: Vec2, params: &SpringParams) -> Vec2 {
    let away = center - pointer;
    let d = away.length();
    if d.is_nan() || d >= params.influence_radius {
        return Vec2::ZERO;
    }
    let dir = if d > 1e-3 { away / d } else { Vec2::X };
    let t = 1.0 - d / params.influence_radius;
    dir * params.repel_strength * params.ease.apply(t)
}

/// Control tethered to its anchor by a damped spring and shoved away by the
/// pointer. Integrated once per frame with semi-implicit Euler.
#[derive(Clone, Debug)]
pub struct SpringModel {
    params: SpringParams,
    state: MotionState,
    anchor: Option<Rect>,
}

impl SpringModel {
    pub fn new(params: SpringParams) -> Self {
        Self {
            params,
            state: MotionState::default(),
            anchor: None,
        }
    }

    pub fn params(&self) -> &SpringParams {
        &self.params
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn state_mut(&mut self) -> &mut MotionState {
        &mut self.state
    }

    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    /// Capture the resting rectangle measured at zero offset.
    pub fn set_anchor(&mut self, anchor: Rect) {
        self.anchor = Some(anchor);
        self.state = MotionState::default();
    }

    /// Forget the anchor until the next measurement; the control rests at
    /// zero offset meanwhile.
    pub fn clear_anchor(&mut self) {
        self.anchor = None;
        self.state = MotionState::default();
    }

    /// Drop momentum so the control drifts back calmly.
    pub fn calm(&mut self) {
        self.state.velocity = Vec2::ZERO;
    }

    /// Current on-screen rectangle of the control.
    pub fn control_rect(&self) -> Option<Rect> {
        self.anchor.map(|a| a.translated(self.state.offset))
    }

    /// Advance one frame and return the offset to publish.
    pub fn tick(&mut self, dt_sec: f32, pointer: Option<Vec2>, viewport: Viewport) -> Vec2 {
        let Some(anchor) = self.anchor else {
            self.state = MotionState::default();
            return Vec2::ZERO;
        };
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, self.params.max_dt)
        } else {
            0.0
        };
        let p = &self.params;
        let s = &mut self.state;

        let mut accel = -p.stiffness * s.offset - p.damping * s.velocity;

        if let Some(ptr) = pointer {
            let rect = anchor.translated(s.offset);
            accel += repulsion(rect.center(), ptr, p);
            soft_collide(s, rect, ptr, p);
        }

        let cap = Vec2::splat(p.max_axis_speed);
        s.velocity = (s.velocity + accel * dt).clamp(-cap, cap);
        s.offset += s.velocity * dt;

        let len = s.offset.length();
        if len > p.tether_len {
            s.offset *= p.tether_len / len;
            s.velocity *= p.tether_velocity_damp;
        }

        contain(s, anchor, viewport, p);
        s.offset
    }
}

// Partial push out of the pointer's way along the axis of least penetration.
fn soft_collide(s: &mut MotionState, rect: Rect, ptr: Vec2, p: &SpringParams) {
    let zone = rect.inflate(p.collision_margin);
    if !zone.contains(ptr) {
        return;
    }
    let max = zone.max();
    // Positive = move right/down, negative = move left/up.
    let push_x = {
        let from_left = ptr.x - zone.min.x;
        let from_right = max.x - ptr.x;
        if from_left <= from_right {
            from_left
        } else {
            -from_right
        }
    };
    let push_y = {
        let from_top = ptr.y - zone.min.y;
        let from_bottom = max.y - ptr.y;
        if from_top <= from_bottom {
            from_top
        } else {
            -from_bottom
        }
    };
    if push_x.abs() <= push_y.abs() {
        s.offset.x += push_x * p.collision_correction;
        s.velocity.x *= p.collision_velocity_damp;
    } else {
        s.offset.y += push_y * p.collision_correction;
        s.velocity.y *= p.collision_velocity_damp;
    }
}

fn contain(s: &mut MotionState, anchor: Rect, viewport: Viewport, p: &SpringParams) {
    let bounds = viewport.placement_bounds(anchor.size, p.padding);
    let top_left = anchor.min + s.offset;
    let fixed = bounds.clamp(top_left);
    let factor = match p.edge_policy {
        EdgePolicy::Bounce => -p.edge_restitution,
        EdgePolicy::SoftStop => p.edge_soft_damp,
    };
    if fixed.x != top_left.x {
        s.offset.x += fixed.x - top_left.x;
        s.velocity.x *= factor;
    }
    if fixed.y != top_left.y {
        s.offset.y += fixed.y - top_left.y;
        s.velocity.y *= factor;
    }
}
