use crate::constants::*;
use crate::geometry::{Bounds, Rect, Viewport};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeBand {
    Top,
    Right,
    Bottom,
    Left,
}

impl EdgeBand {
    pub const ALL: [EdgeBand; 4] = [
        EdgeBand::Top,
        EdgeBand::Right,
        EdgeBand::Bottom,
        EdgeBand::Left,
    ];

    /// Strip of `bounds` (valid top-left positions) hugging this edge.
    pub fn region(self, bounds: Bounds, depth: f32) -> Bounds {
        let d = depth.max(0.0);
        let Bounds { min, max } = bounds;
        match self {
            EdgeBand::Top => Bounds::new(min, Vec2::new(max.x, (min.y + d).min(max.y))),
            EdgeBand::Bottom => Bounds::new(Vec2::new(min.x, (max.y - d).max(min.y)), max),
            EdgeBand::Left => Bounds::new(min, Vec2::new((min.x + d).min(max.x), max.y)),
            EdgeBand::Right => Bounds::new(Vec2::new((max.x - d).max(min.x), min.y), max),
        }
    }
}

/// Why a relocation happened; only used for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Timer,
    Proximity,
    Hover,
    Press,
    Click,
    Focus,
    Resize,
}

#[derive(Clone, Debug)]
pub struct TeleportParams {
    pub padding: f32,
    pub band_depth: f32,
    pub reroll_distance: f32,
    pub danger_radius: f32,
    pub interval_ms: u32,
    pub settle_ms: f64,
}

impl Default for TeleportParams {
    fn default() -> Self {
        Self {
            padding: VIEWPORT_PADDING,
            band_depth: EDGE_BAND_DEPTH,
            reroll_distance: REROLL_DISTANCE,
            danger_radius: DANGER_RADIUS,
            interval_ms: RELOCATE_INTERVAL_MS,
            settle_ms: SETTLE_WINDOW_MS,
        }
    }
}

#[inline]
fn sample_in<R: Rng + ?Sized>(region: Bounds, rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.gen_range(region.min.x..=region.max.x),
        rng.gen_range(region.min.y..=region.max.y),
    )
}

/// Pick a new top-left for a control of `size`.
///
/// A random edge band is sampled first. If the candidate's center lands
/// within the re-roll distance of the pointer, the band farthest from the
/// pointer is sampled instead, and if that is still too close the farthest
/// corner of the placement bounds wins. The result always lies inside the
/// padded viewport.
pub fn place<R: Rng + ?Sized>(
    viewport: Viewport,
    size: Vec2,
    pointer: Option<Vec2>,
    params: &TeleportParams,
    rng: &mut R,
) -> Vec2 {
    let bounds = viewport.placement_bounds(size, params.padding);
    let half = size * 0.5;
    let band = EdgeBand::ALL[rng.gen_range(0..EdgeBand::ALL.len())];
    let first = sample_in(band.region(bounds, params.band_depth), rng);

    let Some(ptr) = pointer else {
        return bounds.clamp(first);
    };
    let clear = |p: Vec2| (p + half).distance(ptr) > params.reroll_distance;
    if clear(first) {
        return bounds.clamp(first);
    }

    let far_band = EdgeBand::ALL
        .into_iter()
        .map(|b| b.region(bounds, params.band_depth))
        .max_by(|a, b| {
            let da = (a.center() + half).distance_squared(ptr);
            let db = (b.center() + half).distance_squared(ptr);
            da.total_cmp(&db)
        })
        .unwrap_or(bounds);
    let second = sample_in(far_band, rng);
    if clear(second) {
        return bounds.clamp(second);
    }

    let corner = bounds
        .corners()
        .into_iter()
        .max_by(|a, b| {
            (*a + half)
                .distance_squared(ptr)
                .total_cmp(&(*b + half).distance_squared(ptr))
        })
        .unwrap_or(bounds.min);
    bounds.clamp(corner)
}

/// Control that jumps away instead of sliding.
///
/// Pointer-driven triggers (proximity, hover, press) are ignored for a short
/// settle window after each jump. A press let through during that window is
/// the only thing that lets the following click land on the control.
pub struct TeleportModel<R> {
    params: TeleportParams,
    rng: R,
    size: Option<Vec2>,
    position: Option<Vec2>,
    last_jump_ms: Option<f64>,
    press_landed: bool,
    relocations: u64,
}

impl<R: Rng> TeleportModel<R> {
    pub fn new(params: TeleportParams, rng: R) -> Self {
        Self {
            params,
            rng,
            size: None,
            position: None,
            last_jump_ms: None,
            press_landed: false,
            relocations: 0,
        }
    }

    pub fn params(&self) -> &TeleportParams {
        &self.params
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn relocations(&self) -> u64 {
        self.relocations
    }

    pub fn control_rect(&self) -> Option<Rect> {
        match (self.position, self.size) {
            (Some(min), Some(size)) => Some(Rect { min, size }),
            _ => None,
        }
    }

    /// Record the control's laid-out rectangle. Keeps an existing position,
    /// only the size is refreshed.
    pub fn measure(&mut self, rect: Rect) {
        self.size = Some(rect.size);
        if self.position.is_none() {
            self.position = Some(rect.min);
        }
    }

    fn settling(&self, now_ms: f64) -> bool {
        self.last_jump_ms
            .is_some_and(|t| now_ms - t < self.params.settle_ms)
    }

    fn relocate(
        &mut self,
        viewport: Viewport,
        pointer: Option<Vec2>,
        now_ms: f64,
        trigger: Trigger,
    ) -> Option<Vec2> {
        let size = self.size?;
        let next = place(viewport, size, pointer, &self.params, &mut self.rng);
        self.position = Some(next);
        self.last_jump_ms = Some(now_ms);
        self.press_landed = false;
        self.relocations += 1;
        log::debug!(
            "[teleport] {:?} -> ({:.0},{:.0}) #{}",
            trigger,
            next.x,
            next.y,
            self.relocations
        );
        Some(next)
    }

    /// Pointer moved; jump if it came within the danger radius.
    pub fn on_pointer(
        &mut self,
        viewport: Viewport,
        sample: Option<Vec2>,
        now_ms: f64,
    ) -> Option<Vec2> {
        let ptr = sample?;
        let rect = self.control_rect()?;
        if self.settling(now_ms) || rect.center().distance(ptr) >= self.params.danger_radius {
            return None;
        }
        self.relocate(viewport, Some(ptr), now_ms, Trigger::Proximity)
    }

    pub fn on_hover(&mut self, viewport: Viewport, sample: Vec2, now_ms: f64) -> Option<Vec2> {
        if self.settling(now_ms) {
            return None;
        }
        self.relocate(viewport, Some(sample), now_ms, Trigger::Hover)
    }

    /// A press inside the settle window is let through and remembered until
    /// the next click or jump.
    pub fn on_press(&mut self, viewport: Viewport, sample: Vec2, now_ms: f64) -> Option<Vec2> {
        if self.settling(now_ms) {
            self.press_landed = true;
            return None;
        }
        self.relocate(viewport, Some(sample), now_ms, Trigger::Press)
    }

    /// Whether the last press landed on the control; clears the flag.
    pub fn take_landed_press(&mut self) -> bool {
        std::mem::take(&mut self.press_landed)
    }

    /// A click arrived without a landed press (keyboard activation or a
    /// synthetic click). Counts as another attempt and jumps.
    pub fn on_click(
        &mut self,
        viewport: Viewport,
        pointer: Option<Vec2>,
        now_ms: f64,
    ) -> Option<Vec2> {
        self.relocate(viewport, pointer, now_ms, Trigger::Click)
    }

    pub fn on_timer(
        &mut self,
        viewport: Viewport,
        pointer: Option<Vec2>,
        now_ms: f64,
    ) -> Option<Vec2> {
        self.relocate(viewport, pointer, now_ms, Trigger::Timer)
    }

    pub fn on_focus(
        &mut self,
        viewport: Viewport,
        pointer: Option<Vec2>,
        now_ms: f64,
    ) -> Option<Vec2> {
        self.relocate(viewport, pointer, now_ms, Trigger::Focus)
    }

    pub fn on_resize(
        &mut self,
        viewport: Viewport,
        pointer: Option<Vec2>,
        now_ms: f64,
    ) -> Option<Vec2> {
        self.relocate(viewport, pointer, now_ms, Trigger::Resize)
    }
}
