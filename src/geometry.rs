use glam::Vec2;

/// Screen-space rectangle in CSS pixels, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    #[inline]
    pub fn translated(&self, by: Vec2) -> Self {
        Self {
            min: self.min + by,
            size: self.size,
        }
    }

    /// Grow the rectangle by `margin` on every side.
    #[inline]
    pub fn inflate(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            size: self.size + Vec2::splat(2.0 * margin),
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// Visible drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Region of valid top-left positions for a control of `size` kept
    /// `padding` away from every edge.
    ///
    /// When the viewport is too small the region collapses onto its minimum
    /// on that axis, so the control is pinned to the padding.
    pub fn placement_bounds(&self, size: Vec2, padding: f32) -> Bounds {
        let min = Vec2::splat(padding);
        let max = Vec2::new(
            self.width - size.x - padding,
            self.height - size.y - padding,
        );
        Bounds::new(min, max)
    }
}

/// Closed axis-aligned region with `min <= max` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp_span(p.x, self.min.x, self.max.x),
            clamp_span(p.y, self.min.y, self.max.y),
        )
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

/// `f32::clamp` that tolerates an inverted range by pinning to `lo`.
#[inline]
pub fn clamp_span(v: f32, lo: f32, hi: f32) -> f32 {
    if hi < lo {
        lo
    } else {
        v.clamp(lo, hi)
    }
}
