/// Motion, placement and page tuning constants.
///
/// Distances are CSS pixels, times are milliseconds unless the name says
/// otherwise.
// Spring tether toward the anchor: a = -k*p - c*v
pub const SPRING_STIFFNESS: f32 = 55.0;
pub const SPRING_DAMPING: f32 = 12.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.033; // cap dt so frame hitches don't destabilize the integrator

// Pointer repulsion ("magnet")
pub const REPEL_INFLUENCE_RADIUS: f32 = 140.0; // how close before it reacts
pub const REPEL_STRENGTH: f32 = 2200.0;

// Soft collision with the pointer
pub const COLLISION_MARGIN: f32 = 12.0;
pub const COLLISION_CORRECTION: f32 = 0.35; // fraction of the overlap removed per frame
pub const COLLISION_VELOCITY_DAMP: f32 = 0.5;

// Integrator guards
pub const MAX_AXIS_SPEED: f32 = 2400.0; // px/s per component

// Elastic band
pub const TETHER_MAX_LEN: f32 = 180.0;
pub const TETHER_VELOCITY_DAMP: f32 = 0.6;

// Viewport containment
pub const VIEWPORT_PADDING: f32 = 10.0;
pub const EDGE_BOUNCE_RESTITUTION: f32 = 0.25; // velocity *= -restitution
pub const EDGE_SOFT_DAMP: f32 = 0.35; // velocity *= damp, sign kept

// Teleport placement
pub const EDGE_BAND_DEPTH: f32 = 86.0;
pub const REROLL_DISTANCE: f32 = 165.0;
pub const DANGER_RADIUS: f32 = 140.0;
pub const RELOCATE_INTERVAL_MS: u32 = 650;
pub const SETTLE_WINDOW_MS: f64 = 110.0; // pointer triggers ignored right after a jump

// Page text
pub const DATE_LABEL: &str = "February 14th";
pub const TIME_LABEL: &str = "8:15pm";
