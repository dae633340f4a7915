// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};

// ====================
// Playfield / Layout
// ====================
pub const VIEW_W: f32 = 1000.0;
pub const VIEW_H: f32 = 640.0;
pub const SWEATER_X: f32 = 120.0;
pub const SWEATER_Y: f32 = 360.0;
pub const SWEATER_W: f32 = 760.0;
pub const SWEATER_H: f32 = 140.0;
pub const WALL_W: f32 = 70.0;
pub const WALL_INSET: f32 = 90.0; // wall.x = VIEW_W - WALL_INSET
pub const WALL_MARGIN_Y: f32 = 40.0;
pub const BALLOON_START_X: f32 = VIEW_W - 180.0;
pub const BALLOON_START_Y: f32 = 160.0;
pub const BALLOON_RADIUS: f32 = 44.0;
/// The proximity detector measures to a point this far above the sweater's
/// top-centre, not to the fabric itself.
pub const SUBSTRATE_ANCHOR_RAISE: f32 = 12.0;

// ====================
// Charge Grid
// ====================
pub const SWEATER_ROWS: usize = 9;
pub const SWEATER_COLS: usize = 7;
pub const GRID_INSET: f32 = 24.0;
/// Full width of the uniform jitter applied to each grid site.
pub const GRID_JITTER: f32 = 8.0;
pub const WALL_PAIRS: usize = 10;

// ====================
// Drag / Inertia
// ====================
/// Nominal tick length; per-tick rates are normalized against this.
pub const FRAME_MS: f32 = 16.0;
/// Longest dt a single tick will integrate (stalls, debugger pauses).
pub const MAX_TICK_MS: f32 = 100.0;
pub const POINTER_PICK_SLACK: f32 = 8.0;
pub const DRAG_BOUND_MARGIN: f32 = 8.0;
pub const COAST_BOUND_MARGIN: f32 = 6.0;
pub const DRAG_VELOCITY_FACTOR: f32 = 0.6;
/// Per-tick velocity damping while coasting free.
pub const VELOCITY_DAMPING: f32 = 0.92;

// ====================
// Induction
// ====================
pub const INDUCTION_RADIUS: f32 = 260.0;
/// Exponential smoothing rate toward the rest point, per nominal tick.
pub const INDUCTION_RELAX: f32 = 0.06;
/// Peak displacement in px at zero distance for one unit of balloon charge.
pub const INDUCTION_MAX_SHIFT: f32 = 18.0;
/// Charge contributed by each transferred electron.
pub const TRANSFERRED_CHARGE_UNIT: f32 = 0.25;
/// Net balloon charge is clamped to this magnitude before displacing sites.
pub const INDUCTION_PULL_MAX: f32 = 3.0;

// ====================
// Transfer
// ====================
pub const PROXIMITY_THRESHOLD: f32 = 160.0;
pub const RUB_SPEED_THRESHOLD: f32 = 6.0;
pub const TRANSFER_INTERVAL_MS: f64 = 110.0;
pub const TRANSFER_TIME_MS: f32 = 600.0;
pub const TRANSFER_NEEDED: u32 = 6;
/// A session ends when the balloon retreats past this multiple of the
/// proximity threshold.
pub const SESSION_RETREAT_FACTOR: f32 = 1.35;
/// Landing ring around the balloon centre: fraction of radius plus slack.
pub const TARGET_RING_FACTOR: f32 = 0.5;
pub const TARGET_RING_SLACK: f32 = 6.0;
/// Full span of the random perpendicular arc offset.
pub const CURVE_OFFSET_SPAN: f32 = 20.0;

// ====================
// Stick
// ====================
pub const STICK_SNAP_MARGIN: f32 = 12.0;
pub const STICK_REST_GAP: f32 = 2.0;
pub const STICK_DISTANCE_DEFAULT: f32 = 40.0;
pub const STICK_DISTANCE_MIN: f32 = 8.0;
pub const STICK_DISTANCE_MAX: f32 = 80.0;

// ====================
// Balloon charge controls
// ====================
pub const BALLOON_MAGNITUDE_DEFAULT: f32 = 1.0;
pub const BALLOON_MAGNITUDE_MAX: f32 = 3.0;
pub const MOBILE_FRACTION_DEFAULT: f32 = 0.35;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalloonSign {
    Negative,
    Neutral,
    Positive,
}

impl BalloonSign {
    pub fn unit(self) -> f32 {
        match self {
            BalloonSign::Negative => -1.0,
            BalloonSign::Neutral => 0.0,
            BalloonSign::Positive => 1.0,
        }
    }
}

impl Default for BalloonSign {
    fn default() -> Self {
        BalloonSign::Negative
    }
}

/// Runtime-tunable parameters. The two historical variants of this sim
/// disagreed on the transfer constants, so they live here instead of being
/// hard-coded in the scheduler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub balloon_sign: BalloonSign,
    pub balloon_magnitude: f32,
    pub mobile_fraction: f32,
    /// Rendering hint only; the core never reads it.
    pub show_field_lines: bool,
    /// Reach of the wall latch, in pixels from the wall face.
    pub stick_distance: f32,
    pub transfer_needed: u32,
    pub transfer_interval_ms: f64,
    pub transfer_time_ms: f32,
    pub proximity_threshold: f32,
    pub rub_speed_threshold: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            balloon_sign: BalloonSign::default(),
            balloon_magnitude: BALLOON_MAGNITUDE_DEFAULT,
            mobile_fraction: MOBILE_FRACTION_DEFAULT,
            show_field_lines: false,
            stick_distance: STICK_DISTANCE_DEFAULT,
            transfer_needed: TRANSFER_NEEDED,
            transfer_interval_ms: TRANSFER_INTERVAL_MS,
            transfer_time_ms: TRANSFER_TIME_MS,
            proximity_threshold: PROXIMITY_THRESHOLD,
            rub_speed_threshold: RUB_SPEED_THRESHOLD,
        }
    }
}

impl SimConfig {
    /// Clamp every tunable to its valid range. Out-of-range input never
    /// fails; it lands on the nearest bound.
    pub fn sanitize(&mut self) {
        self.balloon_magnitude = self.balloon_magnitude.clamp(0.0, BALLOON_MAGNITUDE_MAX);
        self.mobile_fraction = self.mobile_fraction.clamp(0.0, 1.0);
        self.stick_distance = self
            .stick_distance
            .clamp(STICK_DISTANCE_MIN, STICK_DISTANCE_MAX);
        self.transfer_needed = self.transfer_needed.max(1);
        self.transfer_interval_ms = self.transfer_interval_ms.max(1.0);
        self.transfer_time_ms = self.transfer_time_ms.max(1.0);
        self.proximity_threshold = self.proximity_threshold.max(0.0);
        self.rub_speed_threshold = self.rub_speed_threshold.max(0.0);
    }
}

use once_cell::sync::Lazy;
use parking_lot::Mutex;

pub static LAB_CONFIG: Lazy<Mutex<SimConfig>> = Lazy::new(|| Mutex::new(SimConfig::default()));
