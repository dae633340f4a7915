// charge/types.rs
// Contains the Polarity, ChargeState and Site enums and the Charge record

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn unit(self) -> f32 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Negative => -1.0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ChargeState {
    Idle,
    Moving,
    Attached,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Site {
    Sweater,
    Wall,
}

/// One fixed charge site. `pos` never changes after creation; `anim` is what
/// the renderer draws and is the only coordinate induction and transfer
/// animation touch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Charge {
    pub id: u64,
    pub pos: Vec2,
    pub anim: Vec2,
    pub sign: Polarity,
    pub mobile: bool,
    pub state: ChargeState,
    pub progress: f32,
    pub target: Vec2,
    pub curve_offset: f32,
    pub attach_offset: Vec2,
    pub site: Site,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl Charge {
    pub fn new(pos: Vec2, sign: Polarity, mobile: bool, site: Site) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            pos,
            anim: pos,
            sign,
            mobile,
            state: ChargeState::Idle,
            progress: 0.0,
            target: pos,
            curve_offset: 0.0,
            attach_offset: Vec2::zero(),
            site,
        }
    }

    /// Only idle negative sweater charges ever leave the substrate.
    pub fn is_transfer_candidate(&self) -> bool {
        self.site == Site::Sweater
            && self.sign == Polarity::Negative
            && self.state == ChargeState::Idle
    }

    pub fn begin_transfer(&mut self, target: Vec2, curve_offset: f32) {
        self.state = ChargeState::Moving;
        self.progress = 0.0;
        self.target = target;
        self.curve_offset = curve_offset;
    }
}
