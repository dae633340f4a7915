// balloon.rs
// The draggable body: pointer capture, drag velocity, damped inertia

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use ultraviolet::Vec2;

use crate::config;
use crate::layout::Layout;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Balloon {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub dragging: bool,
    pub stuck: bool,
    /// Id of the pointer that owns the balloon. A second concurrent pointer
    /// is ignored; move/up events for any other id are no-ops.
    pub active_pointer: Option<u64>,
    /// Magnitude of the most recent pointer-move displacement. Consumed by
    /// the tick, so one fast move counts as rubbing for exactly one tick.
    pub last_move: f32,
    /// Ids of charges riding on the balloon.
    pub electrons: SmallVec<[u64; 8]>,
}

impl Balloon {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::zero(),
            radius,
            dragging: false,
            stuck: false,
            active_pointer: None,
            last_move: 0.0,
            electrons: SmallVec::new(),
        }
    }

    /// Net charge seen by the induction pass: the configured sign and
    /// magnitude plus every transferred electron.
    pub fn effective_charge(&self, sign_unit: f32, magnitude: f32) -> f32 {
        sign_unit * magnitude - self.electrons.len() as f32 * config::TRANSFERRED_CHARGE_UNIT
    }

    pub fn pointer_down(&mut self, pointer_id: u64, p: Vec2) {
        if self.active_pointer.is_some() {
            return;
        }
        if (p - self.pos).mag() > self.radius + config::POINTER_PICK_SLACK {
            return;
        }
        self.active_pointer = Some(pointer_id);
        self.dragging = true;
        self.stuck = false;
        self.vel = Vec2::zero();
    }

    pub fn pointer_move(&mut self, pointer_id: u64, p: Vec2, layout: &Layout) {
        if self.active_pointer != Some(pointer_id) {
            return;
        }
        let clamped = layout.clamp_drag(p, self.radius);
        self.vel = (clamped - self.pos) * config::DRAG_VELOCITY_FACTOR;
        self.last_move = (clamped - self.pos).mag();
        self.pos = clamped;
        self.stuck = false;
    }

    pub fn pointer_up(&mut self, pointer_id: u64) {
        if self.active_pointer != Some(pointer_id) {
            return;
        }
        self.release_pointer();
    }

    pub fn release_pointer(&mut self) {
        self.active_pointer = None;
        self.dragging = false;
    }

    /// Damped coast while neither dragged nor stuck.
    pub fn integrate(&mut self, dt_ms: f32, layout: &Layout) {
        if self.dragging || self.stuck {
            return;
        }
        self.vel *= config::VELOCITY_DAMPING;
        self.pos += self.vel * (dt_ms / config::FRAME_MS);
        self.pos = layout.clamp_coast(self.pos, self.radius);
    }
}
