// simulation/scheduler.rs
// Decides when and which charges begin transferring

use ultraviolet::Vec2;

use crate::balloon::Balloon;
use crate::charge::{registry, Charge};
use crate::config::{self, SimConfig};

/// Per-simulation transfer episode. `transferred_count` only ever grows;
/// a full reset replaces the whole session.
#[derive(Clone, Debug, Default)]
pub struct TransferSession {
    pub active: bool,
    pub last_transfer_started_at: f64,
    pub transferred_count: u32,
}

impl TransferSession {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Arm or advance the session for one tick. `now_ms` is accumulated
/// simulation time; `distance` and `rubbing` come from the detector.
/// `armed_by_command` satisfies the arming condition once, for the explicit
/// rub command.
pub fn run_scheduler(
    session: &mut TransferSession,
    charges: &mut [Charge],
    balloon: &Balloon,
    config: &SimConfig,
    now_ms: f64,
    distance: f32,
    rubbing: bool,
    armed_by_command: bool,
) {
    if !session.active {
        let armed = distance < config.proximity_threshold && balloon.dragging && rubbing;
        if armed || armed_by_command {
            session.active = true;
            session.last_transfer_started_at = now_ms;
            // The first transfer fires immediately; the interval paces the rest.
            if !start_next_transfer(charges, balloon) {
                session.active = false;
            }
        }
        return;
    }

    if distance > config.proximity_threshold * config::SESSION_RETREAT_FACTOR {
        session.active = false;
        return;
    }

    if now_ms - session.last_transfer_started_at >= config.transfer_interval_ms {
        if start_next_transfer(charges, balloon) {
            session.last_transfer_started_at = now_ms;
        } else {
            session.active = false;
        }
    }
}

fn start_next_transfer(charges: &mut [Charge], balloon: &Balloon) -> bool {
    let idx = match registry::nearest_idle_negative(charges, balloon.pos) {
        Some(idx) => idx,
        None => return false,
    };
    let curve = (rand::random::<f32>() - 0.5) * config::CURVE_OFFSET_SPAN;
    charges[idx].begin_transfer(transfer_target(balloon), curve);
    true
}

/// A landing point on the balloon's lower hemisphere, biased toward the side
/// facing the sweater.
fn transfer_target(balloon: &Balloon) -> Vec2 {
    let angle = (rand::random::<f32>() * 0.9 - 0.45) * std::f32::consts::PI
        + std::f32::consts::FRAC_PI_2;
    balloon.pos
        + Vec2::new(angle.cos(), angle.sin())
            * (balloon.radius * config::TARGET_RING_FACTOR + config::TARGET_RING_SLACK)
}
