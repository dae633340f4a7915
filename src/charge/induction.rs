// charge/induction.rs
// Cosmetic displacement of idle mobile charges near a charged balloon

use crate::balloon::Balloon;
use crate::config::{self, SimConfig};

use super::types::{Charge, ChargeState};

/// Nudge every idle mobile charge toward (opposite polarity) or away from
/// (same polarity) the balloon, linearly decaying with distance, and relax
/// everything else back to its rest site. Never touches `state`.
pub fn apply_induction(charges: &mut [Charge], balloon: &Balloon, config: &SimConfig, dt_ms: f32) {
    let alpha = (config::INDUCTION_RELAX * dt_ms / config::FRAME_MS).min(1.0);
    let q = balloon
        .effective_charge(config.balloon_sign.unit(), config.balloon_magnitude)
        .clamp(-config::INDUCTION_PULL_MAX, config::INDUCTION_PULL_MAX);

    for charge in charges.iter_mut() {
        if charge.state != ChargeState::Idle {
            continue;
        }
        let mut rest = charge.pos;
        if charge.mobile && q != 0.0 {
            let to_balloon = balloon.pos - charge.pos;
            let dist = to_balloon.mag();
            if dist > 0.0 && dist < config::INDUCTION_RADIUS {
                let falloff = 1.0 - dist / config::INDUCTION_RADIUS;
                // Opposite polarities pull toward the balloon, like ones push away.
                let pull = -q * charge.sign.unit();
                rest += to_balloon / dist * (pull * falloff * config::INDUCTION_MAX_SHIFT);
            }
        }
        charge.anim += (rest - charge.anim) * alpha;
    }
}
