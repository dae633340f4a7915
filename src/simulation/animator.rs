// simulation/animator.rs
// Advances in-flight charges along an eased arc and records arrivals

use ultraviolet::Vec2;

use crate::balloon::Balloon;
use crate::charge::{Charge, ChargeState};

use super::scheduler::TransferSession;

/// Advance every moving charge and keep attached ones riding the balloon.
/// Arrival flips the terminal state and counts the transfer exactly once.
pub fn advance_transfers(
    charges: &mut [Charge],
    balloon: &mut Balloon,
    session: &mut TransferSession,
    dt_ms: f32,
    transfer_time_ms: f32,
) {
    for charge in charges.iter_mut() {
        match charge.state {
            ChargeState::Moving => {
                charge.progress = (charge.progress + dt_ms / transfer_time_ms).min(1.0);
                let ease = charge.progress * (2.0 - charge.progress);
                let span = charge.target - charge.pos;
                let arc = (ease * std::f32::consts::PI).sin() * charge.curve_offset;
                charge.anim = charge.pos + span * ease + perpendicular(span) * arc;
                if charge.progress >= 1.0 {
                    charge.state = ChargeState::Attached;
                    charge.anim = charge.target;
                    charge.attach_offset = charge.target - balloon.pos;
                    balloon.electrons.push(charge.id);
                    session.transferred_count += 1;
                }
            }
            ChargeState::Attached => {
                charge.anim = balloon.pos + charge.attach_offset;
            }
            ChargeState::Idle => {}
        }
    }
}

fn perpendicular(v: Vec2) -> Vec2 {
    let mag = v.mag();
    if mag > f32::EPSILON {
        Vec2::new(-v.y, v.x) / mag
    } else {
        Vec2::zero()
    }
}
