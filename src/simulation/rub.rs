// simulation/rub.rs
// Proximity and rub signals, recomputed from current state every tick

use crate::balloon::Balloon;
use crate::layout::Layout;

pub fn distance_to_substrate(balloon: &Balloon, layout: &Layout) -> f32 {
    (balloon.pos - layout.substrate_anchor()).mag()
}

/// Instantaneous rub signal: the latest pointer-move displacement while a
/// drag is active. `last_move` is zeroed at the end of every tick, so a
/// single fast move followed by stillness counts for exactly one tick.
pub fn is_rubbing(balloon: &Balloon, threshold: f32) -> bool {
    balloon.dragging && balloon.last_move >= threshold
}
