// charge/registry.rs
// Builds the fixed charge sites and answers queries over the arena

use ultraviolet::Vec2;

use crate::config::{self, SimConfig};
use crate::layout::Layout;

use super::types::{Charge, Polarity, Site};

/// Lay out the full charge set: a jittered rows x cols grid over the sweater
/// plus alternating +/- pairs down the wall. Shape is deterministic; jitter,
/// polarity and mobility are drawn fresh every call.
pub fn init_charges(layout: &Layout, config: &SimConfig) -> Vec<Charge> {
    let rows = layout.rows.max(1);
    let cols = layout.cols.max(1);
    let mut charges = Vec::with_capacity(rows * cols + 2 * config::WALL_PAIRS);

    let sweater = layout.sweater;
    let col_span = (cols - 1).max(1) as f32;
    let row_span = (rows - 1).max(1) as f32;
    for row in 0..rows {
        for col in 0..cols {
            let fx = col as f32 / col_span;
            let fy = row as f32 / row_span;
            let pos = Vec2::new(
                sweater.x
                    + config::GRID_INSET
                    + fx * (sweater.w - 2.0 * config::GRID_INSET)
                    + (fastrand::f32() - 0.5) * config::GRID_JITTER,
                sweater.y
                    + config::GRID_INSET
                    + fy * (sweater.h - 2.0 * config::GRID_INSET)
                    + (fastrand::f32() - 0.5) * config::GRID_JITTER,
            );
            let sign = if fastrand::bool() {
                Polarity::Positive
            } else {
                Polarity::Negative
            };
            let mobile = fastrand::f32() < config.mobile_fraction;
            charges.push(Charge::new(pos, sign, mobile, Site::Sweater));
        }
    }

    // Wall pairs are induction scenery; they never transfer.
    let wall = layout.wall;
    let pair_spacing = wall.h / config::WALL_PAIRS as f32;
    for i in 0..config::WALL_PAIRS {
        let y = wall.y + (i as f32 + 0.5) * pair_spacing;
        let mobile = fastrand::f32() < config.mobile_fraction;
        charges.push(Charge::new(
            Vec2::new(wall.x + wall.w * 0.3, y),
            Polarity::Positive,
            mobile,
            Site::Wall,
        ));
        let mobile = fastrand::f32() < config.mobile_fraction;
        charges.push(Charge::new(
            Vec2::new(wall.x + wall.w * 0.7, y),
            Polarity::Negative,
            mobile,
            Site::Wall,
        ));
    }

    charges
}

/// Indices of every transfer candidate, in registry order.
pub fn idle_negative_indices(charges: &[Charge]) -> Vec<usize> {
    charges
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_transfer_candidate())
        .map(|(i, _)| i)
        .collect()
}

/// The candidate closest to `from`. Ties resolve to the earlier registry
/// index.
pub fn nearest_idle_negative(charges: &[Charge], from: Vec2) -> Option<usize> {
    idle_negative_indices(charges).into_iter().min_by(|&a, &b| {
        (charges[a].pos - from)
            .mag_sq()
            .total_cmp(&(charges[b].pos - from).mag_sq())
    })
}
