// layout.rs
// Playfield geometry: the sweater band, the wall, and the balloon's bounds

use serde::{Deserialize, Serialize};
use ultraviolet::Vec2;

use crate::config;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Clone, Debug)]
pub struct Layout {
    pub view_w: f32,
    pub view_h: f32,
    pub sweater: Rect,
    pub wall: Rect,
    pub balloon_start: Vec2,
    pub balloon_radius: f32,
    pub rows: usize,
    pub cols: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            view_w: config::VIEW_W,
            view_h: config::VIEW_H,
            sweater: Rect {
                x: config::SWEATER_X,
                y: config::SWEATER_Y,
                w: config::SWEATER_W,
                h: config::SWEATER_H,
            },
            wall: Rect {
                x: config::VIEW_W - config::WALL_INSET,
                y: config::WALL_MARGIN_Y,
                w: config::WALL_W,
                h: config::VIEW_H - 2.0 * config::WALL_MARGIN_Y,
            },
            balloon_start: Vec2::new(config::BALLOON_START_X, config::BALLOON_START_Y),
            balloon_radius: config::BALLOON_RADIUS,
            rows: config::SWEATER_ROWS,
            cols: config::SWEATER_COLS,
        }
    }
}

impl Layout {
    /// Reference point the proximity detector measures against: just above
    /// the sweater's top-centre.
    pub fn substrate_anchor(&self) -> Vec2 {
        Vec2::new(
            self.sweater.x + self.sweater.w / 2.0,
            self.sweater.y - config::SUBSTRATE_ANCHOR_RAISE,
        )
    }

    /// Clamp a dragged position. The balloon cannot be pulled into the
    /// sweater's vertical extent or past the wall face.
    pub fn clamp_drag(&self, p: Vec2, radius: f32) -> Vec2 {
        self.clamp_with_margin(p, radius, config::DRAG_BOUND_MARGIN)
    }

    /// Clamp a coasting position, with a slightly tighter margin.
    pub fn clamp_coast(&self, p: Vec2, radius: f32) -> Vec2 {
        self.clamp_with_margin(p, radius, config::COAST_BOUND_MARGIN)
    }

    fn clamp_with_margin(&self, p: Vec2, radius: f32, margin: f32) -> Vec2 {
        Vec2::new(
            p.x.clamp(radius + margin, self.wall.x - radius - margin),
            p.y.clamp(radius + margin, self.sweater.y - radius - margin),
        )
    }
}
