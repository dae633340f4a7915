// simulation/simulation.rs
// Contains the Simulation struct and main methods (new, step, reset)

use ultraviolet::Vec2;

use crate::balloon::Balloon;
use crate::charge::{induction, registry, Charge};
use crate::config::{self, SimConfig};
use crate::layout::Layout;

use super::scheduler::{self, TransferSession};
use super::{animator, rub};

/// The main simulation state and logic for the static-electricity lab.
/// `step` is the only entry point that advances time; any driver with a
/// monotonic clock can run it.
pub struct Simulation {
    pub frame: usize,
    pub time_ms: f64,
    pub layout: Layout,
    pub charges: Vec<Charge>,
    pub balloon: Balloon,
    pub session: TransferSession,
    pub config: SimConfig,
    rub_requested: bool,
}

impl Simulation {
    pub fn new(layout: Layout, mut config: SimConfig) -> Self {
        config.sanitize();
        let charges = registry::init_charges(&layout, &config);
        let balloon = Balloon::new(layout.balloon_start, layout.balloon_radius);
        Self {
            frame: 0,
            time_ms: 0.0,
            layout,
            charges,
            balloon,
            session: TransferSession::default(),
            config,
            rub_requested: false,
        }
    }

    /// Full reset: recreate the charge set, the balloon, and the session.
    pub fn reset(&mut self) {
        self.charges = registry::init_charges(&self.layout, &self.config);
        self.balloon = Balloon::new(self.layout.balloon_start, self.layout.balloon_radius);
        self.session.reset();
        self.rub_requested = false;
    }

    /// Re-initialize the charge layout after a configuration change. The
    /// balloon keeps its position but loses its riders; the session restarts
    /// from zero.
    pub fn reinit_charges(&mut self) {
        self.charges = registry::init_charges(&self.layout, &self.config);
        self.balloon.electrons.clear();
        self.session.reset();
    }

    /// Queue the explicit rub command; consumed by the next tick.
    pub fn request_rub(&mut self) {
        self.rub_requested = true;
    }

    /// One simulation tick. Runs the whole pipeline synchronously; the
    /// render boundary reads published state only after this returns.
    pub fn step(&mut self, dt_ms: f32) {
        let dt_ms = dt_ms.clamp(0.0, config::MAX_TICK_MS);
        self.time_ms += dt_ms as f64;

        self.balloon.integrate(dt_ms, &self.layout);

        let distance = rub::distance_to_substrate(&self.balloon, &self.layout);
        let rubbing = rub::is_rubbing(&self.balloon, self.config.rub_speed_threshold);

        let armed_by_command = std::mem::take(&mut self.rub_requested);
        scheduler::run_scheduler(
            &mut self.session,
            &mut self.charges,
            &self.balloon,
            &self.config,
            self.time_ms,
            distance,
            rubbing,
            armed_by_command,
        );

        animator::advance_transfers(
            &mut self.charges,
            &mut self.balloon,
            &mut self.session,
            dt_ms,
            self.config.transfer_time_ms,
        );

        induction::apply_induction(&mut self.charges, &self.balloon, &self.config, dt_ms);

        self.apply_stick();

        // The rub signal is instantaneous: one move event arms at most one tick.
        self.balloon.last_move = 0.0;
        self.frame += 1;
    }

    /// Latch the balloon once enough charge has crossed, or onto the wall
    /// when it carries any charge at all. A live drag defers latching so
    /// `dragging` and `stuck` are never both set.
    fn apply_stick(&mut self) {
        if self.balloon.stuck || self.balloon.dragging {
            return;
        }
        if self.session.transferred_count >= self.config.transfer_needed {
            let sweater = self.layout.sweater;
            let reach = self.balloon.radius + config::STICK_SNAP_MARGIN;
            let x = self
                .balloon
                .pos
                .x
                .clamp(sweater.x + reach, sweater.x + sweater.w - reach);
            self.balloon.pos = Vec2::new(
                x,
                sweater.y - self.balloon.radius - config::STICK_REST_GAP,
            );
            self.balloon.vel = Vec2::zero();
            self.balloon.stuck = true;
        } else if !self.balloon.electrons.is_empty() {
            let gap = self.layout.wall.x - (self.balloon.pos.x + self.balloon.radius);
            if gap <= self.config.stick_distance {
                self.balloon.pos.x = self.layout.wall.x - self.balloon.radius;
                self.balloon.vel = Vec2::zero();
                self.balloon.stuck = true;
            }
        }
    }
}
