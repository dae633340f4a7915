use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use ultraviolet::Vec2;

use crate::commands;
use crate::config;
use crate::simulation::Simulation;
use crate::state::{BalloonView, ChargeView, SimCommand, PAUSED, SNAPSHOT};

/// Publish the per-frame snapshot for the render boundary. Consumers only
/// ever see a fully stepped state.
pub fn render(simulation: &Simulation) {
    let mut snapshot = SNAPSHOT.lock();
    snapshot.balloon = BalloonView {
        x: simulation.balloon.pos.x,
        y: simulation.balloon.pos.y,
        radius: simulation.balloon.radius,
        stuck: simulation.balloon.stuck,
    };
    snapshot.charges.clear();
    snapshot
        .charges
        .extend(simulation.charges.iter().map(|c| ChargeView {
            x: c.anim.x,
            y: c.anim.y,
            sign: c.sign,
            state: c.state,
        }));
    snapshot.transferred_count = simulation.session.transferred_count;
    snapshot.transfer_needed = simulation.config.transfer_needed;
}

pub fn run_simulation_loop(rx: std::sync::mpsc::Receiver<SimCommand>, mut simulation: Simulation) {
    let frame_budget = Duration::from_millis(config::FRAME_MS as u64);
    let mut last = Instant::now();
    loop {
        // Handle commands
        while let Ok(cmd) = rx.try_recv() {
            if !commands::process_command(cmd, &mut simulation) {
                return;
            }
        }

        // Repair non-finite balloon state before stepping.
        if !simulation.balloon.pos.x.is_finite() || !simulation.balloon.pos.y.is_finite() {
            eprintln!("[ERROR] balloon position went non-finite; restoring start position");
            simulation.balloon.pos = simulation.layout.balloon_start;
            simulation.balloon.vel = Vec2::zero();
        }
        if !simulation.balloon.vel.x.is_finite() || !simulation.balloon.vel.y.is_finite() {
            simulation.balloon.vel = Vec2::zero();
        }

        let now = Instant::now();
        let dt_ms = (now - last).as_secs_f32() * 1000.0;
        last = now;

        if PAUSED.load(Ordering::Relaxed) {
            std::thread::yield_now();
        } else {
            simulation.step(dt_ms);
        }

        render(&simulation);

        let elapsed = last.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}
