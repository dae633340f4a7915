// commands.rs
// Handles processing of SimCommand messages for the simulation

use std::sync::atomic::Ordering;

use ultraviolet::Vec2;

use crate::config::{self, LAB_CONFIG};
use crate::simulation::Simulation;
use crate::state::{SimCommand, PAUSED};

/// Process a single SimCommand. Returns `false` when the simulation loop
/// should shut down.
pub fn process_command(cmd: SimCommand, simulation: &mut Simulation) -> bool {
    match cmd {
        SimCommand::Reset => {
            simulation.reset();
        }

        SimCommand::Rub => {
            simulation.request_rub();
        }

        SimCommand::PointerDown { pointer_id, x, y } => {
            simulation.balloon.pointer_down(pointer_id, Vec2::new(x, y));
        }

        SimCommand::PointerMove { pointer_id, x, y } => {
            simulation
                .balloon
                .pointer_move(pointer_id, Vec2::new(x, y), &simulation.layout);
        }

        SimCommand::PointerUp { pointer_id } | SimCommand::PointerCancel { pointer_id } => {
            simulation.balloon.pointer_up(pointer_id);
        }

        SimCommand::SetBalloonSign { sign } => {
            simulation.config.balloon_sign = sign;
            sync_config(simulation);
        }

        SimCommand::SetBalloonMagnitude { magnitude } => {
            simulation.config.balloon_magnitude = magnitude;
            sync_config(simulation);
        }

        // Mobility is assigned at creation, so changing the fraction
        // re-rolls the whole layout and restarts the session.
        SimCommand::SetMobileFraction { fraction } => {
            simulation.config.mobile_fraction = fraction;
            sync_config(simulation);
            simulation.reinit_charges();
        }

        SimCommand::SetShowFieldLines { show } => {
            simulation.config.show_field_lines = show;
            sync_config(simulation);
        }

        SimCommand::SetStickDistance { pixels } => {
            simulation.config.stick_distance = pixels;
            sync_config(simulation);
        }

        SimCommand::StepOnce => {
            simulation.step(config::FRAME_MS);
            crate::app::simulation_loop::render(simulation);
            PAUSED.store(true, Ordering::Relaxed);
        }

        SimCommand::Shutdown => {
            simulation.balloon.release_pointer();
            return false;
        }
    }
    true
}

fn sync_config(simulation: &mut Simulation) {
    simulation.config.sanitize();
    *LAB_CONFIG.lock() = simulation.config.clone();
    #[cfg(feature = "command_debug")]
    println!("config now: {:?}", simulation.config);
}
