use std::sync::mpsc::channel;

use crate::config::{LAB_CONFIG, SimConfig};
use crate::init_config::InitConfig;
use crate::layout::Layout;
use crate::simulation::Simulation;
use crate::state::SIM_COMMAND_SENDER;

pub mod simulation_loop;

pub fn run() {
    let mut layout = Layout::default();
    let mut config = SimConfig::default();
    match InitConfig::load_default() {
        Ok(init) => init.apply(&mut layout, &mut config),
        Err(e) => eprintln!("lab_config.toml not loaded ({}); using defaults", e),
    }
    *LAB_CONFIG.lock() = config.clone();

    let (tx, rx) = channel();
    *SIM_COMMAND_SENDER.lock() = Some(tx);

    let simulation = Simulation::new(layout, config);
    simulation_loop::run_simulation_loop(rx, simulation);
}
