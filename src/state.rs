// state.rs
// Shared state between the simulation thread and its host: the command
// channel handle and the per-frame snapshot the render boundary reads.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Sender;

use crate::charge::{ChargeState, Polarity};
use crate::config::BalloonSign;

#[derive(Clone, Copy, Debug, Default)]
pub struct BalloonView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub stuck: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct ChargeView {
    pub x: f32,
    pub y: f32,
    pub sign: Polarity,
    pub state: ChargeState,
}

/// Read-only projection published once per tick. Consumers must never write
/// simulation state; this is all they get.
#[derive(Clone, Debug, Default)]
pub struct FrameSnapshot {
    pub balloon: BalloonView,
    pub charges: Vec<ChargeView>,
    pub transferred_count: u32,
    pub transfer_needed: u32,
}

pub static PAUSED: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(false));
pub static SNAPSHOT: Lazy<Mutex<FrameSnapshot>> = Lazy::new(|| Mutex::new(FrameSnapshot::default()));

// Simulation commands
// These are used to send commands to the simulation thread from the host/UI side
pub enum SimCommand {
    Reset,
    Rub,
    PointerDown { pointer_id: u64, x: f32, y: f32 },
    PointerMove { pointer_id: u64, x: f32, y: f32 },
    PointerUp { pointer_id: u64 },
    PointerCancel { pointer_id: u64 },
    SetBalloonSign { sign: BalloonSign },
    SetBalloonMagnitude { magnitude: f32 },
    SetMobileFraction { fraction: f32 },
    SetShowFieldLines { show: bool },
    SetStickDistance { pixels: f32 },
    StepOnce,
    Shutdown,
}

pub static SIM_COMMAND_SENDER: Lazy<Mutex<Option<Sender<SimCommand>>>> =
    Lazy::new(|| Mutex::new(None));
