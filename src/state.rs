// state.rs
// Shared statics forming the seam between the simulation thread and an
// embedding presentation adapter: a command sender in, published
// snapshots out. The core itself never reads these; configuration flows
// in through SimCommand and is owned by the Simulation.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Sender;

use ultraviolet::{Vec2, Vec3};

use crate::diagnostics::TickStats;
use crate::particle::ChargeSign;
use crate::snapshot::{FieldView, ParticleView};

/// Mirror of the engine's running state, for adapter display.
pub static PAUSED: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(true));
/// Live particle views, refreshed after every loop iteration.
pub static PARTICLES: Lazy<Mutex<Vec<ParticleView>>> = Lazy::new(|| Mutex::new(Vec::new()));
/// Instantaneous field values for on-screen indicators.
pub static FIELDS: Lazy<Mutex<FieldView>> = Lazy::new(|| Mutex::new(FieldView::default()));
pub static SIM_TIME: Lazy<Mutex<f32>> = Lazy::new(|| Mutex::new(0.0));
pub static FRAME: Lazy<Mutex<usize>> = Lazy::new(|| Mutex::new(0));
pub static TICK_STATS: Lazy<Mutex<TickStats>> = Lazy::new(|| Mutex::new(TickStats::default()));

// Commands sent to the simulation thread from the embedding adapter.
pub enum SimCommand {
    Spawn {
        pos: Vec3,
        vel: Vec3,
        sign: ChargeSign,
        mass: f32,
    },
    SetElectricField {
        field: Vec2,
    },
    SetMagneticField {
        field: Vec3,
    },
    SetMagneticFrequency {
        hz: f32,
    },
    SetTrailLength {
        cap: usize,
    },
    SetDomainSize {
        width: f32,
        height: f32,
    },
    SetRunning {
        running: bool,
    },
    StepOnce,
    Reset,
    ResetFields,
    ClearTrails,
}

pub static SIM_COMMAND_SENDER: Lazy<Mutex<Option<Sender<SimCommand>>>> =
    Lazy::new(|| Mutex::new(None));
