// commands.rs
// Handles processing of SimCommand messages for the simulation

use std::sync::atomic::Ordering;

use ultraviolet::{Vec2, Vec3};

use crate::config;
use crate::particle::ChargeSign;
use crate::simulation::Simulation;
use crate::state::{SimCommand, PAUSED};

/// Process a single SimCommand
pub fn process_command(cmd: SimCommand, simulation: &mut Simulation) {
    match cmd {
        SimCommand::Spawn {
            pos,
            vel,
            sign,
            mass,
        } => {
            handle_spawn(simulation, pos, vel, sign, mass);
        }

        SimCommand::SetElectricField { field } => {
            handle_set_electric_field(simulation, field);
        }

        SimCommand::SetMagneticField { field } => {
            handle_set_magnetic_field(simulation, field);
        }

        SimCommand::SetMagneticFrequency { hz } => {
            handle_set_magnetic_frequency(simulation, hz);
        }

        SimCommand::SetTrailLength { cap } => {
            simulation.set_trail_length(cap);
        }

        SimCommand::SetDomainSize { width, height } => {
            simulation.set_domain_size(width, height);
        }

        SimCommand::SetRunning { running } => {
            handle_set_running(simulation, running);
        }

        SimCommand::StepOnce => {
            handle_step_once(simulation);
        }

        SimCommand::Reset => {
            handle_reset(simulation);
        }

        SimCommand::ResetFields => {
            simulation.reset_fields();
        }

        SimCommand::ClearTrails => {
            simulation.clear_all_trails();
        }
    }
}

fn handle_spawn(simulation: &mut Simulation, pos: Vec3, vel: Vec3, sign: ChargeSign, mass: f32) {
    if simulation.spawn(pos, vel, sign, mass).is_none() {
        eprintln!(
            "Spawn rejected: particle limit ({}) reached",
            config::MAX_PARTICLES
        );
    }
}

fn handle_set_electric_field(simulation: &mut Simulation, field: Vec2) {
    simulation.config.electric_field = field;
}

fn handle_set_magnetic_field(simulation: &mut Simulation, field: Vec3) {
    simulation.config.magnetic_field = field;
}

fn handle_set_magnetic_frequency(simulation: &mut Simulation, hz: f32) {
    // negative input behaves as "no oscillation"; store it as given and
    // let field evaluation apply the <= 0 rule
    simulation.config.magnetic_frequency = hz;
}

fn handle_set_running(simulation: &mut Simulation, running: bool) {
    simulation.set_running(running);
    PAUSED.store(!running, Ordering::Relaxed);
}

fn handle_step_once(simulation: &mut Simulation) {
    simulation.step_once(config::DEFAULT_TIME_STEP);
    PAUSED.store(true, Ordering::Relaxed);
}

fn handle_reset(simulation: &mut Simulation) {
    // a full reset also stops the run
    simulation.reset();
    simulation.set_running(false);
    PAUSED.store(true, Ordering::Relaxed);
}
