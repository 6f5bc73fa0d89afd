// app/simulation_loop.rs
// The simulation thread: drain commands, tick at the fixed physics
// cadence, publish snapshots for whatever is watching.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crate::commands;
use crate::config;
use crate::diagnostics::TickTimer;
use crate::simulation::Simulation;
use crate::snapshot::{self, ParticleView};
use crate::state::{SimCommand, FIELDS, FRAME, PARTICLES, SIM_TIME, TICK_STATS};

/// Copy the post-tick state out for the embedding adapter.
pub fn publish(simulation: &Simulation) {
    {
        let mut lock = PARTICLES.lock();
        lock.clear();
        lock.extend(simulation.particles.iter().map(ParticleView::from));
    }
    *FIELDS.lock() = snapshot::field_view(simulation);
    *SIM_TIME.lock() = simulation.time;
    *FRAME.lock() = simulation.frame;
}

pub fn run_simulation_loop(
    rx: Receiver<SimCommand>,
    mut simulation: Simulation,
    time_step: f32,
) {
    let mut timer = TickTimer::new(config::TICK_STATS_WINDOW);
    let frame_budget = Duration::from_secs_f32(time_step);

    loop {
        let frame_start = Instant::now();

        // Handle commands
        while let Ok(cmd) = rx.try_recv() {
            commands::process_command(cmd, &mut simulation);
        }

        if simulation.running {
            simulation.tick(time_step);
            *TICK_STATS.lock() = timer.record(frame_start.elapsed());
        }

        publish(&simulation);

        // Hold the physics cadence whether running or paused; paused
        // iterations still drain commands and republish.
        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}
