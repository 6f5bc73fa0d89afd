// app/mod.rs
// Headless driver: owns the thread pool, the command channel and the
// simulation thread. A presentation adapter embedding this crate does the
// same wiring and keeps the main thread for its own event loop.

use std::sync::mpsc::channel;

use crate::config;
use crate::init_config::InitConfig;
use crate::simulation::Simulation;
use crate::state::SIM_COMMAND_SENDER;

pub mod simulation_loop;
pub mod startup;

pub fn run() {
    // Global thread pool with threads = max(3, total cores) - 2
    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(config::MIN_THREADS)
        .max(config::MIN_THREADS)
        - config::THREADS_LEAVE_FREE;
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .unwrap();

    let (tx, rx) = channel();
    *SIM_COMMAND_SENDER.lock() = Some(tx);

    let mut simulation = Simulation::new();
    let mut time_step = config::DEFAULT_TIME_STEP;
    match InitConfig::load_default() {
        Ok(init) => time_step = startup::apply(&init, &mut simulation),
        Err(e) => eprintln!("init_config.toml not loaded ({}); starting empty", e),
    }

    let handle = std::thread::spawn(move || {
        simulation_loop::run_simulation_loop(rx, simulation, time_step);
    });

    // No presentation layer here; the loop thread is the whole process.
    handle.join().unwrap();
}
