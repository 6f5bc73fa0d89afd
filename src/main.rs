mod app;
mod commands;
mod config;
mod diagnostics;
mod fields;
mod init_config;
mod particle;
mod simulation;
mod snapshot;
mod state;
mod units;
mod utils;

fn main() {
    app::run();
}
