// app/startup.rs
// Applies the parsed init configuration to a fresh simulation: domain and
// field values first, then the initial spawn groups. Returns the time
// step the loop should run at.

use std::sync::atomic::Ordering;

use ultraviolet::{Vec2, Vec3};

use crate::config;
use crate::init_config::InitConfig;
use crate::simulation::Simulation;
use crate::state::PAUSED;
use crate::utils;

pub fn apply(init: &InitConfig, simulation: &mut Simulation) -> f32 {
    let mut time_step = config::DEFAULT_TIME_STEP;

    if let Some(sim_section) = &init.simulation {
        let (width, height) = sim_section.domain_size();
        simulation.set_domain_size(width, height);
        if let Some(cap) = sim_section.trail_length {
            simulation.set_trail_length(cap);
        }
        time_step = sim_section.time_step();
    }

    if let Some(fields) = &init.fields {
        simulation.config.electric_field = Vec2::new(fields.electric_x, fields.electric_y);
        simulation.config.magnetic_field =
            Vec3::new(fields.magnetic_x, fields.magnetic_y, fields.magnetic_z);
        simulation.config.magnetic_frequency = fields.frequency;
    }

    for single in &init.particles.single {
        match single.to_charge() {
            Ok(sign) => {
                spawn_or_warn(
                    simulation,
                    Vec3::new(single.x, single.y, single.z),
                    Vec3::new(single.vx, single.vy, single.vz),
                    sign,
                    single.mass,
                );
            }
            Err(e) => eprintln!("Skipping particle group: {}", e),
        }
    }

    for ring in &init.particles.ring {
        match ring.to_charge() {
            Ok(sign) => {
                let center = Vec3::new(ring.x, ring.y, 0.0);
                for (pos, vel) in utils::ring(center, ring.radius, ring.count, ring.speed) {
                    spawn_or_warn(simulation, pos, vel, sign, ring.mass);
                }
            }
            Err(e) => eprintln!("Skipping particle group: {}", e),
        }
    }

    for burst in &init.particles.burst {
        match burst.to_charge() {
            Ok(sign) => {
                let center = Vec3::new(burst.x, burst.y, 0.0);
                let seed = burst.seed.unwrap_or(0);
                for (pos, vel) in utils::burst(center, burst.count, burst.speed, seed) {
                    spawn_or_warn(simulation, pos, vel, sign, burst.mass);
                }
            }
            Err(e) => eprintln!("Skipping particle group: {}", e),
        }
    }

    let start_running = init
        .simulation
        .as_ref()
        .and_then(|s| s.start_running)
        .unwrap_or(false);
    simulation.set_running(start_running);
    PAUSED.store(!start_running, Ordering::Relaxed);

    time_step
}

fn spawn_or_warn(
    simulation: &mut Simulation,
    pos: Vec3,
    vel: Vec3,
    sign: crate::particle::ChargeSign,
    mass: f32,
) {
    if simulation.spawn(pos, vel, sign, mass).is_none() {
        eprintln!(
            "Initial scene truncated: particle limit ({}) reached",
            config::MAX_PARTICLES
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_config::InitConfig;
    use crate::particle::ChargeSign;

    #[test]
    fn apply_builds_the_configured_scene() {
        let toml_str = r#"
            [simulation]
            domain_width = 400.0
            domain_height = 400.0
            trail_length = 30
            time_step = 0.01
            start_running = true

            [fields]
            electric_x = 1.0
            magnetic_z = 2.0

            [[particles.single]]
            x = 200.0
            y = 200.0
            vx = 1.0
            charge = "positive"

            [[particles.ring]]
            x = 200.0
            y = 200.0
            radius = 50.0
            count = 6
            charge = "negative"

            [[particles.burst]]
            x = 100.0
            y = 100.0
            count = 4
            speed = 2.0
            charge = "neutral"
            seed = 9
        "#;
        let init: InitConfig = toml::from_str(toml_str).unwrap();
        let mut sim = Simulation::new();
        let dt = apply(&init, &mut sim);

        assert_eq!(dt, 0.01);
        assert_eq!(sim.particles.len(), 1 + 6 + 4);
        assert_eq!(sim.config.domain_width, 400.0);
        assert_eq!(sim.config.max_trail_length, 30);
        assert_eq!(sim.config.electric_field.x, 1.0);
        assert_eq!(sim.config.magnetic_field.z, 2.0);
        assert!(sim.running);
        assert_eq!(sim.particles[0].sign, ChargeSign::Positive);
        assert_eq!(sim.particles[1].sign, ChargeSign::Negative);
    }

    #[test]
    fn bad_charge_groups_are_skipped_not_fatal() {
        let toml_str = r#"
            [[particles.single]]
            x = 10.0
            y = 10.0
            charge = "plasma"
        "#;
        let init: InitConfig = toml::from_str(toml_str).unwrap();
        let mut sim = Simulation::new();
        apply(&init, &mut sim);
        assert!(sim.particles.is_empty());
        assert!(!sim.running);
    }
}
