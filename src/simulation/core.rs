// simulation/core.rs
// Contains the Simulation struct and its main methods (tick, spawn,
// reset). Owns the particle collection and the clock; all mutation goes
// through here.

use rayon::prelude::*;
use ultraviolet::{Vec2, Vec3};

use crate::config::{self, SimConfig};
use crate::fields;
use crate::particle::{ChargeSign, Particle};

pub struct Simulation {
    pub particles: Vec<Particle>,
    pub config: SimConfig,
    pub time: f32,
    pub frame: usize,
    pub running: bool,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_config(SimConfig::default())
    }

    pub fn with_config(config: SimConfig) -> Self {
        Self {
            particles: Vec::new(),
            config,
            time: 0.0,
            frame: 0,
            running: false,
        }
    }

    /// Advance the simulation by one step. No-op while paused.
    ///
    /// Fields are evaluated once per tick; particles are independent so
    /// the update fans out over the thread pool. Removal is a sequential
    /// stable `retain`, preserving survivor order.
    pub fn tick(&mut self, dt: f32) {
        if !self.running {
            return;
        }

        let e_field = fields::electric_field(&self.config);
        let b_field = fields::magnetic_field_at(&self.config, self.time);
        let trail_cap = self.config.max_trail_length;
        let domain = self.config.domain();

        self.particles
            .par_iter_mut()
            .for_each(|p| p.update(dt, e_field, b_field, trail_cap, &domain));
        self.particles.retain(|p| !p.removed);

        self.time += dt;
        self.frame += 1;
    }

    /// Single step regardless of the running state; leaves the engine
    /// paused afterwards.
    pub fn step_once(&mut self, dt: f32) {
        self.running = true;
        self.tick(dt);
        self.running = false;
    }

    /// Admission-controlled spawn. Returns the new particle's id, or
    /// `None` once the collection is at capacity.
    pub fn spawn(&mut self, pos: Vec3, vel: Vec3, sign: ChargeSign, mass: f32) -> Option<u64> {
        if self.particles.len() >= config::MAX_PARTICLES {
            return None;
        }
        let particle = Particle::new(pos, vel, sign, mass);
        let id = particle.id;
        self.particles.push(particle);
        Some(id)
    }

    /// Drop every particle and rewind the clock. Field configuration is
    /// left alone; see `reset_fields`.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.time = 0.0;
        self.frame = 0;
    }

    /// Zero both fields and stop any oscillation.
    pub fn reset_fields(&mut self) {
        self.config.electric_field = Vec2::zero();
        self.config.magnetic_field = Vec3::zero();
        self.config.magnetic_frequency = 0.0;
    }

    pub fn clear_all_trails(&mut self) {
        for p in &mut self.particles {
            p.clear_trail();
        }
    }

    /// Install a new shared trail cap and trim existing trails now.
    pub fn set_trail_length(&mut self, cap: usize) {
        self.config.max_trail_length = cap;
        for p in &mut self.particles {
            p.set_trail_cap(cap);
        }
    }

    /// Out-of-domain particles are culled by the normal boundary check on
    /// the next tick.
    pub fn set_domain_size(&mut self, width: f32, height: f32) {
        self.config.domain_width = width;
        self.config.domain_height = height;
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}

#[test]
fn capacity_cap_rejects_excess_spawns() {
    let mut sim = Simulation::new();
    for _ in 0..config::MAX_PARTICLES {
        assert!(sim
            .spawn(Vec3::zero(), Vec3::zero(), ChargeSign::Neutral, 1.0)
            .is_some());
    }
    assert!(sim
        .spawn(Vec3::zero(), Vec3::zero(), ChargeSign::Neutral, 1.0)
        .is_none());
    assert_eq!(sim.particles.len(), config::MAX_PARTICLES);
}

#[test]
fn neutral_particle_moves_in_a_straight_line() {
    use crate::units;

    let mut sim = Simulation::new();
    sim.spawn(
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        ChargeSign::Neutral,
        1.0,
    );
    sim.set_running(true);

    let n = 25;
    for _ in 0..n {
        sim.tick(config::DEFAULT_TIME_STEP);
    }

    let expected_dx = n as f32
        * config::DEFAULT_TIME_STEP
        * units::VELOCITY_SCALE
        * units::VISUAL_SPEED_FACTOR;
    let p = &sim.particles[0];
    assert!((p.pos.x - (100.0 + expected_dx)).abs() < 1e-4);
    assert!((p.pos.y - 100.0).abs() < 1e-6);
    assert!(p.trail.len() <= sim.config.max_trail_length);
    assert!((sim.time - n as f32 * config::DEFAULT_TIME_STEP).abs() < 1e-5);
}

#[test]
fn tick_is_a_noop_while_paused() {
    let mut sim = Simulation::new();
    sim.spawn(
        Vec3::new(10.0, 10.0, 0.0),
        Vec3::new(5.0, 0.0, 0.0),
        ChargeSign::Neutral,
        1.0,
    );
    sim.tick(config::DEFAULT_TIME_STEP);
    assert_eq!(sim.time, 0.0);
    assert_eq!(sim.frame, 0);
    assert_eq!(sim.particles[0].pos.x, 10.0);
}

#[test]
fn step_once_ticks_exactly_once_and_pauses() {
    let mut sim = Simulation::new();
    sim.spawn(
        Vec3::new(10.0, 10.0, 0.0),
        Vec3::new(5.0, 0.0, 0.0),
        ChargeSign::Neutral,
        1.0,
    );
    sim.step_once(config::DEFAULT_TIME_STEP);
    assert!(!sim.running);
    assert_eq!(sim.frame, 1);
    assert!(sim.particles[0].pos.x > 10.0);
}

#[test]
fn reset_empties_the_collection_and_rewinds_the_clock() {
    let mut sim = Simulation::new();
    sim.config.magnetic_frequency = 2.0;
    for _ in 0..10 {
        sim.spawn(
            Vec3::new(100.0, 100.0, 0.0),
            Vec3::zero(),
            ChargeSign::Positive,
            1.0,
        );
    }
    sim.set_running(true);
    sim.tick(config::DEFAULT_TIME_STEP);
    sim.reset();
    assert!(sim.particles.is_empty());
    assert_eq!(sim.time, 0.0);
    assert_eq!(sim.frame, 0);
    // field configuration is untouched by reset
    assert_eq!(sim.config.magnetic_frequency, 2.0);
}

#[test]
fn reset_fields_zeroes_fields_and_frequency() {
    let mut sim = Simulation::new();
    sim.config.electric_field = Vec2::new(1.0, 2.0);
    sim.config.magnetic_field = Vec3::new(3.0, 4.0, 5.0);
    sim.config.magnetic_frequency = 1.5;
    sim.reset_fields();
    assert_eq!(sim.config.electric_field.x, 0.0);
    assert_eq!(sim.config.magnetic_field.z, 0.0);
    assert_eq!(sim.config.magnetic_frequency, 0.0);
}

#[test]
fn removal_tick_preserves_survivor_order() {
    let mut sim = Simulation::new();
    sim.config.domain_width = 100.0;
    sim.config.domain_height = 100.0;

    // alternate between particles inside the margin and far outside it
    let mut kept_ids = Vec::new();
    for i in 0..6 {
        let x = if i % 2 == 0 { 50.0 } else { 1.0e4 };
        let id = sim
            .spawn(Vec3::new(x, 50.0, 0.0), Vec3::zero(), ChargeSign::Neutral, 1.0)
            .unwrap();
        if i % 2 == 0 {
            kept_ids.push(id);
        }
    }
    sim.set_running(true);
    sim.tick(config::DEFAULT_TIME_STEP);

    let surviving: Vec<u64> = sim.particles.iter().map(|p| p.id).collect();
    assert_eq!(surviving, kept_ids);
}

#[test]
fn flagged_particles_are_excluded_from_the_next_active_set() {
    let mut sim = Simulation::new();
    sim.spawn(
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::zero(),
        ChargeSign::Neutral,
        1.0,
    );
    sim.particles[0].mark_for_removal();
    sim.set_running(true);
    sim.tick(config::DEFAULT_TIME_STEP);
    assert!(sim.particles.is_empty());
}

#[test]
fn oscillating_field_bends_a_charge_then_releases_it() {
    use crate::units;

    // frequency 1 Hz: at t = 0.25 the instantaneous field is ~zero, so a
    // charge updated at exactly that instant feels no magnetic force
    let mut sim = Simulation::new();
    sim.config.magnetic_field = Vec3::new(0.0, 0.0, 2.0);
    sim.config.magnetic_frequency = 1.0;
    sim.time = 0.25;
    sim.spawn(
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(1.0 / units::VELOCITY_SCALE, 0.0, 0.0),
        ChargeSign::Positive,
        1.0,
    );
    sim.set_running(true);
    sim.tick(config::DEFAULT_TIME_STEP);
    assert!(sim.particles[0].vel.y.abs() < 1e-6);
}
