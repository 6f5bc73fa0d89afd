// init_config.rs
// Handles loading and parsing the startup configuration from
// init_config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config;
use crate::particle::ChargeSign;

#[derive(Debug, Deserialize, Serialize)]
pub struct InitConfig {
    pub simulation: Option<SimulationSection>,
    pub fields: Option<FieldsSection>,
    #[serde(default)]
    pub particles: ParticlesSection,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SimulationSection {
    /// Optional visible domain width. Falls back to the default when omitted.
    pub domain_width: Option<f32>,
    /// Optional visible domain height. Falls back to the default when omitted.
    pub domain_height: Option<f32>,
    pub trail_length: Option<usize>,
    pub time_step: Option<f32>,
    /// Start ticking immediately instead of paused.
    pub start_running: Option<bool>,
}

impl SimulationSection {
    /// Return the domain width and height, using the global defaults when
    /// values are not provided.
    pub fn domain_size(&self) -> (f32, f32) {
        (
            self.domain_width.unwrap_or(config::DEFAULT_DOMAIN_WIDTH),
            self.domain_height.unwrap_or(config::DEFAULT_DOMAIN_HEIGHT),
        )
    }

    pub fn time_step(&self) -> f32 {
        self.time_step.unwrap_or(config::DEFAULT_TIME_STEP)
    }
}

/// Initial field values. Components default to zero, so a partial table
/// works.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FieldsSection {
    #[serde(default)]
    pub electric_x: f32,
    #[serde(default)]
    pub electric_y: f32,
    #[serde(default)]
    pub magnetic_x: f32,
    #[serde(default)]
    pub magnetic_y: f32,
    #[serde(default)]
    pub magnetic_z: f32,
    #[serde(default)]
    pub frequency: f32,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParticlesSection {
    #[serde(default)]
    pub single: Vec<SingleConfig>,
    #[serde(default)]
    pub ring: Vec<RingConfig>,
    #[serde(default)]
    pub burst: Vec<BurstConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SingleConfig {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
    #[serde(default)]
    pub vz: f32,
    pub charge: String,
    #[serde(default = "default_mass")]
    pub mass: f32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RingConfig {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub count: usize,
    /// Tangential launch speed in slider units.
    #[serde(default)]
    pub speed: f32,
    pub charge: String,
    #[serde(default = "default_mass")]
    pub mass: f32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BurstConfig {
    pub x: f32,
    pub y: f32,
    pub count: usize,
    #[serde(default)]
    pub speed: f32,
    pub charge: String,
    #[serde(default = "default_mass")]
    pub mass: f32,
    /// Seed for the direction generator; a fixed seed reproduces the scene.
    pub seed: Option<u64>,
}

fn default_mass() -> f32 {
    1.0
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file("init_config.toml")
    }
}

pub fn parse_charge(name: &str) -> Result<ChargeSign, String> {
    match name {
        "positive" | "Positive" => Ok(ChargeSign::Positive),
        "neutral" | "Neutral" => Ok(ChargeSign::Neutral),
        "negative" | "Negative" => Ok(ChargeSign::Negative),
        _ => Err(format!("Unknown charge: {}", name)),
    }
}

impl SingleConfig {
    pub fn to_charge(&self) -> Result<ChargeSign, String> {
        parse_charge(&self.charge)
    }
}

impl RingConfig {
    pub fn to_charge(&self) -> Result<ChargeSign, String> {
        parse_charge(&self.charge)
    }
}

impl BurstConfig {
    pub fn to_charge(&self) -> Result<ChargeSign, String> {
        parse_charge(&self.charge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let toml_str = r#"
            [simulation]
            domain_width = 1000.0
            trail_length = 50
            start_running = true

            [fields]
            magnetic_z = 2.0
            frequency = 1.0

            [[particles.single]]
            x = 500.0
            y = 300.0
            vx = 3.0
            charge = "positive"

            [[particles.ring]]
            x = 500.0
            y = 300.0
            radius = 80.0
            count = 12
            speed = 2.0
            charge = "negative"
            mass = 0.5
        "#;
        let init: InitConfig = toml::from_str(toml_str).unwrap();
        let sim = init.simulation.unwrap();
        assert_eq!(sim.domain_size(), (1000.0, config::DEFAULT_DOMAIN_HEIGHT));
        assert_eq!(sim.trail_length, Some(50));
        assert_eq!(sim.time_step(), config::DEFAULT_TIME_STEP);
        let fields = init.fields.unwrap();
        assert_eq!(fields.magnetic_z, 2.0);
        assert_eq!(fields.electric_x, 0.0);
        assert_eq!(init.particles.single.len(), 1);
        assert_eq!(init.particles.single[0].mass, 1.0);
        assert_eq!(
            init.particles.single[0].to_charge(),
            Ok(ChargeSign::Positive)
        );
        assert_eq!(init.particles.ring[0].count, 12);
        assert!(init.particles.burst.is_empty());
    }

    #[test]
    fn empty_config_is_valid() {
        let init: InitConfig = toml::from_str("").unwrap();
        assert!(init.simulation.is_none());
        assert!(init.particles.single.is_empty());
    }

    #[test]
    fn unknown_charge_is_rejected() {
        assert!(parse_charge("plasma").is_err());
        assert_eq!(parse_charge("neutral"), Ok(ChargeSign::Neutral));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(InitConfig::load_from_file("definitely_missing.toml").is_err());
    }
}
