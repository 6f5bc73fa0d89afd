// fields.rs
// Evaluates the instantaneous uniform fields from the runtime configuration.
// Pure functions of configuration and time; no side effects.

use std::f32::consts::TAU;

use ultraviolet::{Vec2, Vec3};

use crate::config::SimConfig;

/// Instantaneous magnetic field at simulation time `t`.
///
/// With zero (or negative) frequency the configured vector is the static
/// field. With a positive frequency the configured components are
/// amplitudes and every axis oscillates in phase: `B(t) = A * cos(2pi*f*t)`.
pub fn magnetic_field_at(config: &SimConfig, t: f32) -> Vec3 {
    if config.magnetic_frequency <= 0.0 {
        return config.magnetic_field;
    }
    let cos_factor = (TAU * config.magnetic_frequency * t).cos();
    config.magnetic_field * cos_factor
}

/// The electric field is static in this design.
pub fn electric_field(config: &SimConfig) -> Vec2 {
    config.electric_field
}
