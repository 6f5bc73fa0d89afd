// snapshot.rs
// Read-only views copied out for the presentation adapter after each
// tick. Adapters render from these; they never touch live particles.

use serde::{Deserialize, Serialize};
use ultraviolet::{Vec2, Vec3};

use crate::fields;
use crate::particle::Particle;
use crate::simulation::Simulation;

/// Renderable copy of one live particle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: u64,
    pub position: Vec3,
    pub radius: f32,
    pub color: [u8; 4],
    /// Trail points, oldest first.
    pub trail: Vec<Vec3>,
}

impl From<&Particle> for ParticleView {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id,
            position: p.pos,
            radius: p.radius,
            color: p.sign.color(),
            trail: p.trail.iter().copied().collect(),
        }
    }
}

/// Instantaneous field values for on-screen indicators. `magnetic` is the
/// evaluated field, not the amplitude.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FieldView {
    pub electric: Vec2,
    pub magnetic: Vec3,
    pub frequency: f32,
}

impl Default for FieldView {
    fn default() -> Self {
        Self {
            electric: Vec2::zero(),
            magnetic: Vec3::zero(),
            frequency: 0.0,
        }
    }
}

pub fn field_view(simulation: &Simulation) -> FieldView {
    FieldView {
        electric: fields::electric_field(&simulation.config),
        magnetic: fields::magnetic_field_at(&simulation.config, simulation.time),
        frequency: simulation.config.magnetic_frequency,
    }
}
