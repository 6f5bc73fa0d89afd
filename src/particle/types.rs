// particle/types.rs
// Contains the ChargeSign enum, the Particle struct and the per-step
// update rule (force accumulation, integration, trail, boundary check).

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use ultraviolet::{Vec2, Vec3};

use crate::config::Domain;
use crate::units;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ChargeSign {
    Positive,
    Neutral,
    Negative,
}

impl ChargeSign {
    pub fn factor(&self) -> f32 {
        match self {
            ChargeSign::Positive => 1.0,
            ChargeSign::Neutral => 0.0,
            ChargeSign::Negative => -1.0,
        }
    }

    pub fn color(&self) -> [u8; 4] {
        match self {
            ChargeSign::Positive => [230, 57, 70, 255],
            ChargeSign::Neutral => [148, 148, 148, 255],
            ChargeSign::Negative => [69, 123, 157, 255],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    pub force: Vec3,
    pub charge: f32,
    pub mass: f32,
    pub inv_mass: f32,
    pub radius: f32,
    pub sign: ChargeSign,
    pub id: u64,
    /// Past positions, oldest first.
    pub trail: VecDeque<Vec3>,
    /// Set once by the boundary check; never cleared.
    pub removed: bool,
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl Particle {
    /// `vel_input` is in slider units and is scaled into stored velocity
    /// here. Mass is clamped to the floor so `inv_mass` is always finite;
    /// `inv_mass` is computed once and never recomputed.
    pub fn new(pos: Vec3, vel_input: Vec3, sign: ChargeSign, mass_input: f32) -> Self {
        let mass = (mass_input * units::BASE_MASS).max(units::MASS_FLOOR);
        Self {
            pos,
            vel: vel_input * units::VELOCITY_SCALE,
            force: Vec3::zero(),
            charge: sign.factor() * units::BASE_CHARGE,
            mass,
            inv_mass: 1.0 / mass,
            radius: 3.0 + mass.sqrt(),
            sign,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            trail: VecDeque::new(),
            removed: false,
        }
    }

    /// Advance one explicit-Euler step under the instantaneous fields.
    ///
    /// `e_field` is the in-plane electric field, `b_field` the
    /// instantaneous magnetic field. `trail_cap` is the shared trail
    /// limit, applied lazily here. A particle flagged for removal is
    /// untouched.
    pub fn update(
        &mut self,
        dt: f32,
        e_field: Vec2,
        b_field: Vec3,
        trail_cap: usize,
        domain: &Domain,
    ) {
        if self.removed {
            return;
        }

        self.force = Vec3::zero();
        if self.charge != 0.0 {
            // F = qE; the E term carries an extra fixed gain (see units.rs)
            self.force.x += self.charge * e_field.x * units::FIELD_SCALE * units::E_FIELD_GAIN;
            self.force.y += self.charge * e_field.y * units::FIELD_SCALE * units::E_FIELD_GAIN;
            // F = q(v x B)
            self.force += self.charge * self.vel.cross(b_field) * units::FIELD_SCALE;
        }

        let acc = self.force * self.inv_mass;
        self.vel += acc * dt;
        // The speed factor amplifies displacement only; stored velocity
        // stays unscaled.
        self.pos += self.vel * dt * units::VISUAL_SPEED_FACTOR;

        self.trail.push_back(self.pos);
        while self.trail.len() > trail_cap {
            self.trail.pop_front();
        }

        if !domain.contains(self.pos) {
            self.mark_for_removal();
        }
    }

    /// Trim the trail from the oldest end down to `cap` immediately.
    pub fn set_trail_cap(&mut self, cap: usize) {
        while self.trail.len() > cap {
            self.trail.pop_front();
        }
    }

    /// Collapse the history to a single point: the latest trail point if
    /// there is one, else the current position.
    pub fn clear_trail(&mut self) {
        let point = self.trail.back().copied().unwrap_or(self.pos);
        self.trail.clear();
        self.trail.push_back(point);
    }

    pub fn mark_for_removal(&mut self) {
        self.removed = true;
    }
}
