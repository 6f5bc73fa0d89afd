//! Visual unit definitions for the simulation.
//!
//! The core does not run in SI units: lengths are viewport pixels and the
//! remaining scales were chosen so that slider-range inputs produce
//! readable trajectories. These constants ARE the unit system; none of
//! them is a runtime tunable.

/// Slider velocity units per stored velocity unit.
pub const VELOCITY_SCALE: f32 = 0.1;

/// Field strength to force conversion, applied to both field terms.
pub const FIELD_SCALE: f32 = 0.2;

/// Extra gain on the electric term only. Part of the unit system: without
/// it slider-range E fields are invisible next to the magnetic term.
pub const E_FIELD_GAIN: f32 = 10.0;

/// Charge carried per unit of charge sign.
pub const BASE_CHARGE: f32 = 1.0;

/// Mass units per unit of slider mass.
pub const BASE_MASS: f32 = 1.0;

/// Amplifies the position increment (never the stored velocity) so slow
/// orbits stay visible on screen.
pub const VISUAL_SPEED_FACTOR: f32 = 5.0;

/// Minimum particle mass after clamping. Keeps `1 / mass` finite.
pub const MASS_FLOOR: f32 = 0.1;
