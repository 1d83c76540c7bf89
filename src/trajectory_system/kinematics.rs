use crate::control::mission::CelestialBody;

// Force balance of one integration step. Magnitudes only; the sign convention
// lives in net(): thrust up, gravity and drag down.
#[derive(Debug, Clone, Copy)]
pub struct StepForces {
    pub gravity: f64,
    pub drag: f64,
    pub thrust: f64,
}

impl StepForces {
    pub fn net(&self) -> f64 {
        self.thrust - self.gravity - self.drag
    }

    pub fn all_finite(&self) -> Option<&'static str> {
        if !self.gravity.is_finite() {
            Some("gravity force")
        } else if !self.drag.is_finite() {
            Some("drag force")
        } else if !self.thrust.is_finite() {
            Some("thrust force")
        } else {
            None
        }
    }
}

pub fn gravity_force(total_mass: f64, planet: &CelestialBody, altitude: f64) -> f64 {
    total_mass * planet.gravity_at_altitude(altitude)
}

// Explicit Euler, one step behind by construction: the new velocity uses the
// previous step's acceleration, and the altitude gain is projected through
// the current pitch angle.
pub fn advance_velocity(prev_acceleration: f64, prev_velocity: f64, dt: f64) -> f64 {
    prev_acceleration * dt + prev_velocity
}

pub fn advance_altitude(
    pitch_angle: f64,
    prev_acceleration: f64,
    prev_velocity: f64,
    prev_altitude: f64,
    dt: f64,
) -> f64 {
    pitch_angle.sin() * (0.5 * prev_acceleration * dt.powi(2) + prev_velocity * dt) + prev_altitude
}
