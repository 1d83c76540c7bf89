use crate::constants::{THRUST_CUTOFF_TIME, THRUST_SEGMENT_2_START, THRUST_SEGMENT_3_START};

// Staged thrust program. The commanded load factor ("G-force") is a
// three-segment linear profile of elapsed time; the engine then produces
// whatever force holds that load factor against local gravity, drag and
// weight, up to its rated cap.
#[derive(Debug, Clone)]
pub struct ThrustProfile {
    pub thrust_cap: f64, // N
}

impl ThrustProfile {
    pub fn new(thrust_cap: f64) -> Self {
        ThrustProfile { thrust_cap }
    }

    pub fn g_force(&self, elapsed: f64) -> f64 {
        if elapsed < THRUST_SEGMENT_2_START {
            0.017 * elapsed + 1.0
        } else if elapsed < THRUST_SEGMENT_3_START {
            0.0018 * elapsed + 0.6
        } else if elapsed < THRUST_CUTOFF_TIME {
            0.001 * elapsed + 0.5
        } else {
            0.0
        }
    }

    // The cap is a ceiling, not a floor: past cutoff only the G-force term
    // vanishes, so the engine output settles on drag + gravity rather than
    // zero. Kept as-is from the flight profile this models.
    pub fn thrust(
        &self,
        total_mass: f64,
        local_gravity: f64,
        drag: f64,
        gravity_force: f64,
        elapsed: f64,
    ) -> f64 {
        let raw = total_mass * self.g_force(elapsed) * local_gravity + drag + gravity_force;
        raw.min(self.thrust_cap)
    }
}
