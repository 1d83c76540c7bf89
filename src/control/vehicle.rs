use std::f64::consts::FRAC_PI_2;

use super::mission::AscentConfig;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FlightPhase {
    AscendingVertical,
    Pitching,
    AscendingAngled,
    OrbitReached,
    Grounded,
}

impl FlightPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlightPhase::OrbitReached | FlightPhase::Grounded)
    }
}

// Mutable state of one ascent. Owned by a single run invocation; a fresh
// Vehicle is built from the config every time, so repeated runs are
// bit-identical.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub dry_mass: f64,
    pub fuel_mass: f64,
    pub pitch_angle: f64, // rad, π/2 is vertical
    pub phase: FlightPhase,
    pub fuel_depleted_step: Option<usize>,
}

impl Vehicle {
    pub fn new(config: &AscentConfig) -> Self {
        Vehicle {
            dry_mass: config.dry_mass,
            fuel_mass: config.fuel_mass,
            pitch_angle: FRAC_PI_2,
            phase: FlightPhase::AscendingVertical,
            fuel_depleted_step: None,
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.dry_mass + self.fuel_mass
    }

    // A burn that would take the tank negative is the crash signal: the step
    // index is recorded once and the mass is clamped so later dynamics stay
    // physical. The run keeps going; callers check the flag on the result.
    pub fn consume_fuel(&mut self, amount: f64, step: usize) {
        self.fuel_mass -= amount;
        if self.fuel_mass < 0.0 {
            if self.fuel_depleted_step.is_none() {
                self.fuel_depleted_step = Some(step);
            }
            self.fuel_mass = 0.0;
        }
    }

    pub fn is_fuel_depleted(&self) -> bool {
        self.fuel_depleted_step.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::mission::MissionFactory;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_initial_state() {
        let config = MissionFactory::create_earth_ascent();
        let vehicle = Vehicle::new(&config);

        assert_eq!(vehicle.phase, FlightPhase::AscendingVertical);
        assert_abs_diff_eq!(vehicle.pitch_angle, FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(vehicle.fuel_mass, config.fuel_mass);
        assert_eq!(vehicle.total_mass(), config.dry_mass + config.fuel_mass);
        assert!(!vehicle.is_fuel_depleted());
    }

    #[test]
    fn test_fuel_consumption_and_clamp() {
        let config = MissionFactory::create_earth_ascent();
        let mut vehicle = Vehicle::new(&config);

        vehicle.consume_fuel(1_000.0, 1);
        assert_abs_diff_eq!(vehicle.fuel_mass, config.fuel_mass - 1_000.0, epsilon = 1e-9);
        assert!(!vehicle.is_fuel_depleted());

        // Overdraw the tank: clamped to zero, depletion step recorded once
        vehicle.consume_fuel(config.fuel_mass, 17);
        assert_eq!(vehicle.fuel_mass, 0.0);
        assert_eq!(vehicle.fuel_depleted_step, Some(17));

        vehicle.consume_fuel(10.0, 18);
        assert_eq!(vehicle.fuel_mass, 0.0);
        assert_eq!(
            vehicle.fuel_depleted_step,
            Some(17),
            "first depletion step must stick"
        );
    }

    #[test]
    fn test_terminal_phases() {
        assert!(FlightPhase::OrbitReached.is_terminal());
        assert!(FlightPhase::Grounded.is_terminal());
        assert!(!FlightPhase::AscendingVertical.is_terminal());
        assert!(!FlightPhase::Pitching.is_terminal());
        assert!(!FlightPhase::AscendingAngled.is_terminal());
    }
}
