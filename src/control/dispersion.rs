use rand::Rng;

use crate::errors::SimulationError;
use crate::telemetry_system::telemetry::AscentOutcome;

use super::mission::AscentConfig;
use super::rocket::AscentSimulator;

// Parameter-sweep harness: re-runs the ascent with the drag coefficient and
// fuel load jittered inside fractional spreads. Every run owns its simulator
// and trajectory, so sweeps can also be farmed out across threads by callers
// that want to.
pub struct DispersionSweep {
    pub base: AscentConfig,
    pub runs: usize,
    pub drag_spread: f64, // fraction, e.g. 0.1 for ±10 %
    pub fuel_spread: f64, // fraction
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    pub runs: usize,
    pub orbit_reached: usize,
    pub time_expired: usize,
    pub grounded: usize,
    pub fuel_exhausted: usize,
    pub best_altitude: f64,
    pub best_velocity: f64,
}

impl DispersionSweep {
    pub fn new(base: AscentConfig, runs: usize, drag_spread: f64, fuel_spread: f64) -> Self {
        DispersionSweep {
            base,
            runs,
            drag_spread,
            fuel_spread,
        }
    }

    pub fn run<R: Rng>(
        &self,
        rng: &mut R,
        total_time: f64,
        dt: f64,
    ) -> Result<SweepSummary, SimulationError> {
        let mut summary = SweepSummary {
            runs: self.runs,
            orbit_reached: 0,
            time_expired: 0,
            grounded: 0,
            fuel_exhausted: 0,
            best_altitude: 0.0,
            best_velocity: 0.0,
        };

        for _ in 0..self.runs {
            let mut config = self.base.clone();
            config.drag_coefficient *=
                rng.gen_range(1.0 - self.drag_spread..=1.0 + self.drag_spread);
            config.fuel_mass *= rng.gen_range(1.0 - self.fuel_spread..=1.0 + self.fuel_spread);

            let simulator = AscentSimulator::new(config)?;
            let trajectory = simulator.run(total_time, dt)?;

            match trajectory.outcome() {
                AscentOutcome::OrbitReached => summary.orbit_reached += 1,
                AscentOutcome::TimeExpired => summary.time_expired += 1,
                AscentOutcome::Grounded => summary.grounded += 1,
                AscentOutcome::Aborted => {}
            }
            if trajectory.fuel_depleted_step().is_some() {
                summary.fuel_exhausted += 1;
            }
            summary.best_altitude = summary.best_altitude.max(trajectory.max_altitude());
            summary.best_velocity = summary.best_velocity.max(trajectory.max_velocity());
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::mission::MissionFactory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sweep_accounts_for_every_run() {
        let sweep = DispersionSweep::new(MissionFactory::create_earth_ascent(), 8, 0.2, 0.1);
        let mut rng = StdRng::seed_from_u64(7);

        let summary = sweep.run(&mut rng, 120.0, 1.0).unwrap();
        assert_eq!(summary.runs, 8);
        assert_eq!(
            summary.orbit_reached + summary.time_expired + summary.grounded,
            8,
            "every run must land in exactly one outcome bucket"
        );
        assert!(summary.best_altitude > 0.0);
        assert!(summary.best_velocity > 0.0);
    }

    #[test]
    fn test_sweep_is_deterministic_under_a_seed() {
        let sweep = DispersionSweep::new(MissionFactory::create_earth_ascent(), 5, 0.3, 0.2);

        let first = sweep.run(&mut StdRng::seed_from_u64(42), 90.0, 1.0).unwrap();
        let second = sweep.run(&mut StdRng::seed_from_u64(42), 90.0, 1.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_spread_matches_base_config() {
        let sweep = DispersionSweep::new(MissionFactory::create_earth_ascent(), 3, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(1);

        let summary = sweep.run(&mut rng, 60.0, 1.0).unwrap();
        let reference = AscentSimulator::new(MissionFactory::create_earth_ascent())
            .unwrap()
            .run(60.0, 1.0)
            .unwrap();

        assert_eq!(summary.best_altitude, reference.max_altitude());
        assert_eq!(summary.best_velocity, reference.max_velocity());
    }
}
