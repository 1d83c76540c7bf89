#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub altitude: f64,      // m
    pub velocity: f64,      // m/s
    pub acceleration: f64,  // m/s²
    pub force_gravity: f64, // N
    pub force_drag: f64,    // N
    pub force_thrust: f64,  // N
}

impl TrajectorySample {
    pub fn at_rest() -> Self {
        TrajectorySample {
            altitude: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            force_gravity: 0.0,
            force_drag: 0.0,
            force_thrust: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AscentOutcome {
    OrbitReached,
    TimeExpired,
    Grounded,
    Aborted,
}

// The simulator's externally observable product: one sample per accepted
// step, frozen at the step where integration stopped, plus enough flags to
// judge the ascent without scanning the series.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
    dt: f64,
    outcome: AscentOutcome,
    fuel_depleted_step: Option<usize>,
    fuel_remaining: f64,
}

impl Trajectory {
    pub fn new(
        samples: Vec<TrajectorySample>,
        dt: f64,
        outcome: AscentOutcome,
        fuel_depleted_step: Option<usize>,
        fuel_remaining: f64,
    ) -> Self {
        Trajectory {
            samples,
            dt,
            outcome,
            fuel_depleted_step,
            fuel_remaining,
        }
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn outcome(&self) -> AscentOutcome {
        self.outcome
    }

    pub fn fuel_depleted_step(&self) -> Option<usize> {
        self.fuel_depleted_step
    }

    pub fn fuel_remaining(&self) -> f64 {
        self.fuel_remaining
    }

    // Parallel series for the plotting collaborator
    pub fn altitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.altitude).collect()
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.velocity).collect()
    }

    pub fn accelerations(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.acceleration).collect()
    }

    pub fn gravity_forces(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.force_gravity).collect()
    }

    pub fn drag_forces(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.force_drag).collect()
    }

    pub fn thrust_forces(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.force_thrust).collect()
    }

    pub fn max_altitude(&self) -> f64 {
        self.samples.iter().map(|s| s.altitude).fold(0.0, f64::max)
    }

    pub fn max_velocity(&self) -> f64 {
        self.samples.iter().map(|s| s.velocity).fold(0.0, f64::max)
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.1}s", minutes, seconds)
        } else {
            format!("{:.1}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn display_summary(&self) {
        println!("--- Ascent Summary ---");
        println!("Outcome: {:?}", self.outcome);
        println!(
            "Simulated time: {}",
            Self::format_time(self.len() as f64 * self.dt)
        );
        println!("Max Altitude: {}", Self::format_altitude(self.max_altitude()));
        println!("Max Velocity: {:.2} m/s", self.max_velocity());
        println!("Fuel Remaining: {:.2} kg", self.fuel_remaining);
        match self.fuel_depleted_step {
            Some(step) => println!(
                "Fuel depleted at t = {}",
                Self::format_time(step as f64 * self.dt)
            ),
            None => println!("Fuel margin held through the run"),
        }
        println!("--- End of Summary ---");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample(altitude: f64, velocity: f64) -> TrajectorySample {
        TrajectorySample {
            altitude,
            velocity,
            acceleration: 1.0,
            force_gravity: 10.0,
            force_drag: 2.0,
            force_thrust: 15.0,
        }
    }

    fn test_trajectory() -> Trajectory {
        Trajectory::new(
            vec![
                TrajectorySample::at_rest(),
                sample(100.0, 50.0),
                sample(300.0, 90.0),
            ],
            1.0,
            AscentOutcome::TimeExpired,
            None,
            500.0,
        )
    }

    #[test]
    fn test_at_rest_sample_is_zero() {
        let rest = TrajectorySample::at_rest();
        assert_eq!(rest.altitude, 0.0);
        assert_eq!(rest.velocity, 0.0);
        assert_eq!(rest.acceleration, 0.0);
        assert_eq!(rest.force_gravity, 0.0);
        assert_eq!(rest.force_drag, 0.0);
        assert_eq!(rest.force_thrust, 0.0);
    }

    #[test]
    fn test_parallel_series_line_up() {
        let trajectory = test_trajectory();

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.altitudes(), vec![0.0, 100.0, 300.0]);
        assert_eq!(trajectory.velocities(), vec![0.0, 50.0, 90.0]);
        assert_eq!(trajectory.accelerations().len(), trajectory.len());
        assert_eq!(trajectory.gravity_forces().len(), trajectory.len());
        assert_eq!(trajectory.drag_forces().len(), trajectory.len());
        assert_eq!(trajectory.thrust_forces().len(), trajectory.len());
    }

    #[test]
    fn test_max_metrics() {
        let trajectory = test_trajectory();
        assert_abs_diff_eq!(trajectory.max_altitude(), 300.0, epsilon = 1e-12);
        assert_abs_diff_eq!(trajectory.max_velocity(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display_summary_smoke() {
        // Formatting only; must not panic on an empty trajectory either
        test_trajectory().display_summary();
        Trajectory::new(Vec::new(), 1.0, AscentOutcome::Aborted, Some(3), 0.0).display_summary();
    }
}
