use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    errors::SimulationError,
    telemetry_system::telemetry::{AscentOutcome, Trajectory, TrajectorySample},
    trajectory_system::{
        aerodynamics::Aerodynamics,
        kinematics::{advance_altitude, advance_velocity, gravity_force, StepForces},
    },
};

use super::{
    environment::air_density,
    fuel_managment::FuelManagement,
    guidance::PitchProgram,
    mission::AscentConfig,
    propulsion::ThrustProfile,
    vehicle::{FlightPhase, Vehicle},
};

enum StepEvent {
    Sample(TrajectorySample),
    Terminal(AscentOutcome),
}

// Fixed-step explicit Euler over the ascent plane. Step i reads step i-1's
// recorded fields, so the loop is strictly sequential; a fresh Vehicle is
// built per run and never shared.
pub struct AscentSimulator {
    config: AscentConfig,
    thrust_profile: ThrustProfile,
    pitch_program: PitchProgram,
    fuel_management: FuelManagement,
    aerodynamics: Aerodynamics,
}

impl AscentSimulator {
    pub fn new(config: AscentConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let thrust_profile = ThrustProfile::new(config.booster_thrust_cap);
        let pitch_program = PitchProgram::standard();
        let fuel_management =
            FuelManagement::new(config.methane_density, config.engine_area, config.mach1);
        let aerodynamics = Aerodynamics::new(config.drag_coefficient, config.surface_area);

        Ok(AscentSimulator {
            config,
            thrust_profile,
            pitch_program,
            fuel_management,
            aerodynamics,
        })
    }

    pub fn config(&self) -> &AscentConfig {
        &self.config
    }

    pub fn run(&self, total_time: f64, dt: f64) -> Result<Trajectory, SimulationError> {
        self.run_with_abort(total_time, dt, &AtomicBool::new(false))
    }

    // Cancellation is polled between steps; no step blocks, so this is the
    // only suspension point a caller gets. An observed abort is a normal
    // exit, not an error.
    pub fn run_with_abort(
        &self,
        total_time: f64,
        dt: f64,
        abort: &AtomicBool,
    ) -> Result<Trajectory, SimulationError> {
        if !(total_time > 0.0) {
            return Err(SimulationError::ConfigError(format!(
                "total time must be strictly positive, got {}",
                total_time
            )));
        }
        if !(dt > 0.0) {
            return Err(SimulationError::ConfigError(format!(
                "time step must be strictly positive, got {}",
                dt
            )));
        }
        if dt > total_time {
            return Err(SimulationError::ConfigError(format!(
                "time step {} exceeds total time {}",
                dt, total_time
            )));
        }

        let step_count = (total_time / dt).floor() as usize;
        let mut vehicle = Vehicle::new(&self.config);
        let mut samples = Vec::with_capacity(step_count.min(200_000));

        // Step 0: on the pad, pre-ignition
        let mut prev = TrajectorySample::at_rest();
        samples.push(prev);

        let mut outcome = AscentOutcome::TimeExpired;
        for step in 1..step_count {
            if abort.load(Ordering::Relaxed) {
                outcome = AscentOutcome::Aborted;
                break;
            }

            match self.step(&mut vehicle, &prev, step, dt)? {
                StepEvent::Sample(sample) => {
                    samples.push(sample);
                    prev = sample;
                }
                StepEvent::Terminal(terminal) => {
                    outcome = terminal;
                    break;
                }
            }
        }

        Ok(Trajectory::new(
            samples,
            dt,
            outcome,
            vehicle.fuel_depleted_step,
            vehicle.fuel_mass,
        ))
    }

    fn step(
        &self,
        vehicle: &mut Vehicle,
        prev: &TrajectorySample,
        step: usize,
        dt: f64,
    ) -> Result<StepEvent, SimulationError> {
        let elapsed = step as f64 * dt;
        let planet = &self.config.planet;

        let total_mass = vehicle.total_mass();
        let gravity = gravity_force(total_mass, planet, prev.altitude);
        let drag = self
            .aerodynamics
            .drag_force(air_density(prev.altitude), prev.velocity);
        let local_gravity = planet.gravity_at_altitude(prev.altitude);
        let thrust = self
            .thrust_profile
            .thrust(total_mass, local_gravity, drag, gravity, elapsed);

        let forces = StepForces {
            gravity,
            drag,
            thrust,
        };
        if let Some(quantity) = forces.all_finite() {
            return Err(SimulationError::NumericalDivergence { step, quantity });
        }

        let burn = self
            .fuel_management
            .burn_for_step(thrust, drag, prev.velocity, dt);
        vehicle.consume_fuel(burn, step);

        if self.pitch_program.is_active(elapsed) {
            vehicle.pitch_angle -= self.pitch_program.step_decrement(dt);
            vehicle.phase = FlightPhase::Pitching;
        } else if vehicle.phase == FlightPhase::Pitching {
            vehicle.phase = FlightPhase::AscendingAngled;
        }

        let acceleration = forces.net() / vehicle.total_mass();

        // Past the escape threshold the vehicle is coasting; the trajectory
        // freezes at the previous sample.
        if prev.velocity > self.config.escape_velocity {
            vehicle.phase = FlightPhase::OrbitReached;
            return Ok(StepEvent::Terminal(AscentOutcome::OrbitReached));
        }

        let velocity = advance_velocity(prev.acceleration, prev.velocity, dt);
        let altitude = advance_altitude(
            vehicle.pitch_angle,
            prev.acceleration,
            prev.velocity,
            prev.altitude,
            dt,
        );

        // A booster that cannot hold its own weight drives the displacement
        // negative; that ends the run rather than burying a subterranean
        // vehicle in the series.
        if altitude < 0.0 {
            vehicle.phase = FlightPhase::Grounded;
            return Ok(StepEvent::Terminal(AscentOutcome::Grounded));
        }

        for (quantity, value) in [
            ("acceleration", acceleration),
            ("velocity", velocity),
            ("altitude", altitude),
        ] {
            if !value.is_finite() {
                return Err(SimulationError::NumericalDivergence { step, quantity });
            }
        }

        Ok(StepEvent::Sample(TrajectorySample {
            altitude,
            velocity,
            acceleration,
            force_gravity: gravity,
            force_drag: drag,
            force_thrust: thrust,
        }))
    }
}
