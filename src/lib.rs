pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::dispersion::{DispersionSweep, SweepSummary};
pub use control::environment::air_density;
pub use control::fuel_managment::FuelManagement;
pub use control::guidance::PitchProgram;
pub use control::mission::{AscentConfig, CelestialBody, MissionFactory};
pub use control::propulsion::ThrustProfile;
pub use control::rocket::AscentSimulator;
pub use control::vehicle::{FlightPhase, Vehicle};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{AscentOutcome, Trajectory, TrajectorySample};
