// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67e-11; // N⋅m²/kg²
pub const EARTH_MASS: f64 = 5.9724e24; // kg
pub const EARTH_RADIUS: f64 = 6.378e6; // m
pub const MACH_1: f64 = 343.0; // m/s, sea-level speed of sound

// Vehicle Constants
// Source: https://www.spacex.com/sites/spacex/files/making_life_multiplanetary-2017.pdf
pub const DRY_MASS: f64 = 77_111.0; // kg, structure without propellant
pub const FUEL_MASS: f64 = 998_000.0; // kg, full methane load
pub const FRONTAL_AREA: f64 = 3.1415 * 4.5 * 4.5; // m², orthogonal surface area
pub const DRAG_COEFFICIENT: f64 = 0.25; // rough estimate from research
pub const BOOSTER_THRUST: f64 = 5.0e7; // N, rated engine maximum
pub const METHANE_DENSITY: f64 = 0.657; // kg/m³, exhaust vapor
pub const ENGINE_AREA: f64 = 3.1415 * 0.95 * 0.95; // m², nozzle exit area

// Thrust Program (elapsed-time breakpoints of the G-force profile)
pub const THRUST_SEGMENT_2_START: f64 = 160.0; // s
pub const THRUST_SEGMENT_3_START: f64 = 560.0; // s
pub const THRUST_CUTOFF_TIME: f64 = 760.0; // s

// Pitch Maneuver
pub const PITCH_START_TIME: f64 = 160.0; // s, exclusive
pub const PITCH_END_TIME: f64 = 400.0; // s, exclusive
pub const PITCH_SWEEP_PERIOD: f64 = 480.0; // s, π radians of commanded sweep

// Simulation Parameters
pub const TIME_STEP: f64 = 1.0; // s
pub const MAX_SIMULATION_TIME: f64 = 800.0; // s
