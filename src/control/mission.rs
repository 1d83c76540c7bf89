use crate::constants::{
    BOOSTER_THRUST, DRAG_COEFFICIENT, DRY_MASS, EARTH_MASS, EARTH_RADIUS, ENGINE_AREA, FRONTAL_AREA,
    FUEL_MASS, GRAVITATIONAL_CONSTANT, MACH_1, METHANE_DENSITY,
};
use crate::errors::SimulationError;

#[derive(Clone, Debug)]
pub struct CelestialBody {
    pub name: String,
    pub radius: f64,
    pub mass: f64,
}

impl CelestialBody {
    pub fn new(name: String, radius: f64, mass: f64) -> Self {
        CelestialBody { name, radius, mass }
    }

    pub fn surface_gravity(&self) -> f64 {
        GRAVITATIONAL_CONSTANT * self.mass / self.radius.powi(2)
    }

    pub fn gravity_at_altitude(&self, altitude: f64) -> f64 {
        let distance = self.radius + altitude;
        GRAVITATIONAL_CONSTANT * self.mass / distance.powi(2)
    }

    pub fn escape_velocity(&self, altitude: f64) -> f64 {
        let distance = self.radius + altitude;
        (2.0 * GRAVITATIONAL_CONSTANT * self.mass / distance).sqrt()
    }
}

// The full set of ascent parameters. All fields are strictly positive; the
// simulator rejects anything else before stepping.
#[derive(Clone, Debug)]
pub struct AscentConfig {
    pub planet: CelestialBody,
    pub dry_mass: f64,           // kg
    pub fuel_mass: f64,          // kg
    pub drag_coefficient: f64,   // dimensionless
    pub surface_area: f64,       // m², frontal
    pub booster_thrust_cap: f64, // N, hard ceiling on engine output
    pub escape_velocity: f64,    // m/s, insertion threshold
    pub methane_density: f64,    // kg/m³, exhaust vapor
    pub engine_area: f64,        // m², nozzle exit
    pub mach1: f64,              // m/s, exhaust flow choking speed
}

impl AscentConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = [
            ("planet radius", self.planet.radius),
            ("planet mass", self.planet.mass),
            ("dry mass", self.dry_mass),
            ("fuel mass", self.fuel_mass),
            ("drag coefficient", self.drag_coefficient),
            ("surface area", self.surface_area),
            ("booster thrust cap", self.booster_thrust_cap),
            ("escape velocity", self.escape_velocity),
            ("methane density", self.methane_density),
            ("engine area", self.engine_area),
            ("mach 1 speed", self.mach1),
        ];

        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(SimulationError::ConfigError(format!(
                    "{} must be strictly positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    pub fn initial_total_mass(&self) -> f64 {
        self.dry_mass + self.fuel_mass
    }
}

pub struct MissionFactory;

impl MissionFactory {
    pub fn create_earth_ascent() -> AscentConfig {
        let earth = CelestialBody::new("Earth".to_string(), EARTH_RADIUS, EARTH_MASS);
        let escape_velocity = earth.escape_velocity(0.0);

        AscentConfig {
            planet: earth,
            dry_mass: DRY_MASS,
            fuel_mass: FUEL_MASS,
            drag_coefficient: DRAG_COEFFICIENT,
            surface_area: FRONTAL_AREA,
            booster_thrust_cap: BOOSTER_THRUST,
            escape_velocity,
            methane_density: METHANE_DENSITY,
            engine_area: ENGINE_AREA,
            mach1: MACH_1,
        }
    }
}
