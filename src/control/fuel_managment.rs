// Propellant flow model. The exhaust stream chokes once the vehicle passes
// Mach 1, which caps the mass flow rate; below that the flow scales with
// velocity, so the vehicle burns almost nothing while it crawls off the pad.
#[derive(Debug, Clone)]
pub struct FuelManagement {
    pub methane_density: f64, // kg/m³
    pub engine_area: f64,     // m²
    pub mach1: f64,           // m/s
}

impl FuelManagement {
    pub fn new(methane_density: f64, engine_area: f64, mach1: f64) -> Self {
        FuelManagement {
            methane_density,
            engine_area,
            mach1,
        }
    }

    pub fn mass_flow_rate(&self, velocity: f64) -> f64 {
        self.methane_density * velocity.min(self.mach1) * self.engine_area
    }

    // Fuel spent over one step. Zero net thrust means the engine is doing no
    // work against the airstream and nothing is drawn from the tank.
    pub fn burn_for_step(&self, thrust: f64, drag: f64, velocity: f64, dt: f64) -> f64 {
        let net_thrust = thrust - drag;
        if net_thrust == 0.0 {
            return 0.0;
        }
        self.mass_flow_rate(velocity) * (thrust / net_thrust) * dt
    }
}
