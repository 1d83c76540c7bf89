#[derive(Debug, Clone)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub surface_area: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, surface_area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            surface_area,
        }
    }

    // Drag magnitude opposing the flight direction. The plane model keeps
    // direction implicit, so this is always >= 0.
    pub fn drag_force(&self, air_density: f64, velocity: f64) -> f64 {
        let dynamic_pressure = 0.5 * air_density * velocity.powi(2);
        dynamic_pressure * self.surface_area * self.drag_coefficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::environment::air_density;
    use approx::assert_relative_eq;

    #[test]
    fn test_drag_at_sea_level() {
        let aero = Aerodynamics::new(0.25, 63.6);
        let rho = air_density(0.0);

        let drag = aero.drag_force(rho, 100.0);
        let expected = 0.5 * 0.25 * 63.6 * rho * 100.0 * 100.0;
        assert_relative_eq!(drag, expected, epsilon = 1e-9);
        assert!(drag > 0.0);
    }

    #[test]
    fn test_drag_zero_at_rest() {
        let aero = Aerodynamics::new(0.25, 63.6);
        assert_eq!(aero.drag_force(air_density(0.0), 0.0), 0.0);
    }

    #[test]
    fn test_drag_negligible_at_high_altitude() {
        let aero = Aerodynamics::new(0.25, 63.6);
        let low = aero.drag_force(air_density(0.0), 300.0);
        let high = aero.drag_force(air_density(80_000.0), 300.0);
        assert!(
            high < low * 1e-3,
            "drag at 80 km should be orders of magnitude below sea level"
        );
    }

    #[test]
    fn test_drag_grows_with_speed_squared() {
        let aero = Aerodynamics::new(0.25, 63.6);
        let rho = air_density(0.0);
        let at_100 = aero.drag_force(rho, 100.0);
        let at_200 = aero.drag_force(rho, 200.0);
        assert_relative_eq!(at_200 / at_100, 4.0, epsilon = 1e-9);
    }
}
