// Empirical fit of the standard atmosphere, three regimes by altitude.
// Source: https://www.grc.nasa.gov/WWW/K-12/airplane/atmosmet.html
//
// Temperature comes out in °C and pressure in kPa; density is
// p / (0.2869 * (T + 273.1)) in kg/m³. Pure functions of altitude, finite for
// any altitude >= 0.

pub fn temperature_and_pressure(altitude: f64) -> (f64, f64) {
    if altitude > 25_000.0 {
        // Upper stratosphere
        let t = -131.21 + 0.003 * altitude;
        let p = 2.488 * ((t + 273.1) / 216.6).powf(-11.388);
        (t, p)
    } else if altitude < 11_000.0 {
        // Troposphere
        let t = 15.04 - 0.00649 * altitude;
        let p = 101.29 * ((t + 273.1) / 288.08).powf(5.256);
        (t, p)
    } else {
        // Lower stratosphere, isothermal
        let t = -56.64;
        let p = 22.65 * (1.73 - 0.000_157 * altitude).exp();
        (t, p)
    }
}

pub fn air_density(altitude: f64) -> f64 {
    let (t, p) = temperature_and_pressure(altitude);
    p / (0.2869 * (t + 273.1))
}
