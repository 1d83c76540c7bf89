use ascent_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MissionFactory::create_earth_ascent();
    println!(
        "Launching {} ascent: {:.0} kg dry, {:.0} kg fuel, {:.0} kg on the pad",
        config.planet.name,
        config.dry_mass,
        config.fuel_mass,
        config.initial_total_mass()
    );

    let simulator = AscentSimulator::new(config)?;
    let trajectory = simulator.run(MAX_SIMULATION_TIME, TIME_STEP)?;

    for (step, sample) in trajectory.samples().iter().enumerate() {
        if step % 100 == 0 {
            println!(
                "t={:>5.0}s | Alt: {:>9.1} m | Vel: {:>8.1} m/s | Thrust: {:.3e} N",
                step as f64 * trajectory.dt(),
                sample.altitude,
                sample.velocity,
                sample.force_thrust
            );
        }
    }

    trajectory.display_summary();

    Ok(())
}
