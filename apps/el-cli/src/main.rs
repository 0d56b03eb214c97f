use clap::{Parser, Subcommand};
use el_core::ensure_finite;
use el_lab::{BoyleExperiment, WaterStateExperiment};
use nalgebra::Vector3;

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "el-cli")]
#[command(about = "EduLab simulation core - headless experiment runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Boyle's-law piston experiment for a number of frames
    Boyle {
        /// Piston length in centimeters (6..24)
        #[arg(long, default_value_t = 15.0)]
        length_cm: f64,
        /// Number of frames to simulate
        #[arg(long, default_value_t = 600)]
        frames: u32,
        /// Frame delta time in seconds
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f64,
        /// Particle seed for reproducible runs
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Emit the final frame summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the water phase-change experiment for a number of frames
    Water {
        /// Temperature in °C (-40..140)
        #[arg(long, default_value_t = 24.0)]
        temperature: f64,
        /// Pressure in atm (0.5..3)
        #[arg(long, default_value_t = 1.0)]
        pressure: f64,
        /// Number of frames to simulate
        #[arg(long, default_value_t = 240)]
        frames: u32,
        /// Frame delta time in seconds
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f64,
        /// Emit the final frame summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Boyle {
            length_cm,
            frames,
            dt,
            seed,
            json,
        } => run_boyle(length_cm, frames, dt, seed, json),
        Commands::Water {
            temperature,
            pressure,
            frames,
            dt,
            json,
        } => run_water(temperature, pressure, frames, dt, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_boyle(length_cm: f64, frames: u32, dt: f64, seed: u64, json: bool) -> CliResult {
    ensure_finite(dt, "frame dt")?;
    ensure_finite(length_cm, "piston length")?;
    let mut lab = BoyleExperiment::new(seed)?;
    let (min_len, max_len) = lab.chamber().length_bounds();
    lab.set_length_cm(length_cm.clamp(min_len, max_len));

    let mut frame = lab.tick(dt);
    for _ in 1..frames {
        frame = lab.tick(dt);
    }

    let mean_speed_proxy = mean_spread(&frame.particle_positions);
    if json {
        let out = serde_json::json!({
            "length_cm": frame.length_cm,
            "pressure_atm": frame.pressure_atm,
            "volume_ml": frame.volume_ml,
            "particles": frame.particle_positions.len(),
            "mean_spread": mean_speed_proxy,
        });
        println!("{}", serde_json::to_string_pretty(&out).expect("serializable"));
    } else {
        println!("Piston length: {:.1} cm", frame.length_cm);
        println!("Pressure:      {:.2} atm", frame.pressure_atm);
        println!("Volume:        {:.0} mL", frame.volume_ml);
        println!(
            "Particles:     {} (mean spread {:.3})",
            frame.particle_positions.len(),
            mean_speed_proxy
        );
    }
    Ok(())
}

fn run_water(temperature: f64, pressure: f64, frames: u32, dt: f64, json: bool) -> CliResult {
    ensure_finite(dt, "frame dt")?;
    ensure_finite(temperature, "temperature")?;
    ensure_finite(pressure, "pressure")?;
    let mut lab = WaterStateExperiment::new(sphere_points(162, 0.9))?;
    lab.set_conditions(temperature, pressure);

    let mut frame = lab.tick(dt);
    for _ in 1..frames {
        frame = lab.tick(dt);
    }

    if json {
        let out = serde_json::json!({
            "temperature_c": temperature,
            "pressure_atm": pressure,
            "phase": frame.phase.label(),
            "residual": lab.residual(),
            "vertices": frame.positions.len(),
        });
        println!("{}", serde_json::to_string_pretty(&out).expect("serializable"));
    } else {
        println!("Conditions: {temperature:.0} °C at {pressure:.2} atm");
        println!("Phase:      {}", frame.phase.label());
        println!("Residual:   {:.2e}", lab.residual());
    }
    Ok(())
}

/// Mean distance of particles from the chamber axis, a quick agitation
/// readout for headless runs.
fn mean_spread(positions: &[Vector3<f64>]) -> f64 {
    if positions.is_empty() {
        return 0.0;
    }
    positions.iter().map(|p| p.x.hypot(p.z)).sum::<f64>() / positions.len() as f64
}

/// Fibonacci-sphere point set standing in for the renderer's icosphere.
fn sphere_points(count: usize, radius: f64) -> Vec<Vector3<f64>> {
    let golden = (1.0 + 5.0_f64.sqrt()) / 2.0;
    (0..count)
        .map(|i| {
            let t = (i as f64 + 0.5) / count as f64;
            let inclination = (1.0 - 2.0 * t).acos();
            let azimuth = std::f64::consts::TAU * (i as f64 / golden).fract();
            Vector3::new(
                radius * inclination.sin() * azimuth.cos(),
                radius * inclination.cos(),
                radius * inclination.sin() * azimuth.sin(),
            )
        })
        .collect()
}
