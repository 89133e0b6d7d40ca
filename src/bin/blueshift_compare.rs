use std::{error::Error, path::PathBuf};

use clap::Parser;
use collapse::{
    config::{run::RunParams, setup::parameters::simulation::SimParams},
    dynamics::run,
    simulation::Simulation,
    trace::Trace,
};
use log::{info, warn};

#[derive(Debug, clap::Parser)]
#[command(
    name = "blueshift_compare",
    about = "Compare field growth under static and blue-shifted damping"
)]
pub struct BlueShiftCli {
    #[arg(short = 'g', long = "gamma", default_value_t = 0.01)]
    pub gamma: f64,

    #[arg(short = 'a', long = "amp", default_value_t = 0.15)]
    pub pulse_amp: f64,

    // Stop short of the late-time instability.
    #[arg(short = 't', long = "t-max", default_value_t = 9.5)]
    pub t_max: f64,

    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,
}

fn run_trace(args: &BlueShiftCli, blue_shift: bool) -> Result<Trace, Box<dyn Error>> {
    let mut sim = Simulation::new(SimParams::new(args.gamma, 400, 20.0, args.pulse_amp, blue_shift))?;
    let n_steps = sim.to_steps(args.t_max);
    let trace = run(&mut sim, &RunParams::new(n_steps, 10));
    if sim.crashed() {
        warn!("blue_shift={} diverged at t={:.4}", blue_shift, sim.t());
    }
    Ok(trace)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = BlueShiftCli::parse();

    let static_trace = run_trace(&args, false)?;
    let blue_shift_trace = run_trace(&args, true)?;

    static_trace.save_csv(args.out_dir.join("blueshift_static.csv"))?;
    blue_shift_trace.save_csv(args.out_dir.join("blueshift_suppressed.csv"))?;

    match (static_trace.last_running(), blue_shift_trace.last_running()) {
        (Some(s), Some(b)) => {
            info!("Static:       t={:.4}, max phi^2 = {:.4e}", s.t, s.max_phi_sq);
            info!("Blue-shifted: t={:.4}, max phi^2 = {:.4e}", b.t, b.max_phi_sq);
            if b.max_phi_sq < s.max_phi_sq {
                println!("Blue-shifted damping suppresses the field");
            } else {
                println!("No suppression observed");
            }
        }
        _ => warn!("Not enough samples to compare"),
    }
    Ok(())
}
