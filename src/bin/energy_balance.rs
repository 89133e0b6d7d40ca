use std::{error::Error, path::PathBuf};

use clap::Parser;
use collapse::{
    config::{run::RunParams, setup::parameters::simulation::SimParams},
    dynamics::run,
    simulation::Simulation,
};
use log::info;

#[derive(Debug, clap::Parser)]
#[command(
    name = "energy_balance",
    about = "Check that field plus dissipated energy stays at its initial value"
)]
pub struct EnergyCli {
    #[arg(short = 'g', long = "gamma", default_value_t = 0.05)]
    pub gamma: f64,

    #[arg(short = 'a', long = "amp", default_value_t = 0.02)]
    pub pulse_amp: f64,

    #[arg(short = 'n', long = "steps", default_value_t = 500)]
    pub n_steps: usize,

    #[arg(short = 'o', long = "out", default_value = "energy_check.csv")]
    pub out: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = EnergyCli::parse();

    let mut sim = Simulation::new(SimParams::new(args.gamma, 400, 20.0, args.pulse_amp, false))?;
    let trace = run(&mut sim, &RunParams::new(args.n_steps, 10));
    info!("Initial energy: {:.5}", trace.initial_energy);

    for s in &trace.samples {
        info!(
            "t={:.4}  geometric={:.5}  dissipated={:.5}  total={:.5}",
            s.t,
            s.field_energy / trace.initial_energy,
            s.dissipated_energy / trace.initial_energy,
            s.total_energy / trace.initial_energy
        );
    }
    if let Some(err) = trace.final_balance_error() {
        println!("Final absolute error: {:.5}", err);
    }
    println!("Max absolute error: {:.5}", trace.max_balance_error());

    trace.save_csv(&args.out)?;
    println!("Saved: {}", args.out.display());
    Ok(())
}
