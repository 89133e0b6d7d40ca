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
    name = "curvature_trace",
    about = "Trace the effective curvature proxy for several damping strengths"
)]
pub struct CurvatureCli {
    #[arg(short = 'g', long = "gamma", num_args = 1.., default_values_t = [0.0, 0.5])]
    pub gammas: Vec<f64>,

    #[arg(short = 'a', long = "amp", default_value_t = 0.4)]
    pub pulse_amp: f64,

    #[arg(short = 'n', long = "steps", default_value_t = 2500)]
    pub n_steps: usize,

    #[arg(long = "cutoff", default_value_t = 1e6)]
    pub k_eff_cutoff: f64,

    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = CurvatureCli::parse();

    let run_params = RunParams::new(args.n_steps, 1).with_k_eff_cutoff(args.k_eff_cutoff);
    for gamma in &args.gammas {
        info!("Running simulation for gamma = {}", gamma);
        let mut sim = Simulation::new(SimParams::new(*gamma, 200, 20.0, args.pulse_amp, false))?;
        let trace = run(&mut sim, &run_params);

        let k_max = trace.samples.iter().map(|s| s.k_eff).fold(0.0, f64::max);
        info!("gamma = {}: peak K_eff = {:.4e}", gamma, k_max);

        let out = args.out_dir.join(format!("curvature_gamma_{}.csv", gamma));
        trace.save_csv(&out)?;
        println!("Saved {}", out.display());
    }
    Ok(())
}
