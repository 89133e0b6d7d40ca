use std::{error::Error, path::PathBuf};

use clap::Parser;
use collapse::{
    config::setup::SetupConfig, dynamics::run, simulation::Simulation, trace::RunSummary,
};
use log::{info, warn};

#[derive(Debug, clap::Parser)]
#[command(name = "collapse_run", about = "Run a collapse simulation from a setup file")]
pub struct RunCli {
    #[arg(short = 'c', long = "config")]
    pub config: PathBuf,

    #[arg(short = 'o', long = "out", default_value = "trace.csv")]
    pub out: PathBuf,

    #[arg(long = "summary")]
    pub summary: Option<PathBuf>,

    // Override the step count from the setup file.
    #[arg(short = 'n', long = "steps")]
    pub n_steps: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = RunCli::parse();

    let mut setup_config = SetupConfig::parse(&args.config)?;
    if let Some(n_steps) = args.n_steps {
        setup_config.run.n_steps = n_steps;
    }
    setup_config.print();

    let mut sim = Simulation::new(setup_config.parameters.clone())?;
    let trace = run(&mut sim, &setup_config.run);

    if sim.crashed() {
        warn!("Run diverged at t={}, trace is truncated", sim.t());
    }
    if let Some(err) = trace.final_balance_error() {
        info!(
            "Energy balance: |E_field + E_diss - E_0| = {:.5e} (E_0 = {:.6})",
            err, trace.initial_energy
        );
    }

    trace.save_csv(&args.out)?;
    info!("Wrote {} samples to {}", trace.samples.len(), args.out.display());

    if let Some(path) = args.summary {
        RunSummary::new(&sim, &trace).save_json(&path)?;
        info!("Wrote summary to {}", path.display());
    }
    info!("Done!");
    Ok(())
}
