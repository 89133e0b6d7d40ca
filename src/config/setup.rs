pub mod parameters;

use std::{fs::File, io::Read, path::Path};

use crate::error::CollapseResult;
use crate::grid::RadialGrid;
use crate::simulation::{steps_for, timestep};

use self::parameters::simulation::SimParams;
use super::run::RunParams;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SetupConfig {
    #[serde(default)]
    pub parameters: SimParams,
    pub run: RunParams,
}

impl SetupConfig {
    pub fn parse<P: AsRef<Path>>(path: P) -> CollapseResult<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> CollapseResult<Self> {
        let config: SetupConfig = serde_yaml::from_str(contents)?;
        config.parameters.validate()?;
        Ok(config)
    }

    pub fn print(&self) {
        let params = &self.parameters;
        let grid = RadialGrid::new(params.r_min, params.r_max, params.n);
        let dt = timestep(&grid);
        println!(
            "\
Simulation parameters:
  Field:
    Damping coefficient: {gamma}
    Blue-shifted damping: {blue_shift}

  Grid:
    Points: {n}
    Radial range: [{r_min}, {r_max}]

  Initial pulse:
    Amplitude: {amp}
    Centre: {r0}
    Width: {sigma}

Derived parameters:
  Grid spacing: {dr:.5}
  Timestep: {dt:.3e}
  Steps per unit time: {steps_per_t}

Run:
  Steps: {n_steps}
  Sample every: {dstep} steps
  Simulated time: {t_run:.4}",
            gamma = params.gamma,
            blue_shift = params.blue_shift,
            n = params.n,
            r_min = params.r_min,
            r_max = params.r_max,
            amp = params.pulse.amplitude,
            r0 = params.pulse.center,
            sigma = params.pulse.width,
            dr = grid.dr(),
            dt = dt,
            steps_per_t = steps_for(1.0, dt),
            n_steps = self.run.n_steps,
            dstep = self.run.dstep_sample,
            t_run = self.run.n_steps as f64 * dt,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollapseError;

    #[test]
    fn test_parse_full() {
        let config = SetupConfig::from_yaml(
            "
parameters:
  gamma: 0.05
  n: 400
  r_max: 20.0
  blue_shift: true
  pulse:
    amplitude: 0.02
run:
  n_steps: 500
  dstep_sample: 10
",
        )
        .unwrap();
        assert_eq!(config.parameters.gamma, 0.05);
        assert!(config.parameters.blue_shift);
        assert_eq!(config.parameters.r_min, 0.1);
        assert_eq!(config.parameters.pulse.amplitude, 0.02);
        assert_eq!(config.parameters.pulse.center, 8.0);
        assert_eq!(config.parameters.pulse.width, 1.5);
        assert_eq!(config.run, RunParams::new(500, 10));
    }

    #[test]
    fn test_parse_defaults() {
        let config = SetupConfig::from_yaml("run:\n  n_steps: 20\n").unwrap();
        assert_eq!(config.parameters, SimParams::default());
        assert_eq!(config.run.dstep_sample, 10);
        assert_eq!(config.run.k_eff_cutoff, None);
    }

    #[test]
    fn test_parse_rejects_invalid_parameters() {
        let result = SetupConfig::from_yaml(
            "
parameters:
  n: 1
run:
  n_steps: 20
",
        );
        assert!(matches!(
            result,
            Err(CollapseError::InvalidParameter { name: "n", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let result = SetupConfig::from_yaml("parameters: [1, 2");
        assert!(matches!(result, Err(CollapseError::Yaml(_))));
    }
}
