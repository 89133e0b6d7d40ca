use std::{fs::File, io::Write, path::Path};

use crate::config::setup::parameters::simulation::SimParams;
use crate::error::CollapseResult;
use crate::simulation::Simulation;

// One row of a sampled run.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TraceSample {
    pub step: usize,
    pub t: f64,
    pub field_energy: f64,
    pub dissipated_energy: f64,
    pub total_energy: f64,
    pub max_phi_sq: f64,
    pub k_eff: f64,
    pub a_max: f64,
    pub crashed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    // Field energy when the run started.
    pub initial_energy: f64,
    pub samples: Vec<TraceSample>,
}

impl Trace {
    pub fn new(initial_energy: f64) -> Self {
        Trace {
            initial_energy,
            samples: Vec::new(),
        }
    }

    pub fn last(&self) -> Option<&TraceSample> {
        self.samples.last()
    }

    // Last sample taken before any crash.
    pub fn last_running(&self) -> Option<&TraceSample> {
        self.samples.iter().rev().find(|s| !s.crashed)
    }

    /// Absolute drift of field plus dissipated energy at the last sample
    /// taken before any crash.
    pub fn final_balance_error(&self) -> Option<f64> {
        self.last_running()
            .map(|s| (s.total_energy - self.initial_energy).abs())
    }

    pub fn max_balance_error(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| (s.total_energy - self.initial_energy).abs())
            .fold(0.0, f64::max)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> CollapseResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for sample in &self.samples {
            wtr.serialize(sample)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> CollapseResult<()> {
        self.write_csv(File::create(path)?)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub parameters: SimParams,
    pub steps: usize,
    pub t: f64,
    pub initial_energy: f64,
    pub field_energy: f64,
    pub dissipated_energy: f64,
    pub crashed: bool,
}

impl RunSummary {
    pub fn new(sim: &Simulation, trace: &Trace) -> Self {
        RunSummary {
            parameters: sim.params().clone(),
            steps: sim.state().step,
            t: sim.t(),
            initial_energy: trace.initial_energy,
            field_energy: sim.total_energy(),
            dissipated_energy: sim.dissipated_energy_accumulated(),
            crashed: sim.crashed(),
        }
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> CollapseResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(step: usize, total_energy: f64) -> TraceSample {
        TraceSample {
            step,
            t: step as f64 * 0.1,
            field_energy: total_energy - 0.01,
            dissipated_energy: 0.01,
            total_energy,
            max_phi_sq: 0.25,
            k_eff: 1.5,
            a_max: 1.2,
            crashed: false,
        }
    }

    #[test]
    fn test_balance_errors() {
        let mut trace = Trace::new(1.0);
        assert_eq!(trace.final_balance_error(), None);
        assert_eq!(trace.max_balance_error(), 0.0);

        trace.samples.push(sample(1, 1.02));
        trace.samples.push(sample(11, 0.99));
        assert_relative_eq!(trace.final_balance_error().unwrap(), 0.01, epsilon = 1e-12);
        assert_relative_eq!(trace.max_balance_error(), 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_crash_row_is_skipped_for_final_values() {
        let mut trace = Trace::new(1.0);
        trace.samples.push(sample(1, 1.02));
        trace.samples.push(TraceSample {
            crashed: true,
            total_energy: f64::NAN,
            ..sample(4, 0.0)
        });
        assert!(trace.last().unwrap().crashed);
        assert_eq!(trace.last_running().unwrap().step, 1);
        assert_relative_eq!(trace.final_balance_error().unwrap(), 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_csv_output() {
        let mut trace = Trace::new(1.0);
        trace.samples.push(sample(1, 1.0));
        trace.samples.push(sample(11, 0.5));
        let mut buf = Vec::new();
        trace.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("step,t,field_energy,dissipated_energy,total_energy,max_phi_sq,k_eff,a_max,crashed")
        );
        assert!(lines.next().unwrap().starts_with("1,0.1,"));
        assert!(lines.next().unwrap().starts_with("11,"));
        assert_eq!(lines.next(), None);

        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let rows: Vec<TraceSample> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows, trace.samples);
    }
}
