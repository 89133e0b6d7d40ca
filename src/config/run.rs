#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct RunParams {
    pub n_steps: usize,
    // Sample after every step whose index is a multiple of this.
    #[serde(default = "default_dstep_sample")]
    pub dstep_sample: usize,
    // Stop once the effective curvature proxy exceeds this value.
    #[serde(default)]
    pub k_eff_cutoff: Option<f64>,
}

fn default_dstep_sample() -> usize {
    10
}

impl RunParams {
    pub fn new(n_steps: usize, dstep_sample: usize) -> Self {
        RunParams {
            n_steps,
            dstep_sample,
            k_eff_cutoff: None,
        }
    }

    pub fn with_k_eff_cutoff(self, k_eff_cutoff: f64) -> Self {
        RunParams {
            k_eff_cutoff: Some(k_eff_cutoff),
            ..self
        }
    }

    pub fn is_sample_step(&self, i: usize) -> bool {
        i % self.dstep_sample.max(1) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_steps() {
        let run = RunParams::new(500, 10);
        let sampled: Vec<usize> = (0..run.n_steps).filter(|i| run.is_sample_step(*i)).collect();
        assert_eq!(sampled.len(), 50);
        assert_eq!(sampled[0], 0);
        assert_eq!(sampled[49], 490);
    }

    #[test]
    fn test_zero_stride_samples_every_step() {
        let run = RunParams::new(3, 0);
        assert!((0..3).all(|i| run.is_sample_step(i)));
    }
}
