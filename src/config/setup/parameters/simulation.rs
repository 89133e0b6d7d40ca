use super::pulse::PulseParams;
use crate::error::{CollapseError, CollapseResult};

pub const DEFAULT_GAMMA: f64 = 0.0;
pub const DEFAULT_N: usize = 400;
pub const DEFAULT_R_MIN: f64 = 0.1;
pub const DEFAULT_R_MAX: f64 = 20.0;

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}
fn default_n() -> usize {
    DEFAULT_N
}
fn default_r_min() -> f64 {
    DEFAULT_R_MIN
}
fn default_r_max() -> f64 {
    DEFAULT_R_MAX
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SimParams {
    // Base damping coefficient.
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    // Grid.
    #[serde(default = "default_n")]
    pub n: usize,
    #[serde(default = "default_r_min")]
    pub r_min: f64,
    #[serde(default = "default_r_max")]
    pub r_max: f64,
    // Initial data.
    #[serde(default)]
    pub pulse: PulseParams,
    // Scale damping with the local metric value.
    #[serde(default)]
    pub blue_shift: bool,
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            gamma: DEFAULT_GAMMA,
            n: DEFAULT_N,
            r_min: DEFAULT_R_MIN,
            r_max: DEFAULT_R_MAX,
            pulse: PulseParams::default(),
            blue_shift: false,
        }
    }
}

impl SimParams {
    pub fn new(gamma: f64, n: usize, r_max: f64, pulse_amp: f64, blue_shift: bool) -> Self {
        SimParams {
            gamma,
            n,
            r_max,
            pulse: PulseParams::with_amplitude(pulse_amp),
            blue_shift,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> CollapseResult<()> {
        if !(self.gamma.is_finite() && self.gamma >= 0.0) {
            return Err(CollapseError::invalid(
                "gamma",
                format!("must be finite and non-negative, got {}", self.gamma),
            ));
        }
        if self.n < 2 {
            return Err(CollapseError::invalid(
                "n",
                format!("need at least 2 grid points, got {}", self.n),
            ));
        }
        if !(self.r_min.is_finite() && self.r_min > 0.0) {
            return Err(CollapseError::invalid(
                "r_min",
                format!("must be finite and positive, got {}", self.r_min),
            ));
        }
        if !(self.r_max.is_finite() && self.r_max > self.r_min) {
            return Err(CollapseError::invalid(
                "r_max",
                format!(
                    "must be finite and greater than r_min={}, got {}",
                    self.r_min, self.r_max
                ),
            ));
        }
        self.pulse.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SimParams::default();
        assert_eq!(params.gamma, 0.0);
        assert_eq!(params.n, 400);
        assert_eq!(params.r_max, 20.0);
        assert_eq!(params.pulse.amplitude, 0.01);
        assert!(!params.blue_shift);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(SimParams::new(-0.1, 400, 20.0, 0.02, false).validate().is_err());
        assert!(SimParams::new(0.1, 1, 20.0, 0.02, false).validate().is_err());
        assert!(SimParams::new(0.1, 400, 0.05, 0.02, false).validate().is_err());
        assert!(SimParams::new(0.1, 400, f64::NAN, 0.02, false).validate().is_err());
        let at_origin = SimParams {
            r_min: 0.0,
            ..SimParams::default()
        };
        match at_origin.validate() {
            Err(CollapseError::InvalidParameter { name, .. }) => assert_eq!(name, "r_min"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(SimParams::new(f64::INFINITY, 400, 20.0, 0.02, false)
            .validate()
            .is_err());
        match SimParams::new(0.1, 0, 20.0, 0.02, false).validate() {
            Err(CollapseError::InvalidParameter { name, .. }) => assert_eq!(name, "n"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
