use ndarray::prelude::*;
use ndarray::Zip;

use crate::error::{CollapseError, CollapseResult};

pub const DEFAULT_PULSE_AMPLITUDE: f64 = 0.01;
pub const DEFAULT_PULSE_CENTER: f64 = 8.0;
pub const DEFAULT_PULSE_WIDTH: f64 = 1.5;

fn default_amplitude() -> f64 {
    DEFAULT_PULSE_AMPLITUDE
}
fn default_center() -> f64 {
    DEFAULT_PULSE_CENTER
}
fn default_width() -> f64 {
    DEFAULT_PULSE_WIDTH
}

/// Gaussian shell travelling towards the origin.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct PulseParams {
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    #[serde(default = "default_center")]
    pub center: f64,
    #[serde(default = "default_width")]
    pub width: f64,
}

impl Default for PulseParams {
    fn default() -> Self {
        PulseParams {
            amplitude: DEFAULT_PULSE_AMPLITUDE,
            center: DEFAULT_PULSE_CENTER,
            width: DEFAULT_PULSE_WIDTH,
        }
    }
}

impl PulseParams {
    pub fn with_amplitude(amplitude: f64) -> Self {
        PulseParams {
            amplitude,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> CollapseResult<()> {
        if !self.amplitude.is_finite() {
            return Err(CollapseError::invalid(
                "pulse.amplitude",
                format!("must be finite, got {}", self.amplitude),
            ));
        }
        if !self.center.is_finite() {
            return Err(CollapseError::invalid(
                "pulse.center",
                format!("must be finite, got {}", self.center),
            ));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(CollapseError::invalid(
                "pulse.width",
                format!("must be finite and positive, got {}", self.width),
            ));
        }
        Ok(())
    }

    // phi(r) = A exp(-(r - r0)² / σ²)
    pub fn field(&self, r: ArrayView1<f64>) -> Array1<f64> {
        let sigma_sq = self.width * self.width;
        r.mapv(|r| self.amplitude * (-(r - self.center).powi(2) / sigma_sq).exp())
    }

    // Radial derivative of the profile, used as the momentum so that the
    // shell moves inwards.
    pub fn momentum(&self, r: ArrayView1<f64>, phi: ArrayView1<f64>) -> Array1<f64> {
        let sigma_sq = self.width * self.width;
        let mut pi = Array1::zeros(r.len());
        Zip::from(&mut pi)
            .and(r)
            .and(phi)
            .for_each(|pi, &r, &phi| *pi = -2.0 * (r - self.center) / sigma_sq * phi);
        pi
    }
}
