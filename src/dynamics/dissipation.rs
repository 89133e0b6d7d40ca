use ndarray::prelude::*;

// Range of a² used to amplify damping in blue-shift mode.
pub const BLUE_SHIFT_FACTOR_MIN: f64 = 1.0;
pub const BLUE_SHIFT_FACTOR_MAX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingMode {
    // Uniform damping.
    Static,
    // Damping grows with the local metric as γ a².
    BlueShift,
}

impl DampingMode {
    pub fn from_blue_shift(blue_shift: bool) -> Self {
        if blue_shift {
            DampingMode::BlueShift
        } else {
            DampingMode::Static
        }
    }
}

pub fn gamma_profile(gamma_base: f64, a: ArrayView1<f64>, mode: DampingMode) -> Array1<f64> {
    match mode {
        DampingMode::Static => Array1::from_elem(a.len(), gamma_base),
        DampingMode::BlueShift => a.mapv(|a| {
            gamma_base * (a * a).clamp(BLUE_SHIFT_FACTOR_MIN, BLUE_SHIFT_FACTOR_MAX)
        }),
    }
}
