//! Reconstruction of the metric function `a(r)` from the field.
//!
//! The radial constraint
//!
//! ```text
//! da/dr = (a³ - a) / 2r + 4πG r a³ ρ
//! ```
//!
//! is integrated outwards with forward Euler, starting from `a = 1` at the
//! innermost point. The clamp thresholds are part of the scheme: the
//! evolution results depend on their exact values.

use ndarray::prelude::*;
use ndarray::Zip;

use crate::grid::gradient;

pub const GRAVITATIONAL_CONSTANT: f64 = 1.0;
// Shooting value at the inner boundary.
pub const A_ORIGIN: f64 = 1.0;
// Bounds on the stored metric.
pub const A_MIN: f64 = 1.0;
pub const A_MAX: f64 = 15.0;
// Caps applied only when evaluating the right-hand side.
pub const A_RHS_MAX: f64 = 10.0;
pub const RHO_RHS_MAX: f64 = 50.0;
// Largest change of `a` across one grid spacing.
pub const DA_MAX: f64 = 0.2;
// Range of the previous metric when it divides the gradient term.
pub const A_DENSITY_MIN: f64 = 1.0;
pub const A_DENSITY_MAX: f64 = 20.0;

/// Local energy density, `ρ = ½(Π² + (∂ᵣφ / a)²) + V(φ)` with `V = ½φ²`.
///
/// The gradient term is scaled by the metric from the previous pass, so
/// reconstruction never depends on its own output.
pub fn energy_density(
    phi: ArrayView1<f64>,
    pi: ArrayView1<f64>,
    a_prev: ArrayView1<f64>,
    dr: f64,
) -> Array1<f64> {
    let dphi = gradient(phi, dr);
    let mut rho = Array1::zeros(phi.len());
    Zip::from(&mut rho)
        .and(phi)
        .and(pi)
        .and(&dphi)
        .and(a_prev)
        .for_each(|rho, &phi, &pi, &dphi, &a| {
            let a = a.clamp(A_DENSITY_MIN, A_DENSITY_MAX);
            *rho = 0.5 * (pi * pi + (dphi / a).powi(2)) + 0.5 * phi * phi;
        });
    rho
}

/// One clamped Euler step of the constraint from the running value `a` at radius `r`.
pub fn shoot_step(a: f64, r: f64, rho: f64, dr: f64) -> f64 {
    let safe_a = a.min(A_RHS_MAX);
    let safe_rho = rho.min(RHO_RHS_MAX);

    let term1 = (safe_a.powi(3) - safe_a) / (2.0 * r);
    let term2 = 4.0 * std::f64::consts::PI * GRAVITATIONAL_CONSTANT * r * safe_a.powi(3) * safe_rho;

    let da = ((term1 + term2) * dr).clamp(-DA_MAX, DA_MAX);
    (a + da).clamp(A_MIN, A_MAX)
}

/// Sweep the constraint outwards over the grid.
///
/// Each radius is seeded by the clamped value stored at the previous one,
/// so this is a serial scan rather than an array operation.
pub fn integrate_metric(r: ArrayView1<f64>, rho: ArrayView1<f64>, dr: f64) -> Array1<f64> {
    r.iter()
        .zip(rho.iter())
        .scan(A_ORIGIN, |a, (&r, &rho)| {
            *a = shoot_step(*a, r, rho, dr);
            Some(*a)
        })
        .collect()
}

pub fn reconstruct_metric(
    r: ArrayView1<f64>,
    phi: ArrayView1<f64>,
    pi: ArrayView1<f64>,
    a_prev: ArrayView1<f64>,
    dr: f64,
) -> Array1<f64> {
    let rho = energy_density(phi, pi, a_prev, dr);
    integrate_metric(r, rho.view(), dr)
}
