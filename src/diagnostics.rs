//! Quantities recomputed from the current state on demand. Nothing here is
//! stored back into the simulation.

use ndarray::prelude::*;
use ndarray::Zip;

use crate::grid::{gradient, RadialGrid};
use crate::state::SimState;

/// Volume-integrated field energy,
/// `E = Σ [½(Π² + (∂ᵣφ / a)²) + ½φ²] 4πr² dr`.
///
/// Together with the dissipated energy this should stay close to its value
/// at construction.
pub fn total_energy(grid: &RadialGrid, state: &SimState) -> f64 {
    let dphi = gradient(state.phi.view(), grid.dr());
    let dv = grid.shell_volumes();
    Zip::from(&state.phi)
        .and(&state.pi)
        .and(&dphi)
        .and(&state.a)
        .and(&dv)
        .fold(0.0, |acc, &phi, &pi, &dphi, &a, &dv| {
            let rho = 0.5 * (pi * pi + (dphi / a).powi(2)) + 0.5 * phi * phi;
            acc + rho * dv
        })
}

// Peak field intensity.
pub fn max_phi_sq(phi: ArrayView1<f64>) -> f64 {
    phi.fold(0.0, |m: f64, &p| m.max(p * p))
}

/// Curvature proxy `max (Π² + (∂ᵣφ)² + ½φ²)²`, used to spot runaway focusing
/// near the origin.
pub fn effective_kretschmann(phi: ArrayView1<f64>, pi: ArrayView1<f64>, dr: f64) -> f64 {
    let dphi = gradient(phi, dr);
    Zip::from(phi)
        .and(pi)
        .and(&dphi)
        .fold(0.0, |m: f64, &phi, &pi, &dphi| {
            let rho = pi * pi + dphi * dphi + 0.5 * phi * phi;
            m.max(rho * rho)
        })
}
