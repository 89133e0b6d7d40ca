use ndarray::prelude::*;
use ndarray::Zip;

use crate::grid::gradient;

// Radial Laplacian with the spherical term, φ'' + (2/r) φ'.
// The second derivative is taken by differencing the first.
pub fn laplacian(phi: ArrayView1<f64>, r: ArrayView1<f64>, dr: f64) -> Array1<f64> {
    let df = gradient(phi, dr);
    let d2f = gradient(df.view(), dr);
    let mut lap = d2f;
    Zip::from(&mut lap)
        .and(&df)
        .and(r)
        .for_each(|lap, &df, &r| *lap += (2.0 / r) * df);
    lap
}

// Restoring force of the harmonic potential V = ½φ².
pub fn potential_force(phi: f64) -> f64 {
    phi
}

pub fn net_force(phi: ArrayView1<f64>, r: ArrayView1<f64>, dr: f64) -> Array1<f64> {
    let mut force = laplacian(phi, r, dr);
    Zip::from(&mut force)
        .and(phi)
        .for_each(|f, &phi| *f -= potential_force(phi));
    force
}

/// Instantaneous power removed by damping, `Σ γ Π² dV`.
pub fn dissipated_power(
    gamma: ArrayView1<f64>,
    pi: ArrayView1<f64>,
    shell_volumes: ArrayView1<f64>,
) -> f64 {
    Zip::from(gamma)
        .and(pi)
        .and(shell_volumes)
        .fold(0.0, |acc, &g, &p, &dv| acc + g * p * p * dv)
}

/// Advance the momentum with the force explicit and the damping implicit:
/// `Π ← (Π + dt F) / (1 + γ dt)`.
pub fn advance_momentum(
    pi: &mut Array1<f64>,
    force: ArrayView1<f64>,
    gamma: ArrayView1<f64>,
    dt: f64,
) {
    Zip::from(pi)
        .and(force)
        .and(gamma)
        .for_each(|pi, &f, &g| *pi = (*pi + dt * f) / (1.0 + g * dt));
}

pub fn advance_field(phi: &mut Array1<f64>, pi: ArrayView1<f64>, dt: f64) {
    phi.scaled_add(dt, &pi);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::linspace;
    use approx::assert_relative_eq;

    #[test]
    fn test_laplacian_of_r_squared() {
        // ∇²(r²) = 2 + 2/r · 2r = 6 away from the edges.
        let r = linspace(1.0, 2.0, 101);
        let dr = r[1] - r[0];
        let lap = laplacian(r.mapv(|r| r * r).view(), r.view(), dr);
        for i in 2..99 {
            assert_relative_eq!(lap[i], 6.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_net_force_of_constant_field() {
        let r = linspace(1.0, 2.0, 11);
        let phi = Array1::from_elem(11, 0.3);
        let force = net_force(phi.view(), r.view(), 0.1);
        for f in force.iter() {
            assert_relative_eq!(*f, -0.3, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dissipated_power() {
        let power = dissipated_power(
            array![0.1, 0.2].view(),
            array![2.0, -1.0].view(),
            array![1.0, 3.0].view(),
        );
        assert_relative_eq!(power, 0.1 * 4.0 + 0.2 * 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_implicit_damping_is_stable() {
        // Explicit damping with γ dt = 4 would flip and amplify the momentum.
        let mut pi = array![1.0, -2.0];
        advance_momentum(&mut pi, array![0.0, 0.0].view(), array![400.0, 400.0].view(), 0.01);
        assert_relative_eq!(pi[0], 0.2, epsilon = 1e-14);
        assert_relative_eq!(pi[1], -0.4, epsilon = 1e-14);
    }

    #[test]
    fn test_undamped_momentum_update() {
        let mut pi = array![1.0];
        advance_momentum(&mut pi, array![3.0].view(), array![0.0].view(), 0.5);
        assert_eq!(pi[0], 2.5);

        let mut phi = array![0.0];
        advance_field(&mut phi, pi.view(), 0.5);
        assert_eq!(phi[0], 1.25);
    }
}
