use ndarray::prelude::*;

// Evenly spaced samples over the closed interval, with the endpoint pinned to `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    if n < 2 {
        return Array1::from_elem(n, start);
    }
    let step = (stop - start) / (n - 1) as f64;
    let mut xs = Array1::from_shape_fn(n, |i| start + i as f64 * step);
    if let Some(last) = xs.last_mut() {
        *last = stop;
    }
    xs
}

/// First derivative on a uniform mesh.
///
/// Central differences in the interior, first-order one-sided differences at
/// both ends. Fewer than two samples give a zero derivative.
pub fn gradient(f: ArrayView1<f64>, dx: f64) -> Array1<f64> {
    let n = f.len();
    let mut df = Array1::zeros(n);
    if n < 2 {
        return df;
    }
    df[0] = (f[1] - f[0]) / dx;
    df[n - 1] = (f[n - 1] - f[n - 2]) / dx;
    for i in 1..n - 1 {
        df[i] = (f[i + 1] - f[i - 1]) / (2.0 * dx);
    }
    df
}

/// Uniform radial mesh over `[r_min, r_max]`. The origin is excluded so that
/// `1/r` terms stay finite.
///
/// Bounds are not checked here; `SimParams::validate` owns that. A mesh with
/// fewer than two points has zero spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGrid {
    r: Array1<f64>,
    dr: f64,
}

impl RadialGrid {
    pub fn new(r_min: f64, r_max: f64, n: usize) -> Self {
        let r = linspace(r_min, r_max, n);
        let dr = if n < 2 { 0.0 } else { r[1] - r[0] };
        RadialGrid { r, dr }
    }

    pub fn r(&self) -> ArrayView1<f64> {
        self.r.view()
    }

    pub fn dr(&self) -> f64 {
        self.dr
    }

    pub fn len(&self) -> usize {
        self.r.len()
    }

    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    // Proper volume of the spherical shell at each radius, 4πr²dr.
    pub fn shell_volumes(&self) -> Array1<f64> {
        let dr = self.dr;
        self.r.mapv(|r| 4.0 * std::f64::consts::PI * r * r * dr)
    }
}
