use ndarray::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    // Terminal: a non-finite field value was produced.
    Crashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimState {
    // Field amplitude.
    pub phi: Array1<f64>,
    // Field momentum.
    pub pi: Array1<f64>,
    // Metric function, reconstructed from the field each step.
    pub a: Array1<f64>,
    pub t: f64,
    pub step: usize,
    // Energy removed by damping so far.
    pub dissipated_energy: f64,
    pub status: RunStatus,
}

impl SimState {
    pub fn new(phi: Array1<f64>, pi: Array1<f64>) -> SimState {
        let n = phi.len();
        SimState {
            phi,
            pi,
            a: Array1::ones(n),
            t: 0.0,
            step: 0,
            dissipated_energy: 0.0,
            status: RunStatus::Running,
        }
    }

    pub fn crashed(&self) -> bool {
        self.status == RunStatus::Crashed
    }

    pub fn a_max(&self) -> f64 {
        self.a.fold(f64::NEG_INFINITY, |m, &a| m.max(a))
    }

    // Outer edge absorbs, inner edge reflects.
    pub fn apply_boundary_conditions(&mut self) {
        let n = self.phi.len();
        if n < 2 {
            return;
        }
        self.phi[n - 1] = 0.0;
        self.pi[n - 1] = 0.0;
        self.phi[0] = self.phi[1];
        self.pi[0] = self.pi[1];
    }

    pub fn field_is_finite(&self) -> bool {
        self.phi.iter().all(|p| p.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = SimState::new(array![0.1, 0.2, 0.3], array![0.0, 0.0, 0.0]);
        assert_eq!(state.a, array![1.0, 1.0, 1.0]);
        assert_eq!(state.status, RunStatus::Running);
        assert_eq!(state.dissipated_energy, 0.0);
        assert_eq!(state.a_max(), 1.0);
    }

    #[test]
    fn test_boundary_conditions() {
        let mut state = SimState::new(array![5.0, 1.0, 2.0, 3.0], array![-5.0, -1.0, -2.0, -3.0]);
        state.apply_boundary_conditions();
        assert_eq!(state.phi, array![1.0, 1.0, 2.0, 0.0]);
        assert_eq!(state.pi, array![-1.0, -1.0, -2.0, 0.0]);
    }

    #[test]
    fn test_boundary_conditions_two_points() {
        let mut state = SimState::new(array![5.0, 1.0], array![-5.0, -1.0]);
        state.apply_boundary_conditions();
        assert_eq!(state.phi, array![0.0, 0.0]);
        assert_eq!(state.pi, array![0.0, 0.0]);
    }

    #[test]
    fn test_field_is_finite() {
        let mut state = SimState::new(array![0.0, 1.0], array![0.0, 0.0]);
        assert!(state.field_is_finite());
        state.phi[1] = f64::INFINITY;
        assert!(!state.field_is_finite());
        state.phi[1] = f64::NAN;
        assert!(!state.field_is_finite());
    }
}
