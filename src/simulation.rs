use log::debug;
use ndarray::prelude::*;

use crate::config::setup::parameters::simulation::SimParams;
use crate::diagnostics;
use crate::dynamics::{self, metric};
use crate::error::CollapseResult;
use crate::grid::RadialGrid;
use crate::state::{RunStatus, SimState};

// Timestep as a fraction of the grid spacing.
pub const DT_OVER_DR: f64 = 0.005;

pub fn timestep(grid: &RadialGrid) -> f64 {
    DT_OVER_DR * grid.dr()
}

// Truncates, so a run never overshoots `t`.
pub fn steps_for(t: f64, dt: f64) -> usize {
    (t / dt).floor() as usize
}

/// Spherically symmetric scalar-field collapse with damping.
///
/// Owns the grid, the parameters and the evolving state. The only mutation
/// is [`Simulation::step`]; everything else is read access or a diagnostic
/// recomputed on demand.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: RadialGrid,
    params: SimParams,
    dt: f64,
    state: SimState,
}

impl Simulation {
    pub fn new(params: SimParams) -> CollapseResult<Self> {
        params.validate()?;
        let grid = RadialGrid::new(params.r_min, params.r_max, params.n);
        let dt = timestep(&grid);

        let phi = params.pulse.field(grid.r());
        let pi = params.pulse.momentum(grid.r(), phi.view());
        let mut state = SimState::new(phi, pi);
        state.a = metric::reconstruct_metric(
            grid.r(),
            state.phi.view(),
            state.pi.view(),
            state.a.view(),
            grid.dr(),
        );

        debug!(
            "Simulation::new(n={}, dr={}, dt={}, gamma={}, blue_shift={}, a_max={})",
            grid.len(),
            grid.dr(),
            dt,
            params.gamma,
            params.blue_shift,
            state.a_max()
        );

        Ok(Simulation {
            grid,
            params,
            dt,
            state,
        })
    }

    pub fn step(&mut self) {
        dynamics::update(&self.grid, &self.params, self.dt, &mut self.state);
    }

    pub fn total_energy(&self) -> f64 {
        diagnostics::total_energy(&self.grid, &self.state)
    }

    pub fn to_steps(&self, t: f64) -> usize {
        steps_for(t, self.dt)
    }

    pub fn t(&self) -> f64 {
        self.state.t
    }

    pub fn phi(&self) -> ArrayView1<f64> {
        self.state.phi.view()
    }

    pub fn pi(&self) -> ArrayView1<f64> {
        self.state.pi.view()
    }

    pub fn a(&self) -> ArrayView1<f64> {
        self.state.a.view()
    }

    pub fn r(&self) -> ArrayView1<f64> {
        self.grid.r()
    }

    pub fn dr(&self) -> f64 {
        self.grid.dr()
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn dissipated_energy_accumulated(&self) -> f64 {
        self.state.dissipated_energy
    }

    pub fn crashed(&self) -> bool {
        self.state.crashed()
    }

    pub fn status(&self) -> RunStatus {
        self.state.status
    }

    pub fn grid(&self) -> &RadialGrid {
        &self.grid
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    // Lets tests inject non-finite values.
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }
}
