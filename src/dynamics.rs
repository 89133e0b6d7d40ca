pub mod dissipation;
pub mod field;
pub mod metric;

use log::{debug, info, warn};

use crate::config::run::RunParams;
use crate::config::setup::parameters::simulation::SimParams;
use crate::diagnostics;
use crate::grid::RadialGrid;
use crate::simulation::Simulation;
use crate::state::*;
use crate::trace::{Trace, TraceSample};

use self::dissipation::{gamma_profile, DampingMode};

/// Advance the state by one timestep. A crashed state is left untouched.
pub fn update(grid: &RadialGrid, sim_params: &SimParams, dt: f64, sim_state: &mut SimState) {
    if sim_state.crashed() {
        return;
    }
    let r = grid.r();
    let dr = grid.dr();

    // Rebuild the metric before anything reads it this step.
    sim_state.a = metric::reconstruct_metric(
        r,
        sim_state.phi.view(),
        sim_state.pi.view(),
        sim_state.a.view(),
        dr,
    );

    let gamma = gamma_profile(
        sim_params.gamma,
        sim_state.a.view(),
        DampingMode::from_blue_shift(sim_params.blue_shift),
    );

    let force = field::net_force(sim_state.phi.view(), r, dr);

    // Rectangle rule in time, using the momentum from the start of the step.
    let shell_volumes = grid.shell_volumes();
    let power = field::dissipated_power(gamma.view(), sim_state.pi.view(), shell_volumes.view());
    sim_state.dissipated_energy += power * dt;

    field::advance_momentum(&mut sim_state.pi, force.view(), gamma.view(), dt);
    field::advance_field(&mut sim_state.phi, sim_state.pi.view(), dt);

    // Update time and step.
    sim_state.t += dt;
    sim_state.step += 1;

    sim_state.apply_boundary_conditions();

    if !sim_state.field_is_finite() {
        sim_state.status = RunStatus::Crashed;
        warn!(
            "Field diverged at step={}, t={}; freezing evolution",
            sim_state.step, sim_state.t
        );
    }
}

pub fn sample(sim: &Simulation) -> TraceSample {
    let field_energy = sim.total_energy();
    let dissipated_energy = sim.dissipated_energy_accumulated();
    TraceSample {
        step: sim.state().step,
        t: sim.t(),
        field_energy,
        dissipated_energy,
        total_energy: field_energy + dissipated_energy,
        max_phi_sq: diagnostics::max_phi_sq(sim.phi()),
        k_eff: diagnostics::effective_kretschmann(sim.phi(), sim.pi(), sim.dr()),
        a_max: sim.state().a_max(),
        crashed: sim.crashed(),
    }
}

/// Drive the simulation for `run_params.n_steps` steps, sampling after each
/// step whose index is a multiple of the sampling stride.
///
/// The step that crashes is always sampled, whatever the stride, and the run
/// ends there; a diverged run yields a truncated trace whose last row is
/// flagged `crashed`. A configured curvature cutoff ends the run after the
/// first sample that exceeds it.
pub fn run(sim: &mut Simulation, run_params: &RunParams) -> Trace {
    let mut trace = Trace::new(sim.total_energy());
    info!(
        "Running {} steps from t={} (dt={:.3e}), initial energy {:.6}",
        run_params.n_steps,
        sim.t(),
        sim.dt(),
        trace.initial_energy
    );

    for i in 0..run_params.n_steps {
        sim.step();
        if sim.crashed() {
            trace.samples.push(sample(sim));
            break;
        }
        if run_params.is_sample_step(i) {
            let s = sample(sim);
            debug!(
                "SAMPLE: step={}, t={:.4}, E_field={:.6}, E_diss={:.6}, max_phi_sq={:.4e}",
                s.step, s.t, s.field_energy, s.dissipated_energy, s.max_phi_sq
            );
            let k_eff = s.k_eff;
            trace.samples.push(s);
            if let Some(cutoff) = run_params.k_eff_cutoff {
                if k_eff > cutoff {
                    info!("Curvature proxy {:.3e} exceeded cutoff {:.3e}", k_eff, cutoff);
                    break;
                }
            }
        }
    }

    info!(
        "Finished at step={}, t={:.4}, crashed={}",
        sim.state().step,
        sim.t(),
        sim.crashed()
    );
    trace
}
