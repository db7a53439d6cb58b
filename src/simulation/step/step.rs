use crate::core::{logging, SimError};

use super::frame_input::FrameInput;
use super::{PerfTimer, SimulationCore};

/// Reject non-finite or negative frame times, clamp long frames.
pub(super) fn sanitize_frame_dt(frame_dt: f32, max_frame_dt: f32) -> Result<f32, SimError> {
    if !frame_dt.is_finite() || frame_dt < 0.0 {
        return Err(SimError::InvalidTimeStep { dt: frame_dt });
    }
    Ok(frame_dt.min(max_frame_dt))
}

/// Check the host snapshot before touching any state.
fn validate_input(sim: &SimulationCore, input: &FrameInput) -> Result<(), SimError> {
    if !input.gravity.is_finite() {
        return Err(SimError::InvalidGravity);
    }
    if let Some(handle) = input.selected {
        sim.particles.check_handle(handle)?;
        if !input.pointer.is_finite() {
            return Err(SimError::InvalidPointer);
        }
    }
    Ok(())
}

pub(super) fn step(sim: &mut SimulationCore, frame_dt: f32, input: &FrameInput) -> Result<(), SimError> {
    // Snapshot: the host may not change input mid-step.
    let input = *input;
    if input.paused {
        return Ok(());
    }

    let checked = sanitize_frame_dt(frame_dt, sim.config.max_frame_dt)
        .and_then(|dt| validate_input(sim, &input).map(|_| dt));
    let dt = match checked {
        Ok(dt) => dt,
        Err(e) => {
            logging::warn(&format!("step rejected: {e}"));
            return Err(e);
        }
    };
    if dt == 0.0 {
        return Ok(());
    }

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = perf_on.then(PerfTimer::start);

    let substeps = sim.config.solver.substeps;
    let sub_dt = dt / substeps as f32;
    let held = input.selected;

    for _ in 0..substeps {
        // === FORCES ===
        let t0 = perf_on.then(PerfTimer::start);
        sim.particles.apply_forces(input.gravity, held);
        if let Some(t0) = t0 {
            sim.perf_stats.forces_ms += t0.elapsed_ms();
        }

        // === INTEGRATE ===
        let t0 = perf_on.then(PerfTimer::start);
        sim.particles.integrate(sub_dt, held);
        if let Some(t0) = t0 {
            sim.perf_stats.integrate_ms += t0.elapsed_ms();
        }

        // === SOLVE ===
        let t0 = perf_on.then(PerfTimer::start);
        let contacts = sim.particles.solve();
        if let Some(t0) = t0 {
            sim.perf_stats.solve_ms += t0.elapsed_ms();
            sim.perf_stats.wall_contacts = sim.perf_stats.wall_contacts.saturating_add(contacts.wall_contacts);
            sim.perf_stats.body_contacts = sim.perf_stats.body_contacts.saturating_add(contacts.body_contacts);
        }

        // === POINTER SPRING ===
        // Overrides whatever the solver did to the held body this sub-step.
        if let Some(handle) = held {
            let t0 = perf_on.then(PerfTimer::start);
            sim.particles.apply_drag(input.pointer, handle);
            if let Some(t0) = t0 {
                sim.perf_stats.drag_ms += t0.elapsed_ms();
            }
        }
    }

    if let Some(start) = step_start {
        sim.perf_stats.substeps = substeps;
        sim.perf_stats.body_count = sim.particles.body_count() as u32;
        sim.perf_stats.wall_count = sim.particles.wall_count() as u32;
        sim.perf_stats.step_ms = start.elapsed_ms();
    }

    sim.frame += 1;
    Ok(())
}
