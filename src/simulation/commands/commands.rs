use crate::core::SimError;
use crate::particle::{Body, Vec2};
use crate::particle_system::BodyHandle;

use super::events::SimEvent;
use super::SimulationCore;

pub(super) fn pick(sim: &SimulationCore, pointer: Vec2) -> Option<BodyHandle> {
    if !pointer.is_finite() {
        return None;
    }
    sim.particles.pick(pointer)
}

pub(super) fn drag(sim: &mut SimulationCore, pointer: Vec2, selected: Option<BodyHandle>) -> Result<(), SimError> {
    let Some(handle) = selected else {
        return Ok(());
    };
    sim.particles.check_handle(handle)?;
    if !pointer.is_finite() {
        return Err(SimError::InvalidPointer);
    }
    sim.particles.apply_drag(pointer, handle);
    Ok(())
}

pub(super) fn spawn(
    sim: &mut SimulationCore,
    pos: Vec2,
    radius: f32,
    mass: f32,
    color: u32,
) -> Result<BodyHandle, SimError> {
    if !pos.is_finite() {
        return Err(SimError::InvalidPosition);
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SimError::InvalidRadius { radius });
    }

    // Degenerate mass is replaced by 1 inside Body::new.
    let handle = sim.particles.add_body(Body::new(pos, radius, mass, color));
    if let Some(body) = sim.particles.body(handle) {
        sim.events.push(SimEvent::body_spawned(handle, body));
    }
    Ok(handle)
}

pub(super) fn spawn_test_ball(sim: &mut SimulationCore, pos: Vec2) -> Result<BodyHandle, SimError> {
    let radius = sim.config.test_ball.radius;
    let color = sim.config.test_ball.color;
    let mass = sim.config.mass_for_radius(radius);
    spawn(sim, pos, radius, mass, color)
}
