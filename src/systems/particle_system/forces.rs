use crate::particle::{Body, Vec2};

/// Accumulate gravity on every body; the held body gets an equal and opposite
/// force so it floats while dragged.
pub(super) fn apply_gravity(bodies: &mut [Body], gravity: Vec2, held: Option<usize>) {
    for body in bodies.iter_mut() {
        let weight = gravity * body.mass();
        body.accumulate(weight);
    }

    if let Some(body) = held.and_then(|i| bodies.get_mut(i)) {
        let anti_gravity = -(gravity * body.mass());
        body.accumulate(anti_gravity);
    }
}

/// Verlet-step every body except the held one, whose position the drag spring owns.
pub(super) fn integrate_bodies(bodies: &mut [Body], dt: f32, damping: f32, held: Option<usize>) {
    for (i, body) in bodies.iter_mut().enumerate() {
        if held == Some(i) {
            continue;
        }
        body.integrate(dt, damping);
    }
}
