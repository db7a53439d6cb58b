use crate::particle::{Body, Vec2};

/// Index of the body nearest to `pointer`, if the pointer is within
/// `radius + tolerance` of its center.
pub(super) fn pick_nearest(bodies: &[Body], pointer: Vec2, tolerance: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, body) in bodies.iter().enumerate() {
        let d = body.pos.distance(pointer);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }

    let (i, d) = best?;
    (d < bodies[i].radius() + tolerance).then_some(i)
}

/// Move the body `spring` of the way to the pointer and zero its velocity.
pub(super) fn pull_toward(body: &mut Body, pointer: Vec2, spring: f32) {
    let to_pointer = pointer - body.pos;
    body.pos += to_pointer * spring;
    body.halt();
}
