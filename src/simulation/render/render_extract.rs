use super::SimulationCore;

pub(crate) const BODY_STRIDE: usize = 3;
pub(crate) const WALL_STRIDE: usize = 5;

/// Flat, tightly packed buffers JS reads straight out of wasm memory.
#[derive(Default)]
pub(crate) struct RenderBuffers {
    /// `[x, y, radius]` per body
    pub(crate) bodies: Vec<f32>,
    /// `[x1, y1, x2, y2, thickness]` per wall
    pub(crate) walls: Vec<f32>,
}

pub(super) fn sync_render_buffers(sim: &mut SimulationCore) {
    let bodies = sim.particles.bodies();
    let buf = &mut sim.render.bodies;
    buf.clear();
    buf.reserve(bodies.len() * BODY_STRIDE);
    for body in bodies {
        buf.extend_from_slice(&[body.pos.x, body.pos.y, body.radius()]);
    }

    // Walls are static; rebuild only when the set changes.
    let walls = sim.particles.walls();
    if sim.render.walls.len() != walls.len() * WALL_STRIDE {
        let buf = &mut sim.render.walls;
        buf.clear();
        for wall in walls {
            let (a, b) = (wall.start(), wall.end());
            buf.extend_from_slice(&[a.x, a.y, b.x, b.y, wall.thickness()]);
        }
    }
}
