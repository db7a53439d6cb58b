use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::{logging, SimError};
use crate::domain::config::SimConfig;
use crate::particle::{Body, Vec2, Wall};
use crate::particle_system::ParticleSystem;

use super::events::{PlacementReport, SimEvent};
use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::SimulationCore;

pub(super) fn create_simulation_core(config: SimConfig) -> Result<SimulationCore, SimError> {
    config.validate()?;

    let mut particles = ParticleSystem::new(config.solver.clone());
    let mut events = Vec::new();

    let placement = place_bodies(&config, &mut particles, &mut events);
    for wall in build_walls(&config) {
        let index = particles.add_wall(wall);
        events.push(SimEvent::wall_created(index, &particles.walls()[index]));
    }

    logging::info(&format!(
        "verlet engine ready: {}x{} world, {} bodies, {} walls",
        config.width,
        config.height,
        particles.body_count(),
        particles.wall_count()
    ));

    let mut core = SimulationCore {
        config,
        particles,
        events,
        placement,
        render: RenderBuffers::default(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    core.sync_render_buffers();
    Ok(core)
}

/// Rejection sampling: draw a random radius and position in the spawn band,
/// keep it only if it overlaps no body placed so far. Stops after
/// `body_count * placement_retry_multiplier` attempts.
pub(super) fn place_bodies(
    config: &SimConfig,
    particles: &mut ParticleSystem,
    events: &mut Vec<SimEvent>,
) -> PlacementReport {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let requested = config.body_count;
    let budget = requested.saturating_mul(config.placement_retry_multiplier);
    let radius_span = config.radius_max - config.radius_min;
    let band_height = config.height * config.spawn_height_fraction;

    let mut attempts = 0u32;
    let mut placed = 0u32;

    while placed < requested && attempts < budget {
        attempts += 1;

        let radius = config.radius_min + rng.random::<f32>() * radius_span;
        let span_x = (config.width - 2.0 * radius).max(0.0);
        let span_y = (band_height - 2.0 * radius).max(0.0);
        let pos = Vec2::new(
            radius + rng.random::<f32>() * span_x,
            radius + rng.random::<f32>() * span_y,
        );
        let color = config.palette[rng.random_range(0..config.palette.len())];

        if !particles.is_clear(pos, radius) {
            continue;
        }

        let body = Body::new(pos, radius, config.mass_for_radius(radius), color);
        let handle = particles.add_body(body);
        if let Some(body) = particles.body(handle) {
            events.push(SimEvent::body_spawned(handle, body));
        }
        placed += 1;
    }

    let exhausted = placed < requested;
    if exhausted {
        logging::warn(&format!(
            "placement aborted: placed {placed} of {requested} bodies after {attempts} attempts"
        ));
        events.push(SimEvent::PlacementAborted { requested, placed, attempts });
    }

    PlacementReport {
        requested,
        placed,
        attempts,
        exhausted,
    }
}

/// Interior obstacles (optional) followed by the border: left, right, top, bottom.
///
/// Border segments run so that each wall's left normal faces into the box.
pub(super) fn build_walls(config: &SimConfig) -> Vec<Wall> {
    let w = config.width;
    let h = config.height;
    let t = config.wall_thickness;
    let wall = |x1: f32, y1: f32, x2: f32, y2: f32| Wall::new(Vec2::new(x1, y1), Vec2::new(x2, y2), t);

    let mut walls = Vec::with_capacity(8);
    if config.interior_walls {
        walls.push(wall(w / 3.0, h * 0.175, w / 2.2, h * 0.355));
        walls.push(wall(w * 0.68, h * 0.175, w / 1.8, h * 0.355));
        walls.push(wall(w / 3.0, h * 0.625, w / 2.2, h * 0.475));
        walls.push(wall(w * 0.68, h * 0.625, w / 1.8, h * 0.475));
    }

    walls.push(wall(0.0, 0.0, 0.0, h)); // Left
    walls.push(wall(w, h, w, 0.0)); // Right
    walls.push(wall(w, 0.0, 0.0, 0.0)); // Top
    walls.push(wall(0.0, h, w, h)); // Bottom
    walls
}
