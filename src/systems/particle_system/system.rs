use serde::{Deserialize, Serialize};

use crate::core::SimError;
use crate::domain::config::SolverConfig;
use crate::particle::{Body, Vec2, Wall};

use super::collision::{resolve_pair, resolve_wall};
use super::drag::{pick_nearest, pull_toward};
use super::forces::{apply_gravity, integrate_bodies};

/// Stable index of a body. Bodies are never removed, so a handle stays valid
/// for the lifetime of the system that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyHandle(u32);

impl BodyHandle {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Contacts resolved during one solver call (all iterations).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactCounts {
    pub wall_contacts: u32,
    pub body_contacts: u32,
}

/// Owns all bodies and walls and runs the solver phases over them.
pub struct ParticleSystem {
    bodies: Vec<Body>,
    walls: Vec<Wall>,
    solver: SolverConfig,
}

impl ParticleSystem {
    pub fn new(solver: SolverConfig) -> Self {
        Self {
            bodies: Vec::new(),
            walls: Vec::new(),
            solver,
        }
    }

    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }

    /// Add a body and return its handle.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle::new(self.bodies.len() as u32);
        self.bodies.push(body);
        handle
    }

    /// Add a wall and return its index.
    pub fn add_wall(&mut self, wall: Wall) -> usize {
        self.walls.push(wall);
        self.walls.len() - 1
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.index())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn check_handle(&self, handle: BodyHandle) -> Result<(), SimError> {
        if handle.index() < self.bodies.len() {
            Ok(())
        } else {
            Err(SimError::InvalidBodyHandle {
                index: handle.raw(),
                count: self.bodies.len(),
            })
        }
    }

    /// True when a body of `radius` at `pos` would overlap no existing body.
    pub fn is_clear(&self, pos: Vec2, radius: f32) -> bool {
        self.bodies
            .iter()
            .all(|other| pos.distance(other.pos) >= radius + other.radius())
    }

    // === Solver phases (run once per sub-step, in this order) ===

    /// Phase 1: gravity, cancelled on the held body.
    pub fn apply_forces(&mut self, gravity: Vec2, held: Option<BodyHandle>) {
        apply_gravity(&mut self.bodies, gravity, held.map(BodyHandle::index));
    }

    /// Phase 2: Verlet integration of every body but the held one.
    pub fn integrate(&mut self, dt: f32, held: Option<BodyHandle>) {
        integrate_bodies(
            &mut self.bodies,
            dt,
            self.solver.velocity_damping,
            held.map(BodyHandle::index),
        );
    }

    /// Phase 3: iterative wall and pair resolution (Gauss-Seidel order: each
    /// body against every wall, then against every later body).
    pub fn solve(&mut self) -> ContactCounts {
        let mut counts = ContactCounts::default();
        let wall_e = self.solver.wall_restitution;
        let body_e = self.solver.body_restitution;
        let separate = self.solver.separate_coincident;
        let n = self.bodies.len();

        for _ in 0..self.solver.iterations {
            for i in 0..n {
                for wall in self.walls.iter() {
                    if resolve_wall(&mut self.bodies[i], wall, wall_e) {
                        counts.wall_contacts += 1;
                    }
                }

                for j in (i + 1)..n {
                    let (head, tail) = self.bodies.split_at_mut(j);
                    if resolve_pair(&mut head[i], &mut tail[0], body_e, separate) {
                        counts.body_contacts += 1;
                    }
                }
            }
        }
        counts
    }

    /// Phase 4: kinematic pointer spring on the held body.
    pub fn apply_drag(&mut self, pointer: Vec2, held: BodyHandle) {
        let spring = self.solver.drag_spring;
        if let Some(body) = self.bodies.get_mut(held.index()) {
            pull_toward(body, pointer, spring);
        }
    }

    /// Nearest body within `radius + pick_tolerance` of the pointer.
    pub fn pick(&self, pointer: Vec2) -> Option<BodyHandle> {
        pick_nearest(&self.bodies, pointer, self.solver.pick_tolerance).map(|i| BodyHandle::new(i as u32))
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
