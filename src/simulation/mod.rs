//! Simulation - orchestration of the ball physics core
//!
//! `SimulationCore` owns bodies and walls (through `ParticleSystem`) and runs
//! the per-frame pipeline. Everything the host controls per frame (gravity,
//! pointer, selection, pause) arrives as a `FrameInput` snapshot; the core
//! never stores or mutates it.
//!
//! The core never touches a renderer. It produces:
//! - flat position buffers for zero-copy reads from JS
//! - a queue of creation events (bodies, walls, placement shortfall)

use crate::core::SimError;
use crate::domain::config::SimConfig;
use crate::particle::{Body, Vec2, Wall};
use crate::particle_system::{BodyHandle, ParticleSystem};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "input/frame_input.rs"]
mod frame_input;
#[path = "events/events.rs"]
mod events;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use events::{PlacementReport, SimEvent};
pub use facade::{AbiLayout, World};
pub use frame_input::FrameInput;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;
use render_extract::RenderBuffers;

/// The simulation world
pub struct SimulationCore {
    config: SimConfig,
    particles: ParticleSystem,

    // Host-facing output
    events: Vec<SimEvent>,
    placement: PlacementReport,
    render: RenderBuffers,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Build walls and place the initial population.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        init::create_simulation_core(config)
    }

    /// Default configuration sized to the viewport.
    pub fn with_size(width: f32, height: f32) -> Result<Self, SimError> {
        Self::new(SimConfig::with_size(width, height))
    }

    pub fn from_config_json(json: &str) -> Result<Self, SimError> {
        Self::new(SimConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn width(&self) -> f32 { self.config.width }

    pub fn height(&self) -> f32 { self.config.height }

    /// Frames actually simulated (paused and zero-length frames don't count).
    pub fn frame(&self) -> u64 { self.frame }

    // === READ ACCESS ===

    pub fn bodies(&self) -> &[Body] {
        self.particles.bodies()
    }

    pub fn walls(&self) -> &[Wall] {
        self.particles.walls()
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.particles.body(handle)
    }

    pub fn body_count(&self) -> usize {
        self.particles.body_count()
    }

    pub fn wall_count(&self) -> usize {
        self.particles.wall_count()
    }

    /// Outcome of the initial rejection-sampling placement.
    pub fn placement_report(&self) -> PlacementReport {
        self.placement
    }

    /// Host input seeded from the config (gravity), nothing selected.
    pub fn default_input(&self) -> FrameInput {
        FrameInput::new(self.config.gravity)
    }

    // === SETTINGS ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === STEP ===

    /// Advance the simulation by one rendered frame of `frame_dt` seconds.
    ///
    /// No-op when `input.paused`. Invalid input is rejected before any state changes.
    pub fn step(&mut self, frame_dt: f32, input: &FrameInput) -> Result<(), SimError> {
        step::step(self, frame_dt, input)
    }

    // === COMMANDS ===

    /// Nearest body within pick range of the pointer. The host stores the
    /// returned handle in its `FrameInput`.
    pub fn pick(&self, pointer: Vec2) -> Option<BodyHandle> {
        commands::pick(self, pointer)
    }

    /// Apply the kinematic pointer spring to `selected`. `None` does nothing.
    pub fn drag(&mut self, pointer: Vec2, selected: Option<BodyHandle>) -> Result<(), SimError> {
        commands::drag(self, pointer, selected)
    }

    /// Add a body at rest. Returns its stable handle.
    pub fn spawn(&mut self, pos: Vec2, radius: f32, mass: f32, color: u32) -> Result<BodyHandle, SimError> {
        commands::spawn(self, pos, radius, mass, color)
    }

    /// Spawn the configured test ball at `pos`.
    pub fn spawn_test_ball(&mut self, pos: Vec2) -> Result<BodyHandle, SimError> {
        commands::spawn_test_ball(self, pos)
    }

    // === EVENTS ===

    pub fn pending_events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Take all queued creation / placement events.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    // === RENDER EXTRACTION ===

    /// Refresh the flat body (and, if needed, wall) buffers.
    pub fn sync_render_buffers(&mut self) {
        render_extract::sync_render_buffers(self);
    }

    /// `[x, y, radius]` per body, as of the last sync.
    pub fn body_buffer(&self) -> &[f32] {
        &self.render.bodies
    }

    /// `[x1, y1, x2, y2, thickness]` per wall, as of the last sync.
    pub fn wall_buffer(&self) -> &[f32] {
        &self.render.walls
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
