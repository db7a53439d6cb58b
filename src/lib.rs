//! Verlet Engine - ball physics core for the browser sandbox
//!
//! Position-Verlet bodies colliding with each other and with static walls,
//! sub-stepped with an iterative Gauss-Seidel contact solver.
//!
//! Architecture:
//! - core/          - Errors and logging
//! - domain/        - Configuration and palette
//! - systems/       - Bodies, walls and the contact solver
//! - simulation/    - Per-frame orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths used throughout the crate
pub use systems::particle;
pub use systems::particle_system;

pub use crate::core::SimError;
pub use domain::config::{SimConfig, SolverConfig, TestBallConfig};
pub use simulation::{AbiLayout, FrameInput, PerfStats, PlacementReport, SimEvent, SimulationCore, World};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::info("Verlet engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
