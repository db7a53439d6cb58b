//! Simulation configuration
//!
//! Every field has a default, so a host can send a partial JSON object such as
//! `{"width": 390, "height": 844, "body_count": 60}` and get the stock values
//! for everything else.

use serde::{Deserialize, Serialize};

use crate::core::SimError;
use crate::particle::Vec2;

use super::palette::{DEFAULT_PALETTE, TEST_BALL_COLOR};

pub const DEFAULT_GRAVITY_Y: f32 = 980.0;

/// Constraint solver tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Equal sub-steps per frame
    pub substeps: u32,
    /// Gauss-Seidel passes per sub-step
    pub iterations: u32,
    /// Multiplier on implicit velocity each integration (drag / energy loss)
    pub velocity_damping: f32,
    pub wall_restitution: f32,
    pub body_restitution: f32,
    /// Fraction of the body-to-pointer vector covered per sub-step while dragged
    pub drag_spring: f32,
    /// Extra pick distance beyond the body radius
    pub pick_tolerance: f32,
    /// Push apart bodies whose centers coincide exactly (skipped otherwise)
    pub separate_coincident: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            substeps: 8,
            iterations: 5,
            velocity_damping: 0.999,
            wall_restitution: 0.9,
            body_restitution: 0.9,
            drag_spring: 0.25,
            pick_tolerance: 50.0,
            separate_coincident: false,
        }
    }
}

/// Ball spawned at the pointer on request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestBallConfig {
    pub radius: f32,
    pub color: u32,
}

impl Default for TestBallConfig {
    fn default() -> Self {
        Self { radius: 25.0, color: TEST_BALL_COLOR }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === World ===
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
    /// Add the four slanted obstacles inside the border
    pub interior_walls: bool,

    // === Initial population ===
    pub body_count: u32,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Bodies spawn in the top `height * spawn_height_fraction` band
    pub spawn_height_fraction: f32,
    /// Placement attempts allowed per requested body
    pub placement_retry_multiplier: u32,
    /// mass = density * pi * r^2
    pub density: f32,
    pub palette: Vec<u32>,
    pub seed: u64,

    // === Runtime ===
    /// Initial gravity handed to the host (y grows downward)
    pub gravity: Vec2,
    /// Longer frames are clamped to this (seconds)
    pub max_frame_dt: f32,
    pub test_ball: TestBallConfig,
    pub solver: SolverConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            wall_thickness: 10.0,
            interior_walls: true,
            body_count: 150,
            radius_min: 6.0,
            radius_max: 26.0,
            spawn_height_fraction: 0.25,
            placement_retry_multiplier: 20,
            density: 1.0,
            palette: DEFAULT_PALETTE.to_vec(),
            seed: 0x5eed_ba11,
            gravity: Vec2::new(0.0, DEFAULT_GRAVITY_Y),
            max_frame_dt: 0.25,
            test_ball: TestBallConfig::default(),
            solver: SolverConfig::default(),
        }
    }
}

impl SimConfig {
    /// Default config sized to the given viewport.
    pub fn with_size(width: f32, height: f32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| SimError::ConfigParse { message: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys only; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Mass of a ball of the given radius.
    pub fn mass_for_radius(&self, radius: f32) -> f32 {
        self.density * std::f32::consts::PI * radius * radius
    }

    pub fn validate(&self) -> Result<(), SimError> {
        fn check(ok: bool, reason: &'static str) -> Result<(), SimError> {
            if ok {
                Ok(())
            } else {
                Err(SimError::InvalidConfig { reason })
            }
        }

        let s = &self.solver;
        check(self.width.is_finite() && self.width > 0.0, "width must be positive")?;
        check(self.height.is_finite() && self.height > 0.0, "height must be positive")?;
        check(
            self.wall_thickness.is_finite() && self.wall_thickness >= 0.0,
            "wall_thickness must be non-negative",
        )?;
        check(self.radius_min.is_finite() && self.radius_min > 0.0, "radius_min must be positive")?;
        check(
            self.radius_max.is_finite() && self.radius_max >= self.radius_min,
            "radius_max must be >= radius_min",
        )?;
        check(
            (0.0..=1.0).contains(&self.spawn_height_fraction),
            "spawn_height_fraction must be in [0, 1]",
        )?;
        check(self.density.is_finite() && self.density > 0.0, "density must be positive")?;
        check(!self.palette.is_empty(), "palette must not be empty")?;
        check(self.gravity.is_finite(), "gravity must be finite")?;
        check(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0, "max_frame_dt must be positive")?;
        check(
            self.test_ball.radius.is_finite() && self.test_ball.radius > 0.0,
            "test_ball.radius must be positive",
        )?;
        check(s.substeps >= 1, "solver.substeps must be >= 1")?;
        check(s.iterations >= 1, "solver.iterations must be >= 1")?;
        check(
            s.velocity_damping > 0.0 && s.velocity_damping <= 1.0,
            "solver.velocity_damping must be in (0, 1]",
        )?;
        check(
            (0.0..=1.0).contains(&s.wall_restitution),
            "solver.wall_restitution must be in [0, 1]",
        )?;
        check(
            (0.0..=1.0).contains(&s.body_restitution),
            "solver.body_restitution must be in [0, 1]",
        )?;
        check((0.0..=1.0).contains(&s.drag_spring), "solver.drag_spring must be in [0, 1]")?;
        check(
            s.pick_tolerance.is_finite() && s.pick_tolerance >= 0.0,
            "solver.pick_tolerance must be non-negative",
        )?;
        Ok(())
    }
}
