use wasm_bindgen::prelude::*;

use crate::core::SimError;
use crate::particle::Vec2;
use crate::particle_system::BodyHandle;

use super::frame_input::FrameInput;
use super::perf_stats::PerfStats;
use super::render_extract::{BODY_STRIDE, WALL_STRIDE};
use super::SimulationCore;

fn to_js(e: SimError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Pointers and lengths of the render buffers, for building typed-array views.
#[wasm_bindgen]
pub struct AbiLayout {
    bodies_ptr: u32,
    bodies_len_elements: u32,
    bodies_len_bytes: u32,
    body_stride: u32,
    walls_ptr: u32,
    walls_len_elements: u32,
    walls_len_bytes: u32,
    wall_stride: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn bodies_ptr(&self) -> u32 { self.bodies_ptr }
    #[wasm_bindgen(getter)]
    pub fn bodies_len_elements(&self) -> u32 { self.bodies_len_elements }
    #[wasm_bindgen(getter)]
    pub fn bodies_len_bytes(&self) -> u32 { self.bodies_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn body_stride(&self) -> u32 { self.body_stride }

    #[wasm_bindgen(getter)]
    pub fn walls_ptr(&self) -> u32 { self.walls_ptr }
    #[wasm_bindgen(getter)]
    pub fn walls_len_elements(&self) -> u32 { self.walls_len_elements }
    #[wasm_bindgen(getter)]
    pub fn walls_len_bytes(&self) -> u32 { self.walls_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn wall_stride(&self) -> u32 { self.wall_stride }
}

/// JS-facing world. Owns the host input the browser mutates between frames.
#[wasm_bindgen]
pub struct World {
    core: SimulationCore,
    input: FrameInput,
}

impl World {
    fn wrap(core: SimulationCore) -> Self {
        let input = core.default_input();
        Self { core, input }
    }

    /// Native access to the wrapped core.
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn input(&self) -> &FrameInput {
        &self.input
    }
}

#[wasm_bindgen]
impl World {
    /// Create a world sized to the viewport with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<World, JsValue> {
        SimulationCore::with_size(width, height).map(Self::wrap).map_err(to_js)
    }

    /// Create a world from a JSON `SimConfig`; missing keys take defaults
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        SimulationCore::from_config_json(json).map(Self::wrap).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn wall_count(&self) -> u32 { self.core.wall_count() as u32 }

    /// Bodies placed by the initial population
    #[wasm_bindgen(getter)]
    pub fn placed_count(&self) -> u32 { self.core.placement_report().placed }

    /// True when placement gave up before reaching the configured count
    #[wasm_bindgen(getter)]
    pub fn placement_exhausted(&self) -> bool { self.core.placement_report().exhausted }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === HOST INPUT ===

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.input.gravity = Vec2::new(x, y);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.input.paused = paused;
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.input.paused }

    /// Grab the nearest body in range. Returns its handle or -1.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> i32 {
        let pointer = Vec2::new(x, y);
        self.input.pointer = pointer;
        match self.core.pick(pointer) {
            Some(handle) => {
                self.input = self.input.dragging(handle, pointer);
                handle.raw() as i32
            }
            None => {
                self.input = self.input.released();
                -1
            }
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.input.pointer = Vec2::new(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.input = self.input.released();
    }

    /// Held body handle, or -1
    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> i32 {
        self.input.selected.map_or(-1, |h| h.raw() as i32)
    }

    /// Position of the held body, if any
    pub fn selected_x(&self) -> Option<f32> {
        self.selected_pos().map(|p| p.x)
    }

    pub fn selected_y(&self) -> Option<f32> {
        self.selected_pos().map(|p| p.y)
    }

    // === SIMULATION ===

    /// Advance one rendered frame of `dt` seconds and refresh the render buffers
    pub fn step(&mut self, dt: f32) -> Result<(), JsValue> {
        self.core.step(dt, &self.input).map_err(to_js)?;
        self.core.sync_render_buffers();
        Ok(())
    }

    /// Add a body at rest. Returns its handle.
    pub fn spawn(&mut self, x: f32, y: f32, radius: f32, mass: f32, color: u32) -> Result<u32, JsValue> {
        let handle = self
            .core
            .spawn(Vec2::new(x, y), radius, mass, color)
            .map_err(to_js)?;
        self.core.sync_render_buffers();
        Ok(handle.raw())
    }

    pub fn spawn_test_ball(&mut self, x: f32, y: f32) -> Result<u32, JsValue> {
        let handle = self.core.spawn_test_ball(Vec2::new(x, y)).map_err(to_js)?;
        self.core.sync_render_buffers();
        Ok(handle.raw())
    }

    /// Drain queued creation events as a JSON array
    pub fn take_events_json(&mut self) -> Result<String, JsValue> {
        let events = self.core.drain_events();
        serde_json::to_string(&events).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // === RENDER BUFFERS ===

    /// Pointer to `[x, y, radius]` per body
    pub fn extract_bodies(&self) -> *const f32 {
        self.core.body_buffer().as_ptr()
    }

    pub fn body_buffer_len(&self) -> usize {
        self.core.body_buffer().len()
    }

    /// Pointer to `[x1, y1, x2, y2, thickness]` per wall
    pub fn extract_walls(&self) -> *const f32 {
        self.core.wall_buffer().as_ptr()
    }

    pub fn wall_buffer_len(&self) -> usize {
        self.core.wall_buffer().len()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let bodies = self.core.body_buffer();
        let walls = self.core.wall_buffer();
        let f32_size = std::mem::size_of::<f32>();
        AbiLayout {
            bodies_ptr: bodies.as_ptr() as usize as u32,
            bodies_len_elements: bodies.len() as u32,
            bodies_len_bytes: (bodies.len() * f32_size) as u32,
            body_stride: BODY_STRIDE as u32,
            walls_ptr: walls.as_ptr() as usize as u32,
            walls_len_elements: walls.len() as u32,
            walls_len_bytes: (walls.len() * f32_size) as u32,
            wall_stride: WALL_STRIDE as u32,
        }
    }
}

impl World {
    fn selected_pos(&self) -> Option<Vec2> {
        let handle: BodyHandle = self.input.selected?;
        self.core.body(handle).map(|b| b.pos)
    }
}
