use crate::domain::config::DEFAULT_GRAVITY_Y;
use crate::particle::Vec2;
use crate::particle_system::BodyHandle;

/// Per-frame input owned by the host.
///
/// Copied once at the start of every `step`, so a host that updates it from
/// another thread only needs to hand over a consistent snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub gravity: Vec2,
    /// Pointer in world coordinates
    pub pointer: Vec2,
    /// Body held by the pointer, if any
    pub selected: Option<BodyHandle>,
    pub paused: bool,
}

impl FrameInput {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            pointer: Vec2::zero(),
            selected: None,
            paused: false,
        }
    }

    /// Same input with `handle` held at `pointer`.
    pub fn dragging(self, handle: BodyHandle, pointer: Vec2) -> Self {
        Self { pointer, selected: Some(handle), ..self }
    }

    /// Same input with nothing held.
    pub fn released(self) -> Self {
        Self { selected: None, ..self }
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self::new(Vec2::new(0.0, DEFAULT_GRAVITY_Y))
    }
}
