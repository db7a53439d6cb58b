use serde::Serialize;

use crate::particle::{Body, Wall};
use crate::particle_system::BodyHandle;

/// Creation and placement notifications for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    BodySpawned {
        handle: BodyHandle,
        x: f32,
        y: f32,
        radius: f32,
        mass: f32,
        color: u32,
    },
    WallCreated {
        index: u32,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
    },
    /// Initial placement ran out of attempts before reaching `requested`.
    PlacementAborted {
        requested: u32,
        placed: u32,
        attempts: u32,
    },
}

impl SimEvent {
    pub(super) fn body_spawned(handle: BodyHandle, body: &Body) -> Self {
        SimEvent::BodySpawned {
            handle,
            x: body.pos.x,
            y: body.pos.y,
            radius: body.radius(),
            mass: body.mass(),
            color: body.color,
        }
    }

    pub(super) fn wall_created(index: usize, wall: &Wall) -> Self {
        SimEvent::WallCreated {
            index: index as u32,
            x1: wall.start().x,
            y1: wall.start().y,
            x2: wall.end().x,
            y2: wall.end().y,
            thickness: wall.thickness(),
        }
    }
}

/// Result of rejection-sampling placement at init.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlacementReport {
    pub requested: u32,
    pub placed: u32,
    pub attempts: u32,
    /// Fewer than `requested` bodies fit within the retry budget
    pub exhausted: bool,
}
