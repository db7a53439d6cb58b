//! Particle primitives - circular bodies and static walls
//!
//! Bodies carry their state in world coordinates and integrate with
//! position Verlet. Walls are pure collision geometry; the enclosure border
//! is made of the same walls as the interior obstacles.

mod body;
mod vec2;
mod wall;

pub use body::{sanitize_mass, Body};
pub use vec2::Vec2;
pub use wall::Wall;
