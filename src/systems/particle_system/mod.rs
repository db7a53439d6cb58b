//! ParticleSystem - body/wall storage and the constraint solver
//!
//! Per sub-step the caller runs, in order:
//! - `apply_forces`  gravity (cancelled on the held body)
//! - `integrate`     position Verlet, held body skipped
//! - `solve`         N Gauss-Seidel passes of wall + pair contacts
//! - `apply_drag`    kinematic pointer spring on the held body
//!
//! Contacts combine positional correction with a restitution impulse written
//! into `prev_pos`, since velocity is implicit in Verlet.

mod collision;
mod drag;
mod forces;
mod system;

pub use system::{BodyHandle, ContactCounts, ParticleSystem};
