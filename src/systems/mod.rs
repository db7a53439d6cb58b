pub mod particle;
pub mod particle_system;
