pub mod config;
pub mod palette;
