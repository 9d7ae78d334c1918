//! Relativistic particle dynamics and the trajectories that drive them

pub mod integrators;
pub mod math;
pub mod particle;
pub mod relativity;
pub mod resources;
pub mod trajectory;
