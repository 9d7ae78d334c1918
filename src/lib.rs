//! Radiation2D library
//!
//! A relativistic charged particle chasing a charge that moves along a
//! prescribed trajectory, integrated with an 8th-order implicit Gauss-Legendre
//! method, plus the plane geometry used to put the result on screen.

pub mod cli;
pub mod config;
pub mod events;
pub mod geometry;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod resources;
pub mod states;

// Test utilities are public for integration tests
pub mod test_utils;

// Re-export commonly used items
pub use config::SimulationConfig;
pub use events::SimulationCommand;
pub use geometry::{AffineTransform, Point, Size};
pub use physics::{
    integrators::{GaussLegendre8, gauss_legendre_8},
    math::{PhaseState, Scalar, Vector},
    particle::Particle,
    trajectory::Trajectory,
};
pub use plugins::simulation::SimulationPlugin;
pub use states::AppState;
