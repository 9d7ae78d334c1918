//! Radiation2D prelude module
//!
//! Re-exports the types most systems and tests reach for.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports - Config
pub use crate::config::SimulationConfig;

// Internal re-exports - Events and states
pub use crate::events::SimulationCommand;
pub use crate::states::AppState;

// Internal re-exports - Physics
pub use crate::physics::math::{PhaseState, Scalar, Vector};
pub use crate::physics::particle::Particle;
pub use crate::physics::relativity::Rapidity;
pub use crate::physics::resources::SimulationClock;
pub use crate::physics::trajectory::Trajectory;

// Internal re-exports - Resources
pub use crate::resources::{
    ActiveTrajectory, ChargeRapidity, ChargedParticle, DragTarget, IntegratorSubsteps,
    TrackingMode,
};
