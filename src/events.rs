//! Centralized event definitions
//!
//! Commands are the only way systems outside the simulation plugin steer it:
//! a front end (or a test) writes a `SimulationCommand` and the plugin applies
//! it on the next update.

use crate::physics::math::{Scalar, Vector};
use crate::physics::trajectory::Trajectory;
use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SimulationCommand {
    /// Put the particle back at its initial position and reset the clock
    Restart,
    TogglePause,
    ToggleTracking,
    SelectTrajectory(Trajectory),
    /// Move the drag target; only followed while the trajectory is `Drag`
    DragTo(Vector),
    /// New rapidity ψ of the charge
    SetRapidity(Scalar),
}
