//! Test utilities for plugin testing

use crate::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

/// Creates a minimal headless app with the core Bevy plugins needed for testing
pub fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, bevy::state::app::StatesPlugin));

    // Freeze virtual time so `FixedUpdate` only runs when a test asks for it
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));

    app
}

/// Runs the fixed-timestep schedule `ticks` times, independent of wall-clock time
pub fn run_fixed_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

/// Sends a command and runs enough updates for it and any state change to apply
pub fn send_command(app: &mut App, command: SimulationCommand) {
    app.world_mut().send_event(command);
    app.update();
    app.update();
}
