//! Simulation plugin - Self-contained plugin pattern
//!
//! Owns the charged particle, the trajectory its source charge moves along
//! and the clock that drives both. Every fixed tick the clock advances, the
//! charge is placed at arclength `β·t` on the active trajectory (or at the
//! drag target) and the particle is integrated over one tick, pulled toward
//! the charge while tracking is enabled.

use crate::prelude::*;

mod actions;
mod physics;

use actions::{
    handle_restart_simulation_event, handle_steering_events, handle_toggle_pause_simulation_event,
};
use bevy::ecs::schedule::{LogLevel, ScheduleBuildSettings};
use bevy::state::app::StatesPlugin;
use physics::{PhysicsSet, advance_clock, integrate_particle, report_particle_state};

pub use physics::{REPORT_INTERVAL_TICKS, charge_position};

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
}

pub struct SimulationPlugin {
    config: Option<SimulationConfig>,
}

impl SimulationPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config)
            .sanitized();

        match toml::to_string_pretty(&config) {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        let trajectory = config.trajectory.resolve().unwrap_or_default();
        let timestep = config.physics.timestep;

        info!(
            "Simulating {} with {} sub-steps per tick of {:.5}",
            trajectory, config.physics.substeps, timestep
        );

        app.insert_resource(ChargedParticle::from_config(&config));
        app.insert_resource(ActiveTrajectory(trajectory));
        app.insert_resource(ChargeRapidity(config.trajectory.rapidity()));
        app.insert_resource(TrackingMode(config.trajectory.tracking));
        app.insert_resource(IntegratorSubsteps(config.physics.substeps));
        app.init_resource::<DragTarget>();
        app.insert_resource(SimulationClock::new(timestep));
        app.insert_resource(Time::<Fixed>::from_seconds(timestep));
        app.insert_resource(config);

        app.add_event::<SimulationCommand>();

        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }
        app.init_state::<AppState>();

        app.edit_schedule(FixedUpdate, |schedule| {
            schedule.set_build_settings(ScheduleBuildSettings {
                ambiguity_detection: LogLevel::Warn,
                ..default()
            });
        });

        app.configure_sets(
            FixedUpdate,
            (
                PhysicsSet::AdvanceClock,
                PhysicsSet::IntegrateMotion,
                PhysicsSet::Report,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                advance_clock
                    .in_set(PhysicsSet::AdvanceClock)
                    .run_if(in_state(AppState::Running)),
                integrate_particle
                    .in_set(PhysicsSet::IntegrateMotion)
                    .run_if(in_state(AppState::Running)),
                report_particle_state
                    .in_set(PhysicsSet::Report)
                    .run_if(in_state(AppState::Running)),
            ),
        );
        app.add_systems(
            Update,
            (
                handle_restart_simulation_event,
                handle_toggle_pause_simulation_event,
                handle_steering_events,
            )
                .in_set(SimulationSet::Input),
        );
    }
}
