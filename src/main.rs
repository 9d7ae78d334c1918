use bevy::app::ScheduleRunnerPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::state::app::StatesPlugin;
use clap::Parser;
use radiation2d::cli::{Args, handle_list_trajectories, load_and_apply_config};
use radiation2d::plugins::simulation::SimulationPlugin;
use radiation2d::prelude::*;
use std::time::Duration;

/// Simulation time after which the app exits
#[derive(Resource, Deref, Copy, Clone, Debug)]
struct RunDuration(Scalar);

fn main() -> AppExit {
    let args = Args::parse();

    if args.list_trajectories {
        handle_list_trajectories();
        return AppExit::Success;
    }

    let config = match load_and_apply_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return AppExit::error();
        }
    };

    println!(
        "Radiation2D {} (built {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_DATE")
    );

    let wait = Duration::try_from_secs_f64(config.physics.timestep)
        .unwrap_or(Duration::from_secs_f64(1.0 / 60.0));

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(wait)),
        LogPlugin {
            level: if args.verbose {
                Level::DEBUG
            } else {
                Level::INFO
            },
            ..default()
        },
        StatesPlugin,
        SimulationPlugin::with_config(config),
    ));

    if let Some(duration) = args.duration {
        app.insert_resource(RunDuration(duration));
        app.add_systems(Update, exit_after_duration);
    }

    app.run()
}

fn exit_after_duration(
    clock: Res<SimulationClock>,
    duration: Res<RunDuration>,
    particle: Res<ChargedParticle>,
    mut exit: EventWriter<AppExit>,
) {
    if clock.elapsed < **duration {
        return;
    }

    let position = particle.position();
    let velocity = particle.velocity();
    info!(
        "Finished after t = {:.3} ({} ticks): x = ({:.9}, {:.9}), v = ({:.9}, {:.9})",
        clock.elapsed, clock.ticks, position.x, position.y, velocity.x, velocity.y
    );
    exit.write(AppExit::Success);
}
