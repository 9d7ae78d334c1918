//! Headless tests of the simulation plugin
//!
//! Fixed ticks are driven by running `FixedUpdate` directly, so the results
//! do not depend on wall-clock time.

use radiation2d::config::SimulationConfig;
use radiation2d::plugins::simulation::{SimulationPlugin, charge_position};
use radiation2d::prelude::*;
use radiation2d::test_utils::{create_test_app, run_fixed_ticks, send_command};

fn config_with(shape: &str, timestep: Scalar, substeps: usize) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.trajectory.shape = shape.to_string();
    config.physics.timestep = timestep;
    config.physics.substeps = substeps;
    config
}

fn simulation_app(config: SimulationConfig) -> App {
    let mut app = create_test_app();
    app.add_plugins(SimulationPlugin::with_config(config));
    app.update();
    app
}

fn particle(app: &App) -> Particle {
    **app.world().resource::<ChargedParticle>()
}

#[test]
fn test_resources_follow_configuration() {
    let mut config = config_with("line", 0.02, 3);
    config.trajectory.width = Some(5.0);
    config.trajectory.tracking = false;
    config.physics.stiffness = 2.0;
    let app = simulation_app(config.clone());

    let world = app.world();
    assert_eq!(**world.resource::<ActiveTrajectory>(), Trajectory::Line(5.0));
    assert!(!**world.resource::<TrackingMode>());
    assert_eq!(**world.resource::<IntegratorSubsteps>(), 3);
    assert_eq!(world.resource::<SimulationClock>().dt, 0.02);
    assert_eq!(world.resource::<Time<Fixed>>().timestep().as_secs_f64(), 0.02);
    assert_eq!(particle(&app).stiffness(), 2.0);
    assert_eq!(*world.resource::<SimulationConfig>(), config);
}

#[test]
fn test_unknown_trajectory_falls_back_to_default() {
    let app = simulation_app(config_with("spiral", 0.1, 1));
    assert_eq!(
        **app.world().resource::<ActiveTrajectory>(),
        Trajectory::default()
    );
}

#[test]
fn test_out_of_range_physics_falls_back_to_defaults() {
    let mut config = config_with("circle", 0.05, 0);
    config.physics.damping = -1.0;
    config.physics.stiffness = -4.0;
    let mut app = simulation_app(config);

    assert_eq!(**app.world().resource::<IntegratorSubsteps>(), 10);
    assert_eq!(particle(&app).damping(), 1.0);
    assert_eq!(particle(&app).stiffness(), 1.0);
    assert_eq!(
        **app.world().resource::<ActiveTrajectory>(),
        Trajectory::Circle
    );

    // With sub-steps restored the particle actually moves
    run_fixed_ticks(&mut app, 10);
    assert_ne!(particle(&app).position(), Vector::ZERO);
}

#[test]
fn test_invalid_trajectory_selection_keeps_particle_finite() {
    let mut app = simulation_app(config_with("circle", 0.05, 2));

    send_command(
        &mut app,
        SimulationCommand::SelectTrajectory(Trajectory::Line(Scalar::NAN)),
    );
    run_fixed_ticks(&mut app, 5);

    assert_eq!(
        **app.world().resource::<ActiveTrajectory>(),
        Trajectory::Circle
    );
    assert!(particle(&app).state().is_finite());
}

#[test]
fn test_fixed_ticks_advance_clock_and_particle() {
    let mut app = simulation_app(config_with("circle", 0.05, 2));

    run_fixed_ticks(&mut app, 40);

    let clock = app.world().resource::<SimulationClock>();
    assert_eq!(clock.ticks, 40);
    assert!((clock.elapsed - 2.0).abs() < 1e-12);

    // Pulled off the origin toward the charge on the unit circle
    let moved = particle(&app);
    assert!(moved.position().length() > 0.1);
    assert!(moved.velocity().length() < 1.0);
}

#[test]
fn test_free_particle_at_rest_stays_put() {
    let mut config = config_with("racetrack", 0.05, 2);
    config.trajectory.tracking = false;
    config.physics.initial_position = [0.5, -0.5];
    let mut app = simulation_app(config);

    run_fixed_ticks(&mut app, 20);

    assert_eq!(particle(&app).position(), Vector::new(0.5, -0.5));
    assert_eq!(particle(&app).momentum(), Vector::ZERO);
}

#[test]
fn test_particle_settles_on_drag_target() {
    let mut app = simulation_app(config_with("drag", 0.05, 2));
    let target = Vector::new(1.0, -0.5);

    send_command(&mut app, SimulationCommand::DragTo(target));
    run_fixed_ticks(&mut app, 1200);

    let settled = particle(&app);
    assert!((settled.position() - target).length() < 1e-6);
    assert!(settled.momentum().length() < 1e-6);
}

#[test]
fn test_charge_position_uses_clock_and_rapidity() {
    let mut app = simulation_app(config_with("circle", 0.1, 1));
    run_fixed_ticks(&mut app, 10);

    let world = app.world();
    let clock = world.resource::<SimulationClock>();
    let rapidity = **world.resource::<ChargeRapidity>();
    let position = charge_position(Trajectory::Circle, rapidity, Vector::ZERO, clock.elapsed);

    let expected = Trajectory::Circle.position(rapidity.beta() * clock.elapsed);
    assert!((position - expected).length() < 1e-15);
    assert!((position.length() - 1.0).abs() < 1e-15);
}

#[test]
fn test_pause_freezes_simulation() {
    let mut app = simulation_app(config_with("circle", 0.05, 2));
    run_fixed_ticks(&mut app, 5);

    send_command(&mut app, SimulationCommand::TogglePause);
    assert_eq!(
        *app.world().resource::<State<AppState>>().get(),
        AppState::Paused
    );

    let frozen = particle(&app);
    run_fixed_ticks(&mut app, 10);
    assert_eq!(app.world().resource::<SimulationClock>().ticks, 5);
    assert_eq!(particle(&app), frozen);

    send_command(&mut app, SimulationCommand::TogglePause);
    run_fixed_ticks(&mut app, 10);
    assert_eq!(app.world().resource::<SimulationClock>().ticks, 15);
}

#[test]
fn test_restart_resets_particle_and_clock() {
    let mut config = config_with("circle", 0.05, 2);
    config.physics.initial_position = [0.25, 0.0];
    let mut app = simulation_app(config);

    run_fixed_ticks(&mut app, 30);
    assert_ne!(particle(&app).position(), Vector::new(0.25, 0.0));

    send_command(&mut app, SimulationCommand::Restart);

    assert_eq!(particle(&app).state(), PhaseState::new(0.25, 0.0, 0.0, 0.0));
    assert_eq!(app.world().resource::<SimulationClock>().ticks, 0);
    assert_eq!(app.world().resource::<SimulationClock>().elapsed, 0.0);
}

#[test]
fn test_toggle_tracking_releases_particle() {
    let mut app = simulation_app(config_with("circle", 0.05, 2));
    run_fixed_ticks(&mut app, 20);

    send_command(&mut app, SimulationCommand::ToggleTracking);
    assert!(!**app.world().resource::<TrackingMode>());

    // Free motion only damps the momentum
    let before = particle(&app).momentum();
    run_fixed_ticks(&mut app, 20);
    let after = particle(&app).momentum();
    assert!(after.length() < before.length());
    assert!(after.normalize().dot(before.normalize()) > 1.0 - 1e-12);
}

#[test]
fn test_select_trajectory_and_rapidity() {
    let mut app = simulation_app(config_with("circle", 0.05, 2));

    send_command(
        &mut app,
        SimulationCommand::SelectTrajectory(Trajectory::Racetrack(1.0)),
    );
    send_command(&mut app, SimulationCommand::SetRapidity(0.5));

    let world = app.world();
    assert_eq!(
        **world.resource::<ActiveTrajectory>(),
        Trajectory::Racetrack(1.0)
    );
    assert_eq!(world.resource::<ChargeRapidity>().value(), 0.5);
}
