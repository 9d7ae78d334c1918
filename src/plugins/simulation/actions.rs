//! Action handlers for simulation commands

use crate::prelude::*;

pub fn handle_restart_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    mut particle: ResMut<ChargedParticle>,
    mut clock: ResMut<SimulationClock>,
    config: Res<SimulationConfig>,
) {
    for command in commands_reader.read() {
        if !matches!(command, SimulationCommand::Restart) {
            continue;
        }

        *particle = ChargedParticle::from_config(&config);
        clock.reset();
        info!("Simulation restarted");
    }
}

pub fn handle_toggle_pause_simulation_event(
    mut commands_reader: EventReader<SimulationCommand>,
    current_state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut clock: ResMut<SimulationClock>,
) {
    // Toggles are counted so that two in one frame cancel out
    let toggles = commands_reader
        .read()
        .filter(|command| matches!(command, SimulationCommand::TogglePause))
        .count();
    if toggles % 2 == 0 {
        return;
    }

    match current_state.get().toggled() {
        AppState::Paused => {
            next_state.set(AppState::Paused);
            clock.pause();
            info!("Simulation paused at t = {:.3}", clock.elapsed);
        }
        AppState::Running => {
            next_state.set(AppState::Running);
            clock.unpause();
            info!("Simulation resumed at t = {:.3}", clock.elapsed);
        }
    }
}

pub fn handle_steering_events(
    mut commands_reader: EventReader<SimulationCommand>,
    mut trajectory: ResMut<ActiveTrajectory>,
    mut rapidity: ResMut<ChargeRapidity>,
    mut tracking: ResMut<TrackingMode>,
    mut drag_target: ResMut<DragTarget>,
) {
    for command in commands_reader.read() {
        match *command {
            SimulationCommand::ToggleTracking => {
                **tracking = !**tracking;
                info!("Tracking {}", if **tracking { "enabled" } else { "disabled" });
            }
            SimulationCommand::SelectTrajectory(selected) => {
                if let Err(e) = selected.validate() {
                    warn!("Ignoring trajectory selection: {e}");
                    continue;
                }
                **trajectory = selected;
                info!("Trajectory set to {selected}");
            }
            SimulationCommand::DragTo(target) => {
                if !target.is_finite() {
                    warn!("Ignoring non-finite drag target {target:?}");
                    continue;
                }
                **drag_target = target;
                trace!("Drag target moved to ({:.3}, {:.3})", target.x, target.y);
            }
            SimulationCommand::SetRapidity(psi) => {
                if !psi.is_finite() {
                    warn!("Ignoring non-finite rapidity {psi}");
                    continue;
                }
                **rapidity = Rapidity::new(psi);
                info!(
                    "Charge rapidity set to {:.4} (beta = {:.4}, gamma = {:.4})",
                    rapidity.value(),
                    rapidity.beta(),
                    rapidity.gamma()
                );
            }
            SimulationCommand::Restart | SimulationCommand::TogglePause => {}
        }
    }
}
