use crate::physics::relativity::Rapidity;
use crate::prelude::*;

/// Fixed ticks between two state reports
pub const REPORT_INTERVAL_TICKS: u64 = 60;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    AdvanceClock,
    IntegrateMotion,
    Report,
}

/// Where the charge is at simulation time `elapsed`
///
/// The charge covers arclength `β·t` along closed trajectories; for `Drag` it
/// sits on the drag target.
pub fn charge_position(
    trajectory: Trajectory,
    rapidity: Rapidity,
    drag_target: Vector,
    elapsed: Scalar,
) -> Vector {
    match trajectory {
        Trajectory::Drag => drag_target,
        trajectory => trajectory.position(rapidity.beta() * elapsed),
    }
}

pub fn advance_clock(mut clock: ResMut<SimulationClock>) {
    if clock.is_paused() {
        return;
    }

    clock.tick();
}

pub fn integrate_particle(
    mut particle: ResMut<ChargedParticle>,
    clock: Res<SimulationClock>,
    trajectory: Res<ActiveTrajectory>,
    rapidity: Res<ChargeRapidity>,
    tracking: Res<TrackingMode>,
    drag_target: Res<DragTarget>,
    substeps: Res<IntegratorSubsteps>,
) {
    if clock.is_paused() {
        return;
    }

    let follow = tracking.then(|| {
        charge_position(**trajectory, **rapidity, **drag_target, clock.elapsed)
    });

    particle.advance(clock.dt, follow, **substeps);
}

pub fn report_particle_state(
    particle: Res<ChargedParticle>,
    clock: Res<SimulationClock>,
    trajectory: Res<ActiveTrajectory>,
) {
    if !particle.state().is_finite() {
        error!(
            "Particle state diverged at t = {:.3}: {:?}",
            clock.elapsed,
            particle.state()
        );
        return;
    }

    if clock.ticks % REPORT_INTERVAL_TICKS != 0 {
        return;
    }

    let position = particle.position();
    let velocity = particle.velocity();
    debug!(
        "t = {:.3} on {}: x = ({:.6}, {:.6}), v = ({:.6}, {:.6}), gamma = {:.6}",
        clock.elapsed,
        **trajectory,
        position.x,
        position.y,
        velocity.x,
        velocity.y,
        particle.lorentz_factor()
    );
}
