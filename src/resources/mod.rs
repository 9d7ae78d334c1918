use crate::physics::integrators::GaussLegendre8;
use crate::prelude::*;

/// The test particle being driven by the charge
#[derive(Resource, Deref, DerefMut, Copy, Clone, PartialEq, Debug)]
pub struct ChargedParticle(pub Particle);

impl ChargedParticle {
    pub fn from_config(config: &SimulationConfig) -> Self {
        let physics = &config.physics;
        Self(
            Particle::at_rest(physics.initial_position())
                .with_damping(physics.damping)
                .with_stiffness(physics.stiffness)
                .with_integrator(GaussLegendre8::new().with_max_iterations(physics.max_iterations)),
        )
    }
}

impl Default for ChargedParticle {
    fn default() -> Self {
        Self(Particle::at_rest(Vector::ZERO))
    }
}

#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Debug)]
pub struct ActiveTrajectory(pub Trajectory);

#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Debug)]
pub struct ChargeRapidity(pub Rapidity);

/// Whether the particle is pulled toward the charge
#[derive(Resource, Deref, DerefMut, Copy, Clone, PartialEq, Debug)]
pub struct TrackingMode(pub bool);

impl Default for TrackingMode {
    fn default() -> Self {
        Self(true)
    }
}

/// Where the charge sits while the trajectory is `Drag`
#[derive(Resource, Deref, DerefMut, Copy, Clone, Default, PartialEq, Debug)]
pub struct DragTarget(pub Vector);

/// Sub-steps per fixed tick handed to the integrator
#[derive(Resource, Deref, DerefMut, Copy, Clone, PartialEq, Debug)]
pub struct IntegratorSubsteps(pub usize);

impl Default for IntegratorSubsteps {
    fn default() -> Self {
        Self(10)
    }
}
