//! Relativistic charged particle under damping and an optional tracking spring

use crate::physics::integrators::GaussLegendre8;
use crate::physics::math::{PhaseState, Scalar, Vector, momentum_of, phase_state, position_of};
use crate::physics::relativity::{lorentz_factor, velocity_from_momentum};

/// Default damping rate `α`
pub const DEFAULT_DAMPING: Scalar = 1.0;

/// Default tracking spring constant `κ`
pub const DEFAULT_STIFFNESS: Scalar = 1.0;

/// Force law driving the momentum
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceLaw {
    /// `p' = -α p`
    Free,
    /// `p' = -α p - κ (x - target)`
    Tracking(Vector),
}

impl ForceLaw {
    pub fn from_target(follow: Option<Vector>) -> Self {
        follow.map_or(ForceLaw::Free, ForceLaw::Tracking)
    }
}

/// A unit-mass charge with phase-space state `(x, p)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    state: PhaseState,
    damping: Scalar,
    stiffness: Scalar,
    integrator: GaussLegendre8,
}

impl Particle {
    pub fn new(state: PhaseState) -> Self {
        Self {
            state,
            damping: DEFAULT_DAMPING,
            stiffness: DEFAULT_STIFFNESS,
            integrator: GaussLegendre8::new(),
        }
    }

    pub fn at_rest(position: Vector) -> Self {
        Self::new(phase_state(position, Vector::ZERO))
    }

    pub fn with_damping(mut self, damping: Scalar) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_stiffness(mut self, stiffness: Scalar) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_integrator(mut self, integrator: GaussLegendre8) -> Self {
        self.integrator = integrator;
        self
    }

    #[inline]
    pub fn state(&self) -> PhaseState {
        self.state
    }

    #[inline]
    pub fn position(&self) -> Vector {
        position_of(self.state)
    }

    #[inline]
    pub fn momentum(&self) -> Vector {
        momentum_of(self.state)
    }

    #[inline]
    pub fn velocity(&self) -> Vector {
        velocity_from_momentum(self.momentum())
    }

    #[inline]
    pub fn lorentz_factor(&self) -> Scalar {
        lorentz_factor(self.momentum())
    }

    pub fn damping(&self) -> Scalar {
        self.damping
    }

    pub fn stiffness(&self) -> Scalar {
        self.stiffness
    }

    /// Phase-space derivative `(x', p')` under `law`
    pub fn derivative(&self, state: PhaseState, law: ForceLaw) -> PhaseState {
        let x = position_of(state);
        let p = momentum_of(state);
        let mut force = -self.damping * p;

        if let ForceLaw::Tracking(target) = law {
            force -= self.stiffness * (x - target);
        }

        phase_state(velocity_from_momentum(p), force)
    }

    /// Integrate the equations of motion over `dt` in `steps` sub-steps,
    /// pulled toward `follow` when it is given
    pub fn advance(&mut self, dt: Scalar, follow: Option<Vector>, steps: usize) {
        let law = ForceLaw::from_target(follow);
        self.state = self
            .integrator
            .advance(self.state, dt, steps, |state| self.derivative(state, law));
    }
}
