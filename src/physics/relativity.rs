//! Relativistic kinematics in units where rest mass and speed of light are 1

use crate::physics::math::{Scalar, Vector};
use serde::{Deserialize, Serialize};

/// Largest speed the charge may be given, as a fraction of light speed
pub const MAX_BETA: Scalar = 0.99;

/// Lorentz factor `γ = sqrt(1 + p·p)` of a particle with momentum `p`
#[inline]
pub fn lorentz_factor(momentum: Vector) -> Scalar {
    libm::sqrt(1.0 + momentum.length_squared())
}

/// Velocity `v = p / sqrt(1 + p·p)` of a particle with momentum `p`
#[inline]
pub fn velocity_from_momentum(momentum: Vector) -> Vector {
    momentum / lorentz_factor(momentum)
}

/// Hyperbolic velocity parameter `ψ`, with `β = tanh ψ` and `γ = cosh ψ`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rapidity(pub Scalar);

impl Rapidity {
    pub fn new(psi: Scalar) -> Self {
        Self(psi.max(0.0))
    }

    /// Rapidity of a charge moving at `beta`, clamped to `[0, MAX_BETA]`
    pub fn from_beta(beta: Scalar) -> Self {
        Self(libm::atanh(beta.clamp(0.0, MAX_BETA)))
    }

    /// Rapidity of a charge with Lorentz factor `gamma`, clamped to `γ ≥ 1`
    pub fn from_gamma(gamma: Scalar) -> Self {
        Self(libm::acosh(gamma.max(1.0)))
    }

    #[inline]
    pub fn value(&self) -> Scalar {
        self.0
    }

    /// Speed as a fraction of light speed
    #[inline]
    pub fn beta(&self) -> Scalar {
        libm::tanh(self.0)
    }

    #[inline]
    pub fn gamma(&self) -> Scalar {
        libm::cosh(self.0)
    }
}

impl Default for Rapidity {
    fn default() -> Self {
        Self::from_gamma(1.5)
    }
}
