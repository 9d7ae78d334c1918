//! Numerical integration methods for phase-space trajectories
//!
//! Integrators here know nothing about what the components of a state mean.
//! They advance any fixed-size numeric vector under a caller-supplied
//! right-hand side `state' = f(state)`.

use crate::physics::math::Scalar;
use bevy::math::{DVec2, DVec3, DVec4};
use std::ops::{Add, Mul, Sub};

pub mod gauss_legendre;

pub use gauss_legendre::{GaussLegendre8, gauss_legendre_8};

/// Fixed-size numeric vector that an integrator can advance
///
/// The solver only needs linear combinations of states and a way to measure
/// how far two of them are apart to decide when its stage solve has settled.
pub trait PhaseVector:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Scalar, Output = Self>
{
    /// Additive identity
    const ZERO: Self;

    /// Largest absolute component (infinity norm)
    fn max_norm(self) -> Scalar;
}

impl PhaseVector for Scalar {
    const ZERO: Self = 0.0;

    #[inline]
    fn max_norm(self) -> Scalar {
        self.abs()
    }
}

macro_rules! impl_phase_vector {
    ($($vector:ty),*) => {
        $(
            impl PhaseVector for $vector {
                const ZERO: Self = <$vector>::ZERO;

                #[inline]
                fn max_norm(self) -> Scalar {
                    self.abs().max_element()
                }
            }
        )*
    };
}

impl_phase_vector!(DVec2, DVec3, DVec4);
