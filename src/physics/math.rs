/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for positions, momenta, and velocities
pub type Vector = bevy::math::DVec2;

/// Phase-space state: position in `xy`, momentum in `zw`
pub type PhaseState = bevy::math::DVec4;

/// Join a position and a momentum into a phase-space state
#[inline]
pub fn phase_state(position: Vector, momentum: Vector) -> PhaseState {
    PhaseState::new(position.x, position.y, momentum.x, momentum.y)
}

/// Position half of a phase-space state
#[inline]
pub fn position_of(state: PhaseState) -> Vector {
    Vector::new(state.x, state.y)
}

/// Momentum half of a phase-space state
#[inline]
pub fn momentum_of(state: PhaseState) -> Vector {
    Vector::new(state.z, state.w)
}
