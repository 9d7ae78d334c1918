//! Physics resources for simulation

use crate::physics::math::Scalar;
use bevy::prelude::*;

/// Resource for physics timestep control
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimulationClock {
    /// Length of one fixed tick
    pub dt: Scalar,
    /// Simulation time since the last restart
    pub elapsed: Scalar,
    /// Fixed ticks since the last restart
    pub ticks: u64,
    /// Whether physics is paused
    pub paused: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl SimulationClock {
    pub fn new(dt: Scalar) -> Self {
        Self {
            dt,
            elapsed: 0.0,
            ticks: 0,
            paused: false,
        }
    }

    pub fn tick(&mut self) {
        self.ticks += 1;
        self.elapsed = self.ticks as Scalar * self.dt;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.ticks = 0;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_does_not_accumulate_rounding() {
        let mut clock = SimulationClock::new(0.1);
        for _ in 0..1000 {
            clock.tick();
        }
        assert_eq!(clock.ticks, 1000);
        assert_eq!(clock.elapsed, 100.0);

        clock.reset();
        assert_eq!(clock.elapsed, 0.0);
        assert_eq!(clock.ticks, 0);
    }

    #[test]
    fn test_pause() {
        let mut clock = SimulationClock::default();
        assert!(!clock.is_paused());
        clock.pause();
        assert!(clock.is_paused());
        clock.unpause();
        assert!(!clock.is_paused());
    }
}
