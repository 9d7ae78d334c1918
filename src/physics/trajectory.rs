//! Prescribed charge trajectories
//!
//! Every closed trajectory is parameterized by arclength and sampled as a
//! phase-space vector `(position, velocity)`. Parameters outside
//! `[0, length)` wrap around, so the trajectories are periodic.

use crate::physics::math::{PhaseState, Scalar, Vector, momentum_of, position_of};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Default width used for the straight-segment trajectories
pub const DEFAULT_WIDTH: Scalar = 2.0;

/// Errors from resolving a trajectory by name
#[derive(Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    UnknownName(String),
    InvalidWidth(Scalar),
}

impl fmt::Display for TrajectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrajectoryError::UnknownName(name) => write!(
                f,
                "Unknown trajectory: '{name}'. Available trajectories: {}",
                Trajectory::names().join(", ")
            ),
            TrajectoryError::InvalidWidth(width) => {
                write!(f, "Trajectory width must be positive and finite, got {width}")
            }
        }
    }
}

impl std::error::Error for TrajectoryError {}

/// Pre-defined charge trajectories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    /// No prescribed path, the charge follows a dragged point
    Drag,
    /// Straight segment of the given width along x
    Line(Scalar),
    /// Sinusoidal oscillation along y between -1 and 1
    Dipole,
    /// Unit circle
    Circle,
    /// Two straight segments of the given width joined by unit semicircles
    Racetrack(Scalar),
}

impl Default for Trajectory {
    fn default() -> Self {
        Trajectory::Racetrack(DEFAULT_WIDTH)
    }
}

impl Trajectory {
    /// Variants offered for selection, with their default parameters
    pub fn selectable() -> [Trajectory; 5] {
        [
            Trajectory::Drag,
            Trajectory::Line(2.0 * DEFAULT_WIDTH),
            Trajectory::Dipole,
            Trajectory::Circle,
            Trajectory::Racetrack(DEFAULT_WIDTH),
        ]
    }

    /// Machine-readable names of the selectable variants
    pub fn names() -> Vec<&'static str> {
        Self::selectable().iter().map(Trajectory::name).collect()
    }

    /// Resolve a variant by name; `width` applies to line and racetrack
    pub fn from_name(name: &str, width: Option<Scalar>) -> Result<Self, TrajectoryError> {
        let normalized = name.trim().to_ascii_lowercase();
        let trajectory = Self::selectable()
            .into_iter()
            .find(|trajectory| trajectory.name() == normalized)
            .ok_or_else(|| TrajectoryError::UnknownName(name.to_string()))?;

        match (trajectory, width) {
            (Trajectory::Line(_), Some(width)) => Trajectory::Line(width).validate(),
            (Trajectory::Racetrack(_), Some(width)) => Trajectory::Racetrack(width).validate(),
            (trajectory, _) => Ok(trajectory),
        }
    }

    /// Reject line and racetrack widths that are not positive and finite
    pub fn validate(self) -> Result<Self, TrajectoryError> {
        match self {
            Trajectory::Line(width) | Trajectory::Racetrack(width)
                if !(width.is_finite() && width > 0.0) =>
            {
                Err(TrajectoryError::InvalidWidth(width))
            }
            trajectory => Ok(trajectory),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Trajectory::Drag => "drag",
            Trajectory::Line(_) => "line",
            Trajectory::Dipole => "dipole",
            Trajectory::Circle => "circle",
            Trajectory::Racetrack(_) => "racetrack",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Trajectory::Drag => "Drag",
            Trajectory::Line(_) => "Line",
            Trajectory::Dipole => "Dipole",
            Trajectory::Circle => "Circle",
            Trajectory::Racetrack(_) => "Racetrack",
        }
    }

    /// Total length of the trajectory (zero when there is no path)
    pub fn length(&self) -> Scalar {
        match *self {
            Trajectory::Drag => 0.0,
            Trajectory::Line(w) => w,
            Trajectory::Dipole => 4.0,
            Trajectory::Circle => 2.0 * PI,
            Trajectory::Racetrack(w) => 2.0 * (w + PI),
        }
    }

    pub fn is_closed(&self) -> bool {
        !matches!(self, Trajectory::Drag)
    }

    /// Position and velocity at arclength `l`, wrapped into `[0, length)`
    pub fn state(&self, at: Scalar) -> PhaseState {
        let length = self.length();
        if length <= 0.0 {
            return PhaseState::ZERO;
        }

        self.evaluate(at.rem_euclid(length))
    }

    pub fn position(&self, at: Scalar) -> Vector {
        position_of(self.state(at))
    }

    pub fn velocity(&self, at: Scalar) -> Vector {
        momentum_of(self.state(at))
    }

    /// `count + 1` evenly spaced positions from the start to the end of the path
    pub fn samples(&self, count: usize) -> Vec<Vector> {
        let length = self.length();
        if length <= 0.0 || count == 0 {
            return Vec::new();
        }

        (0..=count)
            .map(|i| position_of(self.evaluate(length * i as Scalar / count as Scalar)))
            .collect()
    }

    /// Closed forms over `[0, length]`, no wrapping
    fn evaluate(&self, l: Scalar) -> PhaseState {
        match *self {
            Trajectory::Drag => PhaseState::ZERO,
            Trajectory::Line(w) => PhaseState::new(l - w / 2.0, 0.0, 1.0, 0.0),
            Trajectory::Dipole => {
                let phi = (PI / 2.0) * l;
                PhaseState::new(0.0, libm::sin(phi), 0.0, libm::cos(phi))
            }
            Trajectory::Circle => {
                let (s, c) = (libm::sin(l), libm::cos(l));
                PhaseState::new(s, c, c, -s)
            }
            Trajectory::Racetrack(w) => {
                if l < w {
                    PhaseState::new(l - w / 2.0, 1.0, 1.0, 0.0)
                } else if l < w + PI {
                    let (s, c) = (libm::sin(l - w), libm::cos(l - w));
                    PhaseState::new(s + w / 2.0, c, c, -s)
                } else if l < 2.0 * w + PI {
                    PhaseState::new(PI + 1.5 * w - l, -1.0, -1.0, 0.0)
                } else {
                    let (s, c) = (libm::sin(l - 2.0 * w), libm::cos(l - 2.0 * w));
                    PhaseState::new(s - w / 2.0, c, c, -s)
                }
            }
        }
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trajectory::Line(w) | Trajectory::Racetrack(w) => write!(f, "{} ({w})", self.label()),
            _ => f.write_str(self.label()),
        }
    }
}

impl FromStr for Trajectory {
    type Err = TrajectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s, None)
    }
}
