use crate::physics::integrators::gauss_legendre::DEFAULT_MAX_ITERATIONS;
use crate::physics::math::{Scalar, Vector};
use crate::physics::particle::{DEFAULT_DAMPING, DEFAULT_STIFFNESS};
use crate::physics::relativity::Rapidity;
use crate::physics::trajectory::{Trajectory, TrajectoryError};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix for environment variable overrides, e.g. `RADIATION2D_PHYSICS__DAMPING`
pub const ENV_PREFIX: &str = "RADIATION2D";

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Layer(config::ConfigError),
    NoConfigDirectory,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "Invalid TOML: {e}"),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize configuration: {e}"),
            ConfigError::Layer(e) => write!(f, "Failed to assemble configuration: {e}"),
            ConfigError::NoConfigDirectory => write!(f, "No user configuration directory"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(e: config::ConfigError) -> Self {
        ConfigError::Layer(e)
    }
}

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub trajectory: TrajectoryConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Damping rate α
    pub damping: Scalar,
    /// Tracking spring constant κ
    pub stiffness: Scalar,
    /// Integrator sub-steps per fixed tick
    pub substeps: usize,
    /// Fixed tick length in simulation time units
    pub timestep: Scalar,
    /// Cap on fixed-point sweeps in the implicit stage solve
    pub max_iterations: usize,
    /// Where the charge starts, at rest
    pub initial_position: [Scalar; 2],
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            stiffness: DEFAULT_STIFFNESS,
            substeps: 10,
            timestep: 1.0 / 60.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_position: [0.0, 0.0],
        }
    }
}

impl PhysicsConfig {
    pub fn initial_position(&self) -> Vector {
        Vector::from_array(self.initial_position)
    }

    /// Replace out-of-range values with their defaults, warning about each one
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.damping.is_finite() && self.damping >= 0.0) {
            warn!("Invalid damping {}. Falling back to {}", self.damping, defaults.damping);
            self.damping = defaults.damping;
        }
        if !(self.stiffness.is_finite() && self.stiffness >= 0.0) {
            warn!(
                "Invalid stiffness {}. Falling back to {}",
                self.stiffness, defaults.stiffness
            );
            self.stiffness = defaults.stiffness;
        }
        if self.substeps == 0 {
            warn!("Sub-steps must be at least 1. Falling back to {}", defaults.substeps);
            self.substeps = defaults.substeps;
        }
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            warn!(
                "Invalid timestep {}. Falling back to {}",
                self.timestep, defaults.timestep
            );
            self.timestep = defaults.timestep;
        }
        if self.max_iterations == 0 {
            warn!(
                "Stage solve needs at least one iteration. Falling back to {}",
                defaults.max_iterations
            );
            self.max_iterations = defaults.max_iterations;
        }
        if !self.initial_position().is_finite() {
            warn!(
                "Invalid initial position {:?}. Falling back to {:?}",
                self.initial_position, defaults.initial_position
            );
            self.initial_position = defaults.initial_position;
        }

        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// One of `Trajectory::names()`
    pub shape: String,
    /// Straight-segment width for line and racetrack, the variant's own default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Scalar>,
    /// Rapidity ψ of the charge moving along the trajectory
    pub rapidity: Scalar,
    /// Whether the particle is pulled toward the moving charge
    pub tracking: bool,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            shape: Trajectory::default().name().to_string(),
            width: None,
            rapidity: Rapidity::default().value(),
            tracking: true,
        }
    }
}

impl TrajectoryConfig {
    pub fn resolve(&self) -> Result<Trajectory, TrajectoryError> {
        Trajectory::from_name(&self.shape, self.width)
    }

    pub fn rapidity(&self) -> Rapidity {
        Rapidity::new(self.rapidity)
    }
}

impl SimulationConfig {
    /// Copy with out-of-range values replaced by defaults
    ///
    /// An unresolvable trajectory or a non-finite rapidity fall back to the
    /// defaults too, so the stored configuration always describes what runs.
    pub fn sanitized(self) -> Self {
        let mut trajectory = self.trajectory;
        if let Err(e) = trajectory.resolve() {
            warn!("{e}. Falling back to {}", Trajectory::default());
            let defaults = TrajectoryConfig::default();
            trajectory.shape = defaults.shape;
            trajectory.width = defaults.width;
        }
        if !trajectory.rapidity.is_finite() {
            let fallback = Rapidity::default().value();
            warn!("Invalid rapidity {}. Falling back to {}", trajectory.rapidity, fallback);
            trajectory.rapidity = fallback;
        }

        Self {
            physics: self.physics.sanitized(),
            trajectory,
        }
    }

    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Platform-specific location of the user configuration file
    pub fn user_config_path() -> Result<PathBuf, ConfigError> {
        directories::ProjectDirs::from("", "", "radiation2d")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDirectory)
    }

    /// Defaults, overlaid by `path` if it exists, overlaid by environment variables
    pub fn load_layered(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }

        let layered = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(layered.try_deserialize()?)
    }

    /// Load the user configuration with environment overrides, or defaults on failure
    pub fn load_from_user_config() -> Self {
        let path = match Self::user_config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("{e}. Skipping user configuration file.");
                None
            }
        };

        match Self::load_layered(path.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration: {e}. Using defaults.");
                Self::default()
            }
        }
    }
}
