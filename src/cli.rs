//! Command line interface for Radiation2D

use clap::Parser;
use std::fmt;

use crate::config::SimulationConfig;
use crate::physics::relativity::Rapidity;
use crate::physics::trajectory::{Trajectory, TrajectoryError};

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Invalid trajectory name or width provided
    InvalidTrajectory(TrajectoryError),
    /// A numeric override is out of range
    InvalidValue { name: &'static str, value: f64 },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidTrajectory(e) => write!(f, "Invalid trajectory: {e}"),
            CliError::InvalidValue { name, value } => {
                write!(f, "Invalid value for --{name}: {value}")
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<TrajectoryError> for CliError {
    fn from(e: TrajectoryError) -> Self {
        CliError::InvalidTrajectory(e)
    }
}

/// Radiation2D - a relativistic charge chasing a moving source
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Trajectory of the source charge (e.g., racetrack, circle, dipole)
    #[arg(short = 't', long, value_name = "NAME")]
    pub trajectory: Option<String>,

    /// Straight-segment width for line and racetrack
    #[arg(short = 'w', long, value_name = "WIDTH")]
    pub width: Option<f64>,

    /// Damping rate (overrides config file)
    #[arg(short = 'a', long, value_name = "ALPHA")]
    pub damping: Option<f64>,

    /// Tracking spring constant (overrides config file)
    #[arg(short = 'k', long, value_name = "KAPPA")]
    pub stiffness: Option<f64>,

    /// Integrator sub-steps per fixed tick
    #[arg(short = 's', long, value_name = "COUNT")]
    pub steps: Option<usize>,

    /// Rapidity of the source charge
    #[arg(short = 'r', long, value_name = "PSI")]
    pub rapidity: Option<f64>,

    /// Let the particle move freely instead of following the charge
    #[arg(long)]
    pub no_tracking: bool,

    /// Exit after this many seconds of simulation time
    #[arg(short = 'd', long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available trajectories and exit
    #[arg(long)]
    pub list_trajectories: bool,
}

/// Handles the --list-trajectories flag by printing available trajectories
pub fn handle_list_trajectories() {
    println!("Available trajectories:");
    for trajectory in Trajectory::selectable() {
        println!(
            "  - {:<10} {} (length {:.4})",
            trajectory.name(),
            trajectory,
            trajectory.length()
        );
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, CliError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CliError::InvalidValue { name, value })
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        let path = std::path::Path::new(config_path);
        if !path.exists() {
            return Err(CliError::ConfigLoad(format!("{config_path} does not exist")));
        }
        SimulationConfig::load_layered(Some(path))
            .map_err(|e| CliError::ConfigLoad(format!("{config_path}: {e}")))?
    } else {
        SimulationConfig::load_from_user_config()
    };

    if let Some(damping) = args.damping {
        config.physics.damping = non_negative("damping", damping)?;
        println!("Overriding damping to: {damping}");
    }

    if let Some(stiffness) = args.stiffness {
        config.physics.stiffness = non_negative("stiffness", stiffness)?;
        println!("Overriding stiffness to: {stiffness}");
    }

    if let Some(steps) = args.steps {
        if steps == 0 {
            return Err(CliError::InvalidValue {
                name: "steps",
                value: 0.0,
            });
        }
        println!("Overriding sub-steps to: {steps}");
        config.physics.substeps = steps;
    }

    if let Some(psi) = args.rapidity {
        let rapidity = Rapidity::new(non_negative("rapidity", psi)?);
        println!(
            "Using rapidity {psi} (beta = {:.4}, gamma = {:.4})",
            rapidity.beta(),
            rapidity.gamma()
        );
        config.trajectory.rapidity = rapidity.value();
    }

    if let Some(width) = args.width {
        if !(width.is_finite() && width > 0.0) {
            return Err(TrajectoryError::InvalidWidth(width).into());
        }
        config.trajectory.width = Some(width);
    }

    if let Some(name) = &args.trajectory {
        config.trajectory.shape = name.trim().to_ascii_lowercase();
    }

    if args.trajectory.is_some() || args.width.is_some() {
        // Validate the combined name and width up front
        let trajectory = config.trajectory.resolve()?;
        println!("Using trajectory: {trajectory}");
    }

    if args.no_tracking {
        println!("Tracking disabled");
        config.trajectory.tracking = false;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["radiation2d", "--config", "/nonexistent.toml"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    /// A config file under the temp directory, removed on drop
    struct TempConfig(PathBuf);

    impl TempConfig {
        fn new(name: &str, content: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("radiation2d-cli-{name}-{}", std::process::id()));
            std::fs::create_dir_all(&dir).expect("creates temp dir");
            let path = dir.join("config.toml");
            std::fs::write(&path, content).expect("writes config");
            Self(path)
        }

        fn path(&self) -> String {
            self.0.display().to_string()
        }
    }

    impl Drop for TempConfig {
        fn drop(&mut self) {
            if let Some(dir) = self.0.parent() {
                let _ = std::fs::remove_dir_all(dir);
            }
        }
    }

    fn with_file(mut args: Args, file: &TempConfig) -> Args {
        args.config = Some(file.path());
        args
    }

    #[test]
    fn test_parse_arguments() {
        let args = Args::parse_from([
            "radiation2d",
            "--trajectory",
            "circle",
            "-k",
            "2.5",
            "--steps",
            "4",
            "--no-tracking",
            "--duration",
            "3",
        ]);
        assert_eq!(args.trajectory.as_deref(), Some("circle"));
        assert_eq!(args.stiffness, Some(2.5));
        assert_eq!(args.steps, Some(4));
        assert!(args.no_tracking);
        assert_eq!(args.duration, Some(3.0));
        assert!(!args.list_trajectories);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(matches!(
            load_and_apply_config(&args(&[])),
            Err(CliError::ConfigLoad(_))
        ));
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let file = TempConfig::new("malformed", "[physics]\ndamping = \"lots\"\n");
        assert!(matches!(
            load_and_apply_config(&with_file(args(&[]), &file)),
            Err(CliError::ConfigLoad(_))
        ));
    }

    #[test]
    fn test_config_file_values_are_used() {
        let file = TempConfig::new("values", "[physics]\nstiffness = 2.5\n");
        let config = load_and_apply_config(&with_file(args(&[]), &file)).expect("loads");
        assert_eq!(config.physics.stiffness, 2.5);
        assert_eq!(config.physics.damping, 1.0);
    }

    #[test]
    fn test_overrides_apply() {
        let file = TempConfig::new("overrides", "");
        let overrides = args(&[
            "--trajectory",
            "Line",
            "--width",
            "6",
            "--damping",
            "0.5",
            "--no-tracking",
        ]);
        let args = with_file(overrides, &file);
        let config = load_and_apply_config(&args).expect("valid overrides");
        assert_eq!(config.trajectory.resolve(), Ok(Trajectory::Line(6.0)));
        assert_eq!(config.physics.damping, 0.5);
        assert!(!config.trajectory.tracking);
    }

    #[test]
    fn test_invalid_overrides_are_rejected() {
        let file = TempConfig::new("invalid", "");

        let unknown = with_file(args(&["--trajectory", "spiral"]), &file);
        assert!(matches!(
            load_and_apply_config(&unknown),
            Err(CliError::InvalidTrajectory(TrajectoryError::UnknownName(_)))
        ));

        let negative = with_file(args(&["--stiffness=-1"]), &file);
        assert!(matches!(
            load_and_apply_config(&negative),
            Err(CliError::InvalidValue {
                name: "stiffness",
                ..
            })
        ));

        let no_steps = with_file(args(&["--steps", "0"]), &file);
        assert!(matches!(
            load_and_apply_config(&no_steps),
            Err(CliError::InvalidValue { name: "steps", .. })
        ));

        let flat = with_file(args(&["--trajectory", "circle", "--width", "0"]), &file);
        assert!(matches!(
            load_and_apply_config(&flat),
            Err(CliError::InvalidTrajectory(TrajectoryError::InvalidWidth(_)))
        ));
    }
}
