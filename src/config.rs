use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a JSON config file, used when no path is given on the command line.
pub const CONFIG_ENV: &str = "PFIELD_CONFIG";

/// Simulation configuration, read by particle construction and the proximity renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Number of live particles after a (re)initialisation, and the FIFO bound for injection
    pub particle_count: usize,
    /// Radius, and mass, of every live particle
    pub particle_size: f32,
    /// Initial velocity components are sampled from `[-max_speed / 2, max_speed / 2)`
    pub max_speed: f32,
    /// Pairs closer than this are joined by a line
    pub connection_distance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: 50,
            particle_size: 3.0,
            max_speed: 2.0,
            connection_distance: 150.0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(self.particle_size.is_finite() && self.particle_size > 0.0) {
            return Err(invalid(format!("particleSize must be > 0, got {}", self.particle_size)));
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(invalid(format!("maxSpeed must be > 0, got {}", self.max_speed)));
        }
        if !(self.connection_distance.is_finite() && self.connection_distance >= 0.0) {
            return Err(invalid(format!(
                "connectionDistance must be >= 0, got {}",
                self.connection_distance
            )));
        }
        Ok(())
    }
}

/// Host settings wrapped around the simulation [`Config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub frame_rate: u32,
    /// Fixed seed for reproducible runs; entropy-seeded when absent
    pub seed: Option<u64>,
    pub simulation: Config,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: String::from("Particle Field"),
            window_width: 1280,
            window_height: 800,
            frame_rate: 60,
            seed: None,
            simulation: Config::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<AppConfig> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<AppConfig> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        AppConfig::from_json(&json)
    }

    /// Defaults, overlaid by the file named in `arg` or, failing that, in [`CONFIG_ENV`].
    pub fn load(arg: Option<String>) -> Result<AppConfig> {
        match arg.or_else(|| std::env::var(CONFIG_ENV).ok()) {
            Some(path) => AppConfig::from_file(Path::new(&path)),
            None => Ok(AppConfig::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(invalid(format!(
                "window must be non-empty, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.frame_rate == 0 {
            return Err(invalid(String::from("frameRate must be > 0")));
        }
        self.simulation.validate()
    }
}

fn invalid(msg: String) -> Error {
    Error::InvalidConfig(msg)
}
