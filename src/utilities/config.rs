use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::info;

use super::error::ConfigError;

pub const MIN_FLOORS: u8 = 2;
pub const MAX_FLOORS: u8 = 100;
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sweep-elevator")]
#[command(about = "Single car elevator simulator with a directional sweep dispatcher")]
pub struct Args {
    /// Path to the JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of floors (2-100), skips the prompt
    #[arg(long)]
    pub floors: Option<u8>,

    /// Starting floor, skips the prompt
    #[arg(long)]
    pub start: Option<u8>,

    /// Milliseconds between two steps of the car
    #[arg(long = "tick-ms")]
    pub tick_ms: Option<u64>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigFile {
    pub tick_interval_ms: u64,
    pub num_floors: Option<u8>,
    pub starting_floor: Option<u8>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            num_floors: None,
            starting_floor: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorConfig {
    pub num_floors: Option<u8>,
    pub starting_floor: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_interval: Duration,
    pub elevator: ElevatorConfig,
}

fn read_config_file(path: &PathBuf) -> Result<ConfigFile, ConfigError> {
    let display = path.display().to_string();
    let config_contents = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No configuration file provided, using default settings...");
            return Ok(ConfigFile::default());
        }
        Err(source) => return Err(ConfigError::Io { path: display, source }),
    };
    serde_json::from_str(&config_contents).map_err(|source| ConfigError::Parse { path: display, source })
}

impl Config {
    /// Reads the config file named by `args` (or `config.json`) and lets
    /// command line values take precedence over it.
    pub fn get(args: &Args) -> Result<Self, ConfigError> {
        let path = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let config_file = read_config_file(&path)?;
        Ok(Self::merge(config_file, args))
    }

    fn merge(config_file: ConfigFile, args: &Args) -> Self {
        let tick_ms = args.tick_ms.unwrap_or(config_file.tick_interval_ms);
        Config {
            tick_interval: Duration::from_millis(tick_ms),
            elevator: ElevatorConfig {
                num_floors: args.floors.or(config_file.num_floors),
                starting_floor: args.start.or(config_file.starting_floor),
            },
        }
    }
}
