use thiserror::Error;

/// Rejected operator input. Never reaches the dispatcher.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid number of floors.  Please enter a number from {min} to {max}")]
    InvalidFloorCount { min: u8, max: u8 },

    #[error("Invalid starting floor.  Please enter a number from 1 to {max}")]
    InvalidStartingFloor { max: u8 },

    #[error("Invalid Command")]
    InvalidCommandSyntax(String),

    #[error("Invalid floor number: out of range")]
    FloorOutOfRange { floor: String, max: u8 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
