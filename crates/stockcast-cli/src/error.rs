use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
///
/// Per-file failures never reach this type; they are part of the run report.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] stockcast_core::ConfigError),

    #[error(transparent)]
    Core(#[from] stockcast_core::CoreError),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Core(error) if error.kind() == stockcast_core::ErrorKind::InvalidConfig => 2,
            Self::Core(_) => 10,
            Self::Logging(_) => 3,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
