use stratbot_agent::ToolError;
use stratbot_core::{ConfigError, WorldBankError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    WorldBank(#[from] WorldBankError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Command(_) => 2,
            Self::WorldBank(error) | Self::Tool(ToolError::WorldBank(error)) => {
                world_bank_exit_code(error)
            }
            Self::Tool(ToolError::NotFound(_)) => 3,
            Self::Tool(_) => 2,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

const fn world_bank_exit_code(error: &WorldBankError) -> u8 {
    match error {
        WorldBankError::InvalidParameter { .. } => 2,
        WorldBankError::NotFound { .. } => 3,
        WorldBankError::Validation(_) => 4,
        WorldBankError::Transport(_) => 6,
    }
}
