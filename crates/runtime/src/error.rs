//! Errors surfaced by the simulation API.

use thiserror::Error;
use undead_core::{AgentId, AgentKind, ConfigError, SpawnError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid AI configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to spawn {kind} {id}")]
    Spawn {
        id: AgentId,
        kind: AgentKind,
        #[source]
        source: SpawnError,
    },

    #[error("no agent with id {0}")]
    UnknownAgent(AgentId),
}
