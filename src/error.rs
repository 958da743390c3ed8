//! Recoverable configuration errors.
//!
//! Contract violations by agents (playing a card they do not hold) are not
//! represented here: those panic at the point of breach. `ConfigError`
//! covers everything a caller can fix by passing different configuration.

use thiserror::Error;

/// Errors raised while assembling a tournament or creating agents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown game variant string.
    #[error("game variant \"{0}\" not supported; pick from: gops, bgops, bgops_minus")]
    UnknownVariant(String),

    /// Unknown tournament format string.
    #[error("tournament format \"{0}\" not supported; pick from: round_robin, random_pairing")]
    UnknownFormat(String),

    /// The named agent is not in the registry.
    #[error("no agent registered under name \"{0}\"")]
    UnknownAgent(String),

    /// The agent does not play the requested variant.
    #[error("agent \"{agent}\" does not support game variant \"{variant}\"")]
    UnsupportedVariant { agent: String, variant: String },

    /// A tournament needs at least two agents.
    #[error("tournament needs at least two agents, got {0}")]
    NotEnoughAgents(usize),

    /// Records are keyed by agent name, so names must be unique.
    #[error("duplicate agent name \"{0}\" in player pool")]
    DuplicateAgentName(String),
}
