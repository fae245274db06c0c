//! Error types for the dice pool engine.

/// Errors that can occur while rolling or configuring a dice pool.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A single die kept exploding past the iteration cap.
    ///
    /// Only reachable with a configuration that skipped the again clamp.
    #[error("explosion chain exceeded {draws} draws for one die")]
    RunawayChain {
        /// How many draws had been made when the chain was cut off.
        draws: u32,
    },

    /// A roller configuration is invalid.
    #[error("invalid roller config: {0}")]
    InvalidConfig(String),

    /// A roller configuration could not be parsed.
    #[error("malformed roller config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
