use thiserror::Error;

/// Everything the audio side can fail with. All variants are recovered
/// locally: callers log them and carry on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AudioError {
    /// The platform decoder rejected the bytes (unsupported or corrupt data).
    #[error("audio decode failed: {0}")]
    Decode(String),
    /// None of the bundled default audio names could be fetched.
    #[error("default audio asset not found (tried {0})")]
    AssetNotFound(String),
    /// Nothing is loaded, or nothing is playing.
    #[error("no audio loaded or playing")]
    NoActiveSession,
    /// Node creation or connection failed inside the audio graph.
    #[error("audio graph error: {0}")]
    Graph(String),
}
