use thiserror::Error;

/// Failure to encode objects for the channel.
#[derive(Debug, Error)]
#[error("failed to serialize {kind} objects: {source}")]
pub struct SerializeError {
    pub kind: &'static str,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    #[error("channel is closed")]
    Closed,
    #[error("platform rejected `{method}`: {message}")]
    Rejected { method: String, message: String },
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    /// The platform referred to an object the controller no longer tracks.
    #[error("unknown {kind} id `{id}`")]
    UnknownObjectId { kind: &'static str, id: String },
}
