use thiserror::Error;

/// Errors raised at the JSON boundary. The transform itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid mdast tree: {0}")]
    Source(#[source] serde_json::Error),

    #[error("invalid type configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("failed to serialize slate nodes: {0}")]
    Output(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
