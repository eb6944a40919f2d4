// src/error.rs
// Typed error kinds for the coach core and the API client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    /// Both the pot and the call amount are zero - no meaningful odds exist.
    #[error("pot is zero: no odds exist when pot and call amount are both zero")]
    ZeroPot,

    /// Call amount is zero while the pot is not - the odds ratio is undefined
    /// because no call is owed. Recovered into a sentinel by the calculator.
    #[error("no call required: call amount is zero, odds ratio is undefined")]
    NoCallRequired,

    /// Model listing failed or came back empty. Never surfaced to the end
    /// user - the selector degrades to the hardcoded fallback model.
    #[error("model catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("API returned error status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model returned no usable reply")]
    EmptyReply,

    #[error("model requested unknown tool: {0}")]
    UnknownTool(String),

    #[error("tool-call loop did not settle within {0} rounds")]
    ToolLoopExceeded(usize),

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, CoachError>;
