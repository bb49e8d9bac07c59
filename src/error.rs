use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures inside the prepare/call phases of an AI-backed operation.
///
/// None of these reach the caller of the orchestrator: they are turned into a
/// mock result with the reason recorded in [`crate::models::Source`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Short name of the phase that failed, used in fallback reasons.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Fetch(_) => "fetch",
            Error::Configuration(_) => "configuration",
            Error::Provider(_) => "completion",
            Error::Parse(_) => "parse",
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// No relay produced an HTTP response at all.
    #[error("network failure: none of {attempts} relays could be reached (last error: {last_error})")]
    Network { attempts: usize, last_error: String },

    /// At least one relay answered, but every answer was rejected.
    #[error("all {attempts} relays exhausted without usable content")]
    Exhausted { attempts: usize },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found")]
    NoJsonObject,

    #[error("malformed JSON: {0}")]
    Malformed(serde_json::Error),

    #[error("JSON object does not match the expected shape: {0}")]
    Schema(serde_json::Error),
}
