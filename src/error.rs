#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to load settings: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to perform request: {0}")]
    Transport(#[from] minreq::Error),

    #[error("Request to {url} failed with status {code}")]
    Status {
        code: i32,
        url: String
    },

    #[error("Failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown class type: {0}")]
    UnknownClassType(u8)
}
