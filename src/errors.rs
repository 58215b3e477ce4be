pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Client(#[from] reqwest::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("no JSON object in JSONP response")]
    Jsonp,
    #[error("missing 'channel-programme' list")]
    InvalidGuide,
    #[error("{0}")]
    Timestamp(#[from] chrono::ParseError),
}
