use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextStatError {
    #[error("server answered with status {0}, expected 200 OK")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
