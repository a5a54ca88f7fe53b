#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unauthorized")]
    Unauthorized,

    #[error("unexpected status: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}
