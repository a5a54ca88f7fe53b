use crate::api;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing user identity")]
    MissingIdentity,

    #[error("api error: {0}")]
    Api(#[from] api::Error),
}
