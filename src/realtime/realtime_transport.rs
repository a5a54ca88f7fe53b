use super::{Error, RealtimeEvent};
use crate::auth::UserIdentity;
use async_trait::async_trait;
use futures_util::Stream;
use std::pin::Pin;

pub type EventStream = Pin<Box<dyn Stream<Item = RealtimeEvent> + Send>>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RealtimeTransport: Send + Sync {
    ///
    /// Open the realtime connection and join with the user identity.
    ///
    /// ### Returns
    /// Stream of pushed events; the stream ends when the connection
    /// is closed by the server or fails. There is no automatic
    /// reconnect beyond what the transport itself provides.
    ///
    async fn connect(&self, identity: &UserIdentity) -> Result<EventStream, Error>;
}
