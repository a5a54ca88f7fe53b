use super::ConnectionState;
use crate::dto::output::Notification;

///
/// Event broadcast to channel subscribers whenever the local
/// view changes, so consuming UIs can re-render.
///
#[derive(Debug, Clone)]
pub enum ChannelEvent {
    NotificationReceived(Notification),
    UnreadCountChanged(u64),
    ConnectionChanged(ConnectionState),
}
