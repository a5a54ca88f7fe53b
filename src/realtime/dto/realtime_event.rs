use crate::dto::output::Notification;

///
/// Event pushed by the server over the realtime connection.
///
#[derive(Debug, Clone)]
pub enum RealtimeEvent {
    NotificationReceived(Notification),
    UnreadCountChanged(u64),
}
