use strum::Display;

///
/// Lifecycle of the realtime connection for one client session.
///
/// Disconnected -> Connecting -> Connected -> Disconnected.
/// There is no automatic reconnect: a failed or closed connection
/// stays Disconnected until [connect] is called again.
///
/// [connect]: super::super::NotificationChannel::connect
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}
