use crate::dto::output::Notification;
use async_trait::async_trait;

///
/// Native alert surface raised when a notification is pushed
/// while the channel is connected.
///
/// Best-effort by contract: implementations must not fail,
/// the push path never blocks on them.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DesktopNotifier: Send + Sync {
    async fn notify(&self, notification: &Notification);
}
