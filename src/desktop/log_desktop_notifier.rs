use super::DesktopNotifier;
use crate::dto::output::Notification;
use async_trait::async_trait;

///
/// Alert surface of the demo binary: renders alerts into the log.
/// Embedding UIs provide their own [DesktopNotifier] on top of
/// whatever native notification API they have access to.
///
pub struct LogDesktopNotifier;

#[async_trait]
impl DesktopNotifier for LogDesktopNotifier {
    async fn notify(&self, notification: &Notification) {
        tracing::info!(
            title = notification.title,
            priority = %notification.priority,
            category = %notification.category,
            "desktop alert: {}",
            notification.message,
        );
    }
}
