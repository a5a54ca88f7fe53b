use super::DesktopNotifier;
use crate::dto::output::Notification;
use async_trait::async_trait;

///
/// Used when desktop alerts are disabled or permission
/// was not granted.
///
pub struct NoopDesktopNotifier;

#[async_trait]
impl DesktopNotifier for NoopDesktopNotifier {
    async fn notify(&self, _notification: &Notification) {}
}
