use super::ApplicationEnv;
use crate::{
    api::{NotificationsApi, NotificationsApiConfig, NotificationsApiImpl},
    auth::UserIdentity,
    desktop::{DesktopNotifier, LogDesktopNotifier, NoopDesktopNotifier},
    realtime::{RealtimeTransport, WebSocketTransport, WebSocketTransportConfig},
    service::notification_channel::{
        NotificationChannel, NotificationChannelConfig, NotificationChannelImpl,
    },
};
use std::sync::Arc;

pub struct ApplicationState {
    pub notification_channel: Arc<dyn NotificationChannel>,
}

pub fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating api client");
    let client = reqwest::Client::builder().build()?;
    let config = NotificationsApiConfig {
        base_url: env.api_url.clone(),
        bearer_token: env.api_token.clone(),
    };
    let api: Arc<dyn NotificationsApi> = Arc::new(NotificationsApiImpl::new(config, client));

    let config = WebSocketTransportConfig {
        url: env.websocket_url.clone(),
    };
    let transport: Arc<dyn RealtimeTransport> = Arc::new(WebSocketTransport::new(config));

    let desktop_notifier: Arc<dyn DesktopNotifier> = match env.desktop_alerts {
        true => Arc::new(LogDesktopNotifier),
        false => Arc::new(NoopDesktopNotifier),
    };

    let identity = UserIdentity {
        id: env.user_id,
        username: env.username.clone(),
        role: env.user_role,
    };

    tracing::info!("creating notification channel");
    let config = NotificationChannelConfig {
        event_buffer_size: env.event_buffer_size,
    };
    let notification_channel = NotificationChannelImpl::new(
        config,
        Some(identity),
        api,
        transport,
        desktop_notifier,
    );
    let notification_channel = Arc::new(notification_channel);

    Ok(ApplicationState {
        notification_channel,
    })
}
