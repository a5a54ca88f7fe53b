use super::{ChannelEvent, ConnectionState, NotificationChannel, NotificationChannelConfig};
use crate::{
    api::NotificationsApi,
    auth::UserIdentity,
    desktop::DesktopNotifier,
    dto::{input, output},
    error::Error,
    realtime::{EventStream, RealtimeEvent, RealtimeTransport},
};
use async_trait::async_trait;
use futures_util::StreamExt;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::{
    sync::{broadcast, Mutex, RwLock},
    task::JoinHandle,
};
use uuid::Uuid;

struct ChannelState {
    notifications: Vec<output::Notification>,
    unread_count: u64,
    connection: ConnectionState,
}

pub struct NotificationChannelImpl {
    identity: Option<UserIdentity>,

    api: Arc<dyn NotificationsApi>,
    transport: Arc<dyn RealtimeTransport>,
    desktop_notifier: Arc<dyn DesktopNotifier>,

    state: Arc<RwLock<ChannelState>>,
    events_tx: broadcast::Sender<ChannelEvent>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl NotificationChannelImpl {
    pub fn new(
        config: NotificationChannelConfig,
        identity: Option<UserIdentity>,
        api: Arc<dyn NotificationsApi>,
        transport: Arc<dyn RealtimeTransport>,
        desktop_notifier: Arc<dyn DesktopNotifier>,
    ) -> Self {
        let state = ChannelState {
            notifications: Vec::new(),
            unread_count: 0,
            connection: ConnectionState::Disconnected,
        };
        let (events_tx, _) = broadcast::channel(config.event_buffer_size);

        Self {
            identity,
            api,
            transport,
            desktop_notifier,
            state: Arc::new(RwLock::new(state)),
            events_tx,
            listener: Mutex::new(None),
        }
    }

    async fn set_connection_state(&self, connection: ConnectionState) {
        let changed = {
            let mut lock = self.state.write().await;
            let changed = lock.connection != connection;
            lock.connection = connection;
            changed
        };

        if changed {
            let _ = self.events_tx.send(ChannelEvent::ConnectionChanged(connection));
        }
    }

    async fn listen(
        mut stream: EventStream,
        state: Arc<RwLock<ChannelState>>,
        events_tx: broadcast::Sender<ChannelEvent>,
        desktop_notifier: Arc<dyn DesktopNotifier>,
    ) {
        while let Some(event) = stream.next().await {
            match event {
                RealtimeEvent::NotificationReceived(notification) => {
                    let notification = notification.normalized();
                    tracing::info!(id = notification.id, "notification pushed");

                    let unread_count = {
                        let mut lock = state.write().await;
                        lock.notifications.insert(0, notification.clone());
                        lock.unread_count += 1;
                        lock.unread_count
                    };

                    // Best-effort side effect, must never fail the push path
                    desktop_notifier.notify(&notification).await;

                    let _ = events_tx.send(ChannelEvent::NotificationReceived(notification));
                    let _ = events_tx.send(ChannelEvent::UnreadCountChanged(unread_count));
                }
                RealtimeEvent::UnreadCountChanged(unread_count) => {
                    tracing::info!(unread_count, "unread count pushed");

                    let mut lock = state.write().await;
                    lock.unread_count = unread_count;
                    drop(lock);

                    let _ = events_tx.send(ChannelEvent::UnreadCountChanged(unread_count));
                }
            }
        }

        tracing::info!("realtime stream ended");
        let mut lock = state.write().await;
        if lock.connection != ConnectionState::Disconnected {
            lock.connection = ConnectionState::Disconnected;
            drop(lock);
            let _ = events_tx.send(ChannelEvent::ConnectionChanged(
                ConnectionState::Disconnected,
            ));
        }
    }
}

#[async_trait]
impl NotificationChannel for NotificationChannelImpl {
    async fn connect(&self) -> ConnectionState {
        let Some(identity) = &self.identity else {
            tracing::debug!("no identity, realtime connection skipped");
            return ConnectionState::Disconnected;
        };

        self.set_connection_state(ConnectionState::Connecting).await;

        let stream = match self.transport.connect(identity).await {
            Ok(stream) => stream,
            Err(err) => {
                tracing::warn!(%err, "realtime connection failed");
                self.set_connection_state(ConnectionState::Disconnected)
                    .await;
                return ConnectionState::Disconnected;
            }
        };

        self.set_connection_state(ConnectionState::Connected).await;

        let state = Arc::clone(&self.state);
        let events_tx = self.events_tx.clone();
        let desktop_notifier = Arc::clone(&self.desktop_notifier);
        let listener =
            tokio::spawn(
                async move { Self::listen(stream, state, events_tx, desktop_notifier).await },
            );

        let mut lock = self.listener.lock().await;
        if let Some(previous) = lock.replace(listener) {
            previous.abort();
        }

        ConnectionState::Connected
    }

    async fn disconnect(&self) {
        let listener = {
            let mut lock = self.listener.lock().await;
            lock.take()
        };
        if let Some(listener) = listener {
            listener.abort();
        }

        self.set_connection_state(ConnectionState::Disconnected)
            .await;
    }

    async fn connection_state(&self) -> ConnectionState {
        self.state.read().await.connection
    }

    async fn fetch_notifications(
        &self,
        pagination: input::Pagination,
    ) -> Vec<output::Notification> {
        if self.identity.is_none() {
            return Vec::new();
        }

        tracing::info!(
            page = pagination.page,
            limit = pagination.limit,
            "fetching notifications"
        );

        let page = match self.api.fetch_notifications(pagination).await {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(%err, "failed to fetch notifications");
                let mut lock = self.state.write().await;
                lock.notifications.clear();
                return Vec::new();
            }
        };

        let notifications = page
            .notifications
            .into_iter()
            .map(output::Notification::normalized)
            .collect::<Vec<_>>();
        let unread_count = page.unread_count;

        let snapshot = {
            let mut lock = self.state.write().await;
            if pagination.page <= 1 {
                lock.notifications = notifications;
            } else {
                lock.notifications.extend(notifications);
            }
            lock.unread_count = unread_count;
            lock.notifications.clone()
        };
        tracing::info!(count = snapshot.len(), unread_count, "fetched notifications");

        let _ = self
            .events_tx
            .send(ChannelEvent::UnreadCountChanged(unread_count));

        snapshot
    }

    async fn fetch_unread_count(&self) -> u64 {
        if self.identity.is_none() {
            return 0;
        }

        let unread_count = match self.api.fetch_unread_count().await {
            Ok(unread_count) => unread_count,
            Err(err) => {
                tracing::warn!(%err, "failed to fetch unread count");
                0
            }
        };

        let mut lock = self.state.write().await;
        lock.unread_count = unread_count;
        drop(lock);

        let _ = self
            .events_tx
            .send(ChannelEvent::UnreadCountChanged(unread_count));

        unread_count
    }

    async fn mark_as_read(&self, id: &str) {
        if self.identity.is_none() {
            return;
        }

        let read_at = OffsetDateTime::now_utc();
        let unread_count = {
            let mut lock = self.state.write().await;
            let marked = lock
                .notifications
                .iter_mut()
                .find(|notification| notification.id == id)
                .map(|notification| notification.mark_read(read_at))
                .unwrap_or(false);

            match marked {
                true => {
                    lock.unread_count = lock.unread_count.saturating_sub(1);
                    Some(lock.unread_count)
                }
                false => None,
            }
        };

        if let Some(unread_count) = unread_count {
            let _ = self
                .events_tx
                .send(ChannelEvent::UnreadCountChanged(unread_count));
        }

        // Optimistic: a failed PATCH is not rolled back,
        // the next fetch reconciles
        let api = Arc::clone(&self.api);
        let id = id.to_string();
        tokio::spawn(async move {
            if let Err(err) = api.mark_as_read(&id).await {
                tracing::warn!(%err, id, "failed to mark notification as read");
            }
        });
    }

    async fn mark_all_as_read(&self) {
        if self.identity.is_none() {
            return;
        }

        let read_at = OffsetDateTime::now_utc();
        {
            let mut lock = self.state.write().await;
            for notification in lock.notifications.iter_mut() {
                notification.mark_read(read_at);
            }
            lock.unread_count = 0;
        }

        let _ = self.events_tx.send(ChannelEvent::UnreadCountChanged(0));

        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            if let Err(err) = api.mark_all_as_read().await {
                tracing::warn!(%err, "failed to mark all notifications as read");
            }
        });
    }

    async fn delete_notification(&self, id: &str) {
        if self.identity.is_none() {
            return;
        }

        let unread_count = {
            let mut lock = self.state.write().await;
            let position = lock
                .notifications
                .iter()
                .position(|notification| notification.id == id);

            match position {
                Some(position) => {
                    let removed = lock.notifications.remove(position);
                    match removed.is_read {
                        true => None,
                        false => {
                            lock.unread_count = lock.unread_count.saturating_sub(1);
                            Some(lock.unread_count)
                        }
                    }
                }
                None => None,
            }
        };

        if let Some(unread_count) = unread_count {
            let _ = self
                .events_tx
                .send(ChannelEvent::UnreadCountChanged(unread_count));
        }

        let api = Arc::clone(&self.api);
        let id = id.to_string();
        tokio::spawn(async move {
            if let Err(err) = api.delete_notification(&id).await {
                tracing::warn!(%err, id, "failed to delete notification");
            }
        });
    }

    async fn create_notification(
        &self,
        recipient_id: Uuid,
        draft: input::NotificationDraft,
    ) -> Result<output::Notification, Error> {
        if self.identity.is_none() {
            return Err(Error::MissingIdentity);
        }

        tracing::info!(%recipient_id, "creating notification");
        let notification = self.api.create_notification(recipient_id, draft).await?;
        tracing::info!(id = notification.id, "created notification");

        Ok(notification)
    }

    async fn broadcast_notification(
        &self,
        recipient_ids: Vec<Uuid>,
        draft: input::NotificationDraft,
    ) -> Result<output::BroadcastReceipt, Error> {
        if self.identity.is_none() {
            return Err(Error::MissingIdentity);
        }

        tracing::info!(count = recipient_ids.len(), "broadcasting notification");
        let receipt = self.api.broadcast_notification(recipient_ids, draft).await?;
        tracing::info!(created_count = receipt.created_count, "broadcast notification");

        Ok(receipt)
    }

    fn subscribe(&self) -> broadcast::Receiver<ChannelEvent> {
        self.events_tx.subscribe()
    }

    async fn notifications(&self) -> Vec<output::Notification> {
        self.state.read().await.notifications.clone()
    }

    async fn unread_count(&self) -> u64 {
        self.state.read().await.unread_count
    }
}
