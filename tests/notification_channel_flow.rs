use async_trait::async_trait;
use campus_portal_client::{
    api::{self, NotificationsApi},
    auth::{Role, UserIdentity},
    desktop::NoopDesktopNotifier,
    dto::{input, output, NotificationCategory, NotificationKind, NotificationPriority},
    realtime::{self, EventStream, RealtimeEvent, RealtimeTransport},
    service::notification_channel::{
        ChannelEvent, ConnectionState, NotificationChannel, NotificationChannelConfig,
        NotificationChannelImpl,
    },
};
use futures_util::{stream, StreamExt};
use std::{collections::HashMap, sync::Arc, time::Duration};
use time::macros::datetime;
use tokio::sync::Mutex;
use uuid::Uuid;

struct StubNotificationsApi {
    pages: Vec<output::NotificationPage>,
    calls: Mutex<Vec<String>>,
}

impl StubNotificationsApi {
    fn new(pages: Vec<output::NotificationPage>) -> Self {
        Self {
            pages,
            calls: Mutex::new(Vec::new()),
        }
    }

    async fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: String) {
        self.calls.lock().await.push(call);
    }
}

#[async_trait]
impl NotificationsApi for StubNotificationsApi {
    async fn fetch_notifications(
        &self,
        pagination: input::Pagination,
    ) -> Result<output::NotificationPage, api::Error> {
        self.record(format!("fetch page {}", pagination.page)).await;
        self.pages
            .get((pagination.page - 1) as usize)
            .cloned()
            .ok_or(api::Error::UnexpectedStatus { status: 404 })
    }

    async fn fetch_unread_count(&self) -> Result<u64, api::Error> {
        self.record("fetch unread".to_string()).await;
        Ok(self.pages.first().map(|page| page.unread_count).unwrap_or(0))
    }

    async fn mark_as_read(&self, id: &str) -> Result<(), api::Error> {
        self.record(format!("mark read {id}")).await;
        Ok(())
    }

    async fn mark_all_as_read(&self) -> Result<(), api::Error> {
        self.record("mark all read".to_string()).await;
        Ok(())
    }

    async fn delete_notification(&self, id: &str) -> Result<(), api::Error> {
        self.record(format!("delete {id}")).await;
        Ok(())
    }

    async fn create_notification(
        &self,
        _recipient_id: Uuid,
        _draft: input::NotificationDraft,
    ) -> Result<output::Notification, api::Error> {
        self.record("create".to_string()).await;
        Ok(create_notification("created", false))
    }

    async fn broadcast_notification(
        &self,
        recipient_ids: Vec<Uuid>,
        _draft: input::NotificationDraft,
    ) -> Result<output::BroadcastReceipt, api::Error> {
        self.record(format!("broadcast to {}", recipient_ids.len()))
            .await;
        Ok(output::BroadcastReceipt {
            created_count: recipient_ids.len() as u64,
        })
    }
}

struct ScriptedTransport {
    events: Mutex<Option<Vec<RealtimeEvent>>>,
}

impl ScriptedTransport {
    fn new(events: Vec<RealtimeEvent>) -> Self {
        Self {
            events: Mutex::new(Some(events)),
        }
    }
}

#[async_trait]
impl RealtimeTransport for ScriptedTransport {
    async fn connect(&self, _identity: &UserIdentity) -> Result<EventStream, realtime::Error> {
        let events = self
            .events
            .lock()
            .await
            .take()
            .expect("transport connected twice");

        // Deliver the scripted events, then keep the connection open
        Ok(Box::pin(stream::iter(events).chain(stream::pending())))
    }
}

#[tokio::test]
async fn session_flow_fetch_push_mark_delete() {
    let pushed = create_notification("pushed", false);
    let api = Arc::new(StubNotificationsApi::new(vec![create_page(
        vec![
            create_notification("n1", false),
            create_notification("n2", true),
            create_notification("n3", true),
        ],
        1,
    )]));
    let transport = Arc::new(ScriptedTransport::new(vec![
        RealtimeEvent::NotificationReceived(pushed),
    ]));
    let channel = create_channel(api.clone(), transport);

    let mut events = channel.subscribe();

    let connection = channel.connect().await;
    assert_eq!(connection, ConnectionState::Connected);

    let notifications = channel
        .fetch_notifications(input::Pagination::first_page(20))
        .await;
    assert_eq!(notifications.len(), 3);
    assert_eq!(channel.unread_count().await, 1);

    // Wait for the scripted push to land
    await_event(&mut events, |event| {
        matches!(event, ChannelEvent::NotificationReceived(_))
    })
    .await;
    assert_eq!(channel.notifications().await.len(), 4);
    assert_eq!(channel.unread_count().await, 2);
    assert_eq!(channel.notifications().await[0].id, "pushed");

    channel.mark_as_read("pushed").await;
    assert_eq!(channel.unread_count().await, 1);

    channel.delete_notification("n2").await;
    assert_eq!(channel.notifications().await.len(), 3);
    assert_eq!(channel.unread_count().await, 1);

    channel.mark_all_as_read().await;
    assert_eq!(channel.unread_count().await, 0);
    assert!(channel.notifications().await.iter().all(|n| n.is_read));

    await_calls(&api, &["mark read pushed", "delete n2", "mark all read"]).await;

    channel.disconnect().await;
    assert_eq!(
        channel.connection_state().await,
        ConnectionState::Disconnected
    );
}

#[tokio::test]
async fn session_flow_broadcast_and_create() {
    let api = Arc::new(StubNotificationsApi::new(vec![]));
    let transport = Arc::new(ScriptedTransport::new(vec![]));
    let channel = create_channel(api.clone(), transport);

    let notification = channel
        .create_notification(Uuid::from_u128(7), create_draft())
        .await
        .unwrap();
    assert_eq!(notification.id, "created");

    let receipt = channel
        .broadcast_notification(
            vec![Uuid::from_u128(1), Uuid::from_u128(2)],
            create_draft(),
        )
        .await
        .unwrap();
    assert_eq!(receipt.created_count, 2);

    let calls = api.recorded_calls().await;
    assert_eq!(calls, vec!["create".to_string(), "broadcast to 2".to_string()]);
}

#[tokio::test]
async fn session_flow_unread_count_push_reconciles() {
    let api = Arc::new(StubNotificationsApi::new(vec![]));
    let transport = Arc::new(ScriptedTransport::new(vec![
        RealtimeEvent::UnreadCountChanged(5),
    ]));
    let channel = create_channel(api, transport);

    let mut events = channel.subscribe();
    channel.connect().await;

    await_event(&mut events, |event| {
        matches!(event, ChannelEvent::UnreadCountChanged(5))
    })
    .await;

    assert_eq!(channel.unread_count().await, 5);
}

async fn await_event(
    events: &mut tokio::sync::broadcast::Receiver<ChannelEvent>,
    predicate: impl Fn(&ChannelEvent) -> bool,
) {
    let deadline = Duration::from_millis(500);
    loop {
        let event = tokio::time::timeout(deadline, events.recv())
            .await
            .expect("timed out waiting for channel event")
            .expect("event stream closed");
        if predicate(&event) {
            return;
        }
    }
}

async fn await_calls(api: &StubNotificationsApi, expected: &[&str]) {
    let deadline = tokio::time::Instant::now() + Duration::from_millis(500);
    loop {
        let calls = api.recorded_calls().await;
        let done = expected
            .iter()
            .all(|expected| calls.iter().any(|call| call == expected));
        if done {
            return;
        }
        if tokio::time::Instant::now() > deadline {
            panic!("background rest calls not issued, recorded: {calls:?}");
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

fn create_channel(
    api: Arc<StubNotificationsApi>,
    transport: Arc<ScriptedTransport>,
) -> NotificationChannelImpl {
    NotificationChannelImpl::new(
        NotificationChannelConfig {
            event_buffer_size: 16,
        },
        Some(UserIdentity {
            id: Uuid::from_u128(42),
            username: "jdoe".to_string(),
            role: Role::Student,
        }),
        api,
        transport,
        Arc::new(NoopDesktopNotifier),
    )
}

fn create_notification(id: &str, is_read: bool) -> output::Notification {
    output::Notification {
        id: id.to_string(),
        title: "title".to_string(),
        message: "message".to_string(),
        kind: NotificationKind::General,
        priority: NotificationPriority::Medium,
        category: NotificationCategory::Academic,
        is_read,
        read_at: is_read.then(|| datetime!(2025-01-15 12:00 UTC)),
        created_at: datetime!(2025-01-15 12:00 UTC),
        expires_at: None,
        metadata: HashMap::new(),
    }
}

fn create_page(
    notifications: Vec<output::Notification>,
    unread_count: u64,
) -> output::NotificationPage {
    let total_count = notifications.len() as u64;
    output::NotificationPage {
        notifications,
        page: 1,
        total_pages: 1,
        total_count,
        unread_count,
    }
}

fn create_draft() -> input::NotificationDraft {
    input::NotificationDraft {
        title: "Campus closed".to_string(),
        message: "Campus closed due to weather".to_string(),
        kind: NotificationKind::Announcement,
        priority: NotificationPriority::Urgent,
        category: NotificationCategory::Administrative,
        expires_at: None,
        metadata: HashMap::new(),
    }
}
