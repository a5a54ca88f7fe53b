use super::{Error, EventStream, RealtimeEvent, RealtimeTransport};
use crate::{
    auth::UserIdentity,
    dto::output::{Notification, UnreadCount},
};
use async_trait::async_trait;
use futures_util::{future::ready, SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio_tungstenite::{connect_async, tungstenite, tungstenite::Message};

pub struct WebSocketTransportConfig {
    pub url: String,
}

pub struct WebSocketTransport {
    config: WebSocketTransportConfig,
}

#[derive(Serialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
enum ClientMessage {
    Join(UserIdentity),
}

#[derive(Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
enum ServerMessage {
    NewNotification(Notification),
    NotificationCount(UnreadCount),
}

impl WebSocketTransport {
    pub fn new(config: WebSocketTransportConfig) -> Self {
        Self { config }
    }

    fn map_message(message: Result<Message, tungstenite::Error>) -> Option<RealtimeEvent> {
        let text = match message {
            Ok(Message::Text(text)) => text,
            // Binary/ping/pong frames are not part of the contract
            _ => return None,
        };

        match serde_json::from_str::<ServerMessage>(&text) {
            Ok(ServerMessage::NewNotification(notification)) => {
                Some(RealtimeEvent::NotificationReceived(notification))
            }
            Ok(ServerMessage::NotificationCount(count)) => {
                Some(RealtimeEvent::UnreadCountChanged(count.unread_count))
            }
            Err(err) => {
                tracing::warn!(%err, "unrecognized server message");
                None
            }
        }
    }
}

#[async_trait]
impl RealtimeTransport for WebSocketTransport {
    async fn connect(&self, identity: &UserIdentity) -> Result<EventStream, Error> {
        tracing::info!(url = self.config.url, "connecting websocket");
        let (mut websocket, _) = connect_async(self.config.url.as_str()).await?;

        let join = serde_json::to_string(&ClientMessage::Join(identity.clone()))?;
        websocket.send(Message::Text(join)).await?;
        tracing::info!(user_id = %identity.id, "joined realtime channel");

        let stream = websocket
            .take_while(|message| {
                let open = match message {
                    Ok(Message::Close(_)) => {
                        tracing::info!("server closed the websocket");
                        false
                    }
                    Err(err) => {
                        tracing::warn!(%err, "websocket transport error");
                        false
                    }
                    Ok(_) => true,
                };

                ready(open)
            })
            .filter_map(|message| ready(Self::map_message(message)));

        Ok(Box::pin(stream))
    }
}
