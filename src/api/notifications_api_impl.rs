use super::{Error, NotificationsApi};
use crate::dto::{input, output};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use uuid::Uuid;

pub struct NotificationsApiConfig {
    pub base_url: String,
    pub bearer_token: String,
}

pub struct NotificationsApiImpl {
    config: NotificationsApiConfig,
    client: Client,
}

impl NotificationsApiImpl {
    pub fn new(config: NotificationsApiConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/notifications{path}", self.config.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.config.bearer_token)
    }

    fn check_status(response: Response) -> Result<Response, Error> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized),
            status => Err(Error::UnexpectedStatus {
                status: status.as_u16(),
            }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateNotificationBody {
    recipient_id: Uuid,
    #[serde(flatten)]
    draft: input::NotificationDraft,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BroadcastNotificationBody {
    recipient_ids: Vec<Uuid>,
    #[serde(flatten)]
    draft: input::NotificationDraft,
}

#[async_trait]
impl NotificationsApi for NotificationsApiImpl {
    async fn fetch_notifications(
        &self,
        pagination: input::Pagination,
    ) -> Result<output::NotificationPage, Error> {
        let request = self
            .client
            .get(self.url(""))
            .query(&[("page", pagination.page), ("limit", pagination.limit)]);
        let response = self.authorized(request).send().await?;

        let page = Self::check_status(response)?
            .json::<output::NotificationPage>()
            .await?;

        Ok(page)
    }

    async fn fetch_unread_count(&self) -> Result<u64, Error> {
        let request = self.client.get(self.url("/unread-count"));
        let response = self.authorized(request).send().await?;

        let count = Self::check_status(response)?
            .json::<output::UnreadCount>()
            .await?;

        Ok(count.unread_count)
    }

    async fn mark_as_read(&self, id: &str) -> Result<(), Error> {
        let request = self.client.patch(self.url(&format!("/{id}/read")));
        let response = self.authorized(request).send().await?;

        Self::check_status(response)?;

        Ok(())
    }

    async fn mark_all_as_read(&self) -> Result<(), Error> {
        let request = self.client.patch(self.url("/read-all"));
        let response = self.authorized(request).send().await?;

        Self::check_status(response)?;

        Ok(())
    }

    async fn delete_notification(&self, id: &str) -> Result<(), Error> {
        let request = self.client.delete(self.url(&format!("/{id}")));
        let response = self.authorized(request).send().await?;

        Self::check_status(response)?;

        Ok(())
    }

    async fn create_notification(
        &self,
        recipient_id: Uuid,
        draft: input::NotificationDraft,
    ) -> Result<output::Notification, Error> {
        let body = CreateNotificationBody {
            recipient_id,
            draft,
        };
        let request = self.client.post(self.url("")).json(&body);
        let response = self.authorized(request).send().await?;

        let notification = Self::check_status(response)?
            .json::<output::Notification>()
            .await?;

        Ok(notification)
    }

    async fn broadcast_notification(
        &self,
        recipient_ids: Vec<Uuid>,
        draft: input::NotificationDraft,
    ) -> Result<output::BroadcastReceipt, Error> {
        let body = BroadcastNotificationBody {
            recipient_ids,
            draft,
        };
        let request = self.client.post(self.url("/broadcast")).json(&body);
        let response = self.authorized(request).send().await?;

        let receipt = Self::check_status(response)?
            .json::<output::BroadcastReceipt>()
            .await?;

        Ok(receipt)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dto::{NotificationCategory, NotificationKind, NotificationPriority};
    use serde_json::Value;
    use std::collections::HashMap;

    #[test]
    fn create_body_json_flattens_draft() {
        let body = CreateNotificationBody {
            recipient_id: Uuid::from_u128(7),
            draft: create_draft(),
        };

        let json = serde_json::to_value(&body).unwrap();

        let object = json.as_object().unwrap();
        assert!(object.contains_key("recipientId"));
        assert_eq!(object.get("title").unwrap(), "Welcome");
        assert_eq!(object.get("type").unwrap(), "general");
    }

    #[test]
    fn broadcast_body_json_carries_all_recipients() {
        let body = BroadcastNotificationBody {
            recipient_ids: vec![Uuid::from_u128(1), Uuid::from_u128(2)],
            draft: create_draft(),
        };

        let json = serde_json::to_value(&body).unwrap();

        let recipients = json
            .as_object()
            .unwrap()
            .get("recipientIds")
            .unwrap()
            .as_array()
            .unwrap();
        assert_eq!(recipients.len(), 2);
        assert!(recipients.iter().all(Value::is_string));
    }

    fn create_draft() -> input::NotificationDraft {
        input::NotificationDraft {
            title: "Welcome".to_string(),
            message: "Welcome to the fall term".to_string(),
            kind: NotificationKind::General,
            priority: NotificationPriority::Low,
            category: NotificationCategory::Administrative,
            expires_at: None,
            metadata: HashMap::new(),
        }
    }
}
