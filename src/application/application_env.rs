use crate::auth::Role;
use anyhow::anyhow;
use std::str::FromStr;
use uuid::Uuid;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub api_url: String,
    pub api_token: String,
    pub websocket_url: String,

    pub user_id: Uuid,
    pub username: String,
    pub user_role: Role,

    pub desktop_alerts: bool,
    pub page_size: u32,
    pub event_buffer_size: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("CAMPUS_PORTAL_CLIENT_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("CAMPUS_PORTAL_CLIENT_LOG_FILENAME")?;
        let api_url = Self::env_var("CAMPUS_PORTAL_CLIENT_API_URL")?;
        let api_token = Self::env_var("CAMPUS_PORTAL_CLIENT_API_TOKEN")?;
        let websocket_url = Self::env_var("CAMPUS_PORTAL_CLIENT_WEBSOCKET_URL")?;
        let user_id = Self::env_var("CAMPUS_PORTAL_CLIENT_USER_ID")?.parse()?;
        let username = Self::env_var("CAMPUS_PORTAL_CLIENT_USERNAME")?;
        let user_role = Role::from_str(&Self::env_var("CAMPUS_PORTAL_CLIENT_USER_ROLE")?)?;
        let desktop_alerts = Self::env_var("CAMPUS_PORTAL_CLIENT_DESKTOP_ALERTS")?.parse()?;
        let page_size = Self::env_var("CAMPUS_PORTAL_CLIENT_PAGE_SIZE")?.parse()?;
        let event_buffer_size = Self::env_var("CAMPUS_PORTAL_CLIENT_EVENT_BUFFER_SIZE")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            api_url,
            api_token,
            websocket_url,
            user_id,
            username,
            user_role,
            desktop_alerts,
            page_size,
            event_buffer_size,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
