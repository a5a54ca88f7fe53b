use campus_portal_client::{
    application::{self, ApplicationEnv},
    dto::input::Pagination,
    service::notification_channel::NotificationChannel,
};
use tokio::sync::broadcast::error::RecvError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let state = application::create_state(&env)?;
    let channel = state.notification_channel;

    let connection = channel.connect().await;
    tracing::info!(state = %connection, "realtime connection");

    let notifications = channel
        .fetch_notifications(Pagination::first_page(env.page_size))
        .await;
    let unread_count = channel.unread_count().await;
    tracing::info!(
        count = notifications.len(),
        unread_count,
        "fetched notifications"
    );

    let mut events = channel.subscribe();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,

            event = events.recv() => match event {
                Ok(event) => tracing::info!(?event, "channel event"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event stream lagged");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    tracing::info!("shutting down");
    channel.disconnect().await;

    Ok(())
}
