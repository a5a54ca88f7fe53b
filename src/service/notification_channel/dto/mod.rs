mod channel_event;
mod connection_state;
mod notification_channel_config;

pub use channel_event::*;
pub use connection_state::*;
pub use notification_channel_config::*;
