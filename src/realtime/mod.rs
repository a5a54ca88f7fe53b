//!
//! Realtime push channel: the server delivers `newNotification` and
//! `notificationCount` events over a websocket after the client joins
//! with its identity
//!

mod dto;
mod error;
mod realtime_transport;
mod websocket_transport;

pub use dto::*;
pub use error::*;
pub use realtime_transport::*;
pub use websocket_transport::*;
