mod dto;
mod notification_channel;
mod notification_channel_impl;

pub use dto::*;
pub use notification_channel::*;
pub use notification_channel_impl::*;
