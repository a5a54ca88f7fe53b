pub mod notification_channel;
