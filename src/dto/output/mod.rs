mod broadcast_receipt;
mod notification;
mod notification_page;
mod unread_count;

pub use broadcast_receipt::*;
pub use notification::*;
pub use notification_page::*;
pub use unread_count::*;
