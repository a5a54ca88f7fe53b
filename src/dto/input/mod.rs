mod notification_draft;
mod pagination;

pub use notification_draft::*;
pub use pagination::*;
