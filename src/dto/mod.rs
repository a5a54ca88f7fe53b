//!
//! Module with all dtos that are passed between the backend and the client
//!

pub mod input;
pub mod output;

mod notification_kind;

pub use notification_kind::*;
