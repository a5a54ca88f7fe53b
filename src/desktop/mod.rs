mod desktop_notifier;
mod log_desktop_notifier;
mod noop_desktop_notifier;

pub use desktop_notifier::*;
pub use log_desktop_notifier::*;
pub use noop_desktop_notifier::*;
