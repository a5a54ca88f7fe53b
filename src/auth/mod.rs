//!
//! User identity passed to the realtime transport and used to gate
//! every channel operation
//!

mod identity;
mod role;

pub use identity::*;
pub use role::*;
