//! Browser glue shared by the page clients.

mod boot;
mod config;
mod console;
mod dom;

pub use self::boot::*;
pub use self::config::*;
pub use self::console::*;
pub use self::dom::*;
