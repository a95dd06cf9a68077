//! CLI commands

mod alarms;
mod catalog;
mod common;
mod dis;
mod inject;
mod main;
mod print;
mod summary;

pub use alarms::alarms;
pub use catalog::catalog;
pub use common::Command;
pub use dis::dis;
pub use inject::inject;
pub use main::main;
pub use print::print;
pub use summary::summary;
