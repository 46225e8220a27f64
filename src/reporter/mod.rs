//! Output reporters (console and JSON)

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
