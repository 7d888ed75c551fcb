//! tabview library - terminal browser for tabbed HTML documents
//!
//! This library exposes the core functionality of tabview for testing purposes.

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod help;
pub mod layout;
pub mod notification;
pub mod panel;
pub mod scroll;
pub mod search;
pub mod tabs;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
