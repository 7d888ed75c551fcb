//! Panel module
//!
//! Draws the active panel's subtree as styled terminal lines.

pub mod panel_render;

pub use panel_render::{panel_lines, render_panel};
