//! Tabs module
//!
//! Keeps exactly one tab/panel pair active and mirrors that choice into the
//! document: the `active` class, `aria-selected` and `tabindex` on every tab,
//! and the `active` class on every panel.

pub mod tab_events;
pub mod tab_render;
mod tab_state;

pub use tab_state::{ACTIVE_CLASS, Direction, PANEL_CLASS, TAB_CLASS, TabState};
