//! Document module
//!
//! Holds a loaded page as an arena-backed node tree. The tab controller and
//! the search engine mutate this tree in place, and the panel renderer walks it.

mod document_loader;
mod document_tree;

pub use document_loader::{load_file, parse_html};
pub use document_tree::{Document, ElementData, Node, NodeData, NodeId};
