//! HTML loading
//!
//! Parses an HTML file with `scraper` and copies the `<body>` into a
//! [`Document`]. Only elements and text survive; comments, scripts and styles
//! are dropped since nothing renders or searches them.

use scraper::{ElementRef, Html, Node as HtmlNode};
use std::fs;
use std::path::Path;

use super::document_tree::{Document, NodeId};
use crate::error::TabviewError;

const SKIPPED_TAGS: &[&str] = &["script", "style", "template", "noscript", "head"];

/// Read and parse the HTML file at `path`
pub fn load_file(path: &Path) -> Result<Document, TabviewError> {
    let source = fs::read_to_string(path)?;

    #[cfg(debug_assertions)]
    log::debug!("Read {} bytes from {:?}", source.len(), path);

    Ok(parse_html(&source))
}

/// Parse an HTML string into a [`Document`] rooted at `<body>`
pub fn parse_html(source: &str) -> Document {
    let html = Html::parse_document(source);
    let root = html.root_element();

    let body = root
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "body")
        .unwrap_or(root);

    let mut document = Document::new("body");
    let document_root = document.root();
    copy_attributes(&mut document, document_root, body);
    copy_children(&mut document, document_root, body);

    #[cfg(debug_assertions)]
    log::debug!("Parsed document with {} nodes", document.live_count());

    document
}

fn copy_children(document: &mut Document, parent: NodeId, source: ElementRef<'_>) {
    for child in source.children() {
        match child.value() {
            HtmlNode::Text(text) => {
                let content: &str = text;
                let id = document.create_text(content);
                document.append_child(parent, id);
            }
            HtmlNode::Element(_) => {
                let Some(element) = ElementRef::wrap(child) else {
                    continue;
                };
                let tag = element.value().name();
                if SKIPPED_TAGS.contains(&tag) {
                    continue;
                }
                let id = document.create_element(tag);
                copy_attributes(document, id, element);
                document.append_child(parent, id);
                copy_children(document, id, element);
            }
            _ => {}
        }
    }
}

fn copy_attributes(document: &mut Document, id: NodeId, source: ElementRef<'_>) {
    for class in source.value().classes() {
        document.toggle_class(id, class, true);
    }
    for (name, value) in source.value().attrs() {
        if name != "class" {
            document.set_attr(id, name, value);
        }
    }
}
