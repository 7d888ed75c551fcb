//! In-place highlighting of text runs
//!
//! Matched text is wrapped in `<span class="highlight">` elements by splitting
//! the original text node. Clearing swaps each span back for a text node and
//! normalizes the parent, so the tree returns to its exact prior shape.

use super::matcher::{SearchMatcher, Segment};
use crate::document::{Document, NodeId};

pub const HIGHLIGHT_CLASS: &str = "highlight";

/// Text under this element is never searched
const EXCLUDED_ANCESTOR: &str = "th";

/// Non-blank text nodes under `panel` that are not inside a header cell
pub fn collect_text_runs(doc: &Document, panel: NodeId) -> Vec<NodeId> {
    doc.descendants(panel)
        .into_iter()
        .filter(|&node| doc.text(node).is_some_and(|text| !text.trim().is_empty()))
        .filter(|&node| {
            doc.parent(node)
                .and_then(|parent| doc.closest(parent, EXCLUDED_ANCESTOR))
                .is_none()
        })
        .collect()
}

/// Wraps every match in `runs` and returns the created highlight elements
pub fn highlight_runs(doc: &mut Document, runs: &[NodeId], matcher: &SearchMatcher) -> Vec<NodeId> {
    let mut highlights = Vec::new();

    for &run in runs {
        let Some(text) = doc.text(run).map(str::to_owned) else {
            continue;
        };
        if !matcher.is_match(&text) {
            continue;
        }

        let mut replacement = Vec::new();
        for segment in matcher.segments(&text) {
            match segment {
                Segment::Literal(literal) => replacement.push(doc.create_text(literal)),
                Segment::Highlight(matched) => {
                    let span = doc.create_element_with_class("span", HIGHLIGHT_CLASS);
                    let inner = doc.create_text(matched);
                    doc.append_child(span, inner);
                    highlights.push(span);
                    replacement.push(span);
                }
            }
        }

        doc.replace_with(run, &replacement);
        doc.free(run);
    }

    highlights
}

/// Unwraps highlight elements and merges their text back into the neighbours
pub fn clear_highlights(doc: &mut Document, highlights: &[NodeId]) {
    for &highlight in highlights {
        let Some(parent) = doc.parent(highlight) else {
            doc.free(highlight);
            continue;
        };

        let text = doc.text_content(highlight);
        let unwrapped = doc.create_text(&text);
        doc.replace_with(highlight, &[unwrapped]);
        doc.free(highlight);
        doc.normalize(parent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_html;

    fn panel_doc(html: &str) -> (Document, NodeId) {
        let doc = parse_html(html);
        let panel = doc.find_by_class(doc.root(), "tab-panel")[0];
        (doc, panel)
    }

    #[test]
    fn test_collect_skips_blank_text() {
        let (doc, panel) = panel_doc("<div class=\"tab-panel\">\n  <p>one</p>\n  <p>two</p>\n</div>");
        let runs = collect_text_runs(&doc, panel);

        let texts: Vec<_> = runs.iter().filter_map(|&r| doc.text(r)).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_collect_skips_header_cells() {
        let (doc, panel) = panel_doc(
            "<div class=\"tab-panel\"><table><tr><th><b>Name</b></th><td>Name</td></tr></table></div>",
        );
        let runs = collect_text_runs(&doc, panel);

        assert_eq!(runs.len(), 1);
        assert_eq!(doc.tag(doc.parent(runs[0]).unwrap()), Some("td"));
    }

    #[test]
    fn test_highlight_splits_run_in_order() {
        let (mut doc, panel) = panel_doc("<div class=\"tab-panel\"><p>Hello world, hello again.</p></div>");
        let p = doc.first_child(panel).unwrap();
        let runs = collect_text_runs(&doc, panel);
        let matcher = SearchMatcher::new("hello").unwrap();

        let highlights = highlight_runs(&mut doc, &runs, &matcher);

        assert_eq!(highlights.len(), 2);
        assert_eq!(
            doc.to_html(p),
            "<p><span class=\"highlight\">Hello</span> world, <span class=\"highlight\">hello</span> again.</p>"
        );
        assert_eq!(doc.text_content(p), "Hello world, hello again.");
    }

    #[test]
    fn test_clear_restores_structure() {
        let (mut doc, panel) = panel_doc(
            "<div class=\"tab-panel\"><p>Hello <em>hello</em> world</p><p>no match</p></div>",
        );
        let before = doc.to_html(panel);
        let baseline = doc.live_count();

        let runs = collect_text_runs(&doc, panel);
        let matcher = SearchMatcher::new("hello").unwrap();
        let highlights = highlight_runs(&mut doc, &runs, &matcher);
        assert_eq!(highlights.len(), 2);
        assert_ne!(doc.to_html(panel), before);

        clear_highlights(&mut doc, &highlights);

        assert_eq!(doc.to_html(panel), before);
        assert_eq!(doc.live_count(), baseline);
    }

    #[test]
    fn test_clear_with_freed_highlight_is_harmless() {
        let (mut doc, panel) = panel_doc("<div class=\"tab-panel\"><p>abc</p></div>");
        let runs = collect_text_runs(&doc, panel);
        let matcher = SearchMatcher::new("b").unwrap();
        let highlights = highlight_runs(&mut doc, &runs, &matcher);

        clear_highlights(&mut doc, &highlights);
        clear_highlights(&mut doc, &[]);

        assert_eq!(doc.text_content(panel), "abc");
    }
}
