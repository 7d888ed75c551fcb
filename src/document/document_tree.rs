use std::collections::BTreeMap;
use std::fmt::Write;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "wbr"];

/// Handle to a node slot in a [`Document`]
///
/// Ids stay valid until the node is freed; a freed slot may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Tag, classes and attributes of an element node
///
/// `class` is kept apart from the other attributes so class toggling does not
/// have to re-parse a space separated string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementData {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Mutable node tree with DOM-like operations
///
/// Every operation on an id that no longer refers to a live node is a no-op
/// (or returns an empty value), so callers never have to check liveness first.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    root: NodeId,
}

impl Document {
    /// Creates a document whose root is an element with the given tag
    pub fn new(root_tag: &str) -> Self {
        Self {
            slots: vec![Some(Node::new(NodeData::Element(ElementData::new(root_tag))))],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of allocated nodes, attached or not
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let node = Node::new(data);
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeData::Element(ElementData::new(tag)))
    }

    pub fn create_element_with_class(&mut self, tag: &str, class: &str) -> NodeId {
        let mut element = ElementData::new(tag);
        element.classes.push(class.to_string());
        self.alloc(NodeData::Element(element))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeData::Text(text.to_string()))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.get(id).map(|node| &node.data) {
            Some(NodeData::Element(element)) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match self.get_mut(id).map(|node| &mut node.data) {
            Some(NodeData::Element(element)) => Some(element),
            _ => None,
        }
    }

    /// Returns the text of a text node, `None` for elements
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.get(id).map(|node| &node.data) {
            Some(NodeData::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|element| element.tag.as_str())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|element| element.has_class(class))
    }

    /// Adds the class when `on` is true, removes it otherwise
    pub fn toggle_class(&mut self, id: NodeId, class: &str, on: bool) {
        let Some(element) = self.element_mut(id) else {
            return;
        };
        let present = element.has_class(class);
        if on && !present {
            element.classes.push(class.to_string());
        } else if !on && present {
            element.classes.retain(|c| c != class);
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)
            .and_then(|element| element.attrs.get(name))
            .map(String::as_str)
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.attrs.insert(name.to_string(), value.to_string());
        }
    }

    /// Unlinks a node from its parent; the node itself stays allocated
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.retain(|&child| child != id);
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.insert_before(parent, child, None);
    }

    /// Inserts `child` into `parent` before `reference`
    ///
    /// Appends when `reference` is `None` or not a child of `parent`.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) {
        if parent == child || self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        self.detach(child);

        let Some(parent_node) = self.get_mut(parent) else {
            return;
        };
        let position = reference
            .and_then(|r| parent_node.children.iter().position(|&c| c == r))
            .unwrap_or(parent_node.children.len());
        parent_node.children.insert(position, child);

        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
    }

    /// Puts `replacements` where `old` was, in order, and detaches `old`
    pub fn replace_with(&mut self, old: NodeId, replacements: &[NodeId]) {
        let Some(parent) = self.parent(old) else {
            return;
        };
        for &replacement in replacements {
            self.insert_before(parent, replacement, Some(old));
        }
        self.detach(old);
    }

    /// Detaches a node and releases it together with its whole subtree
    pub fn free(&mut self, id: NodeId) {
        if id == self.root {
            return;
        }
        self.detach(id);

        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.slots.get_mut(current.0).and_then(Option::take) {
                pending.extend(node.children);
                self.free.push(current.0);
            }
        }
    }

    /// Replaces all children of `id` with a single text node
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        if self.element(id).is_none() {
            if let Some(Node {
                data: NodeData::Text(current),
                ..
            }) = self.get_mut(id)
            {
                *current = text.to_string();
            }
            return;
        }
        for child in self.children(id).to_vec() {
            self.free(child);
        }
        let text_node = self.create_text(text);
        self.append_child(id, text_node);
    }

    /// Concatenated text of every text node in the subtree
    pub fn text_content(&self, id: NodeId) -> String {
        let mut content = String::new();
        for node in self.descendants(id) {
            if let Some(text) = self.text(node) {
                content.push_str(text);
            }
        }
        content
    }

    /// The subtree rooted at `id` in document order, `id` included
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        if self.get(id).is_none() {
            return result;
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }

    /// Elements under `id` carrying `class`, in document order
    pub fn find_by_class(&self, id: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|&node| self.has_class(node, class))
            .collect()
    }

    /// Nearest element with the given tag, starting at `id` itself
    pub fn closest(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.tag(node) == Some(tag) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// Merges adjacent text nodes and drops empty ones throughout the subtree
    pub fn normalize(&mut self, id: NodeId) {
        let children = self.children(id).to_vec();
        let mut previous_text: Option<NodeId> = None;

        for child in children {
            match self.text(child).map(str::to_owned) {
                Some(text) if text.is_empty() => self.free(child),
                Some(text) => match previous_text {
                    Some(previous) => {
                        if let Some(Node {
                            data: NodeData::Text(merged),
                            ..
                        }) = self.get_mut(previous)
                        {
                            merged.push_str(&text);
                        }
                        self.free(child);
                    }
                    None => previous_text = Some(child),
                },
                None => {
                    previous_text = None;
                    self.normalize(child);
                }
            }
        }
    }

    /// Serializes the subtree rooted at `id` as HTML
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Text(text) => out.push_str(&escape_text(text)),
            NodeData::Element(element) => {
                let _ = write!(out, "<{}", element.tag);
                if !element.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape_attr(&element.classes.join(" ")));
                }
                for (name, value) in &element.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                    return;
                }
                for &child in &node.children {
                    self.write_html(child, out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
