//! A reference host tree.
//!
//! The layout engine never owns a tree; it is driven by whoever does. This
//! module is the simplest such owner: an index arena of styled nodes, built
//! bottom-up or loaded from JSON, with a recursive walk that issues the
//! `begin`/`end` calls and collects every result.

use crate::BoxflowError;
use boxflow_layout::{InputConstraints, LayoutConfig, LayoutEngine, LayoutResult};
use boxflow_style::Style;
use boxflow_traits::TextMeasurer;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element(Vec<NodeId>),
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    style: Style,
    kind: NodeKind,
}

/// Serialized form of a subtree.
///
/// ```json
/// { "style": { "width": "50%" }, "children": [ { "text": "Hello" } ] }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    Text {
        text: String,
        #[serde(default)]
        style: Style,
    },
    Element {
        #[serde(default)]
        style: Style,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a tree from JSON and returns it with its root.
    pub fn from_json(json: &str) -> Result<(Self, NodeId), BoxflowError> {
        let spec: NodeSpec = serde_json::from_str(json)?;
        let mut document = Self::new();
        let root = document.insert_spec(spec);
        Ok((document, root))
    }

    /// Adds `spec` and its descendants, returning the id of its root.
    pub fn insert_spec(&mut self, spec: NodeSpec) -> NodeId {
        match spec {
            NodeSpec::Text { text, style } => self.add_text(style, text),
            NodeSpec::Element { style, children } => {
                let children = children
                    .into_iter()
                    .map(|child| self.insert_spec(child))
                    .collect();
                self.add_element(style, children)
            }
        }
    }

    /// Adds an element. Its children must already be in the document.
    pub fn add_element(&mut self, style: Style, children: Vec<NodeId>) -> NodeId {
        self.push(style, NodeKind::Element(children))
    }

    pub fn add_text(&mut self, style: Style, content: impl Into<String>) -> NodeId {
        self.push(style, NodeKind::Text(content.into()))
    }

    fn push(&mut self, style: Style, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData { style, kind });
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn style(&self, id: NodeId) -> Option<&Style> {
        self.nodes.get(id.0).map(|node| &node.style)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(id.0).map(|node| &node.kind) {
            Some(NodeKind::Element(children)) => children,
            _ => &[],
        }
    }

    /// Lays out the subtree under `root` in one pass.
    pub fn layout(
        &self,
        root: NodeId,
        measurer: &dyn TextMeasurer,
        config: LayoutConfig,
        input: InputConstraints,
    ) -> Result<LayoutMap, BoxflowError> {
        let mut map = LayoutMap::default();
        {
            let mut engine = LayoutEngine::new(config, input, |id: NodeId, result| map.insert(id, result))
                .with_measurer(measurer);
            self.walk(&mut engine, root)?;
            engine.finish()?;
        }
        log::debug!("Laid out {} nodes", map.len());
        Ok(map)
    }

    fn walk<'d>(&'d self, engine: &mut LayoutEngine<'d, NodeId>, id: NodeId) -> Result<(), BoxflowError> {
        let node = self.nodes.get(id.0).ok_or(BoxflowError::UnknownNode(id))?;
        match &node.kind {
            NodeKind::Text(content) => engine.begin_text(id, &node.style, content)?,
            NodeKind::Element(children) => {
                engine.begin(id, &node.style)?;
                for child in children {
                    self.walk(engine, *child)?;
                }
            }
        }
        engine.end(&id)?;
        Ok(())
    }
}

/// Results of one pass, keyed by node.
#[derive(Debug, Clone, Default)]
pub struct LayoutMap {
    results: HashMap<NodeId, LayoutResult>,
    order: Vec<NodeId>,
}

impl LayoutMap {
    fn insert(&mut self, id: NodeId, result: LayoutResult) {
        self.order.push(id);
        self.results.insert(id, result);
    }

    pub fn get(&self, id: NodeId) -> Option<&LayoutResult> {
        self.results.get(&id)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Nodes in the order their results were delivered.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Results in delivery order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &LayoutResult)> {
        self.order
            .iter()
            .filter_map(|id| self.results.get(id).map(|result| (*id, result)))
    }
}
