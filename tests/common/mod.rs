#![allow(dead_code)]

use boxflow::{
    BoxflowError, Document, FixedAdvanceMeasurer, InputConstraints, LayoutConfig, LayoutMap,
    LayoutResult, NodeId,
};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A laid-out JSON tree.
pub struct Laid {
    pub document: Document,
    pub root: NodeId,
    pub map: LayoutMap,
}

impl Laid {
    pub fn root(&self) -> &LayoutResult {
        self.result(self.root)
    }

    /// Result of the node reached by following child indices from the root.
    pub fn at(&self, path: &[usize]) -> &LayoutResult {
        self.result(self.node_at(path))
    }

    pub fn node_at(&self, path: &[usize]) -> NodeId {
        path.iter()
            .fold(self.root, |id, &i| self.document.children(id)[i])
    }

    fn result(&self, id: NodeId) -> &LayoutResult {
        self.map.get(id).expect("every node has a result")
    }
}

/// Every character is one font size wide, baseline at 0.8 em.
pub fn measurer() -> FixedAdvanceMeasurer {
    FixedAdvanceMeasurer::new(1.0, 0.8)
}

pub fn layout_json(tree: Value, width: f64, height: f64) -> Result<Laid, BoxflowError> {
    layout_json_with(tree, LayoutConfig::default(), InputConstraints::new(width, height))
}

pub fn layout_json_with(
    tree: Value,
    config: LayoutConfig,
    input: InputConstraints,
) -> Result<Laid, BoxflowError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let (document, root) = Document::from_json(&tree.to_string())?;
    let map = document.layout(root, &measurer(), config, input)?;
    Ok(Laid { document, root, map })
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
