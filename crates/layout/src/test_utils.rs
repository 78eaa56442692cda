use crate::config::LayoutConfig;
use crate::constraints::InputConstraints;
use crate::engine::LayoutEngine;
use crate::output::LayoutResult;
use crate::text::TextCursor;
use crate::LayoutError;
use boxflow_style::{FontStyle, FontWeight, Style};
use boxflow_traits::{FixedAdvanceMeasurer, FontQuery};

/// A minimal host tree for driving the engine in tests.
pub enum TestNode {
    Element(Style, Vec<TestNode>),
    Text(Style, String),
}

pub fn element(style: Style, children: Vec<TestNode>) -> TestNode {
    TestNode::Element(style, children)
}

pub fn text(content: &str) -> TestNode {
    TestNode::Text(Style::default(), content.to_string())
}

impl TestNode {
    fn count(&self) -> usize {
        match self {
            TestNode::Element(_, children) => 1 + children.iter().map(TestNode::count).sum::<usize>(),
            TestNode::Text(..) => 1,
        }
    }
}

pub struct TestLayout {
    /// Results indexed by pre-order position in the tree.
    pub results: Vec<LayoutResult>,
    /// Results in the order the engine delivered them.
    pub order: Vec<usize>,
    pub measure_calls: usize,
}

/// Every character is exactly one font size wide; baseline at 0.8 em.
pub fn test_measurer() -> FixedAdvanceMeasurer {
    FixedAdvanceMeasurer::new(1.0, 0.8)
}

pub fn layout_tree(root: &TestNode, width: f64, height: f64) -> Result<TestLayout, LayoutError> {
    layout_tree_with(root, InputConstraints::new(width, height), LayoutConfig::default())
}

pub fn layout_tree_with(
    root: &TestNode,
    input: InputConstraints,
    config: LayoutConfig,
) -> Result<TestLayout, LayoutError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let measurer = test_measurer();
    let mut slots: Vec<Option<LayoutResult>> = vec![None; root.count()];
    let mut order = Vec::new();
    let measure_calls;
    {
        let mut engine = LayoutEngine::new(config, input, |id: usize, result| {
            order.push(id);
            slots[id] = Some(result);
        })
        .with_measurer(&measurer);
        let mut next = 0;
        drive(&mut engine, root, &mut next)?;
        measure_calls = engine.measure_calls();
        engine.finish()?;
    }
    Ok(TestLayout {
        results: slots
            .into_iter()
            .map(|r| r.expect("every node is reported exactly once"))
            .collect(),
        order,
        measure_calls,
    })
}

pub fn drive<'a>(
    engine: &mut LayoutEngine<'a, usize>,
    node: &'a TestNode,
    next: &mut usize,
) -> Result<(), LayoutError> {
    let id = *next;
    *next += 1;
    match node {
        TestNode::Text(style, content) => engine.begin_text(id, style, content)?,
        TestNode::Element(style, children) => {
            engine.begin(id, style)?;
            for child in children {
                drive(engine, child, next)?;
            }
        }
    }
    engine.end(&id)
}

pub fn font(size: f64) -> FontQuery<'static> {
    FontQuery {
        family: "sans-serif",
        size,
        line_height: size * 1.2,
        weight: FontWeight::NORMAL,
        style: FontStyle::Normal,
        letter_spacing: 0.0,
    }
}

pub fn cursor(width: f64) -> TextCursor {
    TextCursor {
        line_start: 0.0,
        available: width,
        x: 0.0,
        y: 0.0,
        line_extent: 0.0,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
