use crate::test_utils::{assert_close, element, layout_tree, test_measurer, text};
use crate::{InputConstraints, LayoutConfig, LayoutEngine, LayoutError, LayoutResult};
use boxflow_style::{Display, Length, Position, Style};

fn sized(width: Length, height: Length) -> Style {
    Style::default().with_size(width, height)
}

#[test]
fn test_auto_width_fills_parent_minus_insets() {
    let root = element(
        sized(Length::px(200.0), Length::AUTO),
        vec![element(
            Style::default()
                .with_margin(Length::em(1.0))
                .with_padding(Length::percent(5.0))
                .with_border_width(Length::px(3.0)),
            vec![],
        )],
    );
    let layout = layout_tree(&root, 500.0, 500.0).unwrap();
    let child = &layout.results[1];
    // 200 - (2 * 16 margin + 2 * 10 padding + 2 * 3 border)
    assert_eq!(child.rect.w, 142.0);
    assert_eq!((child.rect.x, child.rect.y), (16.0, 16.0));
}

#[test]
fn test_siblings_stack_without_margin_collapsing() {
    let root = element(
        sized(Length::px(200.0), Length::AUTO),
        vec![
            element(
                sized(Length::AUTO, Length::px(30.0))
                    .with_border_width(Length::px(5.0))
                    .with_margin(Length::em(1.0)),
                vec![],
            ),
            element(
                sized(Length::AUTO, Length::px(20.0)).with_margin(Length::em(0.5)),
                vec![],
            ),
        ],
    );
    let layout = layout_tree(&root, 500.0, 500.0).unwrap();
    let (a, b) = (&layout.results[1], &layout.results[2]);

    assert_eq!(a.rect.y, 16.0);
    let a_below = a.computed.border.top + a.rect.h + a.computed.border.bottom + a.computed.margin.bottom;
    assert_eq!(b.rect.y, a.rect.y + a_below + b.computed.margin.top);
    assert_eq!(b.rect.y, 80.0);
    // Root auto height covers both margin boxes.
    assert_eq!(layout.results[0].rect.h, 108.0);
}

#[test]
fn test_auto_height_includes_text_lines() {
    let root = element(
        sized(Length::px(100.0), Length::AUTO),
        vec![text("hello world")],
    );
    let layout = layout_tree(&root, 500.0, 500.0).unwrap();
    assert_eq!(layout.results[1].lines().len(), 2);
    assert_close(layout.results[0].rect.h, 2.0 * 16.0 * 1.2);
}

#[test]
fn test_results_are_delivered_post_order() {
    let root = element(
        Style::default(),
        vec![
            element(Style::default(), vec![text("a")]),
            element(Style::default(), vec![]),
        ],
    );
    let layout = layout_tree(&root, 100.0, 100.0).unwrap();
    assert_eq!(layout.order, vec![2, 1, 3, 0]);
}

#[test]
fn test_absolute_box_leaves_flow_untouched() {
    let root = element(
        sized(Length::px(200.0), Length::AUTO),
        vec![
            element(sized(Length::AUTO, Length::px(10.0)), vec![]),
            element(
                Style {
                    position: Position::Absolute,
                    ..sized(Length::px(50.0), Length::px(20.0)).with_margin(Length::percent(10.0))
                },
                vec![],
            ),
            element(sized(Length::AUTO, Length::px(10.0)), vec![]),
        ],
    );
    let layout = layout_tree(&root, 500.0, 500.0).unwrap();
    let abs = &layout.results[2];
    assert_eq!((abs.rect.x, abs.rect.y, abs.rect.w), (20.0, 20.0, 50.0));
    assert_eq!(layout.results[3].rect.y, 10.0);
    assert_eq!(layout.results[0].rect.h, 20.0);
}

#[test]
fn test_display_none_takes_no_space() {
    let hidden = Style {
        display: Display::None,
        ..Default::default()
    };
    let root = element(
        Style::default(),
        vec![
            element(hidden, vec![element(sized(Length::AUTO, Length::px(50.0)), vec![])]),
            element(sized(Length::AUTO, Length::px(10.0)), vec![]),
        ],
    );
    let layout = layout_tree(&root, 100.0, 100.0).unwrap();
    assert_eq!(layout.results[1].rect.w, 0.0);
    assert_eq!(layout.results[1].rect.h, 0.0);
    assert_eq!(layout.results[2].rect.h, 50.0);
    assert_eq!(layout.results[3].rect.y, 0.0);
    assert_eq!(layout.results[0].rect.h, 10.0);
}

#[test]
fn test_flex_and_grid_lay_out_as_blocks() {
    let flex = Style {
        display: Display::Flex,
        ..sized(Length::AUTO, Length::px(10.0))
    };
    let grid = Style {
        display: Display::Grid,
        ..sized(Length::AUTO, Length::px(10.0))
    };
    let root = element(Style::default(), vec![element(flex, vec![]), element(grid, vec![])]);
    let layout = layout_tree(&root, 120.0, 100.0).unwrap();
    assert_eq!(layout.results[1].rect.w, 120.0);
    assert_eq!(layout.results[2].rect.y, 10.0);
}

#[test]
fn test_same_engine_is_deterministic_across_passes() {
    let root_style = sized(Length::px(150.0), Length::AUTO);
    let child_style = Style::default().with_padding(Length::em(0.5));
    let text_style = Style::default();
    let measurer = test_measurer();
    let mut delivered: Vec<LayoutResult> = Vec::new();
    {
        let mut engine = LayoutEngine::new(
            LayoutConfig::default(),
            InputConstraints::new(300.0, 300.0),
            |_: u32, result| delivered.push(result),
        )
        .with_measurer(&measurer);
        for _ in 0..2 {
            engine.begin(0, &root_style).unwrap();
            engine.begin(1, &child_style).unwrap();
            engine.begin_text(2, &text_style, "one two three four").unwrap();
            engine.end(&2).unwrap();
            engine.end(&1).unwrap();
            engine.end(&0).unwrap();
            assert!(engine.is_idle());
            assert_eq!(engine.pool().allocated(), 0);
        }
        engine.finish().unwrap();
    }
    assert_eq!(delivered.len(), 6);
    assert_eq!(delivered[..3], delivered[3..]);
}

#[test]
fn test_pool_tracks_open_depth() {
    let style = Style::default();
    let mut engine = LayoutEngine::new(
        LayoutConfig::default(),
        InputConstraints::new(100.0, 100.0),
        |_: u8, _| {},
    );
    engine.begin(0, &style).unwrap();
    engine.begin(1, &style).unwrap();
    assert_eq!(engine.pool().len(), 2);
    engine.end(&1).unwrap();
    assert_eq!(engine.pool().len(), 1);
    assert_eq!(engine.pool().allocated(), 2);
    engine.end(&0).unwrap();
    assert_eq!(engine.pool().allocated(), 0);
}

#[test]
fn test_end_without_begin_is_an_error() {
    let mut engine = LayoutEngine::new(
        LayoutConfig::default(),
        InputConstraints::new(100.0, 100.0),
        |_: u8, _| {},
    );
    assert!(matches!(engine.end(&0), Err(LayoutError::EmptyStack)));
}

#[test]
fn test_mismatched_end_leaves_stacks_untouched() {
    let style = Style::default();
    let mut engine = LayoutEngine::new(
        LayoutConfig::default(),
        InputConstraints::new(100.0, 100.0),
        |_: u8, _| {},
    );
    engine.begin(1, &style).unwrap();
    assert!(matches!(
        engine.end(&2),
        Err(LayoutError::NodeMismatch { depth: 1 })
    ));
    assert_eq!(engine.depth(), 1);
    engine.end(&1).unwrap();
    engine.finish().unwrap();
}

#[test]
fn test_text_without_measurer_is_an_error() {
    let style = Style::default();
    let mut engine = LayoutEngine::new(
        LayoutConfig::default(),
        InputConstraints::new(100.0, 100.0),
        |_: u8, _| {},
    );
    engine.begin(0, &style).unwrap();
    assert!(matches!(
        engine.begin_text(1, &style, "hi"),
        Err(LayoutError::MissingMeasurer)
    ));
    assert_eq!(engine.depth(), 1);
}

#[test]
fn test_text_leaf_cannot_have_children() {
    let style = Style::default();
    let measurer = test_measurer();
    let mut engine = LayoutEngine::new(
        LayoutConfig::default(),
        InputConstraints::new(100.0, 100.0),
        |_: u8, _| {},
    )
    .with_measurer(&measurer);
    engine.begin_text(0, &style, "leaf").unwrap();
    assert!(matches!(
        engine.begin(1, &style),
        Err(LayoutError::ChildOfTextLeaf { depth: 1 })
    ));
}

#[test]
fn test_abandoned_pass_is_reported() {
    let style = Style::default();
    let mut engine = LayoutEngine::new(
        LayoutConfig::default(),
        InputConstraints::new(100.0, 100.0),
        |_: u8, _| {},
    );
    engine.begin(0, &style).unwrap();
    assert!(matches!(engine.finish(), Err(LayoutError::UnclosedNodes(1))));
}
