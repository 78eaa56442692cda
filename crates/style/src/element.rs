//! Per-node computed style, as handed to the layout engine by the host.
use crate::dimension::Length;
use crate::font::{FontStyle, FontWeight};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    None,
    #[default]
    Block,
    Inline,
    InlineBlock,
    Flex,
    InlineFlex,
    Grid,
    InlineGrid,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
}

/// Fully normalized style of one node. The engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    pub box_sizing: BoxSizing,
    pub display: Display,
    pub position: Position,
    pub margin_top: Length,
    pub margin_right: Length,
    pub margin_bottom: Length,
    pub margin_left: Length,
    pub padding_top: Length,
    pub padding_right: Length,
    pub padding_bottom: Length,
    pub padding_left: Length,
    pub border_top_width: Length,
    pub border_right_width: Length,
    pub border_bottom_width: Length,
    pub border_left_width: Length,
    pub width: Length,
    pub height: Length,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub font_size: Length,
    pub line_height: Length,
    pub letter_spacing: Length,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            box_sizing: BoxSizing::ContentBox,
            display: Display::Block,
            position: Position::Static,
            margin_top: Length::AUTO,
            margin_right: Length::AUTO,
            margin_bottom: Length::AUTO,
            margin_left: Length::AUTO,
            padding_top: Length::AUTO,
            padding_right: Length::AUTO,
            padding_bottom: Length::AUTO,
            padding_left: Length::AUTO,
            border_top_width: Length::ZERO,
            border_right_width: Length::ZERO,
            border_bottom_width: Length::ZERO,
            border_left_width: Length::ZERO,
            width: Length::AUTO,
            height: Length::AUTO,
            font_family: "sans-serif".to_string(),
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            font_size: Length::px(16.0),
            line_height: Length::AUTO,
            letter_spacing: Length::ZERO,
        }
    }
}

impl Style {
    pub fn inline() -> Self {
        Self {
            display: Display::Inline,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: Length, height: Length) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margin(mut self, all: Length) -> Self {
        self.margin_top = all;
        self.margin_right = all;
        self.margin_bottom = all;
        self.margin_left = all;
        self
    }

    pub fn with_padding(mut self, all: Length) -> Self {
        self.padding_top = all;
        self.padding_right = all;
        self.padding_bottom = all;
        self.padding_left = all;
        self
    }

    pub fn with_border_width(mut self, all: Length) -> Self {
        self.border_top_width = all;
        self.border_right_width = all;
        self.border_bottom_width = all;
        self.border_left_width = all;
        self
    }

    pub fn is_absolute(&self) -> bool {
        self.position == Position::Absolute
    }
}
