//! Horizontal and vertical alignment props and their CSS keywords.

use serde::Deserialize;

/// Horizontal alignment of a grid (or of items within their cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

/// Vertical alignment of a grid (or of items within their cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

/// Position along an axis once left/top and right/bottom are folded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAlignment {
    Start,
    Center,
    End,
}

impl AxisAlignment {
    /// The CSS keyword: `start`, `center` or `end`.
    pub fn as_css(self) -> &'static str {
        match self {
            AxisAlignment::Start => "start",
            AxisAlignment::Center => "center",
            AxisAlignment::End => "end",
        }
    }
}

impl From<HorizontalAlignment> for AxisAlignment {
    fn from(alignment: HorizontalAlignment) -> Self {
        match alignment {
            HorizontalAlignment::Left => AxisAlignment::Start,
            HorizontalAlignment::Center => AxisAlignment::Center,
            HorizontalAlignment::Right => AxisAlignment::End,
        }
    }
}

impl From<VerticalAlignment> for AxisAlignment {
    fn from(alignment: VerticalAlignment) -> Self {
        match alignment {
            VerticalAlignment::Top => AxisAlignment::Start,
            VerticalAlignment::Center => AxisAlignment::Center,
            VerticalAlignment::Bottom => AxisAlignment::End,
        }
    }
}
