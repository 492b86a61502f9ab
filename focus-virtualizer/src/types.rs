use core::ops::Range;
use core::str::FromStr;

use crate::Error;

/// How the scroll offset follows focus movement.
///
/// Selected once per list instance. The textual tags (`"stick-to-start"`, `"stick-to-end"`,
/// `"center"`, `"jump-on-scroll"`) are accepted by [`FromStr`] and by serde.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScrollBehavior {
    /// The focused item slides to the leading edge until the last page is reached.
    StickToStart,
    /// The list stays put until focus passes the last page boundary, then the focused item is
    /// pinned to the trailing edge.
    StickToEnd,
    /// The focused item is kept centered, with free zones at both ends of the list.
    Center,
    /// The offset snaps a full page at a time. Requires fixed item extents.
    JumpOnScroll,
}

impl ScrollBehavior {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StickToStart => "stick-to-start",
            Self::StickToEnd => "stick-to-end",
            Self::Center => "center",
            Self::JumpOnScroll => "jump-on-scroll",
        }
    }
}

impl FromStr for ScrollBehavior {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stick-to-start" => Ok(Self::StickToStart),
            "stick-to-end" => Ok(Self::StickToEnd),
            "center" => Ok(Self::Center),
            "jump-on-scroll" => Ok(Self::JumpOnScroll),
            _ => Err(Error::InvalidConfiguration("unknown scroll behavior")),
        }
    }
}

/// The contiguous index range that must be materialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderWindow {
    pub start: usize,
    pub end: usize, // exclusive
}

impl RenderWindow {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Everything the rendering and data layers need after one focus or geometry change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusFrame {
    /// The focused index after clamping to `0..count`.
    pub focus_index: usize,
    pub count: usize,
    pub window: RenderWindow,
    /// Translation of the content along the scroll axis (`<= 0`).
    pub offset: i64,
    /// `true` when focus is close enough to the end of the data to request more.
    pub fetch_more: bool,
}

/// A materialized item and its position in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedItem {
    pub index: usize,
    /// Start of the item from the beginning of the content (before the scroll offset is applied).
    pub start: u64,
    pub extent: u32,
}

impl RenderedItem {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.extent as u64)
    }
}
