//! A headless, focus-driven virtualization engine for remote-controlled UIs.
//!
//! For adapter-level utilities (animated scrolling, focus anchoring, fetch de-duplication), see
//! the `focus-virtualizer-adapter` crate.
//!
//! On a TV-style UI the user never scrolls directly: a directional focus engine moves focus
//! between items and the list follows. This crate computes, for a given focused index:
//! - which contiguous range of items must be materialized (the render window), and
//! - which scroll offset keeps the focused item where the chosen [`ScrollBehavior`] wants it.
//!
//! Offsets for every index are precomputed into an [`OffsetTable`] with a single prefix-sum pass,
//! so focus changes on lists with tens of thousands of items are O(1).
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the viewport extent along the scrolling axis (`0` until measured)
//! - the focused index (from an external focus-resolution engine)
//! - item extents, either fixed or as a per-index function
//!
//! ```
//! use focus_virtualizer::{FocusVirtualizer, ItemExtent, ScrollBehavior, VirtualizerOptions};
//!
//! let opts = VirtualizerOptions::new(10_000, ItemExtent::Fixed(50), ScrollBehavior::Center)
//!     .with_viewport_extent(500);
//! let mut v = FocusVirtualizer::new(opts).unwrap();
//!
//! let frame = v.set_focus_index(500);
//! assert!(frame.window.contains(500));
//! assert!(frame.offset < 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod grid;
mod options;
mod pagination;
mod policy;
mod size;
mod state;
mod table;
mod types;
mod virtualizer;
mod window;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use grid::{GridFrame, GridLayout, GridOptions, GridRow, GridVirtualizer};
pub use options::{OnChangeCallback, VirtualizerOptions};
pub use pagination::should_fetch_more;
pub use policy::{CenterZones, ScrollOffsetPolicy};
pub use size::{ExtentFn, ItemExtent, SizeModel};
pub use state::FrameState;
pub use table::OffsetTable;
pub use types::{FocusFrame, RenderWindow, RenderedItem, ScrollBehavior};
pub use virtualizer::FocusVirtualizer;
pub use window::{overscan_count, render_window, window_for};
