//! Adapter utilities for the `focus-virtualizer` crate.
//!
//! The `focus-virtualizer` crate is UI-agnostic and only computes windows and offsets. This crate
//! provides small, framework-neutral helpers commonly needed by the layer that connects it to a
//! focus engine and a renderer:
//!
//! - A [`Controller`] that turns focus notifications into tween-animated scroll offsets
//! - Focus anchoring across data mutations (e.g. items inserted before the focused one)
//! - De-duplication of the level-triggered "fetch more" signal
//!
//! This crate is intentionally framework-agnostic (no bindings to any UI toolkit).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod anchor;
mod controller;
mod fetch;
mod tween;


pub use anchor::{FocusAnchor, apply_focus_anchor, capture_focus_anchor};
pub use controller::{Animation, Controller};
pub use fetch::FetchGate;
pub use tween::{Easing, Tween};
