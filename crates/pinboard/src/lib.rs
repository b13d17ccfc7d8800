//! Pinboard: an absolute-position container widget.
//!
//! A [`Pinboard`] holds an ordered list of children, each pinned at an
//! explicit (x, y) offset with an optional per-axis size override. It plugs
//! into a hosting widget framework through the [`Host`] trait, implementing
//! the standard container protocol: measure, allocate, add, remove, and
//! ordered enumeration.
//!
//! Registry order is z-order, with the front of the list at the *bottom* of
//! the visual stack: children are appended on add, and showing a child never
//! raises it. Hit-testing traversal therefore runs in reverse; see
//! [`Pinboard::for_each`].

/// Scroll adjustment state and policy.
pub mod adjustment;
/// The container itself.
mod board;
/// Error and result types.
pub mod error;
/// The seam between the container and its hosting framework.
pub mod host;
/// Per-child geometry records.
mod pin;
/// Test helpers, including an in-memory host.
pub mod tutils;

pub use adjustment::{Adjustment, ScrollPolicy};
pub use board::Pinboard;
pub use error::{Error, Result};
pub use geom;
pub use host::{Host, Measure, WidgetId};
pub use pin::Pin;
