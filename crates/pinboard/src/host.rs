//! The seam between a container and its hosting widget framework.
//!
//! The host owns realize/map/paint/event plumbing and the parent-child
//! relationship; the container only consumes the narrow set of capabilities
//! below. Everything runs on the host's single UI thread, so calls are
//! synchronous and their effects are visible to the next call.

use geom::{Axis, Expanse, Rect};
use slotmap::new_key_type;

use crate::Result;

new_key_type! {
    /// Opaque identifier for a widget owned by the hosting framework.
    pub struct WidgetId;
}

/// A measurement along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measure {
    /// The smallest size the widget can usefully occupy.
    pub min: u32,
    /// The size the widget would occupy given free rein.
    pub natural: u32,
}

/// Capabilities a container consumes from its hosting framework.
pub trait Host {
    /// The current parent of a widget, if any.
    fn parent(&self, widget: WidgetId) -> Option<WidgetId>;

    /// Make `child` a child of `parent` in the widget tree. Fails if the
    /// child is already parented.
    fn attach(&mut self, parent: WidgetId, child: WidgetId) -> Result<()>;

    /// Sever a widget from its parent. Fails if the widget has no parent.
    fn detach(&mut self, child: WidgetId) -> Result<()>;

    /// Measure a widget along one axis. `for_size` constrains the opposite
    /// axis; `None` measures unconstrained.
    fn measure(&mut self, widget: WidgetId, axis: Axis, for_size: Option<u32>) -> Measure;

    /// Assign a widget its on-screen geometry.
    fn allocate(&mut self, widget: WidgetId, rect: Rect) -> Result<()>;

    /// The geometry last assigned to a widget, if it has been allocated.
    fn allocation(&self, widget: WidgetId) -> Option<Rect>;

    /// Emit the widget's "resize" notification to any listeners.
    fn notify_resize(&mut self, widget: WidgetId, size: Expanse);
}
