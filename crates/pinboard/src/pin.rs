//! Per-child geometry records.

use crate::host::WidgetId;

/// A child's entry in the container registry: the widget handle plus its
/// pinned geometry. The container tracks geometry only; the widget's
/// lifecycle belongs to the hosting framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    /// The pinned widget.
    pub widget: WidgetId,
    /// X offset from the container origin.
    pub x: i32,
    /// Y offset from the container origin.
    pub y: i32,
    /// Width override. `None` means "use the child's natural width at
    /// allocation time".
    pub w: Option<u32>,
    /// Height override. `None` means "use the child's natural height at
    /// allocation time".
    pub h: Option<u32>,
}

impl Pin {
    /// A fresh pin at the origin with no size overrides.
    pub fn new(widget: WidgetId) -> Self {
        Self {
            widget,
            x: 0,
            y: 0,
            w: None,
            h: None,
        }
    }
}
