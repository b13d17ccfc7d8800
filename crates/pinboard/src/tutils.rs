//! Test helpers: an in-memory host framework.
//!
//! [`TestHost`] keeps a flat arena of widget records and an ordered log of
//! every interaction, so tests can assert not just end state but call order
//! (the resize notification must precede child allocations, and a resize
//! override must allocate immediately).

use geom::{Axis, Expanse, Rect};
use slotmap::SlotMap;

use crate::{
    error::Error,
    host::{Host, Measure, WidgetId},
    Result,
};

/// A recorded host interaction, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A widget was attached to a parent.
    Attach {
        /// The new parent.
        parent: WidgetId,
        /// The attached widget.
        child: WidgetId,
    },
    /// A widget was severed from its parent.
    Detach {
        /// The detached widget.
        child: WidgetId,
    },
    /// A widget received an allocation.
    Allocate {
        /// The allocated widget.
        widget: WidgetId,
        /// The geometry assigned.
        rect: Rect,
    },
    /// A widget emitted its resize notification.
    Resize {
        /// The notifying widget.
        widget: WidgetId,
        /// The new size.
        size: Expanse,
    },
}

/// Arena entry for one widget.
#[derive(Debug, Default)]
struct WidgetRec {
    /// Current parent, if attached.
    parent: Option<WidgetId>,
    /// Unconstrained preferred size.
    natural: Expanse,
    /// Last allocation pushed through the host.
    allocation: Option<Rect>,
}

/// An in-memory widget arena implementing [`Host`].
#[derive(Debug, Default)]
pub struct TestHost {
    /// Widget records.
    widgets: SlotMap<WidgetId, WidgetRec>,
    /// Ordered interaction log.
    pub log: Vec<HostEvent>,
}

impl TestHost {
    /// Construct an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget with the given natural size.
    pub fn widget(&mut self, natural: impl Into<Expanse>) -> WidgetId {
        self.widgets.insert(WidgetRec {
            parent: None,
            natural: natural.into(),
            allocation: None,
        })
    }

    /// Discard the interaction log.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// The allocations in the log, in order.
    pub fn allocations(&self) -> Vec<(WidgetId, Rect)> {
        self.log
            .iter()
            .filter_map(|event| match event {
                HostEvent::Allocate { widget, rect } => Some((*widget, *rect)),
                _ => None,
            })
            .collect()
    }
}

impl Host for TestHost {
    fn parent(&self, widget: WidgetId) -> Option<WidgetId> {
        self.widgets.get(widget).and_then(|rec| rec.parent)
    }

    fn attach(&mut self, parent: WidgetId, child: WidgetId) -> Result<()> {
        let rec = self
            .widgets
            .get_mut(child)
            .ok_or_else(|| Error::Host(format!("attach: unknown widget {child:?}")))?;
        if rec.parent.is_some() {
            return Err(Error::Host(format!("attach: {child:?} already parented")));
        }
        rec.parent = Some(parent);
        self.log.push(HostEvent::Attach { parent, child });
        Ok(())
    }

    fn detach(&mut self, child: WidgetId) -> Result<()> {
        let rec = self
            .widgets
            .get_mut(child)
            .ok_or_else(|| Error::Host(format!("detach: unknown widget {child:?}")))?;
        if rec.parent.is_none() {
            return Err(Error::Host(format!("detach: {child:?} has no parent")));
        }
        rec.parent = None;
        self.log.push(HostEvent::Detach { child });
        Ok(())
    }

    fn measure(&mut self, widget: WidgetId, axis: Axis, _for_size: Option<u32>) -> Measure {
        let natural = self
            .widgets
            .get(widget)
            .map(|rec| rec.natural.along(axis))
            .unwrap_or_default();
        Measure { min: 0, natural }
    }

    fn allocate(&mut self, widget: WidgetId, rect: Rect) -> Result<()> {
        let rec = self
            .widgets
            .get_mut(widget)
            .ok_or_else(|| Error::Host(format!("allocate: unknown widget {widget:?}")))?;
        rec.allocation = Some(rect);
        self.log.push(HostEvent::Allocate { widget, rect });
        Ok(())
    }

    fn allocation(&self, widget: WidgetId) -> Option<Rect> {
        self.widgets.get(widget).and_then(|rec| rec.allocation)
    }

    fn notify_resize(&mut self, widget: WidgetId, size: Expanse) {
        self.log.push(HostEvent::Resize { widget, size });
    }
}
