//! The absolute-position container.

use geom::{Axis, Expanse, Point, Rect};
use tracing::{trace, warn};

use crate::{
    adjustment::{Adjustment, ScrollPolicy},
    error::Error,
    host::{Host, Measure, WidgetId},
    pin::Pin,
    Result,
};

/// A container that positions each child at an explicit offset, with
/// optional per-axis size overrides.
///
/// Registry order is insertion order and doubles as z-order, front at the
/// bottom of the visual stack. Children are never raised when shown, so a
/// later sibling paints beneath an earlier one where they overlap.
#[derive(Debug)]
pub struct Pinboard {
    /// This container's own widget handle in the hosting framework.
    id: WidgetId,
    /// Child registry, insertion-ordered.
    pins: Vec<Pin>,
    /// Horizontal scroll state, created lazily.
    hadjustment: Option<Adjustment>,
    /// Vertical scroll state, created lazily.
    vadjustment: Option<Adjustment>,
    /// Horizontal scroll sizing policy.
    hscroll_policy: ScrollPolicy,
    /// Vertical scroll sizing policy.
    vscroll_policy: ScrollPolicy,
    /// Whether this container draws on its own surface. When it shares the
    /// parent's surface, child positions are offset by the container origin
    /// at allocation time.
    owns_surface: bool,
    /// The container's current allocation, if it has one.
    allocation: Option<Rect>,
}

impl Pinboard {
    /// Construct an empty container drawing on its own surface. `id` is the
    /// container's handle in the hosting framework.
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            pins: Vec::new(),
            hadjustment: None,
            vadjustment: None,
            hscroll_policy: ScrollPolicy::default(),
            vscroll_policy: ScrollPolicy::default(),
            owns_surface: true,
            allocation: None,
        }
    }

    /// Variant for hosts where the container has no surface of its own and
    /// children are positioned on the parent's surface instead.
    pub fn on_shared_surface(id: WidgetId) -> Self {
        Self {
            owns_surface: false,
            ..Self::new(id)
        }
    }

    /// This container's widget handle.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// True if the container has no children.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// The registry entry for a widget, if present.
    pub fn pin(&self, widget: WidgetId) -> Option<&Pin> {
        self.pins.iter().find(|p| p.widget == widget)
    }

    /// The container's current allocation.
    pub fn allocation(&self) -> Option<Rect> {
        self.allocation
    }

    /// Register a child and attach it to this container in the hosting
    /// framework. The child starts at (0, 0) with both size overrides unset.
    ///
    /// Fails without mutating the registry if the widget already has a
    /// parent, this container included.
    pub fn add(&mut self, host: &mut dyn Host, widget: WidgetId) -> Result<()> {
        if let Some(parent) = host.parent(widget) {
            return Err(Error::AlreadyParented(format!(
                "{widget:?} is already a child of {parent:?}"
            )));
        }
        self.pins.push(Pin::new(widget));
        if let Err(e) = host.attach(self.id, widget) {
            self.pins.pop();
            return Err(e);
        }
        trace!(?widget, "added child");
        Ok(())
    }

    /// Detach a child from this container and drop its registry entry.
    ///
    /// Fails without mutating the registry if the widget's current parent is
    /// not this container. A widget that passes that check but has no
    /// registry entry is a warned no-op; it cannot happen under correct use.
    pub fn remove(&mut self, host: &mut dyn Host, widget: WidgetId) -> Result<()> {
        if host.parent(widget) != Some(self.id) {
            return Err(Error::NotAChild(format!(
                "{widget:?} is not a child of this container"
            )));
        }
        match self.pins.iter().position(|p| p.widget == widget) {
            Some(idx) => {
                host.detach(widget)?;
                self.pins.remove(idx);
                trace!(?widget, "removed child");
            }
            None => warn!(?widget, "remove: parented widget missing from registry"),
        }
        Ok(())
    }

    /// Update a child's pinned position. Does not push an allocation; the
    /// host's invalidation machinery picks the move up on its next pass.
    pub fn move_to(&mut self, widget: WidgetId, x: i32, y: i32) {
        match self.pins.iter_mut().find(|p| p.widget == widget) {
            Some(pin) => {
                pin.x = x;
                pin.y = y;
            }
            None => warn!(?widget, "move: widget not in registry"),
        }
    }

    /// Update a child's size overrides and re-allocate it immediately.
    ///
    /// The allocation is pushed synchronously rather than deferred to the
    /// next container pass: host relayout batching can be too coarse, and a
    /// deferred allocation shows up as visible sizing lag. The child keeps
    /// its current on-screen origin; unset axes resolve to the child's
    /// natural size.
    pub fn resize(
        &mut self,
        host: &mut dyn Host,
        widget: WidgetId,
        w: Option<u32>,
        h: Option<u32>,
    ) -> Result<()> {
        let Some(pin) = self.pins.iter_mut().find(|p| p.widget == widget) else {
            warn!(?widget, "resize: widget not in registry");
            return Ok(());
        };
        pin.w = w;
        pin.h = h;
        let pin = *pin;

        let origin = match host.allocation(widget) {
            Some(rect) => rect.tl,
            // Never allocated: fall back to the pinned position.
            None => self.child_origin(&pin),
        };
        let size = Self::effective_size(host, &pin);
        host.allocate(widget, Rect::at(origin, size))
    }

    /// Move a child to a new position in the z-order.
    ///
    /// With a sibling, the child is re-inserted immediately before it
    /// (`above` true) or immediately after it (`above` false). Without a
    /// sibling, or when the sibling is not in the registry, the child goes to
    /// the front of the order when `above` is true and to the back otherwise.
    /// An unknown widget is ignored.
    pub fn restack(&mut self, widget: WidgetId, sibling: Option<WidgetId>, above: bool) {
        let Some(idx) = self.pins.iter().position(|p| p.widget == widget) else {
            return;
        };
        let pin = self.pins.remove(idx);
        let at = match sibling.and_then(|s| self.pins.iter().position(|p| p.widget == s)) {
            Some(sibling_idx) => {
                if above {
                    sibling_idx
                } else {
                    sibling_idx + 1
                }
            }
            None => {
                if above {
                    0
                } else {
                    self.pins.len()
                }
            }
        };
        self.pins.insert(at, pin);
    }

    /// Measure the container along one axis.
    ///
    /// The minimum is always zero: the container imposes none of its own and
    /// defers entirely to explicit child geometry. The natural size is the
    /// largest unconstrained natural size among the children, overlay
    /// semantics rather than a stacked sum. `for_size` is part of the host
    /// measurement protocol but does not constrain children here.
    pub fn measure(&self, host: &mut dyn Host, axis: Axis, _for_size: Option<u32>) -> Measure {
        let mut natural = 0;
        for pin in &self.pins {
            natural = natural.max(host.measure(pin.widget, axis, None).natural);
        }
        Measure { min: 0, natural }
    }

    /// Accept an allocation and lay out every child.
    ///
    /// Emits exactly one resize notification with the new size before any
    /// child allocation; scrollbar and accessibility consumers rely on that
    /// ordering. Each child is then allocated in registry order from its
    /// pinned geometry, with unset axes resolved to the child's natural
    /// size. Geometry is recomputed from scratch on every call.
    pub fn allocate(&mut self, host: &mut dyn Host, alloc: Rect) -> Result<()> {
        self.allocation = Some(alloc);
        host.notify_resize(self.id, alloc.expanse());
        for pin in &self.pins {
            let origin = self.child_origin(pin);
            let size = Self::effective_size(host, pin);
            host.allocate(pin.widget, Rect::at(origin, size))?;
        }
        Ok(())
    }

    /// Call `f` for each child.
    ///
    /// External traversal (`include_internals` false) runs front-to-back in
    /// registry order, matching how hosts lay out and iterate children.
    /// Internal traversal (`include_internals` true) runs in exact reverse:
    /// since children are never raised when shown, the top-most widget under
    /// the pointer is the *last* one in the registry, and hit-testing or drag
    /// targeting over overlapping children must walk back-to-front to find
    /// it.
    pub fn for_each(&self, include_internals: bool, f: &mut dyn FnMut(WidgetId)) {
        if include_internals {
            for pin in self.pins.iter().rev() {
                f(pin.widget);
            }
        } else {
            for pin in &self.pins {
                f(pin.widget);
            }
        }
    }

    /// Iterate children in external (registry) order.
    pub fn children(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.pins.iter().map(|p| p.widget)
    }

    /// Detach every child and release scroll state. Called on container
    /// teardown, before the host releases the container widget itself.
    pub fn dispose(&mut self, host: &mut dyn Host) -> Result<()> {
        while let Some(pin) = self.pins.first().copied() {
            self.remove(host, pin.widget)?;
        }
        self.hadjustment = None;
        self.vadjustment = None;
        Ok(())
    }

    /// The horizontal adjustment, created with an empty range on first use.
    pub fn hadjustment(&mut self) -> &mut Adjustment {
        self.hadjustment.get_or_insert_with(Adjustment::default)
    }

    /// Replace the horizontal adjustment. `None` installs a default.
    pub fn set_hadjustment(&mut self, adjustment: Option<Adjustment>) {
        self.hadjustment = Some(adjustment.unwrap_or_default());
    }

    /// The vertical adjustment, created with an empty range on first use.
    pub fn vadjustment(&mut self) -> &mut Adjustment {
        self.vadjustment.get_or_insert_with(Adjustment::default)
    }

    /// Replace the vertical adjustment. `None` installs a default.
    pub fn set_vadjustment(&mut self, adjustment: Option<Adjustment>) {
        self.vadjustment = Some(adjustment.unwrap_or_default());
    }

    /// Horizontal scroll sizing policy.
    pub fn hscroll_policy(&self) -> ScrollPolicy {
        self.hscroll_policy
    }

    /// Set the horizontal scroll sizing policy.
    pub fn set_hscroll_policy(&mut self, policy: ScrollPolicy) {
        self.hscroll_policy = policy;
    }

    /// Vertical scroll sizing policy.
    pub fn vscroll_policy(&self) -> ScrollPolicy {
        self.vscroll_policy
    }

    /// Set the vertical scroll sizing policy.
    pub fn set_vscroll_policy(&mut self, policy: ScrollPolicy) {
        self.vscroll_policy = policy;
    }

    /// A child's allocation origin: its pinned position, offset by the
    /// container origin when children sit on the parent's surface.
    fn child_origin(&self, pin: &Pin) -> Point {
        let mut origin = Point::new(pin.x, pin.y);
        if !self.owns_surface {
            if let Some(alloc) = self.allocation {
                origin = origin + alloc.tl;
            }
        }
        origin
    }

    /// Resolve a pin's effective size, substituting the child's natural size
    /// for unset axes.
    fn effective_size(host: &mut dyn Host, pin: &Pin) -> Expanse {
        let w = match pin.w {
            Some(w) => w,
            None => host.measure(pin.widget, Axis::Horizontal, None).natural,
        };
        let h = match pin.h {
            Some(h) => h,
            None => host.measure(pin.widget, Axis::Vertical, None).natural,
        };
        Expanse::new(w, h)
    }
}
