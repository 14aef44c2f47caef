use alloc::sync::Arc;

use crate::bound::{AxisGeometry, BoundClamp};
use crate::{
    AxisLock, BoundState, Dim, DragState, DraggableOptions, LockMode, Point, PointerTracker,
    Position, Surface,
};

/// Pointer-driven repositioning of a surface inside its parent.
///
/// This type is UI-agnostic: the adapter owns event dispatch and forwards presses that land on
/// the surface (`press`), pointer moves anywhere on the page (`pointer_move`) and releases
/// (`release`), all in the same page coordinate space.
///
/// Each processed move tick writes at most one value per axis and then fires `on_move`.
#[derive(Clone, Debug)]
pub struct Draggable<S> {
    surface: S,
    options: DraggableOptions<S>,
    lock: AxisLock,
    tracker: PointerTracker,
    clamp: BoundClamp,
    enabled: bool,
}

impl<S: Surface> Draggable<S> {
    pub fn new(surface: S, options: DraggableOptions<S>) -> Self {
        ddebug!(bound = options.bound, lock = ?options.lock, "Draggable::new");
        Self {
            lock: AxisLock::new(options.lock),
            clamp: BoundClamp::new(options.bound),
            tracker: PointerTracker::new(),
            enabled: true,
            surface,
            options,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct access for the adapter (e.g. to update geometry after a layout pass).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn options(&self) -> &DraggableOptions<S> {
        &self.options
    }

    pub fn set_bound(&mut self, bound: bool) {
        self.options.bound = bound;
        self.clamp.set_enabled(bound);
    }

    pub fn set_on_move(&mut self, on_move: Option<impl Fn(&S) + Send + Sync + 'static>) {
        self.options.on_move = on_move.map(|f| Arc::new(f) as _);
    }

    /// Re-applies the axis lock. Safe to call mid-session.
    pub fn lock(&mut self, mode: LockMode) {
        self.options.lock = mode;
        self.lock.configure(mode);
    }

    pub fn lock_mode(&self) -> LockMode {
        self.lock.mode()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn bound_state(&self) -> BoundState {
        self.clamp.state()
    }

    /// Re-attaches input handling with fresh (non-dragging) state.
    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        self.tracker.stop();
        self.clamp.reset();
    }

    /// Detaches input handling and abandons any active session without further writes.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        if self.tracker.stop() {
            dtrace!("Draggable::disable: session abandoned");
        }
        self.clamp.reset();
    }

    /// Whether a page-space pointer lies over the surface.
    pub fn contains(&self, pointer: Point) -> bool {
        let page = self.surface.page_position();
        let size = self.surface.outer_size(false);
        page.left <= pointer.x
            && pointer.x <= page.left + size.width
            && page.top <= pointer.y
            && pointer.y <= page.top + size.height
    }

    /// Starts a drag session. Returns `false` when disabled or the pointer is not finite.
    pub fn press(&mut self, pointer: Point) -> bool {
        if !self.enabled {
            return false;
        }
        if !pointer.is_finite() {
            dwarn!(x = pointer.x, y = pointer.y, "Draggable::press: non-finite pointer");
            debug_assert!(pointer.is_finite(), "Draggable::press: non-finite pointer");
            return false;
        }
        let page = self.surface.page_position();
        let click_offset = Point {
            x: pointer.x - page.left,
            y: pointer.y - page.top,
        };
        dtrace!(x = pointer.x, y = pointer.y, "Draggable::press");
        self.clamp.reset();
        self.tracker.start(pointer, click_offset);
        true
    }

    /// Processes a pointer move of the active session.
    ///
    /// Returns the surface position after the tick, or `None` if no session is active (nothing
    /// is written and `on_move` does not fire).
    pub fn pointer_move(&mut self, pointer: Point) -> Option<Position> {
        if !self.enabled {
            return None;
        }
        if !pointer.is_finite() {
            dwarn!(x = pointer.x, y = pointer.y, "Draggable::pointer_move: non-finite pointer");
            return None;
        }
        let delta = self.tracker.move_to(pointer)?;
        let click_offset = self.tracker.session()?.click_offset;

        for dim in Dim::ALL {
            if !self.lock.allows(dim) {
                continue;
            }
            let candidate = self.surface.position().get(dim) + delta.get(dim);
            let geometry = self.geometry(dim);
            let decision = self.clamp.check(
                dim,
                geometry,
                pointer.get(dim),
                click_offset.get(dim),
                candidate,
            );
            if let Some(value) = decision.value() {
                self.surface.set_position(dim, value);
            }
        }

        self.notify();
        Some(self.surface.position())
    }

    /// Ends the drag session. A release with no active session is a no-op returning `false`.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.tracker.stop();
        if was_dragging {
            dtrace!("Draggable::release");
        }
        was_dragging
    }

    /// Moves the surface along one dimension without a pointer.
    ///
    /// The value is range-clamped to `[0, max]` even when pointer bounding is off. A locked
    /// dimension is never written; in that case (or for a non-finite value) this returns `None`
    /// and `on_move` does not fire.
    pub fn move_element(&mut self, dim: Dim, value: f32) -> Option<f32> {
        if !value.is_finite() {
            dwarn!(?dim, value, "Draggable::move_element: non-finite value");
            return None;
        }
        if !self.lock.allows(dim) {
            return None;
        }
        let value = self.clamp.clamp_range(self.geometry(dim), value);
        dtrace!(?dim, value, "Draggable::move_element");
        self.surface.set_position(dim, value);
        self.notify();
        Some(value)
    }

    /// Moves both dimensions without a pointer, firing `on_move` once.
    ///
    /// Same clamping and lock rules as [`Self::move_element`].
    pub fn move_to(&mut self, position: Position) -> Position {
        let mut wrote = false;
        for dim in Dim::ALL {
            let value = position.get(dim);
            if !value.is_finite() || !self.lock.allows(dim) {
                continue;
            }
            let value = self.clamp.clamp_range(self.geometry(dim), value);
            self.surface.set_position(dim, value);
            wrote = true;
        }
        if wrote {
            self.notify();
        }
        self.surface.position()
    }

    /// The largest position along `dim` that keeps the surface inside its parent.
    pub fn max_bound(&self, dim: Dim) -> f32 {
        self.geometry(dim).max_bound()
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> DragState {
        DragState {
            position: self.surface.position(),
            enabled: self.enabled,
            dragging: self.tracker.is_active(),
            bound: self.clamp.state(),
            lock: self.lock.mode(),
        }
    }

    fn geometry(&self, dim: Dim) -> AxisGeometry {
        AxisGeometry {
            parent_offset: self.surface.parent_offset().get(dim),
            parent_size: self.surface.parent_size().along(dim),
            surface_size: self.surface.outer_size(true).along(dim),
        }
    }

    fn notify(&self) {
        if let Some(cb) = &self.options.on_move {
            cb(&self.surface);
        }
    }
}
