use dragscroll::{
    Dim, Draggable, DraggableOptions, Point, ScrollDirection, ScrollMapping, ScrollState,
    ScrollerOptions, Surface,
};

use crate::HoldRepeat;

/// A framework-neutral scroller: a bounded draggable handle in a track, driving the offset of a
/// content surface inside its pane.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `press` / `pointer_move` / `release` for handle drags
/// - `wheel` for wheel ticks and `hold_start` / `hold_stop` for the up/down controls
/// - `tick(now_ms)` each frame/timer tick, for press-and-hold repeats
/// - `resize_handle` whenever the content size changes (it is not observed automatically)
///
/// Geometry comes from the surfaces themselves: the track is the handle's parent and the pane is
/// the content's parent.
#[derive(Clone, Debug)]
pub struct ScrollController<H, C> {
    handle: Draggable<H>,
    content: C,
    options: ScrollerOptions,
    hold: HoldRepeat,
}

impl<H: Surface, C: Surface> ScrollController<H, C> {
    pub fn new(handle: H, content: C, options: ScrollerOptions) -> Self {
        ddebug!(
            orientation = ?options.orientation,
            scroll_distance = options.scroll_distance,
            "ScrollController::new"
        );
        let handle = Draggable::new(
            handle,
            DraggableOptions::new()
                .with_bound(true)
                .with_lock(options.orientation.track_lock()),
        );
        let mut c = Self {
            handle,
            content,
            hold: HoldRepeat::new(options.hold_repeat_interval_ms),
            options,
        };
        c.resize_handle();
        c
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    pub fn handle(&self) -> &Draggable<H> {
        &self.handle
    }

    /// Direct access to the handle surface (e.g. after the track was laid out again).
    pub fn handle_surface_mut(&mut self) -> &mut H {
        self.handle.surface_mut()
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// Direct access to the content surface. Call [`Self::resize_handle`] after changing its size.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn into_parts(self) -> (H, C) {
        (self.handle.into_surface(), self.content)
    }

    pub fn is_enabled(&self) -> bool {
        self.handle.is_enabled()
    }

    pub fn is_holding(&self) -> bool {
        self.hold.is_active()
    }

    fn dim(&self) -> Dim {
        self.options.orientation.dim()
    }

    /// The current handle ↔ content mapping, read from the surfaces.
    pub fn mapping(&self) -> ScrollMapping {
        let dim = self.dim();
        let handle = self.handle.surface();
        ScrollMapping::new(
            handle.parent_size().along(dim),
            handle.outer_size(true).along(dim),
            self.content.parent_size().along(dim),
            self.content.outer_size(false).along(dim),
        )
    }

    pub fn is_scrollable(&self) -> bool {
        self.mapping().is_scrollable()
    }

    pub fn handle_position(&self) -> f32 {
        self.handle.surface().position().get(self.dim())
    }

    pub fn content_offset(&self) -> f32 {
        self.content.position().get(self.dim())
    }

    /// Returns a lightweight snapshot of the current scroll state.
    ///
    /// `handle_length` includes the handle's margin, matching [`Self::mapping`].
    pub fn state(&self) -> ScrollState {
        ScrollState {
            handle_position: self.handle_position(),
            handle_length: self.mapping().handle_length,
            content_offset: self.content_offset(),
        }
    }

    pub fn enable(&mut self) {
        self.handle.enable();
    }

    /// Detaches input handling: abandons any handle drag and cancels a pending hold repeat.
    pub fn disable(&mut self) {
        self.hold.stop();
        self.handle.disable();
    }

    /// Whether a page-space pointer lies over the handle.
    pub fn handle_contains(&self, pointer: Point) -> bool {
        self.handle.contains(pointer)
    }

    pub fn press(&mut self, pointer: Point) -> bool {
        self.handle.press(pointer)
    }

    /// Drags the handle and repositions the content. Returns the content offset when the move was
    /// processed.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<f32> {
        self.handle.pointer_move(pointer)?;
        Some(self.sync_content())
    }

    pub fn release(&mut self) -> bool {
        self.handle.release()
    }

    /// Scrolls one `scroll_distance` step of content pixels in `direction`.
    ///
    /// The step goes through the handle's range clamp, so it stops at either end. Returns the new
    /// content offset, or `None` when there is nothing to scroll.
    pub fn scroll_by(&mut self, direction: ScrollDirection) -> Option<f32> {
        let mapping = self.mapping();
        if mapping.handle_length <= 0.0 || !mapping.is_scrollable() {
            return None;
        }
        let delta = direction.sign() * mapping.weight(self.options.scroll_distance);
        let target = self.handle_position() + delta;
        let dim = self.dim();
        self.handle.move_element(dim, target)?;
        Some(self.sync_content())
    }

    /// Handles a wheel tick; a positive delta means "up".
    pub fn wheel(&mut self, delta: f32) -> Option<f32> {
        if !self.handle.is_enabled() {
            return None;
        }
        let direction = ScrollDirection::from_wheel_delta(delta)?;
        self.scroll_by(direction)
    }

    /// Presses an up/down control: scrolls once now and arms the repeat.
    pub fn hold_start(&mut self, direction: ScrollDirection, now_ms: u64) -> Option<f32> {
        if !self.handle.is_enabled() {
            return None;
        }
        self.hold.start(direction, now_ms);
        self.scroll_by(direction)
    }

    /// Releases the up/down control. No repeat fires afterwards.
    pub fn hold_stop(&mut self) -> bool {
        self.hold.stop()
    }

    /// Fires the hold repeats due by `now_ms`, one scroll step each, in order.
    ///
    /// Returns the content offset after the last step that scrolled.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let direction = self.hold.direction()?;
        let due = self.hold.poll(now_ms);
        let mut offset = None;
        for _ in 0..due {
            if let Some(off) = self.scroll_by(direction) {
                offset = Some(off);
            }
        }
        offset
    }

    /// Places the content at `content_offset` (clamped to the scrollable range) and moves the
    /// handle to match.
    pub fn scroll_to(&mut self, content_offset: f32) -> Option<f32> {
        if !content_offset.is_finite() {
            dwarn!(content_offset, "ScrollController::scroll_to: non-finite offset");
            return None;
        }
        let mapping = self.mapping();
        if !mapping.is_scrollable() {
            return None;
        }
        let offset = mapping.clamp_content_offset(content_offset);
        let dim = self.dim();
        self.handle.move_element(dim, mapping.handle_position(offset))?;
        Some(self.sync_content())
    }

    /// Recomputes the handle length from the pane and content sizes, then reflows.
    ///
    /// The content keeps its offset where the new size allows it; otherwise it is pulled back into
    /// range. With no overflow the handle length is `0` and the content sits at `0`.
    pub fn resize_handle(&mut self) -> f32 {
        let dim = self.dim();
        let pane = self.content.parent_size().along(dim);
        let content = self.content.outer_size(false).along(dim);
        let len = ScrollMapping::handle_length_for(
            pane,
            content,
            self.options.chrome_length,
            self.options.min_handle_length,
        );
        ddebug!(pane, content, handle_length = len, "ScrollController::resize_handle");

        let offset = self.content_offset();
        self.handle.surface_mut().set_length(dim, len);

        let mapping = self.mapping();
        let handle_position = if mapping.is_scrollable() {
            mapping.handle_position(mapping.clamp_content_offset(offset))
        } else {
            0.0
        };
        self.handle.move_element(dim, handle_position);
        self.sync_content();
        len
    }

    fn sync_content(&mut self) -> f32 {
        let mapping = self.mapping();
        let offset = mapping.clamp_content_offset(mapping.content_offset(self.handle_position()));
        let dim = self.dim();
        self.content.set_position(dim, offset);
        offset
    }
}
