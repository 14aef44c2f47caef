use alloc::sync::Arc;

use crate::{LockMode, Orientation};

/// A callback fired once per processed move tick, with the moved surface.
///
/// It fires even when the tick left the position unchanged (e.g. clamped to the bound it already
/// held): scroll adapters rely on hearing about every tick.
pub type OnMoveCallback<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Configuration for [`crate::Draggable`].
pub struct DraggableOptions<S> {
    /// Keeps the surface inside its parent.
    pub bound: bool,
    pub lock: LockMode,
    pub on_move: Option<OnMoveCallback<S>>,
}

impl<S> DraggableOptions<S> {
    pub fn new() -> Self {
        Self {
            bound: false,
            lock: LockMode::None,
            on_move: None,
        }
    }

    pub fn with_bound(mut self, bound: bool) -> Self {
        self.bound = bound;
        self
    }

    pub fn with_lock(mut self, lock: LockMode) -> Self {
        self.lock = lock;
        self
    }

    pub fn with_on_move(mut self, on_move: Option<impl Fn(&S) + Send + Sync + 'static>) -> Self {
        self.on_move = on_move.map(|f| Arc::new(f) as _);
        self
    }
}

impl<S> Default for DraggableOptions<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for DraggableOptions<S> {
    fn clone(&self) -> Self {
        Self {
            bound: self.bound,
            lock: self.lock,
            on_move: self.on_move.clone(),
        }
    }
}

impl<S> core::fmt::Debug for DraggableOptions<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DraggableOptions")
            .field("bound", &self.bound)
            .field("lock", &self.lock)
            .field("on_move", &self.on_move.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Configuration for a scroller built from a draggable handle.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollerOptions {
    pub orientation: Orientation,
    /// Content pixels moved per wheel tick or button repeat.
    pub scroll_distance: f32,
    /// Repeat interval while an up/down control is held.
    pub hold_repeat_interval_ms: u64,
    /// Floor for the computed handle length.
    pub min_handle_length: f32,
    /// Fixed chrome (e.g. up/down buttons) subtracted from the proportional handle length.
    pub chrome_length: f32,
}

impl ScrollerOptions {
    pub fn new() -> Self {
        Self {
            orientation: Orientation::Vertical,
            scroll_distance: 60.0,
            hold_repeat_interval_ms: 50,
            min_handle_length: 13.0,
            chrome_length: 0.0,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_scroll_distance(mut self, scroll_distance: f32) -> Self {
        self.scroll_distance = scroll_distance;
        self
    }

    pub fn with_hold_repeat_interval_ms(mut self, interval_ms: u64) -> Self {
        self.hold_repeat_interval_ms = interval_ms;
        self
    }

    pub fn with_min_handle_length(mut self, min_handle_length: f32) -> Self {
        self.min_handle_length = min_handle_length;
        self
    }

    pub fn with_chrome_length(mut self, chrome_length: f32) -> Self {
        self.chrome_length = chrome_length;
        self
    }
}

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self::new()
    }
}
