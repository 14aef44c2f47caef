use crate::Point;

/// The state of one press → move → release session.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    /// Pointer position minus the surface's top-left at press time.
    pub click_offset: Point,
    /// Last recorded pointer position.
    pub last: Point,
}

/// Records a pointer session and yields per-move deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    session: Option<DragSession>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session, replacing any previous one.
    pub fn start(&mut self, pointer: Point, click_offset: Point) {
        self.session = Some(DragSession {
            click_offset,
            last: pointer,
        });
    }

    /// Returns the delta from the last recorded pointer position.
    ///
    /// The recorded position is updated on every call, whatever the caller does with the delta,
    /// so the next delta stays relative to the pointer and not to a clamped surface.
    ///
    /// Returns `None` when no session is active.
    pub fn move_to(&mut self, pointer: Point) -> Option<Point> {
        let session = self.session.as_mut()?;
        let delta = Point {
            x: pointer.x - session.last.x,
            y: pointer.y - session.last.y,
        };
        session.last = pointer;
        Some(delta)
    }

    /// Closes the session. Returns `true` if one was active.
    pub fn stop(&mut self) -> bool {
        self.session.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }
}
