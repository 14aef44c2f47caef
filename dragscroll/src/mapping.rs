/// Linear mapping between a handle's position in its track and a content offset in its pane.
///
/// Content offsets are non-positive: `0` shows the start of the content and
/// `-(content_size - pane_size)` shows its end.
///
/// When the content fits in the pane, or the handle fills the track, the mapping has no travel
/// and every conversion returns `0.0` instead of dividing by zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMapping {
    pub track_length: f32,
    pub handle_length: f32,
    pub pane_size: f32,
    pub content_size: f32,
}

impl ScrollMapping {
    pub fn new(track_length: f32, handle_length: f32, pane_size: f32, content_size: f32) -> Self {
        Self {
            track_length,
            handle_length,
            pane_size,
            content_size,
        }
    }

    /// Distance the handle can travel.
    pub fn handle_travel(&self) -> f32 {
        self.track_length - self.handle_length
    }

    /// Distance the content can travel.
    pub fn content_travel(&self) -> f32 {
        self.content_size - self.pane_size
    }

    pub fn is_scrollable(&self) -> bool {
        let handle = self.handle_travel();
        let content = self.content_travel();
        handle.is_finite() && content.is_finite() && handle > 0.0 && content > 0.0
    }

    pub fn content_offset(&self, handle_position: f32) -> f32 {
        if !self.is_scrollable() {
            return 0.0;
        }
        -handle_position * self.content_travel() / self.handle_travel()
    }

    pub fn handle_position(&self, content_offset: f32) -> f32 {
        if !self.is_scrollable() {
            return 0.0;
        }
        -content_offset * self.handle_travel() / self.content_travel()
    }

    /// Converts a content-pixel scroll step into the equivalent handle-pixel delta.
    pub fn weight(&self, scroll_distance: f32) -> f32 {
        if !self.is_scrollable() {
            return 0.0;
        }
        scroll_distance * self.handle_travel() / self.content_travel()
    }

    /// Clamps a content offset into `[-(content_size - pane_size), 0]`.
    pub fn clamp_content_offset(&self, content_offset: f32) -> f32 {
        if !self.is_scrollable() {
            return 0.0;
        }
        content_offset.clamp(-self.content_travel(), 0.0)
    }

    /// Proportional handle length for a pane showing part of the content.
    ///
    /// Returns `0.0` when the content fits (nothing to scroll); otherwise
    /// `pane * (pane / content) - chrome`, floored at `min_length`.
    pub fn handle_length_for(
        pane_size: f32,
        content_size: f32,
        chrome: f32,
        min_length: f32,
    ) -> f32 {
        if !(pane_size.is_finite() && content_size.is_finite()) || content_size <= pane_size {
            return 0.0;
        }
        let len = pane_size * (pane_size / content_size) - chrome;
        if len.is_finite() && len >= min_length {
            len
        } else {
            min_length
        }
    }
}
