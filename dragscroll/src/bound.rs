use crate::Dim;

/// The outcome of a bound check for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Clamp {
    /// Write this value.
    Allow(f32),
    /// Write this bound (0 or the max bound); the axis is now sticky.
    SnapToBound(f32),
    /// Do not write anything.
    Reject,
}

impl Clamp {
    /// The value to write, if any.
    pub fn value(self) -> Option<f32> {
        match self {
            Self::Allow(v) | Self::SnapToBound(v) => Some(v),
            Self::Reject => None,
        }
    }
}

/// Per-axis sticky flags.
///
/// A flag is set while the last processed pointer coordinate for that axis lay outside its
/// re-entry window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundState {
    pub at_bound_left: bool,
    pub at_bound_top: bool,
}

impl BoundState {
    pub fn get(&self, dim: Dim) -> bool {
        match dim {
            Dim::Top => self.at_bound_top,
            Dim::Left => self.at_bound_left,
        }
    }

    fn set(&mut self, dim: Dim, value: bool) {
        match dim {
            Dim::Top => self.at_bound_top = value,
            Dim::Left => self.at_bound_left = value,
        }
    }
}

/// Geometry of a surface along one axis, in the parent's frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisGeometry {
    /// Parent's near edge in page space.
    pub parent_offset: f32,
    pub parent_size: f32,
    /// Surface outer size including margin.
    pub surface_size: f32,
}

impl AxisGeometry {
    pub fn max_bound(&self) -> f32 {
        self.parent_size - self.surface_size
    }

    /// Clamping only makes sense for finite, positive sizes with a surface that fits.
    pub fn is_clampable(&self) -> bool {
        self.parent_offset.is_finite()
            && self.parent_size.is_finite()
            && self.surface_size.is_finite()
            && self.parent_size > 0.0
            && self.surface_size > 0.0
            && self.max_bound() >= 0.0
    }

    /// The pointer range for which the grabbed point keeps the surface inside the parent.
    pub fn pointer_window(&self, click_offset: f32) -> (f32, f32) {
        let near = self.parent_offset + click_offset;
        (near, near + self.max_bound())
    }
}

/// Rectangular bound clamping with sticky edge re-entry.
///
/// Once an axis snaps to an edge it stays there, without further writes, until the pointer comes
/// back into the window matching the point where the surface was grabbed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundClamp {
    enabled: bool,
    state: BoundState,
}

impl BoundClamp {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            state: BoundState::default(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset();
        }
    }

    pub fn state(&self) -> BoundState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = BoundState::default();
    }

    /// Decides what to do with a pointer-driven candidate position.
    pub fn check(
        &mut self,
        dim: Dim,
        geometry: AxisGeometry,
        pointer: f32,
        click_offset: f32,
        candidate: f32,
    ) -> Clamp {
        if !candidate.is_finite() {
            dwarn!(?dim, "BoundClamp: non-finite candidate");
            return Clamp::Reject;
        }
        if !self.enabled || !geometry.is_clampable() {
            return Clamp::Allow(candidate);
        }

        let max = geometry.max_bound();
        let (near, far) = geometry.pointer_window(click_offset);
        if near <= pointer && pointer <= far {
            self.state.set(dim, false);
            return Clamp::Allow(candidate.clamp(0.0, max));
        }

        if self.state.get(dim) {
            return Clamp::Reject;
        }
        self.state.set(dim, true);
        let bound = if pointer < near { 0.0 } else { max };
        dtrace!(?dim, pointer, bound, "BoundClamp: snap");
        Clamp::SnapToBound(bound)
    }

    /// Range clamp for programmatic moves, where there is no pointer to test against.
    ///
    /// Applies whether or not pointer bounding is enabled; only degenerate geometry lets the value
    /// through unchanged.
    pub fn clamp_range(&self, geometry: AxisGeometry, value: f32) -> f32 {
        if !geometry.is_clampable() {
            return value;
        }
        value.clamp(0.0, geometry.max_bound())
    }
}
