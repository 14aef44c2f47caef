/// A positional dimension of a surface inside its parent.
///
/// `Top` is the vertical axis, `Left` the horizontal one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dim {
    Top,
    Left,
}

impl Dim {
    pub const ALL: [Dim; 2] = [Dim::Top, Dim::Left];
}

/// The axis a scroller scrolls along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// The dimension the handle travels along.
    pub fn dim(self) -> Dim {
        match self {
            Self::Vertical => Dim::Top,
            Self::Horizontal => Dim::Left,
        }
    }

    /// The lock mode that pins the handle to its track axis.
    pub fn track_lock(self) -> crate::LockMode {
        match self {
            Self::Vertical => crate::LockMode::Horizontal,
            Self::Horizontal => crate::LockMode::Vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// Towards the end of the content (handle moves away from the track start).
    Forward,
    /// Towards the start of the content.
    Backward,
}

impl ScrollDirection {
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// Normalizes a wheel delta where a positive value means "up".
    ///
    /// Returns `None` for a zero or non-finite delta.
    pub fn from_wheel_delta(delta: f32) -> Option<Self> {
        if !delta.is_finite() || delta == 0.0 {
            return None;
        }
        Some(if delta > 0.0 {
            Self::Backward
        } else {
            Self::Forward
        })
    }
}

/// A pointer location in the shared page/viewport coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn get(&self, dim: Dim) -> f32 {
        match dim {
            Dim::Top => self.y,
            Dim::Left => self.x,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A top-left position, either relative to a parent or in page space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

impl Position {
    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    pub fn get(&self, dim: Dim) -> f32 {
        match dim {
            Dim::Top => self.top,
            Dim::Left => self.left,
        }
    }

    pub fn set(&mut self, dim: Dim, value: f32) {
        match dim {
            Dim::Top => self.top = value,
            Dim::Left => self.left = value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The extent along a dimension: height for `Top`, width for `Left`.
    pub fn along(&self, dim: Dim) -> f32 {
        match dim {
            Dim::Top => self.height,
            Dim::Left => self.width,
        }
    }

    pub fn set_along(&mut self, dim: Dim, value: f32) {
        match dim {
            Dim::Top => self.height = value,
            Dim::Left => self.width = value,
        }
    }
}
