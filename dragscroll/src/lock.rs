use crate::Dim;

/// Which movement to lock out.
///
/// The mode names the axis that is *locked*: `Horizontal` stops horizontal movement and leaves
/// only vertical, `Both` stops all movement and `None` leaves the surface free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LockMode {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

/// Per-axis movement permissions derived from a [`LockMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisLock {
    mode: LockMode,
    pub move_horizontal: bool,
    pub move_vertical: bool,
}

impl AxisLock {
    pub fn new(mode: LockMode) -> Self {
        let mut lock = Self {
            mode,
            move_horizontal: true,
            move_vertical: true,
        };
        lock.configure(mode);
        lock
    }

    pub fn configure(&mut self, mode: LockMode) {
        let (horizontal, vertical) = match mode {
            LockMode::None => (true, true),
            LockMode::Horizontal => (false, true),
            LockMode::Vertical => (true, false),
            LockMode::Both => (false, false),
        };
        self.mode = mode;
        self.move_horizontal = horizontal;
        self.move_vertical = vertical;
    }

    pub fn mode(&self) -> LockMode {
        self.mode
    }

    /// Whether the coordinate for `dim` may be written.
    pub fn allows(&self, dim: Dim) -> bool {
        match dim {
            Dim::Top => self.move_vertical,
            Dim::Left => self.move_horizontal,
        }
    }
}

impl Default for AxisLock {
    fn default() -> Self {
        Self::new(LockMode::None)
    }
}

impl From<LockMode> for AxisLock {
    fn from(mode: LockMode) -> Self {
        Self::new(mode)
    }
}
