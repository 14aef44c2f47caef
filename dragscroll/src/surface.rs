use crate::{Dim, Position, Size};

/// A positioned visual element inside a parent coordinate frame.
///
/// This is the only seam between the engine and a UI toolkit. The engine never owns the parent;
/// it only queries its size and page offset.
pub trait Surface {
    /// Position relative to the parent.
    fn position(&self) -> Position;

    fn set_position(&mut self, dim: Dim, value: f32);

    /// Outer size, optionally including margin.
    fn outer_size(&self, include_margin: bool) -> Size;

    /// Sets the outer length along a dimension (height for `Top`, width for `Left`).
    fn set_length(&mut self, dim: Dim, value: f32);

    /// Outer size of the parent.
    fn parent_size(&self) -> Size;

    /// Top-left of the parent in the shared page coordinate space.
    fn parent_offset(&self) -> Position;

    /// Top-left of this surface in the shared page coordinate space.
    fn page_position(&self) -> Position {
        let parent = self.parent_offset();
        let pos = self.position();
        Position {
            top: parent.top + pos.top,
            left: parent.left + pos.left,
        }
    }
}

/// The parent frame of a [`BoxSurface`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub offset: Position,
    pub size: Size,
}

impl Frame {
    pub fn new(offset: Position, size: Size) -> Self {
        Self { offset, size }
    }
}

/// An in-memory [`Surface`] for adapters that keep their own layout tree (and for tests).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxSurface {
    pub position: Position,
    pub size: Size,
    /// Total margin along each axis (both sides combined).
    pub margin: Size,
    pub parent: Frame,
}

impl BoxSurface {
    pub fn new(position: Position, size: Size, parent: Frame) -> Self {
        Self {
            position,
            size,
            margin: Size::default(),
            parent,
        }
    }

    pub fn with_margin(mut self, margin: Size) -> Self {
        self.margin = margin;
        self
    }
}

impl Surface for BoxSurface {
    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, dim: Dim, value: f32) {
        self.position.set(dim, value);
    }

    fn outer_size(&self, include_margin: bool) -> Size {
        if include_margin {
            Size {
                width: self.size.width + self.margin.width,
                height: self.size.height + self.margin.height,
            }
        } else {
            self.size
        }
    }

    fn set_length(&mut self, dim: Dim, value: f32) {
        self.size.set_along(dim, value);
    }

    fn parent_size(&self) -> Size {
        self.parent.size
    }

    fn parent_offset(&self) -> Position {
        self.parent.offset
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn position(&self) -> Position {
        (**self).position()
    }

    fn set_position(&mut self, dim: Dim, value: f32) {
        (**self).set_position(dim, value);
    }

    fn outer_size(&self, include_margin: bool) -> Size {
        (**self).outer_size(include_margin)
    }

    fn set_length(&mut self, dim: Dim, value: f32) {
        (**self).set_length(dim, value);
    }

    fn parent_size(&self) -> Size {
        (**self).parent_size()
    }

    fn parent_offset(&self) -> Position {
        (**self).parent_offset()
    }
}
