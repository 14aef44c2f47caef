use crate::{BoundState, LockMode, Position};

/// A lightweight, serializable snapshot of a draggable's state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragState {
    pub position: Position,
    pub enabled: bool,
    pub dragging: bool,
    pub bound: BoundState,
    pub lock: LockMode,
}

/// A lightweight, serializable snapshot of a scroller's state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub handle_position: f32,
    pub handle_length: f32,
    pub content_offset: f32,
}
