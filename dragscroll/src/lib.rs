//! A headless drag-to-move and drag-to-scroll positioning engine.
//!
//! For the scroll controller, press-and-hold repeat and the controller registry, see the
//! `dragscroll-adapter` crate.
//!
//! This crate focuses on the positioning core: pointer delta tracking under axis locks,
//! rectangular bound clamping with sticky edge re-entry, and the linear mapping between a
//! scrollbar handle and a content offset.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - surface geometry through the [`Surface`] trait
//! - press / move / release input in a shared page coordinate space
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bound;
mod draggable;
mod lock;
mod mapping;
mod options;
mod pointer;
mod state;
mod surface;
mod types;

#[cfg(test)]
mod tests;

pub use bound::{AxisGeometry, BoundClamp, BoundState, Clamp};
pub use draggable::Draggable;
pub use lock::{AxisLock, LockMode};
pub use mapping::ScrollMapping;
pub use options::{DraggableOptions, OnMoveCallback, ScrollerOptions};
pub use pointer::{DragSession, PointerTracker};
pub use state::{DragState, ScrollState};
pub use surface::{BoxSurface, Frame, Surface};
pub use types::{Dim, Orientation, Point, Position, ScrollDirection, Size};
