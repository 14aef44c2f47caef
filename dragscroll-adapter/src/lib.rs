//! Adapter utilities for the `dragscroll` crate.
//!
//! The `dragscroll` crate is UI-agnostic and focuses on the positioning core. This crate
//! provides small, framework-neutral pieces commonly needed by adapters:
//!
//! - A scroll controller wiring a draggable handle to a content surface
//! - A press-and-hold repeat timer for up/down controls (adapter-driven)
//! - A registry mapping element handles to their controllers (attach-once)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod hold;
mod key;
mod registry;
mod scroller;


pub use hold::HoldRepeat;
pub use key::RegistryKey;
pub use registry::Registry;
pub use scroller::ScrollController;
