//! A headless cell-recycling engine for long scrolling lists.
//!
//! For adapter-level utilities (scroll-delta bookkeeping, lifecycle handshake), see the
//! `recycler-adapter` crate.
//!
//! Rendering a list of a million rows does not require a million row widgets: a small,
//! fixed pool of cells is enough to cover the viewport plus a little slack. This crate
//! owns that pool and the bookkeeping that preserves the illusion of a full list: which
//! data index each pooled cell currently represents, when a cell must be rebound as the
//! viewport moves, and how cells are repositioned so a scroll step costs O(1) regardless
//! of the list length.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport and content geometry (once layout has settled)
//! - scroll deltas as the user moves the list
//! - a [`DataSource`] that populates a cell for a given data index
//!
//! In return, every scroll notification yields a correction [`Offset`] the host must fold
//! into its own scroll bookkeeping, because the engine re-homes cells inside the content
//! container instead of materializing the full list extent.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cell;
mod error;
mod options;
mod recycler;
mod source;
mod state;
mod types;


pub use cell::Cell;
pub use error::RecyclerError;
pub use options::RecyclerOptions;
pub use recycler::Recycler;
pub use source::{BindError, DataSource};
pub use state::{PoolGeometry, WindowState};
pub use types::{Bounds, Offset, Rect};
