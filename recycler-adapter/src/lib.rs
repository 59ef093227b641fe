//! Viewport adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and focuses on the core pool math and state. This
//! crate provides the thin shim a host scroll container needs on top of it:
//!
//! - Scroll-delta bookkeeping (the engine consumes deltas, hosts report positions)
//! - The two-phase initialization handshake with the host's layout pass
//! - Suppression of scroll notifications while the pool is not yet ready
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod adapter;

#[cfg(test)]
mod tests;

pub use adapter::{AdapterState, ViewportAdapter};
