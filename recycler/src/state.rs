/// A lightweight, serializable snapshot of the circular window over the pool.
///
/// `top_slot` and `bottom_slot` name the pool slots currently holding the topmost and
/// bottommost cells; `bound_count` is one past the highest data index ever bound. The
/// slots read circularly from `top_slot` always hold the consecutive data indices
/// `bound_count - len .. bound_count`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub top_slot: usize,
    pub bottom_slot: usize,
    pub bound_count: usize,
}

/// A lightweight snapshot of the pool's fixed geometry.
///
/// Useful for hosts that size scrollbars or spacers: `content_extent` is the extent the
/// content container should report (`len * cell_extent`), not the full virtual length.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolGeometry {
    pub len: usize,
    pub cell_extent: f32,
    pub content_extent: f32,
}
