use alloc::string::String;

use crate::Cell;

/// An error reported by [`DataSource::bind`].
///
/// During initialization a bind failure is fatal and aborts pool construction; during a
/// recycle pass it aborts the pass before the failing cell's rebind is committed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct BindError {
    reason: String,
}

impl BindError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The item-providing side of the recycling contract.
///
/// Implemented by the application layer, which also owns it: the [`crate::Recycler`]
/// borrows a `DataSource` per call and never stores it.
pub trait DataSource {
    /// Total virtual list length.
    ///
    /// Read once per initialization; it must not change while a pool built against it is
    /// live. Rebuild via [`crate::Recycler::begin`] when the data set changes.
    fn item_count(&self) -> usize;

    /// Populates `cell`'s visible content to represent the item at `index`.
    ///
    /// The engine guarantees `index < item_count()`. Implementations key any retained
    /// per-cell state off [`Cell::slot`] and must not hold on to `cell` itself.
    fn bind(&mut self, cell: &mut Cell, index: usize) -> Result<(), BindError>;
}
