use crate::BindError;

/// Initialization failures surfaced by [`crate::Recycler::complete`].
///
/// All variants are configuration errors: the engine refuses to build a pool that could
/// not recycle correctly (a zero or negative cell extent would never satisfy the
/// coverage loop). An empty data source is *not* an error; it yields an empty, inert
/// pool.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RecyclerError {
    /// The viewport has no extent along the scroll axis.
    #[error("viewport has no extent along the scroll axis")]
    EmptyViewport,

    /// The blueprint aspect ratio scaled to the content width yields an unusable cell
    /// extent (zero, negative, or non-finite).
    #[error("blueprint yields an unusable cell extent ({extent})")]
    DegenerateBlueprint { extent: f32 },

    /// `complete` was called without a pending `begin`.
    #[error("initialization was completed without a pending begin")]
    NotPending,

    /// The data source failed to populate a cell while the pool was being built.
    #[error("data source failed to bind index {index}: {source}")]
    Bind {
        index: usize,
        #[source]
        source: BindError,
    },
}
