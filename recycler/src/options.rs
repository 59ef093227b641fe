/// Configuration for [`crate::Recycler`].
///
/// Options are fixed for the lifetime of a pool; changing them requires re-initializing
/// via [`crate::Recycler::begin`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecyclerOptions {
    /// Floor on the number of pooled cells, regardless of coverage. Still capped by the
    /// data source's item count.
    pub minimum_pool_size: usize,

    /// Multiplies the viewport height to set the minimum pre-built pixel coverage. With
    /// the default of `1.5`, half a viewport of cells is stacked beyond the visible edge
    /// so fast scrolls have material to recycle before a gap could appear.
    pub coverage_factor: f32,

    /// Fraction of the visible height by which the recycling trigger fires before the
    /// pool's edge cell actually reaches the viewport boundary.
    pub boundary_margin_factor: f32,
}

impl Default for RecyclerOptions {
    fn default() -> Self {
        Self {
            minimum_pool_size: 10,
            coverage_factor: 1.5,
            boundary_margin_factor: 0.2,
        }
    }
}

impl RecyclerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minimum_pool_size(mut self, minimum_pool_size: usize) -> Self {
        self.minimum_pool_size = minimum_pool_size;
        self
    }

    pub fn with_coverage_factor(mut self, coverage_factor: f32) -> Self {
        self.coverage_factor = coverage_factor;
        self
    }

    pub fn with_boundary_margin_factor(mut self, boundary_margin_factor: f32) -> Self {
        self.boundary_margin_factor = boundary_margin_factor;
        self
    }
}
