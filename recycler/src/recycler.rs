use alloc::vec::Vec;
use core::ops::Range;

use crate::{
    Bounds, Cell, DataSource, Offset, PoolGeometry, Rect, RecyclerError, RecyclerOptions,
    WindowState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Pending,
    Ready,
}

/// The cell-recycling engine.
///
/// A `Recycler` owns a fixed circular pool of [`Cell`]s and slides a contiguous window of
/// data indices across it as the host scrolls. Cells that leave the viewport on one side
/// are repositioned on the other side and rebound to the next index, so the cost of a
/// scroll step is proportional to the distance scrolled, never to the list length.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; cells are plain geometry plus a stable slot id.
/// - Your adapter drives it by forwarding scroll deltas and layout geometry.
/// - The application's [`DataSource`] is borrowed per call, never stored.
///
/// Initialization is two-phase because viewport and content rectangles are only valid
/// after the host's first rendering pass: [`Recycler::begin`] resets state and records
/// the cell blueprint, then once layout has settled [`Recycler::complete`] builds the
/// pool. Until `complete` succeeds, scroll notifications are no-ops.
///
/// Coordinates: the main axis increases toward later items, with the content top at
/// zero. The engine tracks the content position internally; a cell is visible when
/// `origin - position` falls inside the viewport interval.
#[derive(Clone, Debug)]
pub struct Recycler {
    options: RecyclerOptions,
    phase: Phase,
    blueprint: Rect,
    viewport: Rect,
    bounds: Bounds,
    cell_extent: f32,
    pool: Vec<Cell>,
    top_slot: usize,
    bottom_slot: usize,
    bound_count: usize,
    item_count: usize,
    position: f32,
    pub(crate) recycling: bool,
}

impl Recycler {
    pub fn new(options: RecyclerOptions) -> Self {
        Self {
            options,
            phase: Phase::Idle,
            blueprint: Rect::default(),
            viewport: Rect::default(),
            bounds: Bounds::default(),
            cell_extent: 0.0,
            pool: Vec::new(),
            top_slot: 0,
            bottom_slot: 0,
            bound_count: 0,
            item_count: 0,
            position: 0.0,
            recycling: false,
        }
    }

    pub fn options(&self) -> &RecyclerOptions {
        &self.options
    }

    /// Starts (re-)initialization.
    ///
    /// Discards the previous pool, cancels any pending initialization, and resets the
    /// content position to the origin. `blueprint` is the prototype cell whose aspect
    /// ratio, scaled to the content width, determines the uniform cell extent.
    ///
    /// Geometry is not valid yet at this point; call [`Recycler::complete`] after the
    /// host's next rendering pass has produced settled viewport/content rectangles.
    pub fn begin(&mut self, blueprint: Rect) {
        rdebug!(
            blueprint_main = f64::from(blueprint.main),
            blueprint_cross = f64::from(blueprint.cross),
            "Recycler::begin"
        );
        self.pool.clear();
        self.top_slot = 0;
        self.bottom_slot = 0;
        self.bound_count = 0;
        self.item_count = 0;
        self.cell_extent = 0.0;
        self.position = 0.0;
        self.recycling = false;
        self.blueprint = blueprint;
        self.phase = Phase::Pending;
    }

    /// Finishes initialization once layout has settled.
    ///
    /// Builds the pool: cells are created until the count reaches
    /// `min(minimum_pool_size, item_count)` *and* their summed extents cover
    /// `coverage_factor` times the viewport height, capped at `item_count`. Each new cell is
    /// stacked immediately below the previous one and bound to the data index equal to
    /// its slot.
    ///
    /// Returns the content extent the host must apply to its content container.
    /// This is `len * cell_extent` (the bound window, not the full virtual length;
    /// recycling corrections keep the two consistent from then on).
    ///
    /// An empty data source is not an error: the pool stays empty and scrolling is
    /// inert until the next [`Recycler::begin`].
    pub fn complete(
        &mut self,
        viewport: Rect,
        content_cross: f32,
        source: &mut dyn DataSource,
    ) -> Result<f32, RecyclerError> {
        if self.phase != Phase::Pending {
            return Err(RecyclerError::NotPending);
        }
        if !(viewport.main > 0.0) {
            return Err(RecyclerError::EmptyViewport);
        }
        let cell_extent = self.blueprint.main / self.blueprint.cross * content_cross;
        if !cell_extent.is_finite() || cell_extent <= 0.0 {
            return Err(RecyclerError::DegenerateBlueprint {
                extent: cell_extent,
            });
        }

        self.viewport = viewport;
        self.cell_extent = cell_extent;
        self.refresh_bounds();

        let item_count = source.item_count();
        let required_coverage = self.options.coverage_factor * viewport.main;
        let minimum = self.options.minimum_pool_size.min(item_count);
        let size = Rect::new(cell_extent, content_cross);

        let mut pool = Vec::new();
        let mut coverage = 0.0f32;
        while (pool.len() < minimum || coverage < required_coverage) && pool.len() < item_count {
            let slot = pool.len();
            let mut cell = Cell::new(slot, coverage, size);
            source
                .bind(&mut cell, slot)
                .map_err(|source| RecyclerError::Bind {
                    index: slot,
                    source,
                })?;
            coverage += cell_extent;
            pool.push(cell);
        }

        self.item_count = item_count;
        self.top_slot = 0;
        self.bottom_slot = pool.len().saturating_sub(1);
        self.bound_count = pool.len();
        self.pool = pool;
        self.phase = Phase::Ready;
        rdebug!(
            len = self.pool.len(),
            item_count,
            cell_extent = f64::from(cell_extent),
            "pool built"
        );
        Ok(self.content_extent())
    }

    /// Handles a scroll-position change of `delta` along the main axis.
    ///
    /// Positive deltas scroll toward later items. Returns the correction the host must
    /// add to its own scroll anchor/offset bookkeeping; zero when nothing was recycled.
    ///
    /// Notifications arriving while a recycle pass is already running (the host reacting
    /// to this engine's own position writes) are ignored and return zero.
    pub fn on_scroll(&mut self, delta: f32, source: &mut dyn DataSource) -> Offset {
        if self.recycling || self.pool.is_empty() {
            return Offset::ZERO;
        }
        // The visible rectangle can change between events (e.g. a host resize).
        self.refresh_bounds();
        self.position += delta;

        if delta > 0.0 && self.view_end(self.bottom_slot) < self.bounds.max {
            self.advance_forward(source)
        } else if delta < 0.0 && self.view_end(self.top_slot) > self.bounds.min {
            self.advance_backward(source)
        } else {
            Offset::ZERO
        }
    }

    /// Propagates a resized visible rectangle from the host.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.refresh_bounds();
    }

    /// The list scrolled toward later items: rebind cells that left past the top to the
    /// indices appearing at the bottom.
    fn advance_forward(&mut self, source: &mut dyn DataSource) -> Offset {
        self.recycling = true;

        let extent = self.cell_extent;
        let len = self.pool.len();
        let mut n = 0usize;

        while self.view_end(self.top_slot) <= 0.0 && self.bound_count < self.item_count {
            let below = self.pool[self.bottom_slot].end();
            let slot = self.top_slot;
            let previous = self.pool[slot].origin();
            self.pool[slot].set_origin(below);
            if source.bind(&mut self.pool[slot], self.bound_count).is_err() {
                rwarn!(index = self.bound_count, "bind failed mid-pass, aborting");
                self.pool[slot].set_origin(previous);
                break;
            }
            self.bottom_slot = slot;
            self.top_slot = (slot + 1) % len;
            self.bound_count += 1;
            n += 1;
        }

        // Re-home the window so origins stay bounded: the visually stable cells appear
        // unmoved while the content anchor absorbs the shift.
        let shift = n as f32 * extent;
        for cell in &mut self.pool {
            cell.shift(-shift);
        }
        self.position -= shift;
        self.recycling = false;
        rtrace!(n, shift = f64::from(shift), "advance_forward");
        Offset {
            main: -shift,
            cross: 0.0,
        }
    }

    /// The list scrolled toward earlier items: rebind cells that left past the bottom to
    /// the indices reappearing at the top.
    fn advance_backward(&mut self, source: &mut dyn DataSource) -> Offset {
        self.recycling = true;

        let extent = self.cell_extent;
        let len = self.pool.len();
        let mut n = 0usize;

        while self.view_start(self.bottom_slot) >= self.viewport.main && self.bound_count > len {
            let above = self.pool[self.top_slot].origin() - extent;
            let slot = self.bottom_slot;
            let previous = self.pool[slot].origin();
            self.pool[slot].set_origin(above);
            let index = self.bound_count - len - 1;
            if source.bind(&mut self.pool[slot], index).is_err() {
                rwarn!(index, "bind failed mid-pass, aborting");
                self.pool[slot].set_origin(previous);
                break;
            }
            self.top_slot = slot;
            self.bottom_slot = (slot + len - 1) % len;
            self.bound_count -= 1;
            n += 1;
        }

        let shift = n as f32 * extent;
        for cell in &mut self.pool {
            cell.shift(shift);
        }
        self.position += shift;
        self.recycling = false;
        rtrace!(n, shift = f64::from(shift), "advance_backward");
        Offset {
            main: shift,
            cross: 0.0,
        }
    }

    fn refresh_bounds(&mut self) {
        let margin = self.options.boundary_margin_factor * self.viewport.main;
        self.bounds = Bounds {
            min: -margin,
            max: self.viewport.main + margin,
        };
    }

    fn view_start(&self, slot: usize) -> f32 {
        self.pool[slot].origin() - self.position
    }

    fn view_end(&self, slot: usize) -> f32 {
        self.pool[slot].end() - self.position
    }

    /// True once `complete` has succeeded and until the next `begin`.
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// True while a recycle pass is running (only observable from within `bind`).
    pub fn is_recycling(&self) -> bool {
        self.recycling
    }

    pub fn pool(&self) -> &[Cell] {
        &self.pool
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn cell_extent(&self) -> f32 {
        self.cell_extent
    }

    /// Extent of the content container backing the pool (`len * cell_extent`).
    pub fn content_extent(&self) -> f32 {
        self.pool.len() as f32 * self.cell_extent
    }

    /// Current content position along the main axis, including the engine's own
    /// re-homing shifts.
    pub fn content_position(&self) -> f32 {
        self.position
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Current margin-expanded viewport interval, in viewport space.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Snapshot of the circular window over the pool.
    pub fn window(&self) -> WindowState {
        WindowState {
            top_slot: self.top_slot,
            bottom_slot: self.bottom_slot,
            bound_count: self.bound_count,
        }
    }

    /// Snapshot of the pool's fixed geometry.
    pub fn geometry(&self) -> PoolGeometry {
        PoolGeometry {
            len: self.pool.len(),
            cell_extent: self.cell_extent,
            content_extent: self.content_extent(),
        }
    }

    /// The contiguous range of data indices currently bound across the pool.
    pub fn bound_range(&self) -> Range<usize> {
        (self.bound_count - self.pool.len())..self.bound_count
    }

    /// The data index currently bound to `slot`, from the window's circular order.
    pub fn bound_index_of_slot(&self, slot: usize) -> Option<usize> {
        let len = self.pool.len();
        if slot >= len {
            return None;
        }
        let steps_from_top = (slot + len - self.top_slot) % len;
        Some(self.bound_count - len + steps_from_top)
    }
}
