use recycler::{DataSource, Offset, Recycler, RecyclerError, RecyclerOptions, Rect};

/// Lifecycle of a [`ViewportAdapter`].
///
/// The adapter only forwards scroll notifications while `Active`; anything arriving
/// earlier is layout churn from the host's own setup and must not reach the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdapterState {
    Uninitialized,
    Initializing,
    Active,
}

/// A framework-neutral shim between a host scroll container and a [`Recycler`].
///
/// The host is expected to:
/// - call [`ViewportAdapter::begin`] when the list (re-)mounts,
/// - call [`ViewportAdapter::complete_layout`] once its first rendering pass has settled
///   and real viewport/content rectangles exist, applying the returned extent to its
///   content container,
/// - forward every content-position change to [`ViewportAdapter::on_scroll_changed`] and
///   add the returned correction to both its content position and any internal
///   drag-anchor bookkeeping (elastic bounce, clamping, and scrollbar math all assume a
///   static content size; the correction is how they learn about the pool re-homing
///   itself).
///
/// This type does not hold any UI objects, and it does not own the [`DataSource`]; the
/// application passes its source into each call.
#[derive(Clone, Debug)]
pub struct ViewportAdapter {
    recycler: Recycler,
    previous_position: f32,
    state: AdapterState,
}

impl ViewportAdapter {
    pub fn new(options: RecyclerOptions) -> Self {
        Self {
            recycler: Recycler::new(options),
            previous_position: 0.0,
            state: AdapterState::Uninitialized,
        }
    }

    pub fn from_recycler(recycler: Recycler) -> Self {
        Self {
            recycler,
            previous_position: 0.0,
            state: AdapterState::Uninitialized,
        }
    }

    pub fn state(&self) -> AdapterState {
        self.state
    }

    pub fn recycler(&self) -> &Recycler {
        &self.recycler
    }

    pub fn recycler_mut(&mut self) -> &mut Recycler {
        &mut self.recycler
    }

    pub fn into_recycler(self) -> Recycler {
        self.recycler
    }

    /// Starts (re-)initialization against a cell blueprint.
    ///
    /// The previous pool, if any, is discarded, and scroll notifications are suppressed
    /// until [`ViewportAdapter::complete_layout`] succeeds. The host should reset its
    /// content container to the origin alongside this call.
    pub fn begin(&mut self, blueprint: Rect) {
        self.recycler.begin(blueprint);
        self.previous_position = 0.0;
        self.state = AdapterState::Initializing;
    }

    /// Finishes initialization once the host's rendering pass has settled.
    ///
    /// `viewport` is the visible rectangle, `content_cross` the content container's
    /// cross-axis extent. On success the adapter becomes `Active` and returns the
    /// main-axis extent the host must apply to its content container.
    pub fn complete_layout(
        &mut self,
        viewport: Rect,
        content_cross: f32,
        source: &mut dyn DataSource,
    ) -> Result<f32, RecyclerError> {
        let extent = self.recycler.complete(viewport, content_cross, source)?;
        self.previous_position = 0.0;
        self.state = AdapterState::Active;
        Ok(extent)
    }

    /// Handles a content-position change reported by the host.
    ///
    /// `position` is the content offset along the scroll axis, increasing as the list
    /// scrolls toward later items. The delta since the previous notification is what
    /// drives recycling. Returns the correction the host must fold into its scroll
    /// bookkeeping; the adapter assumes the host applies it, and accounts for it when
    /// computing the next delta.
    ///
    /// Notifications are ignored (zero correction) unless the adapter is `Active`.
    pub fn on_scroll_changed(&mut self, position: f32, source: &mut dyn DataSource) -> Offset {
        if self.state != AdapterState::Active {
            return Offset::ZERO;
        }
        let delta = position - self.previous_position;
        let correction = self.recycler.on_scroll(delta, source);
        self.previous_position = position + correction.main;
        correction
    }

    /// Propagates a resized visible rectangle to the engine.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.recycler.set_viewport(viewport);
    }
}
