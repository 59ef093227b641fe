/// A size along the two axes of the scroll plane.
///
/// `main` is the scroll axis (height for vertical lists), `cross` the orthogonal axis.
/// The engine only ever repositions cells along `main`; `cross` is carried through for
/// hosts that size cells to the content width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub main: f32,
    pub cross: f32,
}

impl Rect {
    pub fn new(main: f32, cross: f32) -> Self {
        Self { main, cross }
    }
}

/// A displacement in the scroll plane.
///
/// Returned from [`crate::Recycler::on_scroll`] as the correction the host scroll
/// container must add to its own anchor/offset bookkeeping. The `cross` component is
/// always zero; it exists so the correction can be applied verbatim to 2-D scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub main: f32,
    pub cross: f32,
}

impl Offset {
    pub const ZERO: Self = Self {
        main: 0.0,
        cross: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        self.main == 0.0 && self.cross == 0.0
    }
}

/// A 1-D interval along the scroll axis, in viewport space.
///
/// The recycling trigger compares cell edges against this interval, which is the visible
/// rectangle expanded outward by the boundary margin on both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}
