//! Scaling engine: inches → character cells or pixels.
//!
//! A [`ScaleContext`] fixes one uniform scale factor (output units per inch)
//! times a zoom multiplier. Using a single factor for both axes is what
//! guarantees the aspect-ratio invariant across zoom levels.
//!
//! ASCII output is discrete: spans round half-up to whole cells, and a
//! non-zero segment never occupies zero cells. Whether a sub-cell segment is
//! clamped to one cell or rejected is chosen by [`OverflowPolicy`].

use crate::errors::ScaleError;
use crate::layout::{RoomLayout, Wall, WallSegment};
use crate::types::{Cells, Inches, Px, Scaler};

/// What to do when a segment scales below one character cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Occupy exactly one cell (the documented default).
    #[default]
    Clamp,
    /// Fail with [`ScaleError::ScaleOverflow`] naming the segment.
    Strict,
}

/// An immutable scale factor + zoom pair, with the discrete rounding policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleContext {
    scaler: Scaler,
    zoom: f64,
    policy: OverflowPolicy,
}

impl Default for ScaleContext {
    /// The documented base scale: 1 output unit per inch, no zoom.
    fn default() -> Self {
        ScaleContext {
            scaler: Scaler { units_per_inch: 1.0 },
            zoom: 1.0,
            policy: OverflowPolicy::Clamp,
        }
    }
}

impl ScaleContext {
    /// Create a context from an explicit scale factor and zoom.
    pub fn new(units_per_inch: f64, zoom: f64) -> Result<Self, ScaleError> {
        let scaler = Scaler::try_new(units_per_inch).map_err(|e| ScaleError::InvalidFactor {
            value: units_per_inch,
            reason: e.to_string(),
        })?;
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ScaleError::InvalidZoom { value: zoom });
        }
        Ok(ScaleContext {
            scaler,
            zoom,
            policy: OverflowPolicy::Clamp,
        })
    }

    /// Largest scale factor such that the scaled room fits in
    /// `width x height` output units, preserving aspect ratio. `zoom` is
    /// applied on top and may push the result past the canvas again.
    pub fn fit(
        room: &RoomLayout,
        width: usize,
        height: usize,
        zoom: f64,
    ) -> Result<Self, ScaleError> {
        if width == 0 || height == 0 {
            return Err(ScaleError::CanvasTooSmall { width, height });
        }
        let w_in = room.width().raw();
        let h_in = room.height().raw();
        // Config validation guarantees positive wall totals.
        let factor = (width as f64 / w_in).min(height as f64 / h_in);
        crate::log::debug!(factor, zoom, "fit scale computed");
        Self::new(factor, zoom)
    }

    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Effective output units per inch (scale factor × zoom).
    pub fn units_per_inch(&self) -> f64 {
        self.scaler.units_per_inch * self.zoom
    }

    fn effective_scaler(&self) -> Scaler {
        Scaler {
            units_per_inch: self.units_per_inch(),
        }
    }

    /// Fractional pixel span (SVG keeps full precision).
    pub fn to_px(&self, len: Inches) -> Px {
        self.effective_scaler().px(len)
    }

    /// Discrete cell span for one segment: round half-up, then apply the
    /// overflow policy for anything that lands below one cell.
    pub fn to_cells(&self, segment: &WallSegment) -> Result<Cells, ScaleError> {
        let span = self.effective_scaler().span(segment.length);
        // `f64::round` is half-away-from-zero; spans are positive, so this
        // is exactly round-half-up.
        let rounded = span.round() as usize;
        if rounded >= 1 {
            return Ok(Cells(rounded));
        }
        match self.policy {
            OverflowPolicy::Clamp => Ok(Cells(1)),
            OverflowPolicy::Strict => Err(ScaleError::ScaleOverflow {
                id: segment.id.clone(),
                length_inches: segment.length.raw(),
                units_per_inch: self.units_per_inch(),
            }),
        }
    }

    /// Grid dimensions in cells: per-segment spans summed along the North
    /// wall (width) and the West wall (height). Summing rounded spans keeps
    /// the painted runs and the grid in agreement.
    pub fn grid_size(&self, room: &RoomLayout) -> Result<(Cells, Cells), ScaleError> {
        let mut width = Cells(0);
        for segment in room.segments(Wall::North) {
            width += self.to_cells(segment)?;
        }
        let mut height = Cells(0);
        for segment in room.segments(Wall::West) {
            height += self.to_cells(segment)?;
        }
        Ok((width, height))
    }

    /// Continuous scaled dimensions, used for the aspect-ratio invariant.
    pub fn scaled_dimensions(&self, room: &RoomLayout) -> (f64, f64) {
        let s = self.effective_scaler();
        (s.span(room.width()), s.span(room.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::simple_room;
    use crate::layout::{SegmentKind, Wall};

    fn segment(id: &str, len: f64) -> WallSegment {
        WallSegment {
            id: id.to_string(),
            wall: Wall::North,
            length: Inches(len),
            kind: SegmentKind::Wall,
            heading: Wall::North.natural_heading(),
        }
    }

    #[test]
    fn base_scale_is_one_unit_per_inch() {
        let ctx = ScaleContext::default();
        assert_eq!(ctx.units_per_inch(), 1.0);
        assert_eq!(ctx.to_cells(&segment("N1", 87.0)).unwrap(), Cells(87));
    }

    #[test]
    fn rounding_is_half_up() {
        let ctx = ScaleContext::new(1.0, 1.0).unwrap();
        assert_eq!(ctx.to_cells(&segment("a", 2.5)).unwrap(), Cells(3));
        assert_eq!(ctx.to_cells(&segment("b", 2.49)).unwrap(), Cells(2));
        assert_eq!(ctx.to_cells(&segment("c", 0.5)).unwrap(), Cells(1));
    }

    #[test]
    fn clamp_policy_never_yields_zero_cells() {
        let ctx = ScaleContext::new(0.1, 1.0).unwrap();
        // 2" at 0.1 cells/inch is 0.2 cells; clamps to one.
        assert_eq!(ctx.to_cells(&segment("tiny", 2.0)).unwrap(), Cells(1));
    }

    #[test]
    fn strict_policy_reports_the_offending_segment() {
        let ctx = ScaleContext::new(0.1, 1.0)
            .unwrap()
            .with_policy(OverflowPolicy::Strict);
        let err = ctx.to_cells(&segment("S3", 2.0)).unwrap_err();
        match err {
            ScaleError::ScaleOverflow { id, .. } => assert_eq!(id, "S3"),
            other => panic!("expected ScaleOverflow, got {other:?}"),
        }
    }

    #[test]
    fn fit_uses_the_tighter_axis() {
        let room = simple_room(); // 4 x 3 inches
        let ctx = ScaleContext::fit(&room, 8, 3, 1.0).unwrap();
        // width allows 2.0, height allows 1.0
        assert_eq!(ctx.units_per_inch(), 1.0);
    }

    #[test]
    fn fit_rejects_degenerate_canvas() {
        let room = simple_room();
        assert!(matches!(
            ScaleContext::fit(&room, 0, 20, 1.0),
            Err(ScaleError::CanvasTooSmall { .. })
        ));
    }

    #[test]
    fn aspect_ratio_identical_across_zooms() {
        let room = simple_room();
        let base = room.aspect_ratio().unwrap();
        for zoom in [0.25, 0.5, 1.0, 1.5, 3.0] {
            let ctx = ScaleContext::new(2.0, zoom).unwrap();
            let (w, h) = ctx.scaled_dimensions(&room);
            assert!((w / h - base).abs() < 1e-6, "zoom {zoom} broke the ratio");
        }
    }

    #[test]
    fn invalid_zoom_is_rejected() {
        assert!(matches!(
            ScaleContext::new(1.0, 0.0),
            Err(ScaleError::InvalidZoom { .. })
        ));
        assert!(matches!(
            ScaleContext::new(1.0, f64::NAN),
            Err(ScaleError::InvalidZoom { .. })
        ));
    }
}
