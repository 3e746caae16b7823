//! Drag mode: the strip is translated directly by pointer movement.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Pointer travel below which a press/release pair counts as a click.
pub const TAP_TRAVEL: f64 = 6.0;

/// Closed interval the drag offset is confined to.
///
/// Offsets are translations of the strip, so dragging toward later items
/// makes the offset more negative. Values read from config are checked by
/// [`DragBounds::validate`]; [`DragTrack`] never adopts invalid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DragBounds {
    min: f64,
    max: f64,
}

impl Default for DragBounds {
    fn default() -> Self {
        Self {
            min: -1200.0,
            max: 0.0,
        }
    }
}

impl DragBounds {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Bounds that let the last item reach the right edge of the viewport.
    pub fn for_content(content_width: f64, viewport_width: f64) -> Self {
        let overflow = (content_width - viewport_width).max(0.0);
        Self {
            min: if overflow.is_finite() { -overflow } else { 0.0 },
            max: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(Error::InvalidDragBounds {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Clamp `value` into the range. Never panics, even on unvalidated bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Outcome of a finished drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragRelease {
    /// The pointer barely moved; treat the gesture as a click on the item.
    pub tap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    origin_x: f64,
    origin_offset: f64,
    travel: f64,
}

/// Drag offset clamped to [`DragBounds`].
#[derive(Debug, Clone, PartialEq)]
pub struct DragTrack {
    bounds: DragBounds,
    offset: f64,
    gesture: Option<Gesture>,
}

impl DragTrack {
    /// Track starting at offset 0 clamped into `bounds`. Invalid bounds fall
    /// back to [`DragBounds::default`].
    pub fn new(bounds: DragBounds) -> Self {
        let bounds = if bounds.validate().is_ok() {
            bounds
        } else {
            tracing::warn!(
                min = bounds.min,
                max = bounds.max,
                "invalid drag bounds, using defaults"
            );
            DragBounds::default()
        };
        Self {
            bounds,
            offset: bounds.clamp(0.0),
            gesture: None,
        }
    }

    pub fn bounds(&self) -> DragBounds {
        self.bounds
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Set the offset directly; out-of-range values are clamped.
    pub fn drag_to(&mut self, offset: f64) -> f64 {
        if !offset.is_nan() {
            self.offset = self.bounds.clamp(offset);
        }
        self.offset
    }

    /// Replace the bounds, re-clamping the current offset.
    pub fn set_bounds(&mut self, bounds: DragBounds) {
        if bounds.validate().is_err() {
            tracing::warn!(min = bounds.min, max = bounds.max, "ignoring invalid drag bounds");
            return;
        }
        self.bounds = bounds;
        self.offset = bounds.clamp(self.offset);
    }

    /// Pointer pressed at `pointer_x`. A gesture already running is replaced.
    pub fn begin(&mut self, pointer_x: f64) {
        self.gesture = Some(Gesture {
            origin_x: pointer_x,
            origin_offset: self.offset,
            travel: 0.0,
        });
    }

    /// Pointer moved to `pointer_x`. Without an active gesture nothing moves.
    pub fn move_to(&mut self, pointer_x: f64) -> f64 {
        let Some(gesture) = self.gesture.as_mut() else {
            return self.offset;
        };
        let dx = pointer_x - gesture.origin_x;
        gesture.travel = gesture.travel.max(dx.abs());
        let target = gesture.origin_offset + dx;
        self.drag_to(target)
    }

    /// Pointer released or cancelled.
    pub fn end(&mut self) -> DragRelease {
        let travel = self.gesture.take().map_or(0.0, |g| g.travel);
        DragRelease {
            tap: travel < TAP_TRAVEL,
        }
    }

    /// Offset sits at the upper bound (first item fully visible).
    pub fn at_max(&self) -> bool {
        self.offset >= self.bounds.max
    }

    /// Offset sits at the lower bound (strip fully dragged left).
    pub fn at_min(&self) -> bool {
        self.offset <= self.bounds.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_match_observed_range() {
        let bounds = DragBounds::default();
        assert_eq!((bounds.min(), bounds.max()), (-1200.0, 0.0));
        assert!(bounds.validate().is_ok());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(matches!(
            DragBounds::new(10.0, -10.0),
            Err(Error::InvalidDragBounds { min, max }) if min == 10.0 && max == -10.0
        ));
        assert!(DragBounds::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn any_drag_sequence_stays_in_bounds() {
        let mut track = DragTrack::new(DragBounds::default());
        let targets = [0.0, -50.0, 400.0, -1199.0, -1201.0, -99999.0, 3.5, f64::NAN, -600.0];
        for target in targets {
            let offset = track.drag_to(target);
            assert!((-1200.0..=0.0).contains(&offset), "{offset} escaped bounds");
        }
        assert_eq!(track.offset(), -600.0);
    }

    #[test]
    fn pointer_gesture_follows_pointer_relative_to_origin() {
        let mut track = DragTrack::new(DragBounds::default());
        track.begin(500.0);
        assert!(track.is_dragging());
        assert_eq!(track.move_to(400.0), -100.0);
        assert_eq!(track.move_to(-2000.0), -1200.0);
        let release = track.end();
        assert!(!release.tap);
        assert!(!track.is_dragging());
        assert!(track.at_min());

        // A second gesture starts from where the first left off.
        track.begin(0.0);
        assert_eq!(track.move_to(300.0), -900.0);
        track.end();
    }

    #[test]
    fn short_travel_is_a_tap() {
        let mut track = DragTrack::new(DragBounds::default());
        track.begin(100.0);
        track.move_to(103.0);
        track.move_to(98.0);
        assert!(track.end().tap);
        assert_eq!(track.offset(), -2.0);
    }

    #[test]
    fn moves_without_gesture_are_ignored() {
        let mut track = DragTrack::new(DragBounds::default());
        assert_eq!(track.move_to(-300.0), 0.0);
        assert!(track.end().tap);
    }

    #[test]
    fn bounds_from_content_and_resize() {
        let bounds = DragBounds::for_content(2596.0, 1000.0);
        assert_eq!(bounds.min(), -1596.0);
        assert_eq!(DragBounds::for_content(300.0, 800.0).min(), 0.0);

        let mut track = DragTrack::new(bounds);
        track.drag_to(-1500.0);
        track.set_bounds(DragBounds::default());
        assert_eq!(track.offset(), -1200.0);

        track.set_bounds(DragBounds { min: 5.0, max: 1.0 });
        assert_eq!(track.bounds(), DragBounds::default());
    }

    #[test]
    fn invalid_initial_bounds_fall_back_to_default() {
        for bounds in [
            DragBounds { min: 5.0, max: 1.0 },
            DragBounds { min: f64::NAN, max: 0.0 },
            DragBounds { min: -10.0, max: f64::INFINITY },
        ] {
            let mut track = DragTrack::new(bounds);
            assert_eq!(track.bounds(), DragBounds::default());
            assert_eq!(track.offset(), 0.0);
            assert_eq!(track.drag_to(-5000.0), -1200.0);
        }
    }
}
