//! Scroll-button mode: a native overflow strip moved by fixed steps.

use serde::Deserialize;

use super::Direction;
use crate::error::{Error, Result};

/// Offsets closer than this to a bound count as being at the bound.
const EDGE_EPSILON: f64 = 0.5;

/// Distance a single button press scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScrollStep {
    /// Same distance on every screen.
    Fixed { distance: f64 },
    /// `narrow` below `breakpoint` window width, `wide` otherwise.
    Responsive {
        narrow: f64,
        wide: f64,
        breakpoint: f64,
    },
}

impl Default for ScrollStep {
    fn default() -> Self {
        ScrollStep::Responsive {
            narrow: 240.0,
            wide: 320.0,
            breakpoint: 640.0,
        }
    }
}

impl ScrollStep {
    /// Step for the given window width.
    pub fn distance(&self, window_width: f64) -> f64 {
        match *self {
            ScrollStep::Fixed { distance } => distance,
            ScrollStep::Responsive {
                narrow,
                wide,
                breakpoint,
            } => {
                if window_width < breakpoint {
                    narrow
                } else {
                    wide
                }
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let distances = match *self {
            ScrollStep::Fixed { distance } => [distance, distance],
            ScrollStep::Responsive { narrow, wide, .. } => [narrow, wide],
        };
        match distances.into_iter().find(|d| !d.is_finite() || *d <= 0.0) {
            Some(bad) => Err(Error::InvalidScrollStep(bad)),
            None => Ok(()),
        }
    }
}

/// Geometry reported by a mounted scroll surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceMetrics {
    /// Current horizontal scroll position.
    pub scroll_left: f64,
    /// Full width of the strip content.
    pub scroll_width: f64,
    /// Visible width of the strip.
    pub client_width: f64,
    /// Width of the whole window, used for the responsive step.
    pub window_width: f64,
}

impl SurfaceMetrics {
    /// Largest reachable scroll offset; never negative.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Handle to something that can be scrolled horizontally.
///
/// The landing page implements this over the strip's DOM element; tests use
/// an in-memory strip.
pub trait ScrollSurface {
    fn metrics(&self) -> SurfaceMetrics;

    /// Scroll by `delta` units, smoothly when `animated` is set.
    fn scroll_by(&self, delta: f64, animated: bool);
}

/// Scroll offset clamped to `[0, max_scroll]`.
///
/// Until the first [`ScrollStrip::set_extent`] the extent is unknown and the
/// strip does not claim to be at its end.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollStrip {
    offset: f64,
    max_scroll: f64,
    measured: bool,
}

impl ScrollStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    /// The extent has been reported by a mounted surface at least once.
    pub fn is_measured(&self) -> bool {
        self.measured
    }

    /// Update the scrollable extent; the offset is re-clamped.
    pub fn set_extent(&mut self, max_scroll: f64) {
        self.max_scroll = if max_scroll.is_finite() {
            max_scroll.max(0.0)
        } else {
            0.0
        };
        self.measured = true;
        self.offset = self.clamp(self.offset);
    }

    /// Take over an externally observed offset. Last writer wins.
    pub fn sync(&mut self, offset: f64) {
        self.offset = self.clamp(offset);
    }

    /// Move one step in `direction`; returns the clamped delta.
    pub fn step(&mut self, direction: Direction, distance: f64) -> f64 {
        let target = self.clamp(self.offset + direction.sign() * distance);
        let delta = target - self.offset;
        self.offset = target;
        delta
    }

    pub fn at_start(&self) -> bool {
        self.offset <= EDGE_EPSILON
    }

    pub fn at_end(&self) -> bool {
        self.measured && self.offset >= self.max_scroll - EDGE_EPSILON
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.offset;
        }
        value.clamp(0.0, self.max_scroll)
    }
}
