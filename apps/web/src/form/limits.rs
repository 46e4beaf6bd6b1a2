//! Bounds for every numeric field on the request form.
//!
//! Out-of-range input is never an error: values are clamped into these bounds
//! before anything else looks at them.

use serde::Serialize;

use crate::form::options::CollageMode;
use crate::form::resolver::Dimension;

/// Default ceiling for collage width and height, in pixels.
pub const DEFAULT_MAX_RESOLUTION: u32 = 3000;
/// Rows and columns shown on a fresh form.
pub const DEFAULT_GRID: u32 = 3;
pub const MIN_GRID: u32 = 1;
pub const DEFAULT_FONT_SIZE: u32 = 12;
pub const FONT_SIZE_BOUNDS: FieldBounds = FieldBounds::new(8, 30);

/// Inclusive `[min, max]` range for one numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldBounds {
    pub min: u32,
    pub max: u32,
}

impl FieldBounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Bounds starting at zero.
    pub const fn up_to(max: u32) -> Self {
        Self { min: 0, max }
    }

    /// Clamps `value` into range. `max` wins if the bounds are inverted.
    pub fn clamp(&self, value: u32) -> u32 {
        value.max(self.min).min(self.max)
    }

    /// Rounds a finite float to the nearest integer and clamps it.
    pub fn clamp_rounded(&self, value: f64) -> u32 {
        let rounded = value.round();
        if rounded <= f64::from(self.min) {
            self.min.min(self.max)
        } else if rounded >= f64::from(self.max) {
            self.max
        } else {
            rounded as u32
        }
    }
}

/// Server-side limits applied to every form edit and submission.
/// Built from configuration; client input never changes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLimits {
    pub max_resolution: u32,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESOLUTION)
    }
}

impl FormLimits {
    pub fn new(max_resolution: u32) -> Self {
        Self { max_resolution }
    }

    /// Row/column bounds for a collage mode.
    pub fn grid(&self, mode: CollageMode) -> FieldBounds {
        FieldBounds::new(MIN_GRID, mode.max_grid())
    }

    /// Width/height bounds. Zero is allowed and means "unset".
    pub fn resolution(&self) -> FieldBounds {
        FieldBounds::up_to(self.max_resolution)
    }

    pub fn bounds_for(&self, dimension: Dimension, mode: CollageMode) -> FieldBounds {
        if dimension.is_grid() {
            self.grid(mode)
        } else {
            self.resolution()
        }
    }
}
