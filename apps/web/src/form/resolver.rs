//! Aspect-Ratio Resolver.
//!
//! With the aspect lock on, `width / height` must track `columns / rows`.
//! Each edit to one of the four quantities recomputes exactly one dependent
//! resolution field:
//!
//! - `width` edited: `height = round(width * rows / columns)`
//! - `height` edited: `width = round(height * columns / rows)`
//! - `rows` or `columns` edited: `height` is recomputed from `width` when
//!   `height > width`, otherwise `width` is recomputed from `height`
//!
//! A zero row or column count makes the ratio undefined, so nothing happens.

use serde::{Deserialize, Serialize};

use crate::form::limits::{FieldBounds, DEFAULT_GRID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub columns: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID,
            columns: DEFAULT_GRID,
        }
    }
}

impl GridSpec {
    pub fn clamped(self, bounds: FieldBounds) -> Self {
        Self {
            rows: bounds.clamp(self.rows),
            columns: bounds.clamp(self.columns),
        }
    }
}

/// Output size in pixels. Zero means the collage endpoint picks the size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolutionSpec {
    pub width: u32,
    pub height: u32,
}

impl ResolutionSpec {
    pub fn clamped(self, bounds: FieldBounds) -> Self {
        Self {
            width: bounds.clamp(self.width),
            height: bounds.clamp(self.height),
        }
    }
}

/// One of the four lock-linked form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Rows,
    Columns,
    Width,
    Height,
}

impl Dimension {
    pub fn is_grid(self) -> bool {
        matches!(self, Dimension::Rows | Dimension::Columns)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Rows => "rows",
            Dimension::Columns => "columns",
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }
}

/// The single field overwritten by a resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recomputed {
    pub field: Dimension,
    pub value: u32,
}

impl Recomputed {
    pub fn apply_to(&self, resolution: &mut ResolutionSpec) {
        match self.field {
            Dimension::Width => resolution.width = self.value,
            Dimension::Height => resolution.height = self.value,
            // Grid dimensions are never recomputed.
            Dimension::Rows | Dimension::Columns => {}
        }
    }
}

/// Recomputes the resolution field that depends on `changed`.
///
/// Inputs are expected to be clamped already. The recomputed value is clamped
/// into `resolution_bounds`, so at the resolution ceiling the ratio is only
/// approximate. Returns `None` when the lock is off or the grid has a zero side.
pub fn resolve(
    grid: GridSpec,
    resolution: ResolutionSpec,
    changed: Dimension,
    aspect_lock: bool,
    resolution_bounds: FieldBounds,
) -> Option<Recomputed> {
    if !aspect_lock || grid.rows == 0 || grid.columns == 0 {
        return None;
    }

    let height_from_width = || Recomputed {
        field: Dimension::Height,
        value: scale(resolution.width, grid.rows, grid.columns),
    };
    let width_from_height = || Recomputed {
        field: Dimension::Width,
        value: scale(resolution.height, grid.columns, grid.rows),
    };

    let mut recomputed = match changed {
        Dimension::Width => height_from_width(),
        Dimension::Height => width_from_height(),
        Dimension::Rows | Dimension::Columns if resolution.height > resolution.width => {
            height_from_width()
        }
        Dimension::Rows | Dimension::Columns => width_from_height(),
    };
    recomputed.value = resolution_bounds.clamp(recomputed.value);
    Some(recomputed)
}

/// `round(value * numerator / denominator)`; `denominator` must be non-zero.
fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = f64::from(value) * f64::from(numerator) / f64::from(denominator);
    // `as` saturates, which the caller's clamp then brings into range.
    scaled.round() as u32
}
