//! Explicit form state and the edits applied to it.
//!
//! The state travels with every edit request; the server keeps none of it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::form::limits::FormLimits;
use crate::form::options::CollageMode;
use crate::form::parse::parse_count;
use crate::form::resolver::{self, Dimension, GridSpec, Recomputed, ResolutionSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub mode: CollageMode,
    pub grid: GridSpec,
    pub resolution: ResolutionSpec,
    pub aspect_lock: bool,
}

/// A single user interaction with the form.
///
/// Numeric and mode fields carry the raw input string; parsing happens here
/// rather than in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FormEdit {
    Rows(String),
    Columns(String),
    Width(String),
    Height(String),
    Mode(String),
    AspectLock(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    pub state: FormState,
    /// The dependent field the aspect lock overwrote, if any.
    pub recomputed: Option<Recomputed>,
    /// True when the edit carried an unparseable value and was dropped.
    pub ignored: bool,
}

impl EditOutcome {
    fn applied(state: FormState, recomputed: Option<Recomputed>) -> Self {
        Self {
            state,
            recomputed,
            ignored: false,
        }
    }

    fn ignored(state: FormState) -> Self {
        Self {
            state,
            recomputed: None,
            ignored: true,
        }
    }
}

impl FormState {
    /// Brings every field inside the current limits.
    pub fn clamped(self, limits: &FormLimits) -> Self {
        Self {
            grid: self.grid.clamped(limits.grid(self.mode)),
            resolution: self.resolution.clamped(limits.resolution()),
            ..self
        }
    }

    fn set(&mut self, dimension: Dimension, value: u32) {
        match dimension {
            Dimension::Rows => self.grid.rows = value,
            Dimension::Columns => self.grid.columns = value,
            Dimension::Width => self.resolution.width = value,
            Dimension::Height => self.resolution.height = value,
        }
    }

    /// Applies one edit. The incoming state is clamped first, then at most one
    /// dependent field is recomputed.
    pub fn apply(self, edit: FormEdit, limits: &FormLimits) -> EditOutcome {
        let mut state = self.clamped(limits);
        match edit {
            FormEdit::Rows(raw) => state.edit_dimension(Dimension::Rows, &raw, limits),
            FormEdit::Columns(raw) => state.edit_dimension(Dimension::Columns, &raw, limits),
            FormEdit::Width(raw) => state.edit_dimension(Dimension::Width, &raw, limits),
            FormEdit::Height(raw) => state.edit_dimension(Dimension::Height, &raw, limits),
            FormEdit::Mode(raw) => {
                let Ok(mode) = raw.trim().parse::<CollageMode>() else {
                    debug!(raw = %raw, "ignoring unknown collage mode");
                    return EditOutcome::ignored(state);
                };
                let before = state.grid;
                state.mode = mode;
                state.grid = state.grid.clamped(limits.grid(mode));
                let recomputed = if state.grid != before {
                    debug!(%mode, rows = state.grid.rows, columns = state.grid.columns, "grid clamped to new mode");
                    state.resolve(Dimension::Rows, limits)
                } else {
                    None
                };
                EditOutcome::applied(state, recomputed)
            }
            FormEdit::AspectLock(on) => {
                state.aspect_lock = on;
                let recomputed = if on {
                    state.resolve(Dimension::Rows, limits)
                } else {
                    None
                };
                EditOutcome::applied(state, recomputed)
            }
        }
    }

    fn edit_dimension(mut self, dimension: Dimension, raw: &str, limits: &FormLimits) -> EditOutcome {
        let bounds = limits.bounds_for(dimension, self.mode);
        let Some(value) = parse_count(raw, bounds) else {
            debug!(field = dimension.as_str(), raw = %raw, "ignoring non-numeric form value");
            return EditOutcome::ignored(self);
        };
        self.set(dimension, value);
        let recomputed = self.resolve(dimension, limits);
        EditOutcome::applied(self, recomputed)
    }

    fn resolve(&mut self, changed: Dimension, limits: &FormLimits) -> Option<Recomputed> {
        let recomputed = resolver::resolve(
            self.grid,
            self.resolution,
            changed,
            self.aspect_lock,
            limits.resolution(),
        )?;
        recomputed.apply_to(&mut self.resolution);
        Some(recomputed)
    }
}
