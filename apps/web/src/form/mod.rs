// Collage request form: typed options, field bounds, the aspect-ratio resolver
// and the explicit form state it operates on.
// Everything here is pure and synchronous; handlers only move values in and out.

pub mod handlers;
pub mod limits;
pub mod options;
pub mod parse;
pub mod resolver;
pub mod state;

// Re-export the types the collage and pages modules consume.
pub use limits::FormLimits;
pub use options::{CollageMode, Period, TextLocation};
pub use state::FormState;
