// Collage request submission: query building, the collage URL, embed snippets.
// The collage endpoint itself is external; this module only ever addresses it by URL.

pub mod embed;
pub mod handlers;
pub mod query;
pub mod request;
