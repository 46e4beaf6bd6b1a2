//! Embed snippets: an `<img>` tag pointing at the collage URL, for pasting
//! into other pages.

use serde::Serialize;

use crate::collage::request::CollageRequest;
use crate::pages::escape_html;

pub const EMBED_CLASS: &str = "songstitch-collage";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub url: String,
    pub snippet: String,
}

impl Embed {
    /// Builds the embed for a request. A relative `endpoint` is made absolute
    /// with `public_url` when one is configured.
    pub fn for_request(request: &CollageRequest, endpoint: &str, public_url: Option<&str>) -> Self {
        let base = match public_url {
            Some(public) if endpoint.starts_with('/') => {
                format!("{}{endpoint}", public.trim_end_matches('/'))
            }
            _ => endpoint.to_string(),
        };
        let url = request.url(&base);
        let snippet = embed_snippet(&url);
        Self { url, snippet }
    }
}

pub fn embed_snippet(url: &str) -> String {
    format!(r#"<img class="{EMBED_CLASS}" src="{}">"#, escape_html(url))
}
