//! Normalisation of a submitted collage form.
//!
//! The submitted pairs keep their order and any unknown names. Known numeric
//! fields are clamped, checkbox fields are normalised to `true`/`false`, and
//! enumerated fields must parse.

use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::collage::query::{build_query, ExclusionSet};
use crate::form::limits::{FormLimits, FONT_SIZE_BOUNDS};
use crate::form::options::{CollageMode, Period, TextLocation};
use crate::form::parse::{parse_count, parse_flag, ParseError};

/// Form controls that are never forwarded to the collage endpoint.
pub const ALWAYS_EXCLUDED: &[&str] = &["submit", "embed", "fieldset", "aspectlock"];

/// Fields dropped when they still hold the endpoint's own default.
pub const DEFAULT_VALUES: &[(&str, &str)] = &[
    ("fontsize", "12"),
    ("textlocation", "topleft"),
    ("width", "0"),
    ("height", "0"),
];

const FLAG_FIELDS: &[&str] = &[
    "album",
    "artist",
    "track",
    "playcount",
    "boldfont",
    "grayscale",
    "webp",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("username is required")]
    MissingUsername,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A validated collage request, ready to become a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollageRequest {
    username: String,
    mode: CollageMode,
    fields: Vec<(String, String)>,
}

impl CollageRequest {
    pub fn from_fields(
        fields: Vec<(String, String)>,
        limits: &FormLimits,
    ) -> Result<Self, RequestError> {
        let mode = match first_value(&fields, "method") {
            Some(raw) => raw.parse::<CollageMode>()?,
            None => CollageMode::default(),
        };
        let username = first_value(&fields, "username")
            .ok_or(RequestError::MissingUsername)?
            .to_string();

        let grid = limits.grid(mode);
        let resolution = limits.resolution();
        let mut normalised_fields = Vec::with_capacity(fields.len());
        for (name, value) in fields {
            let mut normalised = match name.as_str() {
                "rows" | "columns" => count_or_empty(&name, &value, parse_count(&value, grid)),
                "width" | "height" => count_or_empty(&name, &value, parse_count(&value, resolution)),
                "fontsize" => count_or_empty(&name, &value, parse_count(&value, FONT_SIZE_BOUNDS)),
                "method" => canonical::<CollageMode>(&value, CollageMode::as_str)?,
                "period" => canonical::<Period>(&value, Period::as_str)?,
                "textlocation" => canonical::<TextLocation>(&value, TextLocation::as_str)?,
                "username" => value.trim().to_string(),
                flag if FLAG_FIELDS.contains(&flag) => match parse_flag(&value) {
                    Some(on) => on.to_string(),
                    None => {
                        debug!(field = %name, value = %value, "dropping invalid checkbox value");
                        String::new()
                    }
                },
                _ => value,
            };
            // The endpoint applies its own default to omitted fields.
            if DEFAULT_VALUES.contains(&(name.as_str(), normalised.as_str())) {
                normalised.clear();
            }
            normalised_fields.push((name, normalised));
        }

        Ok(Self {
            username,
            mode,
            fields: normalised_fields,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn mode(&self) -> CollageMode {
        self.mode
    }

    /// Form controls the collage endpoint never sees.
    pub fn exclusions(&self) -> ExclusionSet {
        ALWAYS_EXCLUDED.iter().copied().collect()
    }

    pub fn query(&self) -> String {
        build_query(&self.fields, &self.exclusions())
    }

    pub fn url(&self, endpoint: &str) -> String {
        collage_url(endpoint, &self.query())
    }
}

/// Joins the endpoint and a query string.
pub fn collage_url(endpoint: &str, query: &str) -> String {
    if query.is_empty() {
        endpoint.to_string()
    } else if endpoint.contains('?') {
        format!("{endpoint}&{query}")
    } else {
        format!("{endpoint}?{query}")
    }
}

/// Rewrites an enumerated value in its canonical wire form. Blank stays blank.
fn canonical<T>(raw: &str, as_str: fn(T) -> &'static str) -> Result<String, ParseError>
where
    T: FromStr<Err = ParseError>,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    Ok(as_str(trimmed.parse::<T>()?).to_string())
}

/// First non-blank value for `name`.
fn first_value<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .filter(|(n, _)| n == name)
        .map(|(_, v)| v.trim())
        .find(|v| !v.is_empty())
}

fn count_or_empty(name: &str, raw: &str, parsed: Option<u32>) -> String {
    match parsed {
        Some(value) => value.to_string(),
        None => {
            if !raw.trim().is_empty() {
                debug!(field = %name, raw = %raw, "dropping non-numeric form value");
            }
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    fn request(raw: &[(&str, &str)]) -> CollageRequest {
        CollageRequest::from_fields(pairs(raw), &FormLimits::default()).unwrap()
    }

    #[test]
    fn test_full_form_query() {
        let req = request(&[
            ("username", "alice"),
            ("method", "album"),
            ("period", "1month"),
            ("rows", "4"),
            ("columns", "5"),
            ("album", "true"),
            ("artist", "true"),
            ("playcount", "false"),
            ("width", ""),
            ("height", ""),
            ("fontsize", "12"),
            ("textlocation", "topleft"),
            ("aspectlock", "on"),
            ("submit", "Generate"),
        ]);
        assert_eq!(
            req.query(),
            "username=alice&method=album&period=1month&rows=4&columns=5&album=true&artist=true&playcount=false"
        );
        assert_eq!(req.username(), "alice");
    }

    #[test]
    fn test_missing_username_rejected() {
        let err = CollageRequest::from_fields(pairs(&[("rows", "3")]), &FormLimits::default())
            .unwrap_err();
        assert_eq!(err, RequestError::MissingUsername);

        let err = CollageRequest::from_fields(pairs(&[("username", "   ")]), &FormLimits::default())
            .unwrap_err();
        assert_eq!(err, RequestError::MissingUsername);
    }

    #[test]
    fn test_invalid_enumerations_rejected() {
        let limits = FormLimits::default();
        let err = CollageRequest::from_fields(pairs(&[("username", "a"), ("method", "genre")]), &limits)
            .unwrap_err();
        assert_eq!(err, RequestError::Parse(ParseError::InvalidMethod("genre".to_string())));
        assert!(CollageRequest::from_fields(pairs(&[("username", "a"), ("period", "1year")]), &limits).is_err());
        assert!(
            CollageRequest::from_fields(pairs(&[("username", "a"), ("textlocation", "middle")]), &limits)
                .is_err()
        );
    }

    #[test]
    fn test_grid_clamped_to_submitted_mode() {
        let req = request(&[("username", "a"), ("method", "track"), ("rows", "15"), ("columns", "0")]);
        assert_eq!(req.mode(), CollageMode::Track);
        assert_eq!(req.query(), "username=a&method=track&rows=5&columns=1");
    }

    #[test]
    fn test_resolution_and_font_clamped() {
        let req = request(&[("username", "a"), ("width", "4000"), ("height", "-1"), ("fontsize", "3")]);
        // height clamps to 0, which is the default and therefore excluded
        assert_eq!(req.query(), "username=a&width=3000&fontsize=8");
    }

    #[test]
    fn test_non_numeric_values_dropped() {
        let req = request(&[("username", "a"), ("rows", "many"), ("fontsize", "big")]);
        assert_eq!(req.query(), "username=a");
    }

    #[test]
    fn test_flags_normalised() {
        let req = request(&[("username", "a"), ("album", "on"), ("webp", "1"), ("grayscale", "maybe")]);
        assert_eq!(req.query(), "username=a&album=true&webp=true");
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let req = request(&[("username", "a"), ("theme", "dark mode")]);
        assert_eq!(req.query(), "username=a&theme=dark%20mode");
    }

    #[test]
    fn test_username_trimmed_and_encoded() {
        let req = request(&[("username", "  rj & co ")]);
        assert_eq!(req.username(), "rj & co");
        assert_eq!(req.query(), "username=rj%20%26%20co");
    }

    #[test]
    fn test_non_default_values_kept() {
        let req = request(&[("username", "a"), ("fontsize", "14"), ("textlocation", "bottomright")]);
        assert_eq!(req.query(), "username=a&fontsize=14&textlocation=bottomright");
    }

    #[test]
    fn test_enumerations_forwarded_in_canonical_form() {
        let req = request(&[
            ("username", "a"),
            ("method", " track"),
            ("period", "1month "),
            ("rows", "9"),
        ]);
        assert_eq!(req.mode(), CollageMode::Track);
        assert_eq!(req.query(), "username=a&method=track&period=1month&rows=5");
    }

    #[test]
    fn test_padded_default_text_location_excluded() {
        let req = request(&[("username", "a"), ("textlocation", "topleft ")]);
        assert_eq!(req.query(), "username=a");
    }

    #[test]
    fn test_invalid_duplicate_enumeration_rejected() {
        let err = CollageRequest::from_fields(
            pairs(&[("username", "a"), ("period", "7day"), ("period", "1year")]),
            &FormLimits::default(),
        )
        .unwrap_err();
        assert_eq!(err, RequestError::Parse(ParseError::InvalidPeriod("1year".to_string())));
    }

    #[test]
    fn test_default_pair_does_not_hide_repeated_name() {
        let req = request(&[("username", "a"), ("width", "0"), ("width", "800")]);
        assert_eq!(req.query(), "username=a&width=800");
    }

    #[test]
    fn test_url_joins_endpoint() {
        let req = request(&[("username", "a"), ("rows", "2")]);
        assert_eq!(req.url("/collage"), "/collage?username=a&rows=2");
        assert_eq!(collage_url("/collage", ""), "/collage");
        assert_eq!(collage_url("/collage?v=2", "rows=2"), "/collage?v=2&rows=2");
    }
}
