//! The one persisted preference: the last username submitted.
//!
//! Stored client-side in a long-lived cookie, read when the form is rendered
//! and written on submit.

use axum::http::{header, HeaderMap};
use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::collage::query::encode_component;

pub const USERNAME_COOKIE: &str = "username";
/// One year.
const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Reads the remembered username. Missing or undecodable cookies yield "".
pub fn read_username(headers: &HeaderMap) -> String {
    let Some(raw) = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == USERNAME_COOKIE)
        .map(|(_, value)| value)
    else {
        return String::new();
    };

    match percent_decode_str(raw).decode_utf8() {
        Ok(username) => username.into_owned(),
        Err(e) => {
            debug!("Ignoring undecodable username cookie: {e}");
            String::new()
        }
    }
}

/// `Set-Cookie` value persisting `username`.
pub fn username_cookie(username: &str) -> String {
    format!(
        "{USERNAME_COOKIE}={}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax",
        encode_component(username)
    )
}
