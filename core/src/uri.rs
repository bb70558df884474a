//! Placeholder resolution inside URIs.
//!
//! Config sources percent-encode `${VAR}` placeholders (userinfo and path
//! components always escape braces), so the full serialization is decoded
//! before substitution and parsed again afterwards.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::env;
use crate::error::{Error, Result, UriStage};

/// Resolves the placeholders of `uri` against the process environment.
pub fn normalize(uri: &Url) -> Result<Url> {
    normalize_with(uri, |name| std::env::var(name).ok())
}

pub fn normalize_with<F>(uri: &Url, lookup: F) -> Result<Url>
where
    F: Fn(&str) -> Option<String>,
{
    let decoded = decode(uri.as_str())?;
    let substituted = env::substitute_with(&decoded, lookup)
        .map_err(|e| Error::invalid_uri(UriStage::Substitute, e))?;
    Url::parse(&substituted).map_err(|e| Error::invalid_uri(UriStage::Parse, e))
}

/// Strict percent-decoding: a `%` must introduce two hex digits and the
/// decoded bytes must be UTF-8. `+` is kept as is.
fn decode(src: &str) -> Result<String> {
    let bytes = src.as_bytes();
    let mut i = 0;
    while let Some(offset) = bytes[i..].iter().position(|&b| b == b'%') {
        let at = i + offset;
        let escape = bytes.get(at + 1..at + 3);
        if !matches!(escape, Some([h, l]) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit()) {
            return Err(Error::invalid_uri(
                UriStage::Decode,
                format!("malformed escape sequence at offset {at}"),
            ));
        }
        i = at + 3;
    }

    percent_decode_str(src)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| Error::invalid_uri(UriStage::Decode, e))
}

/// Renders `uri` with its password masked.
pub fn redacted(uri: &Url) -> String {
    if uri.password().is_none() {
        return uri.to_string();
    }
    let mut masked = uri.clone();
    match masked.set_password(Some("***")) {
        Ok(()) => masked.to_string(),
        Err(()) => format!("{}://***", uri.scheme()),
    }
}
