use url::Url;

use crate::env;
use crate::error::{Error, Result};
use crate::path::ensure_trailing_slash;
use crate::source::RawConfig;
use crate::uri;

/// Fully resolved configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Url to the hosting service, placeholders resolved.
    pub service_uri: Url,
    /// Url to the change-tracking database, if configured.
    pub tracking_uri: Option<Url>,
    /// Public IDs matching this regex are never deleted. Compiled on use.
    pub keep_files_pattern: Option<String>,
    /// Empty, or ending with exactly one `/`.
    pub default_prepend_path: String,
}

/// Resolves `raw` against the process environment.
pub fn resolve(raw: RawConfig) -> Result<Settings> {
    resolve_with(raw, |name| std::env::var(name).ok())
}

pub fn resolve_with<F>(raw: RawConfig, lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let RawConfig {
        cloudinary,
        database,
        global,
    } = raw;

    let service_uri = match cloudinary.uri.as_deref() {
        None | Some("") => return Err(Error::config("cloudinary.uri", "not set")),
        Some(s) => Url::parse(s)
            .map_err(|e| Error::config("cloudinary.uri", format!("invalid service URI: {e}")))?,
    };

    let mut default_prepend_path = ensure_trailing_slash(cloudinary.prepend.as_deref().unwrap_or(""));
    let prod_tag = global.prodtag.unwrap_or_default();
    let keep_files_pattern = cloudinary.keepfiles.filter(|p| !p.is_empty());

    let tracking_uri = match database.uri.as_deref() {
        None | Some("") => {
            tracing::warn!("database not set (upload sync disabled)");
            None
        }
        Some(s) => Some(
            Url::parse(s)
                .map_err(|e| Error::config("database.uri", format!("invalid tracking URI: {e}")))?,
        ),
    };

    let service_uri = uri::normalize_with(&service_uri, &lookup)?;
    let tracking_uri = tracking_uri
        .map(|u| uri::normalize_with(&u, &lookup))
        .transpose()?;

    if default_prepend_path.is_empty() && !prod_tag.is_empty() {
        let tag = env::substitute_with(&prod_tag, &lookup)?;
        default_prepend_path = ensure_trailing_slash(&tag);
        tracing::debug!(prod_tag = %prod_tag, %default_prepend_path, "prepend path seeded from production tag");
    }

    Ok(Settings {
        service_uri,
        tracking_uri,
        keep_files_pattern,
        default_prepend_path,
    })
}
