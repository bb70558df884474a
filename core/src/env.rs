//! `${VARNAME}` placeholder substitution.
//!
//! Only upper snake case names are recognized; anything else is left as is.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{Error, Result};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([A-Z_]+)\}").unwrap());

/// Replaces every placeholder with the value of the named process
/// environment variable.
pub fn substitute(src: &str) -> Result<String> {
    substitute_with(src, |name| std::env::var(name).ok())
}

/// Same as [`substitute`] with an explicit variable lookup.
///
/// Fails on the first placeholder, in source order, whose value is undefined
/// or empty. Nothing is substituted in that case.
pub fn substitute_with<F>(src: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut values = HashMap::new();
    for caps in PLACEHOLDER.captures_iter(src) {
        let name = &caps[1];
        if values.contains_key(name) {
            continue;
        }
        match lookup(name) {
            Some(value) if !value.is_empty() => {
                values.insert(name.to_string(), value);
            }
            _ => {
                return Err(Error::MissingEnvironmentVariable {
                    name: name.to_string(),
                })
            }
        }
    }
    if values.is_empty() {
        return Ok(src.to_string());
    }

    let replaced = PLACEHOLDER.replace_all(src, |caps: &Captures<'_>| values[&caps[1]].clone());
    Ok(replaced.into_owned())
}
