//! Canonical remote identifiers.

use crate::path::ensure_trailing_slash;
use crate::resource::ResourceKind;

/// Computes the public ID under which `local` is addressed remotely.
///
/// A non-empty `path_override` wins over `default_prepend`. Images are
/// addressed without their file extension, raw files keep it.
pub fn compose(
    local: &str,
    kind: ResourceKind,
    path_override: &str,
    default_prepend: &str,
) -> String {
    let prepend = if path_override.is_empty() {
        ensure_trailing_slash(default_prepend)
    } else {
        ensure_trailing_slash(path_override)
    };

    match kind {
        ResourceKind::Raw => prepend + local,
        ResourceKind::Image => prepend + strip_extension(local),
    }
}

/// Drops the extension of the final path segment. Dotfiles have none.
pub fn strip_extension(name: &str) -> &str {
    let segment_start = name.rfind('/').map_or(0, |i| i + 1);
    match name[segment_start..].rfind('.') {
        Some(0) | None => name,
        Some(dot) => &name[..segment_start + dot],
    }
}
