use std::fmt;

use crate::error::{Error, Result};

/// Addressing convention of a remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Addressed with its file extension.
    Raw,
    /// Addressed without its file extension.
    Image,
}

impl ResourceKind {
    /// Resource type segment used by the hosting service.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Raw => "raw",
            ResourceKind::Image => "image",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resources named on the command line through `--image` and `--raw`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub image: Option<String>,
    pub raw: Option<String>,
}

impl Selector {
    pub fn new(image: Option<String>, raw: Option<String>) -> Self {
        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
        Self {
            image: non_empty(image),
            raw: non_empty(raw),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.raw.is_none()
    }

    /// The single resource an operation acts on. Image wins when both are
    /// given.
    pub fn target(&self) -> Result<(ResourceKind, &str)> {
        self.targets()
            .into_iter()
            .next()
            .ok_or(Error::MissingResourceKind)
    }

    /// Every selected resource, image first.
    pub fn targets(&self) -> Vec<(ResourceKind, &str)> {
        let image = self.image.as_deref().map(|n| (ResourceKind::Image, n));
        let raw = self.raw.as_deref().map(|n| (ResourceKind::Raw, n));
        image.into_iter().chain(raw).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selector_is_a_usage_error() {
        let selector = Selector::new(None, Some(String::new()));
        assert!(selector.is_empty());
        assert!(matches!(
            selector.target(),
            Err(Error::MissingResourceKind)
        ));
        assert!(selector.targets().is_empty());
    }

    #[test]
    fn image_takes_precedence() {
        let selector = Selector::new(Some("logo.png".into()), Some("app.js".into()));
        assert_eq!(selector.target().unwrap(), (ResourceKind::Image, "logo.png"));
        assert_eq!(
            selector.targets(),
            vec![(ResourceKind::Image, "logo.png"), (ResourceKind::Raw, "app.js")]
        );
    }

    #[test]
    fn raw_alone_is_selected() {
        let selector = Selector::new(None, Some("app.js".into()));
        assert_eq!(selector.target().unwrap(), (ResourceKind::Raw, "app.js"));
    }

    #[test]
    fn kind_names_match_service_resource_types() {
        assert_eq!(ResourceKind::Raw.to_string(), "raw");
        assert_eq!(ResourceKind::Image.as_str(), "image");
    }
}
