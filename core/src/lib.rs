//! Configuration resolution and public ID composition for `cldctl`.

pub mod env;
pub mod error;
pub mod path;
pub mod public_id;
pub mod resource;
pub mod settings;
pub mod source;
pub mod uri;

pub use error::{Error, Result, UriStage};
pub use resource::{ResourceKind, Selector};
pub use settings::{resolve, Settings};
pub use source::RawConfig;
