use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cldctl_core::source::{CloudinarySection, RawConfig};

use crate::cli::Args;

const DEFAULT_CONFIG_NAME: &str = ".cloudinary.toml";

/// Builds the raw configuration from the config file, the environment and
/// the command line, in increasing order of precedence.
pub fn load(args: &Args) -> Result<RawConfig> {
    let file = match config_path(args) {
        Some(path) => read_file(&path)?,
        None => RawConfig::default(),
    };
    let env = RawConfig::from_env().context("failed to parse config from environment variables")?;
    Ok(file.merge(env).merge(flags(args)))
}

fn config_path(args: &Args) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(path.clone());
    }
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_CONFIG_NAME))
        .filter(|path| path.is_file())
}

fn read_file(path: &Path) -> Result<RawConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let raw = RawConfig::from_toml_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    println!("Using config file: {}", path.display());
    Ok(raw)
}

fn flags(args: &Args) -> RawConfig {
    RawConfig {
        cloudinary: CloudinarySection {
            uri: args.uri.clone(),
            prepend: args.prepend.clone(),
            keepfiles: None,
        },
        ..Default::default()
    }
}
