use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// Config file (default is $HOME/.cloudinary.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Service URI, cloudinary://<api_key>:<api_secret>@<cloud_name>
    #[arg(env = "CLOUDINARY_URI", long, global = true, hide_env_values = true)]
    pub uri: Option<String>,
    /// Default remote prepend path
    #[arg(long, global = true)]
    pub prepend: Option<String>,
    /// Remote prepend path for this invocation only
    #[arg(long, short, global = true)]
    pub path: Option<String>,
    /// Image filename or public ID
    #[arg(long, short, global = true)]
    pub image: Option<String>,
    /// Raw filename or public ID
    #[arg(long, short, global = true)]
    pub raw: Option<String>,
    /// Simulate, do nothing (dry run)
    #[arg(long, short, global = true)]
    pub simulate: bool,
    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List resources, or show details of the selected ones [alias: ls]
    #[command(alias = "ls")]
    List,
    /// Delete the selected resource [alias: rm]
    #[command(alias = "rm")]
    Delete,
}
