mod cli;
mod cloudinary;
mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cldctl_core::{uri::redacted, Selector};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{Args, Command};
use crate::cloudinary::CloudinaryClient;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let raw = config::load(&args)?;
    let settings = cldctl_core::resolve(raw).context("failed to resolve configuration")?;

    if args.simulate {
        println!("*** DRY RUN MODE ***");
    }
    if settings.default_prepend_path.is_empty() {
        println!("No default remote prepend path set");
    } else {
        println!(
            "Default remote prepend path set to: {}",
            settings.default_prepend_path
        );
    }
    if let Some(tracking_uri) = &settings.tracking_uri {
        tracing::info!(uri = %redacted(tracking_uri), "change tracking database configured");
    }

    tracing::debug!(uri = %redacted(&settings.service_uri), "using hosting service");
    let service = CloudinaryClient::from_uri(&settings.service_uri)?;

    let selector = Selector::new(args.image, args.raw);
    let path_override = args.path.unwrap_or_default();

    match args.command {
        Command::List => commands::list(&service, &settings, &selector, &path_override).await?,
        Command::Delete => {
            commands::delete(
                &service,
                &settings,
                &selector,
                &path_override,
                args.simulate,
            )
            .await?
        }
    }

    Ok(())
}
