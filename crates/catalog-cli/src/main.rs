#[macro_use]
extern crate log;

mod check;
mod config;
mod listing;
mod manifest;
mod render;

use std::path::PathBuf;

use catalog_lib::surface::Renderer;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(version, about = "Aidoku French sources catalog utilities")]
struct Opts {
    /// Classification file (offline ids and source types), built-in tables when omitted
    #[clap(short, long)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the catalog page as static HTML
    Render {
        /// Path or http(s) URL of the manifest
        manifest: String,
        #[clap(short, long, default_value = "index.html")]
        output: PathBuf,
    },
    /// Print the sorted sources and the summary line
    Stats { manifest: String },
    /// Lint a manifest against the classification tables
    Check { manifest: String },
    /// Add missing listing ids to every source.json
    FixListingIds {
        #[clap(short, long, default_value = "src")]
        path: PathBuf,
    },
}

fn init_logger() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if std::env::var("RUST_LOG").is_err() {
        if let Ok(level) = std::env::var("CATALOG_LOG") {
            builder.parse_filters(&format!("catalog_cli={},catalog_lib={}", level, level));
        }
    }

    builder.init();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    init_logger();

    let opts: Opts = Opts::parse();

    let classification = config::load_classification(opts.config.as_deref())?;
    let renderer = Renderer::new(classification);

    match opts.subcmd {
        Command::Render { manifest, output } => {
            render::render(&renderer, manifest::load(&manifest), &output).await?
        }
        Command::Stats { manifest } => render::stats(&renderer, &manifest).await?,
        Command::Check { manifest } => check::run(&renderer, &manifest).await?,
        Command::FixListingIds { path } => listing::fix_all(&path)?,
    }

    Ok(())
}
