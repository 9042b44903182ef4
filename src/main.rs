//! hatatest - A terminal dashboard for LLM error-category test runs
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

/// hatatest - test error-category questions against LLM providers
#[derive(Parser, Debug)]
#[command(name = "hatatest")]
#[command(about = "A terminal dashboard for LLM error-category test runs", long_about = None)]
struct Args {
    /// Base URL of the test backend (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Path to an alternative config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    hatatest_core::logging::init()?;

    let mut settings = hatatest_app::load_settings(args.config.as_deref());
    if let Some(server) = args.server {
        settings.server.base_url = server;
    }

    hatatest_tui::run(settings).await?;
    Ok(())
}
