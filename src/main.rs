use std::io;

use anyhow::Context;
use clap::Parser;
use keyword_ideas::config::Config;
use keyword_ideas::ideas::{self, DESCRIPTION, LANGUAGE_ID, SEARCH_PHRASE};
use keyword_ideas::service::HttpTargetingIdeaService;

#[derive(Parser)]
#[command(version, about = DESCRIPTION)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // Logs go to stderr; stdout carries the example's output.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    println!("{DESCRIPTION}");
    if let Err(e) = run().await {
        println!("An exception occurred while running this code example. {:#}", e);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let service =
        HttpTargetingIdeaService::new(&config).context("Failed to create targeting idea service")?;
    log::info!("using targeting idea service at {}", service.url());

    let selector = ideas::build_selector(SEARCH_PHRASE, LANGUAGE_ID);
    let mut out = io::stdout().lock();
    ideas::get_keyword_ideas(&service, selector, &mut out).await?;
    Ok(())
}
