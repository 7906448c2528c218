mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wit_conf::WitConfig;
use wit_sdk::client::Client;

use crate::cli::WitCli;

/// A harness that's setting up our logging and environment variables and
/// calls into our "real" `run()`.
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Diagnostics go to stderr, stdout is reserved for response bodies.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .init();

    let args = WitCli::parse();

    match run(args).await {
        Ok(body) => println!("{body}"),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}

async fn run(args: WitCli) -> Result<String, anyhow::Error> {
    let config = WitConfig::load().context("cannot construct an API session")?;
    let client = Client::new(config.token);

    cli::run(&client, args.into_command()).await
}
