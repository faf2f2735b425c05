use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use serde_json::json;
use tracing::{info, info_span, Instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use matcher::cli::{Cli, Command};
use matcher::config::Config;
use matcher::errors::AppError;
use matcher::models::request::{MatchRequest, RankRequest};
use matcher::runner::{rank, read_input, run_batch, score_one};
use matcher::state::AppState;
use matcher::Taxonomy;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first; malformed env values abort startup
    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    // Initialize structured logging on stderr; stdout carries JSON results
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let run_id = Uuid::new_v4();
    info!(%run_id, "Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config);
    let compact = cli.compact;

    let outcome = run(cli.command, &state, compact)
        .instrument(info_span!("run", %run_id))
        .await;

    if let Err(err) = outcome {
        eprintln!("{}", err.to_body());
        std::process::exit(err.exit_code());
    }
    Ok(())
}

async fn run(command: Command, state: &AppState, compact: bool) -> Result<(), AppError> {
    match command {
        Command::Score { input } => {
            let body = read_input(input.as_deref()).await?;
            let request: MatchRequest = serde_json::from_str(&body)?;
            print_json(&score_one(state, &request), compact)
        }
        Command::Rank { input } => {
            let body = read_input(input.as_deref()).await?;
            let request: RankRequest = serde_json::from_str(&body)?;
            print_json(&rank(state, &request), compact)
        }
        Command::Batch { input } => {
            let body = read_input(input.as_deref()).await?;
            let requests: Vec<MatchRequest> = serde_json::from_str(&body)?;
            let outcomes = run_batch(state, requests).await?;
            print_json(&outcomes, compact)
        }
        Command::Categorize { names } => {
            let taxonomy = Taxonomy::builtin();
            let inferred: Vec<_> = names
                .iter()
                .map(|name| json!({ "name": name, "category": taxonomy.categorize(name) }))
                .collect();
            print_json(&inferred, compact)
        }
        Command::Taxonomy => print_json(Taxonomy::builtin(), compact),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<(), AppError> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}
