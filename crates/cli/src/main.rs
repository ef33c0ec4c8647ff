//! notesearch CLI - semantic search over note comments
//!
//! This binary provides the command-line interface to the backend search service.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use notesearch::{commands, load_config, output};
use notesearch_client::SearchClient;
use notesearch_core::config::Config;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "notesearch")]
#[command(about = "Semantic search over note comments")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the configured one
    #[arg(long, value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search comments semantically
    Search {
        /// Free-text query
        query: String,

        /// Number of results to request
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether the backend is healthy
    Health,
    /// Poll backend health and report state changes
    Watch {
        /// Seconds between probes
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
        interval_secs: u64,

        /// Stop after this many probes
        #[arg(long)]
        count: Option<usize>,
    },
    /// Show metadata for a video
    Video {
        /// Video identifier
        video_id: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Maintain the backend vector index
    #[command(subcommand)]
    Index(IndexCommands),
}

#[derive(Subcommand)]
enum IndexCommands {
    /// Rebuild the index from every stored comment
    Init,
    /// Embed one stored comment and add it to the index
    Add {
        /// Comment identifier
        comment_id: String,
    },
    /// Clear the index
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    let Some(command) = cli.command else {
        println!("Run 'notesearch search <QUERY>' to search comments, or --help for more options");
        return Ok(());
    };

    let config = load_config(cli.config.as_deref(), cli.base_url.as_deref())?;
    let client = SearchClient::new(&config.backend).context("Failed to create search client")?;

    match command {
        Commands::Search {
            query,
            top_k,
            json,
        } => search(&client, &config, &query, top_k, json).await,
        Commands::Health => health(&client).await,
        Commands::Watch {
            interval_secs,
            count,
        } => watch(&client, interval_secs, count).await,
        Commands::Video { video_id, json } => video(&client, &video_id, json).await,
        Commands::Index(index_cmd) => handle_index_command(&client, index_cmd).await,
    }
}

/// Initialize logging system
///
/// Logs go to stderr so `--json` output stays machine-readable.
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "notesearch_core={level},notesearch_client={level},{}={level}",
            env!("CARGO_PKG_NAME")
        ))
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

async fn search(
    client: &SearchClient,
    config: &Config,
    query: &str,
    top_k: Option<usize>,
    json: bool,
) -> Result<()> {
    let top_k = top_k.unwrap_or(config.search.default_top_k);
    let results = commands::search(client, query, top_k).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", output::render_results(&results));
    }
    Ok(())
}

async fn health(client: &SearchClient) -> Result<()> {
    if client.check_health().await {
        println!("ok");
        Ok(())
    } else {
        println!("unavailable");
        bail!("Backend at {} is unavailable", client.base_url())
    }
}

async fn watch(client: &SearchClient, interval_secs: u64, count: Option<usize>) -> Result<()> {
    info!("Watching {} every {interval_secs}s", client.base_url());

    let summary = commands::watch_health(client, Duration::from_secs(interval_secs), count).await;

    println!(
        "{} checks, {} healthy, {} state changes",
        summary.checks, summary.healthy, summary.transitions
    );
    Ok(())
}

async fn video(client: &SearchClient, video_id: &str, json: bool) -> Result<()> {
    let info = commands::video(client, video_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", output::render_video(&info));
    }
    Ok(())
}

async fn handle_index_command(client: &SearchClient, cmd: IndexCommands) -> Result<()> {
    let message = match cmd {
        IndexCommands::Init => client
            .init_index()
            .await
            .context("Failed to rebuild index")?,
        IndexCommands::Add { comment_id } => client
            .add_comment_embedding(&comment_id)
            .await
            .with_context(|| format!("Failed to add comment {comment_id}"))?,
        IndexCommands::Reset => client.reset_index().await.context("Failed to reset index")?,
    };

    print!("{}", output::render_index_message(&message));
    Ok(())
}
