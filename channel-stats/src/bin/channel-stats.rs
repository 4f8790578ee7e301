use channel_stats::format::render_stats;
use channel_stats::youtube_api::{DEFAULT_BASE_URL, YouTubeClient};
use channel_stats::{ChannelResolver, Phase, Session};
use clap::Parser;
use eyre::Context;
use std::io::IsTerminal;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const HINT: &str = "Enter a YouTube Channel ID (e.g., `UCX6OQ3DkcsbYNE6H8uQQuVA`) or a channel name (e.g., `MrBeast`).";

/// Look up subscriber, view, and video counts for a YouTube channel.
///
/// Without a query, prompts for channels interactively.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// YouTube Data API key.
    #[arg(long, env = "YOUTUBE_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Root URL of the YouTube Data API.
    #[arg(long, env = "YOUTUBE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    api_base_url: String,

    /// Channel ID or channel name to look up.
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    // a missing .env is fine; the key may come from the real environment
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let args = Args::parse();
    if args.api_key.is_empty() {
        tracing::warn!("no YouTube API key configured; set YOUTUBE_API_KEY or pass --api-key");
    }

    let yt = YouTubeClient::new(args.api_key, reqwest::Client::new())
        .with_base_url(args.api_base_url);
    let resolver = ChannelResolver::new(yt);
    let mut session = Session::new();

    if args.query.is_empty() {
        interactive(&resolver, &mut session).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let query = args.query.join(" ");
    let phase = session.submit(&resolver, &query).await;
    show(&session);
    Ok(if phase == Phase::Found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn interactive(resolver: &ChannelResolver, session: &mut Session) -> eyre::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HINT}");
    loop {
        stdout
            .write_all(b"\nEnter Channel ID or Name: ")
            .await
            .context("write prompt")?;
        stdout.flush().await.context("flush prompt")?;

        let Some(line) = lines.next_line().await.context("read query")? else {
            break;
        };
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }

        // the next prompt only appears once this lookup is done
        println!("Searching...");
        session.submit(resolver, &line).await;
        show(session);
    }

    Ok(())
}

fn show(session: &Session) {
    if let Some(error) = session.error() {
        eprintln!("error: {error}");
    }
    if let Some(stats) = session.stats() {
        print!("{}", render_stats(stats));
    }
}
