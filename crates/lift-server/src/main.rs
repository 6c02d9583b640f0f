use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lift_core::SimConfig;
use lift_server::{SimHandle, serve};
use tokio::net::TcpListener;

/// Serve a lift simulation over newline-delimited JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:4000")]
    addr: String,

    /// JSON file with a base SimConfig; `init` overrides the three counts.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dispatch policy: scored, nearest, or noop.
    #[arg(long, default_value = "scored")]
    policy: String,

    /// Override the passenger generation seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Initial autoplay speed multiplier.
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate().context("invalid base configuration")?;

    let handle = SimHandle::new(config, &args.policy, args.speed)?;
    let listener = TcpListener::bind(&args.addr)
        .await
        .with_context(|| format!("binding {}", args.addr))?;
    serve(listener, handle).await?;
    Ok(())
}
