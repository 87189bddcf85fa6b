use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cooccur::cli::{run, Args};

fn main() -> anyhow::Result<()> {
    // stdout stays free for the user; progress goes to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cooccur=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    run(&args).inspect_err(|e| tracing::error!("{:#}", e))?;

    Ok(())
}
