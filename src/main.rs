use clap::{CommandFactory, Parser};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cedar::app::{AppContext, MailConfig};
use cedar::cli::Cli;
use cedar::pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // No recipient means nothing to do; print usage and exit cleanly
    // before any network or file activity.
    let Some(to) = cli.to else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mail = MailConfig { to, from: cli.from };
    let ctx = AppContext::new(None, mail)?;

    match pipeline::run(&ctx, &cli.section, &cli.url).await {
        Ok(summary) => {
            info!(
                "Announcement run complete: {} sent, {} already seen, {} failed",
                summary.sent, summary.skipped, summary.failed
            );
        }
        Err(e) => {
            error!("Announcement run failed: {e}");
        }
    }

    Ok(())
}
