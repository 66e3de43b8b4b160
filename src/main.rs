//! Stream Info CLI
//!
//! Launcher workflow that lists the audio and video streams of a media file.

use clap::Parser;
use stream_info::cli::{
    args::{Cli, Commands},
    commands::{check, probe},
};
use stream_info::core::executor::ProcessExecutor;
use stream_info::models::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config().with_ffprobe_path(cli.ffprobe);
    let executor = ProcessExecutor::new();

    match cli.command {
        Commands::Probe { input, format } => {
            let mut stdout = std::io::stdout().lock();
            probe::probe(&executor, &config, &input, format, &mut stdout).await?;
        }

        Commands::Check => {
            let status = check::check(&executor, &config).await;
            status.write_to(&mut std::io::stdout().lock())?;

            if !status.is_ready() {
                anyhow::bail!("ffprobe check failed. Fix the issue above and try again.");
            }
        }
    }

    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr; stdout belongs to the launcher.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("stream_info=debug")
        } else {
            EnvFilter::new("stream_info=info")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
