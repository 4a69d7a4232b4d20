//! Docpilot CLI entry point.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use docpilot_cli::cli::{Cli, Commands};
use docpilot_cli::commands::{self, AnalyzeOptions};

#[tokio::main]
async fn main() {
    // Load .env.local if it exists (for GITHUB_TOKEN, CONFLUENCE_* etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));
    fmt().with_env_filter(filter).with_target(false).init();

    let result = match cli.command {
        Commands::Analyze {
            ref repo,
            pr,
            ref space,
            max_topics,
            lookup_timeout,
            ref output,
            offline,
        } => {
            let options = AnalyzeOptions {
                repo: repo.clone(),
                pr,
                space: space.clone(),
                max_topics,
                lookup_timeout: Duration::from_secs(lookup_timeout),
                offline,
            };
            commands::analyze(&options, output).await.map(|_| ())
        }
        Commands::Report { ref input } => commands::report(input),
        Commands::Draft {
            ref input,
            action,
            ref model,
        } => commands::draft(input, action, model.clone()).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
