//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Docpilot - documentation impact analysis for pull requests
#[derive(Parser, Debug)]
#[command(name = "docpilot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a pull request and produce a documentation action plan
    Analyze {
        /// Repository in owner/repo form
        #[arg(long, env = "REPO_NAME")]
        repo: String,

        /// Pull request number
        #[arg(long, env = "PR_NUMBER")]
        pr: u64,

        /// Knowledge-base space targeted by planned actions
        #[arg(long, default_value = "DOC")]
        space: String,

        /// Maximum number of topics probed for existing coverage
        #[arg(long, default_value_t = 3)]
        max_topics: usize,

        /// Per-lookup timeout in seconds
        #[arg(long, default_value_t = 10)]
        lookup_timeout: u64,

        /// Output file for the JSON report
        #[arg(short, long, default_value = "docpilot_report.json")]
        output: PathBuf,

        /// Plan without querying the documentation source
        #[arg(long)]
        offline: bool,
    },

    /// Print a previously saved report
    Report {
        /// Path to a report JSON file
        #[arg(default_value = "docpilot_report.json")]
        input: PathBuf,
    },

    /// Draft page content for one action of a saved report
    Draft {
        /// Path to a report JSON file
        #[arg(default_value = "docpilot_report.json")]
        input: PathBuf,

        /// Index of the action to draft (as shown by the report command)
        #[arg(long, default_value_t = 1)]
        action: usize,

        /// Model to draft with (default: anthropic/claude-sonnet-4)
        #[arg(long)]
        model: Option<String>,
    },
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_analyze() {
        let cli = Cli::parse_from(["docpilot", "analyze", "--repo", "acme/widgets", "--pr", "42"]);
        match cli.command {
            Commands::Analyze {
                repo,
                pr,
                space,
                max_topics,
                offline,
                ..
            } => {
                assert_eq!(repo, "acme/widgets");
                assert_eq!(pr, 42);
                assert_eq!(space, "DOC");
                assert_eq!(max_topics, 3);
                assert!(!offline);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_cli_parse_report_default_path() {
        let cli = Cli::parse_from(["docpilot", "report"]);
        match cli.command {
            Commands::Report { input } => {
                assert_eq!(input, PathBuf::from("docpilot_report.json"));
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_cli_parse_draft() {
        let cli = Cli::parse_from(["docpilot", "draft", "plan.json", "--action", "2"]);
        match cli.command {
            Commands::Draft { input, action, model } => {
                assert_eq!(input, PathBuf::from("plan.json"));
                assert_eq!(action, 2);
                assert!(model.is_none());
            }
            _ => panic!("Expected Draft command"),
        }
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["docpilot", "-vvv", "report"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }
}
