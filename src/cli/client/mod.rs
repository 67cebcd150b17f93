//! Example client for the User Directory API

pub mod api;
pub mod interactive;
pub mod output;
pub mod workflows;

use clap::{Args, ValueEnum};
use tokio::io::BufReader;

pub use api::{ClientError, UserDirectoryClient};
pub use workflows::{run_demo, run_validation, DemoSummary, ValidationReport};

#[derive(Args)]
pub struct ClientArgs {
    /// Base URL of the running API
    #[arg(long, default_value = "http://localhost:8000")]
    pub api_url: String,

    /// What to run against the API
    #[arg(value_enum, default_value_t = ClientMode::Demo)]
    pub mode: ClientMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClientMode {
    /// Scripted walk through every endpoint
    Demo,
    /// Check that invalid input is rejected
    Validation,
    /// Menu-driven session on stdin
    Interactive,
}

/// Run the client command
pub async fn run(args: ClientArgs) -> anyhow::Result<()> {
    let client = UserDirectoryClient::new(args.api_url);

    match args.mode {
        ClientMode::Demo => {
            if let Err(e) = run_demo(&client).await {
                output::failure(&e.to_string());
                if matches!(e, ClientError::Transport(_)) {
                    println!(
                        "Make sure the API server is running at {}",
                        client.base_url()
                    );
                }
                anyhow::bail!("demo failed: {}", e);
            }
        }
        ClientMode::Validation => {
            let report = run_validation(&client).await?;
            println!(
                "\nValidation checks: {} passed, {} failed",
                report.passed, report.failed
            );
            if report.failed > 0 {
                anyhow::bail!("{} validation check(s) failed", report.failed);
            }
        }
        ClientMode::Interactive => {
            let stdin = BufReader::new(tokio::io::stdin());
            interactive::run_interactive(&client, stdin).await?;
        }
    }

    Ok(())
}
