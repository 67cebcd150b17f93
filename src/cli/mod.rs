//! CLI module for the User Directory
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `client`: exercise a running API (demo, validation, interactive)

pub mod client;
pub mod serve;

use clap::{Parser, Subcommand};

/// User Directory - in-memory user management API
#[derive(Parser)]
#[command(name = "user-directory")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(serve::ServeArgs),

    /// Run the example client against a running server
    Client(client::ClientArgs),
}
