// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! orc: dispatch optimization agents to the runner machine and wait for
//! their deliverables.

mod color;
mod commands;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use exit_error::ExitError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "orc",
    version,
    about = "Dispatch ad-platform agents and monitor task completion",
    styles = color::styles()
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Trigger an agent on the runner machine and wait for its deliverable
    Dispatch(commands::dispatch::DispatchArgs),
    /// Read a task record once and print it
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Dispatch(args) => commands::dispatch::run(args).await,
        Command::Status(args) => commands::status::run(args).await,
    };

    if let Err(error) = result {
        match error.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("{}", exit.message);
                }
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("error: {error:#}");
                std::process::exit(exit_error::codes::DISPATCH_FAILED);
            }
        }
    }
}
