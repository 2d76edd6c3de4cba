// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `orc status`: one-shot read of a task record.

use super::store_credentials;
use crate::exit_error::{codes, ExitError};
use crate::output;
use anyhow::Result;
use orc_adapters::{RestStore, TaskStore};
use orc_core::TaskId;

#[derive(clap::Args)]
pub struct StatusArgs {
    /// Task ID (UUID)
    #[arg(long)]
    pub task: String,

    /// Print the raw record as JSON
    #[arg(long)]
    pub json: bool,

    /// Store base URL (defaults to $SUPABASE_URL)
    #[arg(long)]
    pub store_url: Option<String>,

    /// Store service key (defaults to $SUPABASE_SERVICE_KEY)
    #[arg(long)]
    pub store_key: Option<String>,
}

pub async fn run(args: StatusArgs) -> Result<()> {
    let task = TaskId::parse(&args.task)
        .map_err(|e| ExitError::new(codes::DISPATCH_FAILED, e.to_string()))?;
    let (store_url, store_key) = store_credentials(args.store_url, args.store_key)?;
    let store = RestStore::new(&store_url, &store_key)
        .map_err(|e| ExitError::new(codes::DISPATCH_FAILED, format!("store client: {e}")))?;

    match store.read(&task).await {
        Ok(Some(record)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print!("{}", output::record_report(&record));
            }
            Ok(())
        }
        Ok(None) => Err(ExitError::new(
            codes::DISPATCH_FAILED,
            format!("no record found for task {task}"),
        )
        .into()),
        Err(error) => Err(ExitError::new(
            codes::DISPATCH_FAILED,
            format!("store read failed: {error}"),
        )
        .into()),
    }
}
