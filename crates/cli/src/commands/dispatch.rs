// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `orc dispatch`: trigger an agent and wait for its deliverable.

use super::{parse_duration, store_credentials};
use crate::exit_error::{codes, outcome_code, ExitError};
use crate::output;
use anyhow::Result;
use orc_adapters::{RestStore, SshInvoker};
use orc_core::{AgentRegistry, DispatchConfig, Platform, SystemClock};
use orc_engine::{DispatchRequest, Dispatcher};

#[derive(clap::Args)]
pub struct DispatchArgs {
    /// Agent short name (e.g. data-placement, post-click)
    #[arg(long)]
    pub agent: String,

    /// Optimization cycle ID (UUID)
    #[arg(long)]
    pub cycle: String,

    /// Task ID (UUID)
    #[arg(long)]
    pub task: String,

    /// Brand ID (UUID)
    #[arg(long)]
    pub brand: String,

    /// Runner machine hostname or IP
    #[arg(long)]
    pub host: String,

    /// SSH login user on the runner machine
    #[arg(long)]
    pub user: Option<String>,

    /// Worker fleet platform
    #[arg(long, value_parser = Platform::parse, default_value = "meta")]
    pub platform: Platform,

    /// Execution timeout, e.g. 30m or 1800 (default 30m)
    #[arg(long)]
    pub timeout: Option<String>,

    /// Poll interval, e.g. 5s (default 5s)
    #[arg(long)]
    pub poll_interval: Option<String>,

    /// Skip the SSH connectivity probe before dispatching
    #[arg(long)]
    pub no_preflight: bool,

    /// Store base URL (defaults to $SUPABASE_URL)
    #[arg(long)]
    pub store_url: Option<String>,

    /// Store service key (defaults to $SUPABASE_SERVICE_KEY)
    #[arg(long)]
    pub store_key: Option<String>,
}

pub async fn run(args: DispatchArgs) -> Result<()> {
    let config = DispatchConfig::default().with_preflight(!args.no_preflight);
    let timeout = match &args.timeout {
        Some(raw) => parse_duration(raw)?,
        None => config.default_timeout,
    };
    let poll_interval = match &args.poll_interval {
        Some(raw) => parse_duration(raw)?,
        None => config.default_poll_interval,
    };

    let (store_url, store_key) = store_credentials(args.store_url, args.store_key)?;
    let store = RestStore::new(&store_url, &store_key)
        .map_err(|e| ExitError::new(codes::DISPATCH_FAILED, format!("store client: {e}")))?;

    let registry = AgentRegistry::new(args.platform);
    // Best-effort preview; an unknown name is reported by validation below.
    let worker = registry
        .resolve(&args.agent)
        .map(|(_, worker)| worker)
        .unwrap_or_else(|_| args.agent.clone());

    let host = match &args.user {
        Some(user) => format!("{user}@{}", args.host),
        None => args.host.clone(),
    };
    let request = DispatchRequest {
        agent: args.agent,
        cycle: args.cycle,
        task: args.task,
        brand: args.brand,
        host,
        timeout,
        poll_interval,
    };

    print!("{}", output::dispatch_banner(&request, &worker));

    let dispatcher =
        Dispatcher::new(store, SshInvoker::new(), SystemClock, registry, config);
    let outcome = dispatcher.dispatch(&request).await;
    print!("{}", output::outcome_report(&outcome));

    match outcome_code(&outcome) {
        codes::DELIVERED => Ok(()),
        code => Err(ExitError::new(code, String::new()).into()),
    }
}
