// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

use crate::exit_error::{codes, ExitError};
use anyhow::Result;
use std::time::Duration;

pub mod dispatch;
pub mod status;

/// Parse a duration like `30m`, `1h30m`, `90s`, or a bare number of seconds.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let mut total_secs: u64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else {
            let n: u64 =
                current_num.parse().map_err(|_| anyhow::anyhow!("invalid duration: {}", s))?;
            current_num.clear();
            match c {
                'h' => total_secs += n * 3600,
                'm' => total_secs += n * 60,
                's' => total_secs += n,
                _ => anyhow::bail!("unknown duration unit '{}' in: {}", c, s),
            }
        }
    }
    // Bare number → seconds
    if !current_num.is_empty() {
        let n: u64 = current_num.parse().map_err(|_| anyhow::anyhow!("invalid duration: {}", s))?;
        total_secs += n;
    }
    if total_secs == 0 {
        anyhow::bail!("duration must be > 0: {}", s);
    }
    Ok(Duration::from_secs(total_secs))
}

/// Resolve store credentials from flags, falling back to the environment.
pub(crate) fn store_credentials(
    url: Option<String>,
    key: Option<String>,
) -> Result<(String, String)> {
    let url = url
        .or_else(|| std::env::var("SUPABASE_URL").ok())
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            ExitError::new(
                codes::DISPATCH_FAILED,
                "missing store URL: pass --store-url or set SUPABASE_URL",
            )
        })?;
    let key = key
        .or_else(|| std::env::var("SUPABASE_SERVICE_KEY").ok())
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            ExitError::new(
                codes::DISPATCH_FAILED,
                "missing store service key: pass --store-key or set SUPABASE_SERVICE_KEY",
            )
        })?;
    Ok((url, key))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
