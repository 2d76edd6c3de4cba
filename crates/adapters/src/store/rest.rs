// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Supabase-style REST implementation of the task store.

use super::{StoreError, TaskStore};
use async_trait::async_trait;
use orc_core::{TaskId, TaskPatch, TaskRecord};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// Table holding one row per dispatched task.
const TABLE: &str = "agent_deliverables";

/// Per-request bound; store reads happen inside the poll loop and must never
/// stall a poll tick for long.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Task store backed by a PostgREST endpoint with service-key auth.
#[derive(Clone, Debug)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
}

impl RestStore {
    /// Build a store client for `base_url` (e.g. `https://project.supabase.co`)
    /// authenticated with a service-role key.
    pub fn new(base_url: &str, service_key: &str) -> Result<Self, StoreError> {
        let key = HeaderValue::from_str(service_key).map_err(|_| StoreError::InvalidKey)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {service_key}"))
            .map_err(|_| StoreError::InvalidKey)?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// PostgREST row filter URL for one task.
    fn row_url(&self, task_id: &TaskId) -> String {
        format!("{}/rest/v1/{}?id=eq.{}", self.base_url, TABLE, task_id)
    }
}

#[async_trait]
impl TaskStore for RestStore {
    async fn read(&self, task_id: &TaskId) -> Result<Option<TaskRecord>, StoreError> {
        let response = self.client.get(self.row_url(task_id)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Status { status: status.as_u16(), body });
        }
        // PostgREST answers a filter query with an array; empty means no row.
        let rows: Vec<TaskRecord> =
            serde_json::from_str(&body).map_err(StoreError::Decode)?;
        Ok(rows.into_iter().next())
    }

    async fn update(&self, task_id: &TaskId, patch: &TaskPatch) -> Result<(), StoreError> {
        let response = self
            .client
            .patch(self.row_url(task_id))
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status { status: status.as_u16(), body });
        }
        tracing::debug!(task = %task_id, "record updated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "rest_tests.rs"]
mod tests;
