// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent registry: short names, worker identities, dispatch priorities.
//!
//! The set of dispatchable agents is closed. Short names coming in from the
//! CLI are resolved here, at the validation boundary, so an unknown agent is
//! rejected before any side effect instead of being forwarded verbatim to the
//! remote runner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ad platform a worker fleet is bound to.
///
/// The platform determines the worker-name prefix; everything else about the
/// protocol is identical across platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    GoogleAds,
    MetaAds,
}

impl Platform {
    /// Worker-name prefix for this platform.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::GoogleAds => "google-ads",
            Self::MetaAds => "meta-ads",
        }
    }

    /// Parse a platform name (`google` / `meta`, long forms accepted).
    pub fn parse(value: &str) -> Result<Self, UnknownPlatform> {
        match value.trim().to_ascii_lowercase().as_str() {
            "google" | "google-ads" => Ok(Self::GoogleAds),
            "meta" | "meta-ads" => Ok(Self::MetaAds),
            _ => Err(UnknownPlatform { value: value.to_string() }),
        }
    }
}

crate::simple_display! {
    Platform {
        GoogleAds => "google-ads",
        MetaAds => "meta-ads",
    }
}

/// A platform name that is not part of the closed set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown platform: `{value}` (expected `google` or `meta`)")]
pub struct UnknownPlatform {
    pub value: String,
}

/// The closed set of dispatchable agents.
///
/// Priorities reflect the order agents run within a cycle: analysts first,
/// producers after them, monitoring last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    DataPlacement,
    CreativeAnalyst,
    PostClick,
    CompetitiveIntel,
    CreativeProducer,
    CampaignCreator,
    CampaignMonitor,
}

impl AgentKind {
    /// All agent kinds in dispatch-priority order.
    pub const ALL: [AgentKind; 7] = [
        Self::DataPlacement,
        Self::CreativeAnalyst,
        Self::PostClick,
        Self::CompetitiveIntel,
        Self::CreativeProducer,
        Self::CampaignCreator,
        Self::CampaignMonitor,
    ];

    /// Canonical short name accepted on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::DataPlacement => "data-placement",
            Self::CreativeAnalyst => "creative-analyst",
            Self::PostClick => "post-click",
            Self::CompetitiveIntel => "competitive-intel",
            Self::CreativeProducer => "creative-producer",
            Self::CampaignCreator => "campaign-creator",
            Self::CampaignMonitor => "campaign-monitor",
        }
    }

    /// Worker-name suffix appended to the platform prefix.
    pub fn worker_suffix(&self) -> &'static str {
        match self {
            Self::DataPlacement => "data-placement-analyst",
            Self::CreativeAnalyst => "creative-analyst",
            Self::PostClick => "postclick-analyst",
            Self::CompetitiveIntel => "competitive-intel",
            Self::CreativeProducer => "creative-producer",
            Self::CampaignCreator => "campaign-creator",
            Self::CampaignMonitor => "campaign-monitor",
        }
    }

    /// Dispatch priority within a cycle (1 = first).
    pub fn priority(&self) -> u8 {
        match self {
            Self::DataPlacement => 1,
            Self::CreativeAnalyst => 2,
            Self::PostClick => 3,
            Self::CompetitiveIntel => 4,
            Self::CreativeProducer => 5,
            Self::CampaignCreator => 6,
            Self::CampaignMonitor => 7,
        }
    }

    /// Parse a short name. Underscores are accepted as separators so older
    /// cycle configs (`data_placement`) keep working.
    pub fn parse(value: &str) -> Result<Self, UnknownAgent> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.short_name() == normalized)
            .ok_or_else(|| UnknownAgent { value: value.to_string() })
    }
}

crate::simple_display! {
    AgentKind {
        DataPlacement => "data-placement",
        CreativeAnalyst => "creative-analyst",
        PostClick => "post-click",
        CompetitiveIntel => "competitive-intel",
        CreativeProducer => "creative-producer",
        CampaignCreator => "campaign-creator",
        CampaignMonitor => "campaign-monitor",
    }
}

/// An agent short name that is not part of the closed set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown agent: `{value}` (known: data-placement, creative-analyst, post-click, \
         competitive-intel, creative-producer, campaign-creator, campaign-monitor)")]
pub struct UnknownAgent {
    pub value: String,
}

/// Resolves agent short names to fully-qualified worker identities.
///
/// One registry value is constructed per dispatcher and passed in, replacing
/// the per-platform lookup tables that used to live as module globals in each
/// orchestrator variant.
#[derive(Debug, Clone, Copy)]
pub struct AgentRegistry {
    platform: Platform,
}

impl AgentRegistry {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Fully-qualified worker identity for an agent kind,
    /// e.g. `meta-ads-postclick-analyst`.
    pub fn worker_name(&self, kind: AgentKind) -> String {
        format!("{}-{}", self.platform.prefix(), kind.worker_suffix())
    }

    /// Resolve a short name to `(kind, worker identity)`, rejecting unknown
    /// names at the validation boundary.
    pub fn resolve(&self, short_name: &str) -> Result<(AgentKind, String), UnknownAgent> {
        let kind = AgentKind::parse(short_name)?;
        Ok((kind, self.worker_name(kind)))
    }
}

#[cfg(test)]
#[path = "agent_tests.rs"]
mod tests;
