// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Settings shared by every source and sink operator.
//!
//! [`SourceConfig`] and [`SinkConfig`] hold the attributes common to all
//! connectors.  Connector-specific configurations embed one of them and
//! expose it through [`SourceCapability`](crate::capability::SourceCapability)
//! or [`SinkCapability`](crate::capability::SinkCapability).
//!
//! `name` and `url` are validated once at construction and never change.
//! The `error_limit` may be left absent; it is resolved from the environment
//! when the job configuration is assembled and there is no public way to
//! change it afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigValidationError;
use crate::json::JsonConfigurable;

// ---------------------------------------------------------------------------
// WriteStrategy
// ---------------------------------------------------------------------------

/// How a sink writes records into its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WriteStrategy {
    /// Insert every record as new.
    #[default]
    Append,
    /// Replace the existing target contents.
    Overwrite,
    /// Insert new records and update existing ones by key.
    Upsert,
}

impl WriteStrategy {
    /// Wire name of the strategy as it appears in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            WriteStrategy::Append    => "append",
            WriteStrategy::Overwrite => "overwrite",
            WriteStrategy::Upsert    => "upsert",
        }
    }
}

impl fmt::Display for WriteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WriteStrategy {
    type Err = ConfigValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "append"    => Ok(WriteStrategy::Append),
            "overwrite" => Ok(WriteStrategy::Overwrite),
            "upsert"    => Ok(WriteStrategy::Upsert),
            _ => Err(ConfigValidationError::InvalidValue {
                field: "strategy".into(),
                value: s.into(),
                reason: "expected one of: append, overwrite, upsert".into(),
            }),
        }
    }
}

// Parsing accepts the same spellings as `FromStr`.
impl TryFrom<String> for WriteStrategy {
    type Error = ConfigValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// SourceConfig
// ---------------------------------------------------------------------------

/// Attributes common to all data-source operators.
///
/// # Examples
///
/// ```rust
/// use flinky_jobconf::SourceConfig;
///
/// let source = SourceConfig::new("orders", "jdbc:postgresql://db/shop", None).unwrap();
/// assert_eq!(source.name(), "orders");
/// assert_eq!(source.error_limit(), None);
///
/// assert!(SourceConfig::new("", "jdbc:postgresql://db/shop", None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSourceConfig")]
pub struct SourceConfig {
    name: String,
    url: String,
    error_limit: Option<u64>,
}

impl SourceConfig {
    const COMPONENT: &'static str = "source operator";

    /// Build a validated source configuration.
    ///
    /// `error_limit` of `None` means "inherit from the environment";
    /// `Some(0)` is an explicit zero tolerance and is never overridden.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError::EmptyField`] if `name` or `url` is
    /// empty or whitespace-only.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        error_limit: Option<u64>,
    ) -> Result<Self, ConfigValidationError> {
        let name = required(Self::COMPONENT, "name", name.into())?;
        let url = required(Self::COMPONENT, "url", url.into())?;
        Ok(Self { name, url, error_limit })
    }

    /// Operator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the source data.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Maximum number of erroring records tolerated, if resolved.
    pub fn error_limit(&self) -> Option<u64> {
        self.error_limit
    }

    /// Fill an absent limit from `fallback`.  Returns `true` if the limit was
    /// absent and has been replaced.
    pub(crate) fn inherit_error_limit(&mut self, fallback: Option<u64>) -> bool {
        inherit(&mut self.error_limit, fallback)
    }
}

impl JsonConfigurable for SourceConfig {
    const ENTITY: &'static str = "source operator configuration";
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSourceConfig {
    name: String,
    url: String,
    // A missing key and an explicit null both mean "absent".
    #[serde(default)]
    error_limit: Option<u64>,
}

impl TryFrom<RawSourceConfig> for SourceConfig {
    type Error = ConfigValidationError;

    fn try_from(raw: RawSourceConfig) -> Result<Self, Self::Error> {
        SourceConfig::new(raw.name, raw.url, raw.error_limit)
    }
}

// ---------------------------------------------------------------------------
// SinkConfig
// ---------------------------------------------------------------------------

/// Attributes common to all data-sink operators.
///
/// # Examples
///
/// ```rust
/// use flinky_jobconf::{SinkConfig, WriteStrategy};
///
/// let sink = SinkConfig::new("k1", "jdbc://b", WriteStrategy::Upsert, Some(5)).unwrap();
/// assert_eq!(sink.strategy(), WriteStrategy::Upsert);
/// assert_eq!(sink.error_limit(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSinkConfig")]
pub struct SinkConfig {
    name: String,
    url: String,
    strategy: WriteStrategy,
    error_limit: Option<u64>,
}

impl SinkConfig {
    const COMPONENT: &'static str = "sink operator";

    /// Build a validated sink configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError::EmptyField`] if `name` or `url` is
    /// empty or whitespace-only.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        strategy: WriteStrategy,
        error_limit: Option<u64>,
    ) -> Result<Self, ConfigValidationError> {
        let name = required(Self::COMPONENT, "name", name.into())?;
        let url = required(Self::COMPONENT, "url", url.into())?;
        Ok(Self { name, url, strategy, error_limit })
    }

    /// Operator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the target.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Write strategy.
    pub fn strategy(&self) -> WriteStrategy {
        self.strategy
    }

    /// Maximum number of erroring records tolerated, if resolved.
    pub fn error_limit(&self) -> Option<u64> {
        self.error_limit
    }

    pub(crate) fn inherit_error_limit(&mut self, fallback: Option<u64>) -> bool {
        inherit(&mut self.error_limit, fallback)
    }
}

impl JsonConfigurable for SinkConfig {
    const ENTITY: &'static str = "sink operator configuration";
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSinkConfig {
    name: String,
    url: String,
    strategy: WriteStrategy,
    #[serde(default)]
    error_limit: Option<u64>,
}

impl TryFrom<RawSinkConfig> for SinkConfig {
    type Error = ConfigValidationError;

    fn try_from(raw: RawSinkConfig) -> Result<Self, Self::Error> {
        SinkConfig::new(raw.name, raw.url, raw.strategy, raw.error_limit)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn required(
    component: &'static str,
    field: &'static str,
    value: String,
) -> Result<String, ConfigValidationError> {
    if value.trim().is_empty() {
        return Err(ConfigValidationError::EmptyField { component, field });
    }
    Ok(value)
}

fn inherit(slot: &mut Option<u64>, fallback: Option<u64>) -> bool {
    match (slot.is_none(), fallback) {
        (true, Some(limit)) => {
            *slot = Some(limit);
            true
        }
        _ => false,
    }
}
