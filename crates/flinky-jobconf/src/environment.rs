// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Execution-environment configuration.
//!
//! [`EnvironmentConfig`] carries the environment-wide error limit, which is
//! the default every operator inherits when its own limit is absent, plus an
//! opaque map of environment-scoped settings.  `EnvironmentConfig::default()`
//! is always a valid starting point (no limit, no settings).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigValidationError;
use crate::json::JsonConfigurable;

/// JSON key owned by the environment's error limit.
const ERROR_LIMIT_KEY: &str = "errorLimit";

/// Settings that apply to the whole job's execution context.
///
/// # Examples
///
/// ```rust
/// use flinky_jobconf::{EnvironmentConfig, JsonConfigurable};
///
/// let env = EnvironmentConfig::new(Some(10))
///     .with_setting("parallelism", 4)
///     .unwrap();
///
/// assert_eq!(env.error_limit(), Some(10));
/// assert_eq!(env.to_json().unwrap(), r#"{"errorLimit":10,"parallelism":4}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawEnvironmentConfig")]
pub struct EnvironmentConfig {
    /// Default error limit for operators that do not set their own.
    error_limit: Option<u64>,

    /// Environment-specific settings, opaque to the job model.  Keys render
    /// in sorted order.
    #[serde(flatten)]
    settings: Map<String, Value>,
}

impl EnvironmentConfig {
    /// Create an environment with the given default error limit.
    pub fn new(error_limit: Option<u64>) -> Self {
        Self {
            error_limit,
            settings: Map::new(),
        }
    }

    /// Add or replace an opaque environment setting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError::ReservedKey`] when `key` is
    /// `"errorLimit"`, which belongs to the environment's own limit, and
    /// [`ConfigValidationError::EmptyField`] when `key` is empty.
    ///
    /// Settings render flattened next to the fields of any connector
    /// environment that embeds this struct.  A setting named like one of
    /// those fields (say `"workerThreads"`) produces a duplicate JSON key, so
    /// keep setting names distinct from the embedding type's own fields.
    pub fn with_setting(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, ConfigValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigValidationError::EmptyField {
                component: "environment",
                field: "setting key",
            });
        }
        if key == ERROR_LIMIT_KEY {
            return Err(ConfigValidationError::ReservedKey { key });
        }
        self.settings.insert(key, value.into());
        Ok(self)
    }

    /// The environment-wide default error limit.
    pub fn error_limit(&self) -> Option<u64> {
        self.error_limit
    }

    /// Look up an opaque setting.
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// All opaque settings.
    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }
}

impl JsonConfigurable for EnvironmentConfig {
    const ENTITY: &'static str = "environment configuration";
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvironmentConfig {
    #[serde(default)]
    error_limit: Option<u64>,
    #[serde(flatten)]
    settings: Map<String, Value>,
}

// Parsed settings pass the same key checks as `with_setting`.
impl TryFrom<RawEnvironmentConfig> for EnvironmentConfig {
    type Error = ConfigValidationError;

    fn try_from(raw: RawEnvironmentConfig) -> Result<Self, Self::Error> {
        raw.settings
            .into_iter()
            .try_fold(EnvironmentConfig::new(raw.error_limit), |env, (key, value)| {
                env.with_setting(key, value)
            })
    }
}
