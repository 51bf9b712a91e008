// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Job configuration — the top-level composition of source, sink and
//! environment.
//!
//! [`JobConfiguration`] owns exactly one configuration of each kind.  The
//! three types are bound to one [`ConnectorFamily`] at compile time, see
//! [`capability`](crate::capability).
//!
//! ## Error-limit cascade
//!
//! Construction resolves operator error limits once, synchronously:
//!
//! 1. If the source limit is absent, copy the environment's limit into it.
//! 2. If the sink limit is absent, copy the environment's limit into it.
//! 3. Store the three parts.
//!
//! An explicit operator limit (including `0`) always wins.  When the
//! environment has no limit either, the operator limit stays absent.  The
//! copy is a snapshot: the job owns its parts and only hands out shared
//! references, so nothing can change a resolved limit afterwards.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::capability::{
    ConnectorFamily, EnvironmentCapability, SinkCapability, SourceCapability,
};
use crate::environment::EnvironmentConfig;
use crate::error::ConfigValidationError;
use crate::json::JsonConfigurable;
use crate::operator::{SinkConfig, SourceConfig};

/// Job configuration assembled from the connector-agnostic base types.
pub type GenericJobConfiguration = JobConfiguration<SourceConfig, SinkConfig, EnvironmentConfig>;

// ---------------------------------------------------------------------------
// JobPart
// ---------------------------------------------------------------------------

/// One of the three parts composing a job configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobPart {
    Source,
    Sink,
    Environment,
}

impl JobPart {
    /// JSON key under which the part is rendered.
    pub fn key(self) -> &'static str {
        match self {
            JobPart::Source      => "sourceConf",
            JobPart::Sink        => "sinkConf",
            JobPart::Environment => "envConf",
        }
    }
}

impl fmt::Display for JobPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// JobConfiguration
// ---------------------------------------------------------------------------

/// A validated, serialisable description of one data-movement job.
///
/// # Examples
///
/// ```rust
/// use flinky_jobconf::{
///     EnvironmentConfig, JobConfiguration, SinkConfig, SourceConfig, WriteStrategy,
/// };
///
/// let source = SourceConfig::new("s1", "jdbc://a", None).unwrap();
/// let sink = SinkConfig::new("k1", "jdbc://b", WriteStrategy::Upsert, Some(5)).unwrap();
/// let env = EnvironmentConfig::new(Some(10));
///
/// let job = JobConfiguration::new(source, sink, env);
/// assert_eq!(job.source().error_limit(), Some(10)); // inherited
/// assert_eq!(job.sink().error_limit(), Some(5));    // explicit value wins
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobConfiguration<S, K, E>
where
    S: SourceCapability,
    K: SinkCapability<Family = S::Family>,
    E: EnvironmentCapability<Family = S::Family>,
{
    #[serde(rename = "sourceConf")]
    source: S,
    #[serde(rename = "sinkConf")]
    sink: K,
    #[serde(rename = "envConf")]
    environment: E,
}

impl<S, K, E> JobConfiguration<S, K, E>
where
    S: SourceCapability,
    K: SinkCapability<Family = S::Family>,
    E: EnvironmentCapability<Family = S::Family>,
{
    /// Assemble a job, resolving absent operator error limits from the
    /// environment.
    pub fn new(mut source: S, mut sink: K, environment: E) -> Self {
        let fallback = environment.environment_config().error_limit();
        let family = <S::Family as ConnectorFamily>::NAME;

        let operator = source.source_config_mut();
        let absent = operator.error_limit().is_none();
        if operator.inherit_error_limit(fallback) {
            debug!(
                family,
                source = operator.name(),
                error_limit = ?fallback,
                "source error limit inherited from environment"
            );
        } else if absent {
            warn!(family, source = operator.name(), "source error limit left unset");
        }

        let operator = sink.sink_config_mut();
        let absent = operator.error_limit().is_none();
        if operator.inherit_error_limit(fallback) {
            debug!(
                family,
                sink = operator.name(),
                error_limit = ?fallback,
                "sink error limit inherited from environment"
            );
        } else if absent {
            warn!(family, sink = operator.name(), "sink error limit left unset");
        }

        Self { source, sink, environment }
    }

    /// Assemble a job from parts that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError::MissingPart`] naming the first absent
    /// part, checked in the order source, sink, environment.  No job is
    /// produced in that case.
    pub fn try_new(
        source: Option<S>,
        sink: Option<K>,
        environment: Option<E>,
    ) -> Result<Self, ConfigValidationError> {
        let source = source.ok_or(ConfigValidationError::MissingPart { part: JobPart::Source })?;
        let sink = sink.ok_or(ConfigValidationError::MissingPart { part: JobPart::Sink })?;
        let environment = environment
            .ok_or(ConfigValidationError::MissingPart { part: JobPart::Environment })?;
        Ok(Self::new(source, sink, environment))
    }

    /// Start a [`JobConfigurationBuilder`].
    pub fn builder() -> JobConfigurationBuilder<S, K, E> {
        JobConfigurationBuilder::new()
    }

    /// Source operator configuration.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Sink operator configuration.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Execution environment configuration.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Give up the job and return its owned parts.
    pub fn into_parts(self) -> (S, K, E) {
        (self.source, self.sink, self.environment)
    }
}

impl<S, K, E> JsonConfigurable for JobConfiguration<S, K, E>
where
    S: SourceCapability,
    K: SinkCapability<Family = S::Family>,
    E: EnvironmentCapability<Family = S::Family>,
{
    const ENTITY: &'static str = "job configuration";
}

/// Wire shape of a job; every part is required.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawJobConfiguration<S, K, E> {
    source_conf: S,
    sink_conf: K,
    env_conf: E,
}

// Parsing goes through `new` so the cascade runs exactly as it does for
// programmatic construction.
impl<'de, S, K, E> Deserialize<'de> for JobConfiguration<S, K, E>
where
    S: SourceCapability + Deserialize<'de>,
    K: SinkCapability<Family = S::Family> + Deserialize<'de>,
    E: EnvironmentCapability<Family = S::Family> + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawJobConfiguration::<S, K, E>::deserialize(deserializer)?;
        Ok(Self::new(raw.source_conf, raw.sink_conf, raw.env_conf))
    }
}

// ---------------------------------------------------------------------------
// JobConfigurationBuilder
// ---------------------------------------------------------------------------

/// Collects the three parts of a job before assembly.
///
/// # Examples
///
/// ```rust
/// use flinky_jobconf::{
///     ConfigValidationError, EnvironmentConfig, GenericJobConfiguration, JobPart,
///     SourceConfig,
/// };
///
/// let result = GenericJobConfiguration::builder()
///     .source(SourceConfig::new("s1", "jdbc://a", None).unwrap())
///     .environment(EnvironmentConfig::new(Some(10)))
///     .build();
///
/// assert_eq!(
///     result.unwrap_err(),
///     ConfigValidationError::MissingPart { part: JobPart::Sink }
/// );
/// ```
#[derive(Debug, Clone)]
pub struct JobConfigurationBuilder<S, K, E> {
    source: Option<S>,
    sink: Option<K>,
    environment: Option<E>,
}

impl<S, K, E> Default for JobConfigurationBuilder<S, K, E> {
    fn default() -> Self {
        Self {
            source: None,
            sink: None,
            environment: None,
        }
    }
}

impl<S, K, E> JobConfigurationBuilder<S, K, E> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source operator configuration.
    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the sink operator configuration.
    pub fn sink(mut self, sink: K) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the execution environment configuration.
    pub fn environment(mut self, environment: E) -> Self {
        self.environment = Some(environment);
        self
    }
}

impl<S, K, E> JobConfigurationBuilder<S, K, E>
where
    S: SourceCapability,
    K: SinkCapability<Family = S::Family>,
    E: EnvironmentCapability<Family = S::Family>,
{
    /// Assemble the job.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError::MissingPart`] if any part was never
    /// set.
    pub fn build(self) -> Result<JobConfiguration<S, K, E>, ConfigValidationError> {
        JobConfiguration::try_new(self.source, self.sink, self.environment)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::WriteStrategy;
    use proptest::prelude::*;

    fn source(limit: Option<u64>) -> SourceConfig {
        SourceConfig::new("s1", "jdbc://a", limit).unwrap()
    }

    fn sink(limit: Option<u64>) -> SinkConfig {
        SinkConfig::new("k1", "jdbc://b", WriteStrategy::Upsert, limit).unwrap()
    }

    #[test]
    fn test_absent_source_limit_inherits_environment() {
        let job = JobConfiguration::new(source(None), sink(Some(5)), EnvironmentConfig::new(Some(10)));
        assert_eq!(job.source().error_limit(), Some(10));
        assert_eq!(job.sink().error_limit(), Some(5));
    }

    #[test]
    fn test_no_environment_limit_leaves_operator_absent() {
        let job = JobConfiguration::new(source(None), sink(Some(5)), EnvironmentConfig::new(None));
        assert_eq!(job.source().error_limit(), None);
        assert_eq!(job.sink().error_limit(), Some(5));
    }

    #[test]
    fn test_explicit_zero_is_not_overridden() {
        let job = JobConfiguration::new(source(Some(0)), sink(Some(0)), EnvironmentConfig::new(Some(10)));
        assert_eq!(job.source().error_limit(), Some(0));
        assert_eq!(job.sink().error_limit(), Some(0));
    }

    #[test]
    fn test_environment_is_kept_unchanged() {
        let env = EnvironmentConfig::new(Some(10)).with_setting("parallelism", 4).unwrap();
        let job = JobConfiguration::new(source(None), sink(None), env.clone());
        assert_eq!(job.environment(), &env);
    }

    #[test]
    fn test_environment_changed_after_assembly_does_not_reach_job() {
        let mut env = EnvironmentConfig::new(Some(10));
        let job = JobConfiguration::new(source(None), sink(None), env.clone());

        env = EnvironmentConfig::new(Some(99)).with_setting("parallelism", 8).unwrap();
        assert_eq!(env.error_limit(), Some(99));

        assert_eq!(job.source().error_limit(), Some(10));
        assert_eq!(job.sink().error_limit(), Some(10));
        assert_eq!(job.environment().error_limit(), Some(10));
        assert!(job.environment().settings().is_empty());
    }

    #[test]
    fn test_reassembly_keeps_resolved_limits() {
        let job = JobConfiguration::new(source(None), sink(None), EnvironmentConfig::new(Some(10)));

        let (source_conf, sink_conf, _) = job.into_parts();
        let rebuilt = JobConfiguration::new(source_conf, sink_conf, EnvironmentConfig::new(Some(99)));
        assert_eq!(rebuilt.source().error_limit(), Some(10));
        assert_eq!(rebuilt.sink().error_limit(), Some(10));
    }

    #[test]
    fn test_try_new_reports_missing_sink() {
        let result: Result<GenericJobConfiguration, _> =
            JobConfiguration::try_new(Some(source(None)), None, Some(EnvironmentConfig::new(Some(10))));
        assert_eq!(
            result.unwrap_err(),
            ConfigValidationError::MissingPart { part: JobPart::Sink }
        );
    }

    #[test]
    fn test_try_new_checks_parts_in_order() {
        let result = GenericJobConfiguration::try_new(None, None, None);
        assert_eq!(
            result.unwrap_err(),
            ConfigValidationError::MissingPart { part: JobPart::Source }
        );

        let result = GenericJobConfiguration::try_new(Some(source(None)), Some(sink(None)), None);
        assert_eq!(
            result.unwrap_err(),
            ConfigValidationError::MissingPart { part: JobPart::Environment }
        );
    }

    #[test]
    fn test_builder_assembles_and_cascades() {
        let job = GenericJobConfiguration::builder()
            .environment(EnvironmentConfig::new(Some(3)))
            .sink(sink(None))
            .source(source(Some(1)))
            .build()
            .unwrap();
        assert_eq!(job.source().error_limit(), Some(1));
        assert_eq!(job.sink().error_limit(), Some(3));
    }

    #[test]
    fn test_json_contract() {
        let job = JobConfiguration::new(source(None), sink(Some(5)), EnvironmentConfig::new(Some(10)));
        assert_eq!(
            job.to_json().unwrap(),
            concat!(
                r#"{"sourceConf":{"name":"s1","url":"jdbc://a","errorLimit":10},"#,
                r#""sinkConf":{"name":"k1","url":"jdbc://b","strategy":"upsert","errorLimit":5},"#,
                r#""envConf":{"errorLimit":10}}"#
            )
        );
    }

    #[test]
    fn test_json_renders_unresolved_limit_as_null() {
        let job = JobConfiguration::new(source(None), sink(None), EnvironmentConfig::default());
        let value = job.to_json_value().unwrap();
        assert!(value["sourceConf"]["errorLimit"].is_null());
        assert!(value["sinkConf"]["errorLimit"].is_null());
        assert!(value["envConf"]["errorLimit"].is_null());
    }

    #[test]
    fn test_parse_runs_cascade() {
        let job: GenericJobConfiguration = serde_json::from_str(
            r#"{
                "sourceConf": {"name": "s1", "url": "jdbc://a"},
                "sinkConf":   {"name": "k1", "url": "jdbc://b", "strategy": "append", "errorLimit": 0},
                "envConf":    {"errorLimit": 10, "parallelism": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(job.source().error_limit(), Some(10));
        assert_eq!(job.sink().error_limit(), Some(0));
        assert_eq!(job.environment().setting("parallelism"), Some(&serde_json::Value::from(2)));
    }

    #[test]
    fn test_parse_requires_every_part() {
        let result: Result<GenericJobConfiguration, _> = serde_json::from_str(
            r#"{"sourceConf": {"name": "s1", "url": "jdbc://a"}, "envConf": {"errorLimit": 1}}"#,
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("sinkConf"), "{message}");
    }

    #[test]
    fn test_rendered_job_parses_back_to_equal_job() {
        let job = JobConfiguration::new(source(None), sink(Some(5)), EnvironmentConfig::new(Some(10)));
        let parsed: GenericJobConfiguration = serde_json::from_str(&job.to_json().unwrap()).unwrap();
        assert_eq!(parsed, job);
    }

    #[test]
    fn test_part_keys() {
        assert_eq!(JobPart::Source.to_string(), "sourceConf");
        assert_eq!(JobPart::Sink.to_string(), "sinkConf");
        assert_eq!(JobPart::Environment.to_string(), "envConf");
    }

    proptest! {
        #[test]
        fn prop_absent_limits_take_environment_value(env_limit in any::<u64>()) {
            let job = JobConfiguration::new(source(None), sink(None), EnvironmentConfig::new(Some(env_limit)));
            prop_assert_eq!(job.source().error_limit(), Some(env_limit));
            prop_assert_eq!(job.sink().error_limit(), Some(env_limit));
        }

        #[test]
        fn prop_explicit_limits_always_win(
            source_limit in any::<u64>(),
            sink_limit in any::<u64>(),
            env_limit in proptest::option::of(any::<u64>()),
        ) {
            let job = JobConfiguration::new(
                source(Some(source_limit)),
                sink(Some(sink_limit)),
                EnvironmentConfig::new(env_limit),
            );
            prop_assert_eq!(job.source().error_limit(), Some(source_limit));
            prop_assert_eq!(job.sink().error_limit(), Some(sink_limit));
        }

        #[test]
        fn prop_rendering_is_deterministic(
            source_limit in proptest::option::of(any::<u64>()),
            env_limit in proptest::option::of(any::<u64>()),
        ) {
            let job = JobConfiguration::new(source(source_limit), sink(None), EnvironmentConfig::new(env_limit));
            prop_assert_eq!(job.to_json().unwrap(), job.to_json().unwrap());
        }
    }
}
