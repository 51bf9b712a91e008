// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! A connector family defined outside the crate, the way a real connector
//! would plug in: per-connector structs embed the shared configs and
//! implement the capability traits.

use flinky_jobconf::{
    json::from_json, ConfigValidationError, ConnectorFamily, EnvironmentCapability,
    EnvironmentConfig, JobConfiguration, JobPart, JsonConfigurable, SinkCapability, SinkConfig,
    SourceCapability, SourceConfig, WriteStrategy,
};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// File connector family
// ---------------------------------------------------------------------------

enum Files {}

impl ConnectorFamily for Files {
    const NAME: &'static str = "files";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileSourceConfig {
    #[serde(flatten)]
    base: SourceConfig,
    format: String,
    has_header: bool,
}

impl JsonConfigurable for FileSourceConfig {
    const ENTITY: &'static str = "file source configuration";
}

impl SourceCapability for FileSourceConfig {
    type Family = Files;

    fn source_config(&self) -> &SourceConfig {
        &self.base
    }

    fn source_config_mut(&mut self) -> &mut SourceConfig {
        &mut self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileSinkConfig {
    #[serde(flatten)]
    base: SinkConfig,
    compression: Option<String>,
}

impl JsonConfigurable for FileSinkConfig {
    const ENTITY: &'static str = "file sink configuration";
}

impl SinkCapability for FileSinkConfig {
    type Family = Files;

    fn sink_config(&self) -> &SinkConfig {
        &self.base
    }

    fn sink_config_mut(&mut self) -> &mut SinkConfig {
        &mut self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocalEnvironment {
    #[serde(flatten)]
    base: EnvironmentConfig,
    worker_threads: u32,
}

impl JsonConfigurable for LocalEnvironment {
    const ENTITY: &'static str = "local environment configuration";
}

impl EnvironmentCapability for LocalEnvironment {
    type Family = Files;

    fn environment_config(&self) -> &EnvironmentConfig {
        &self.base
    }
}

type FileJob = JobConfiguration<FileSourceConfig, FileSinkConfig, LocalEnvironment>;

fn file_source(limit: Option<u64>) -> FileSourceConfig {
    FileSourceConfig {
        base: SourceConfig::new("events", "file:///data/in", limit).unwrap(),
        format: "csv".into(),
        has_header: true,
    }
}

fn file_sink(limit: Option<u64>) -> FileSinkConfig {
    FileSinkConfig {
        base: SinkConfig::new("archive", "file:///data/out", WriteStrategy::Overwrite, limit)
            .unwrap(),
        compression: Some("zstd".into()),
    }
}

fn local_env(limit: Option<u64>) -> LocalEnvironment {
    LocalEnvironment {
        base: EnvironmentConfig::new(limit),
        worker_threads: 4,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_cascade_reaches_embedded_configs() {
    let job = FileJob::new(file_source(None), file_sink(Some(2)), local_env(Some(50)));
    assert_eq!(job.source().source_config().error_limit(), Some(50));
    assert_eq!(job.sink().sink_config().error_limit(), Some(2));
    assert_eq!(job.source().format, "csv");
    assert_eq!(job.environment().worker_threads, 4);
}

#[test]
fn test_connector_fields_render_next_to_shared_fields() {
    let job = FileJob::new(file_source(None), file_sink(None), local_env(Some(50)));
    assert_eq!(
        job.to_json().unwrap(),
        concat!(
            r#"{"sourceConf":{"name":"events","url":"file:///data/in","errorLimit":50,"format":"csv","hasHeader":true},"#,
            r#""sinkConf":{"name":"archive","url":"file:///data/out","strategy":"overwrite","errorLimit":50,"compression":"zstd"},"#,
            r#""envConf":{"errorLimit":50,"workerThreads":4}}"#
        )
    );
}

#[test]
fn test_builder_rejects_missing_environment() {
    let result = FileJob::builder()
        .source(file_source(None))
        .sink(file_sink(None))
        .build();
    assert_eq!(
        result.unwrap_err(),
        ConfigValidationError::MissingPart { part: JobPart::Environment }
    );
}

#[test]
fn test_family_job_parses_and_cascades() {
    let job: FileJob = from_json(
        r#"{
            "sourceConf": {"name": "events", "url": "file:///data/in", "format": "json", "hasHeader": false},
            "sinkConf":   {"name": "archive", "url": "file:///data/out", "strategy": "append", "compression": null},
            "envConf":    {"errorLimit": 7, "workerThreads": 8}
        }"#,
    )
    .unwrap();
    assert_eq!(job.source().source_config().error_limit(), Some(7));
    assert_eq!(job.sink().sink_config().error_limit(), Some(7));
    assert_eq!(job.sink().sink_config().strategy(), WriteStrategy::Append);
    assert_eq!(job.environment().worker_threads, 8);
    assert!(job.environment().environment_config().settings().is_empty());
}

#[test]
fn test_family_parse_validates_shared_fields() {
    let result: Result<FileSourceConfig, _> = from_json(
        r#"{"name": "events", "url": "", "format": "csv", "hasHeader": true}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_rendering_twice_is_byte_identical() {
    let job = FileJob::new(file_source(Some(1)), file_sink(None), local_env(None));
    let first = job.to_json_pretty().unwrap();
    let second = job.to_json_pretty().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_setting_named_like_connector_field_repeats_key() {
    let env = LocalEnvironment {
        base: EnvironmentConfig::new(Some(1)).with_setting("workerThreads", 1).unwrap(),
        worker_threads: 4,
    };
    let json = env.to_json().unwrap();
    assert_eq!(json, r#"{"errorLimit":1,"workerThreads":1,"workerThreads":4}"#);
}
