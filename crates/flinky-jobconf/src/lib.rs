// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! # flinky-jobconf
//!
//! Configuration model for a data-movement job made of a source operator, a
//! sink operator and an execution environment.
//!
//! ## Architecture
//!
//! ```text
//! JobConfiguration<S, K, E>          — owns one of each, runs the cascade
//!   ├── S: SourceCapability          — embeds SourceConfig (name, url, errorLimit)
//!   ├── K: SinkCapability            — embeds SinkConfig (+ strategy)
//!   └── E: EnvironmentCapability     — embeds EnvironmentConfig (default errorLimit)
//! ```
//!
//! All three must share one `ConnectorFamily`, checked at compile time.
//! Every type renders to JSON through [`JsonConfigurable`].
//!
//! ## Quick Start
//!
//! ```rust
//! use flinky_jobconf::{
//!     EnvironmentConfig, JobConfiguration, JsonConfigurable, SinkConfig, SourceConfig,
//!     WriteStrategy,
//! };
//!
//! let source = SourceConfig::new("s1", "jdbc://a", None).unwrap();
//! let sink   = SinkConfig::new("k1", "jdbc://b", WriteStrategy::Upsert, Some(5)).unwrap();
//! let env    = EnvironmentConfig::new(Some(10));
//!
//! // Absent operator limits are copied from the environment here, once.
//! let job = JobConfiguration::new(source, sink, env);
//! assert_eq!(job.source().error_limit(), Some(10));
//! assert_eq!(job.sink().error_limit(), Some(5));
//!
//! let json = job.to_json().unwrap();
//! assert!(json.starts_with(r#"{"sourceConf":{"name":"s1""#));
//! ```

pub mod capability;
pub mod config_loader;
pub mod environment;
pub mod error;
pub mod job;
pub mod json;
pub mod operator;

// Re-export the most commonly used items at the crate root so consumers can
// write `use flinky_jobconf::JobConfiguration;` instead of the fully
// qualified path.
pub use capability::{
    ConnectorFamily, EnvironmentCapability, Generic, SinkCapability, SourceCapability,
};
pub use environment::EnvironmentConfig;
pub use error::{ConfigValidationError, Error, Result, SerializationError};
pub use job::{GenericJobConfiguration, JobConfiguration, JobConfigurationBuilder, JobPart};
pub use json::JsonConfigurable;
pub use operator::{SinkConfig, SourceConfig, WriteStrategy};
