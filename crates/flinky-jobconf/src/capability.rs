// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Capability traits that bind connector configurations into a job.
//!
//! A connector (JDBC, Kafka, files, ...) ships its own source, sink and
//! environment configuration types.  Each type embeds the shared struct from
//! this crate and implements the matching capability trait, naming the
//! connector through an associated [`ConnectorFamily`].
//! [`JobConfiguration`](crate::job::JobConfiguration) only accepts a triple
//! whose families agree, so mixing one connector's source with another
//! connector's sink does not compile:
//!
//! ```rust,compile_fail
//! use flinky_jobconf::{
//!     capability::{ConnectorFamily, SinkCapability},
//!     EnvironmentConfig, JobConfiguration, JsonConfigurable, SinkConfig, SourceConfig,
//!     WriteStrategy,
//! };
//! use serde::Serialize;
//!
//! enum Kafka {}
//! impl ConnectorFamily for Kafka {
//!     const NAME: &'static str = "kafka";
//! }
//!
//! #[derive(Serialize)]
//! struct KafkaSink(SinkConfig);
//! impl JsonConfigurable for KafkaSink {
//!     const ENTITY: &'static str = "kafka sink";
//! }
//! impl SinkCapability for KafkaSink {
//!     type Family = Kafka;
//!     fn sink_config(&self) -> &SinkConfig { &self.0 }
//!     fn sink_config_mut(&mut self) -> &mut SinkConfig { &mut self.0 }
//! }
//!
//! let source = SourceConfig::new("s1", "jdbc://a", None).unwrap();
//! let sink = KafkaSink(SinkConfig::new("k1", "kafka://b", WriteStrategy::Append, None).unwrap());
//! // `SourceConfig` belongs to the `Generic` family, `KafkaSink` to `Kafka`.
//! let job = JobConfiguration::new(source, sink, EnvironmentConfig::default());
//! ```

use crate::environment::EnvironmentConfig;
use crate::json::JsonConfigurable;
use crate::operator::{SinkConfig, SourceConfig};

/// Marker naming a family of mutually compatible connector configurations.
pub trait ConnectorFamily {
    /// Short connector name, used in log output.
    const NAME: &'static str;
}

/// Family of the connector-agnostic base configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generic {}

impl ConnectorFamily for Generic {
    const NAME: &'static str = "generic";
}

/// A source operator configuration.
pub trait SourceCapability: JsonConfigurable {
    /// Connector family this source belongs to.
    type Family: ConnectorFamily;

    /// Shared source settings.
    fn source_config(&self) -> &SourceConfig;

    /// Mutable access for job assembly.  [`SourceConfig`] has no public
    /// mutators, so this cannot change an already-resolved limit.
    fn source_config_mut(&mut self) -> &mut SourceConfig;
}

/// A sink operator configuration.
pub trait SinkCapability: JsonConfigurable {
    /// Connector family this sink belongs to.
    type Family: ConnectorFamily;

    /// Shared sink settings.
    fn sink_config(&self) -> &SinkConfig;

    /// Mutable access for job assembly.
    fn sink_config_mut(&mut self) -> &mut SinkConfig;
}

/// An execution-environment configuration.
pub trait EnvironmentCapability: JsonConfigurable {
    /// Connector family this environment belongs to.
    type Family: ConnectorFamily;

    /// Shared environment settings, including the default error limit.
    fn environment_config(&self) -> &EnvironmentConfig;
}

impl SourceCapability for SourceConfig {
    type Family = Generic;

    fn source_config(&self) -> &SourceConfig {
        self
    }

    fn source_config_mut(&mut self) -> &mut SourceConfig {
        self
    }
}

impl SinkCapability for SinkConfig {
    type Family = Generic;

    fn sink_config(&self) -> &SinkConfig {
        self
    }

    fn sink_config_mut(&mut self) -> &mut SinkConfig {
        self
    }
}

impl EnvironmentCapability for EnvironmentConfig {
    type Family = Generic;

    fn environment_config(&self) -> &EnvironmentConfig {
        self
    }
}
