// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! # JDBC Job Configuration Example
//!
//! Defines a small JDBC connector family, assembles a job from it and prints
//! the resulting JSON.  Run with:
//!
//! ```bash
//! RUST_LOG=flinky_jobconf=debug cargo run -p flinky-jobconf --example jdbc_job
//! ```

use flinky_jobconf::{
    ConnectorFamily, EnvironmentCapability, EnvironmentConfig, GenericJobConfiguration,
    JobConfiguration, JsonConfigurable, SinkCapability, SinkConfig, SourceCapability,
    SourceConfig, WriteStrategy,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// JDBC connector family
// ---------------------------------------------------------------------------

enum Jdbc {}

impl ConnectorFamily for Jdbc {
    const NAME: &'static str = "jdbc";
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JdbcSourceConfig {
    #[serde(flatten)]
    base: SourceConfig,
    query: String,
    fetch_size: u32,
}

impl JsonConfigurable for JdbcSourceConfig {
    const ENTITY: &'static str = "JDBC source configuration";
}

impl SourceCapability for JdbcSourceConfig {
    type Family = Jdbc;

    fn source_config(&self) -> &SourceConfig {
        &self.base
    }

    fn source_config_mut(&mut self) -> &mut SourceConfig {
        &mut self.base
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JdbcSinkConfig {
    #[serde(flatten)]
    base: SinkConfig,
    table: String,
    batch_size: u32,
}

impl JsonConfigurable for JdbcSinkConfig {
    const ENTITY: &'static str = "JDBC sink configuration";
}

impl SinkCapability for JdbcSinkConfig {
    type Family = Jdbc;

    fn sink_config(&self) -> &SinkConfig {
        &self.base
    }

    fn sink_config_mut(&mut self) -> &mut SinkConfig {
        &mut self.base
    }
}

#[derive(Debug, Serialize)]
struct JdbcEnvironment(EnvironmentConfig);

impl JsonConfigurable for JdbcEnvironment {
    const ENTITY: &'static str = "JDBC environment configuration";
}

impl EnvironmentCapability for JdbcEnvironment {
    type Family = Jdbc;

    fn environment_config(&self) -> &EnvironmentConfig {
        &self.0
    }
}

fn main() -> flinky_jobconf::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Flinky Job Configuration — JDBC Example\n");

    // -----------------------------------------------------------------------
    // 1. Build the three parts independently
    // -----------------------------------------------------------------------
    let source = JdbcSourceConfig {
        base: SourceConfig::new("orders", "jdbc:postgresql://db/shop", None)?,
        query: "SELECT * FROM orders".into(),
        fetch_size: 1_000,
    };
    let sink = JdbcSinkConfig {
        base: SinkConfig::new("orders_dw", "jdbc:mysql://dw/warehouse", WriteStrategy::Upsert, Some(0))?,
        table: "fact_orders".into(),
        batch_size: 500,
    };
    let env = JdbcEnvironment(
        EnvironmentConfig::new(Some(100)).with_setting("parallelism", 4)?,
    );

    // -----------------------------------------------------------------------
    // 2. Assemble: the source inherits 100, the sink keeps its explicit 0
    // -----------------------------------------------------------------------
    let job = JobConfiguration::new(source, sink, env);
    println!(
        "source error limit: {:?} (inherited)",
        job.source().source_config().error_limit()
    );
    println!(
        "sink error limit:   {:?} (explicit)\n",
        job.sink().sink_config().error_limit()
    );
    println!("{}\n", job.to_json_pretty()?);

    // -----------------------------------------------------------------------
    // 3. A part that was never supplied is reported by name
    // -----------------------------------------------------------------------
    let missing = GenericJobConfiguration::builder()
        .source(SourceConfig::new("s1", "jdbc://a", None)?)
        .environment(EnvironmentConfig::new(Some(10)))
        .build();
    if let Err(error) = missing {
        println!("builder without sink: {error}");
    }

    Ok(())
}
