// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Environment-variable construction of [`EnvironmentConfig`].
//!
//! | Variable              | Type          | Default       |
//! |-----------------------|---------------|---------------|
//! | `FLINKY_ERROR_LIMIT`  | integer >= 0  | unset (absent)|
//!
//! Only the environment-wide error limit is read; opaque settings remain a
//! programmatic concern.

// Only compile this module when the "config-loader" feature is enabled.
#![cfg(feature = "config-loader")]

use std::num::ParseIntError;

use crate::environment::EnvironmentConfig;
use crate::error::ConfigValidationError;

/// Variable holding the environment-wide default error limit.
pub const ERROR_LIMIT_VAR: &str = "FLINKY_ERROR_LIMIT";

/// Build an [`EnvironmentConfig`] from `FLINKY_`-prefixed process
/// environment variables.
///
/// # Errors
///
/// Returns [`ConfigValidationError::InvalidValue`] naming the variable if it
/// is set to something other than a non-negative integer.
///
/// # Example
///
/// ```rust,no_run
/// use flinky_jobconf::config_loader::load_environment_from_env;
///
/// let env = load_environment_from_env().unwrap();
/// println!("default error limit: {:?}", env.error_limit());
/// ```
pub fn load_environment_from_env() -> Result<EnvironmentConfig, ConfigValidationError> {
    load_environment_with(|key| std::env::var(key).ok())
}

/// Build an [`EnvironmentConfig`] using `lookup` to resolve variables.
///
/// `lookup` returns `None` for unset variables.
pub fn load_environment_with<F>(lookup: F) -> Result<EnvironmentConfig, ConfigValidationError>
where
    F: Fn(&str) -> Option<String>,
{
    let error_limit = read_u64(&lookup, ERROR_LIMIT_VAR)?;
    Ok(EnvironmentConfig::new(error_limit))
}

fn read_u64<F>(lookup: &F, key: &str) -> Result<Option<u64>, ConfigValidationError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|source: ParseIntError| ConfigValidationError::InvalidValue {
                field: key.to_owned(),
                value: val.clone(),
                reason: source.to_string(),
            }),
        None => Ok(None),
    }
}
