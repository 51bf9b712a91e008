// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! JSON rendering shared by every configuration type.
//!
//! A type implementing [`JsonConfigurable`] can render itself as a JSON
//! object whose keys mirror its attribute names.  Rendering has no side
//! effects and is deterministic: two calls on an unchanged value produce
//! byte-identical output.
//!
//! Parsing is the inverse direction and is opt-in per type through
//! [`serde::Deserialize`]; [`from_json`] wraps it with the crate [`Error`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, SerializationError};

/// Capability of rendering a configuration as JSON.
///
/// # Examples
///
/// ```rust
/// use flinky_jobconf::{JsonConfigurable, SourceConfig};
///
/// let source = SourceConfig::new("s1", "jdbc://a", Some(3)).unwrap();
/// assert_eq!(
///     source.to_json().unwrap(),
///     r#"{"name":"s1","url":"jdbc://a","errorLimit":3}"#
/// );
/// ```
pub trait JsonConfigurable: Serialize {
    /// Human-readable entity name used in error messages.
    const ENTITY: &'static str;

    /// Render as compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializationError`] if the value cannot be represented as
    /// JSON.  This does not happen for configurations built through this
    /// crate's constructors.
    fn to_json(&self) -> Result<String, SerializationError> {
        serde_json::to_string(self).map_err(|source| SerializationError::new(Self::ENTITY, source))
    }

    /// Render as indented JSON text.
    fn to_json_pretty(&self) -> Result<String, SerializationError> {
        serde_json::to_string_pretty(self)
            .map_err(|source| SerializationError::new(Self::ENTITY, source))
    }

    /// Render as a JSON value tree.
    fn to_json_value(&self) -> Result<Value, SerializationError> {
        serde_json::to_value(self).map_err(|source| SerializationError::new(Self::ENTITY, source))
    }
}

/// Parse a configuration from JSON text.
///
/// Validation performed by the target type's constructor also runs during
/// parsing, so an empty `name` or an unknown `strategy` is rejected here.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the text is not valid JSON, does not match the
/// expected shape, or fails validation.
///
/// # Examples
///
/// ```rust
/// use flinky_jobconf::{json::from_json, SinkConfig, WriteStrategy};
///
/// let sink: SinkConfig =
///     from_json(r#"{"name":"k1","url":"jdbc://b","strategy":"upsert"}"#).unwrap();
/// assert_eq!(sink.strategy(), WriteStrategy::Upsert);
/// assert_eq!(sink.error_limit(), None);
/// ```
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    Ok(serde_json::from_str(text)?)
}
