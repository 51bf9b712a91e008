// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 MuVeraAI Corporation

//! Error taxonomy for configuration assembly and rendering.
//!
//! * [`ConfigValidationError`] — a required field is empty, a required job
//!   part is missing, or a value cannot be parsed.  Always raised at
//!   construction time.
//! * [`SerializationError`] — a configuration could not be rendered as JSON.
//!   Well-formed configurations never produce it.
//! * [`Error`] — crate-level union of the above plus JSON parse failures.

use thiserror::Error;

use crate::job::JobPart;

/// Convenience alias used by the crate-level helpers.
pub type Result<T> = std::result::Result<T, Error>;

/// A configuration failed validation while being constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// A required string field was empty or whitespace-only.
    #[error("{component}: required field `{field}` must not be empty")]
    EmptyField {
        component: &'static str,
        field: &'static str,
    },

    /// One of the three parts of a job configuration was never supplied.
    #[error("job configuration: required part `{part}` is missing")]
    MissingPart { part: JobPart },

    /// A field value could not be parsed to its expected type.
    #[error("field `{field}`: cannot parse \"{value}\": {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// An opaque environment setting tried to use a key owned by the model.
    #[error("environment setting `{key}` is reserved")]
    ReservedKey { key: String },
}

/// A configuration could not be rendered as JSON.
#[derive(Debug, Error)]
#[error("failed to render {entity} as JSON: {source}")]
pub struct SerializationError {
    entity: &'static str,
    source: serde_json::Error,
}

impl SerializationError {
    pub(crate) fn new(entity: &'static str, source: serde_json::Error) -> Self {
        Self { entity, source }
    }

    /// Name of the entity that failed to render.
    pub fn entity(&self) -> &'static str {
        self.entity
    }
}

/// Crate-level error returned by the JSON helpers.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The input text was not a valid configuration document.  Validation
    /// failures raised while parsing are reported here with their message.
    #[error("failed to parse JSON configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
