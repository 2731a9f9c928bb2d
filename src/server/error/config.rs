use std::{fmt, num::ParseIntError};

use thiserror::Error;

/// Presence of a single required configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub name: &'static str,
    pub present: bool,
}

impl FieldStatus {
    pub fn new(name: &'static str, present: bool) -> Self {
        Self { name, present }
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.present { "present" } else { "missing" };
        write!(f, "{}: {}", self.name, status)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required environment variables are not set.
    ///
    /// `fields` holds the status of every required variable, not just the missing
    /// ones, so startup diagnostics can list each of them. Check the `.env` file
    /// or the hosting platform's environment settings.
    #[error("Missing required environment variable(s): {}", missing_names(fields))]
    Missing { fields: Vec<FieldStatus> },

    /// An application or guild identifier is not a valid Discord snowflake.
    #[error("Environment variable {field} is not a valid Discord id: '{value}'")]
    InvalidId { field: &'static str, value: String },

    /// `PORT` is set but is not a valid TCP port number.
    ///
    /// Zero is rejected: it would bind a random port no health check can find.
    #[error("Environment variable PORT is not a valid port '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl ConfigError {
    /// Names of required variables reported as missing, in declaration order.
    #[cfg(test)]
    pub fn missing(&self) -> Vec<&'static str> {
        match self {
            Self::Missing { fields } => fields
                .iter()
                .filter(|field| !field.present)
                .map(|field| field.name)
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn missing_names(fields: &[FieldStatus]) -> String {
    fields
        .iter()
        .filter(|field| !field.present)
        .map(|field| field.name)
        .collect::<Vec<_>>()
        .join(", ")
}
