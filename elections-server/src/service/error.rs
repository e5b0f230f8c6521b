//! Service errors and the boundary mapping that hides them
//!
//! Internally the service distinguishes why an operation failed. Callers never
//! see that: [`collapse`] turns every [`DivisionError`] into the one
//! [`ServiceError`] of the operation, status 404 with a fixed message.

use std::fmt;

use thiserror::Error;

use crate::db::DbError;

/// HTTP status reported for every division service failure.
pub const SERVER_ERROR_STATUS: u16 = 404;

/// Why a division operation failed, before collapsing.
#[derive(Error, Debug)]
pub enum DivisionError {
    #[error("divisions not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] DbError),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("malformed path parameters: {0}")]
    MalformedPath(String),
}

/// The operations exposed by the division service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    DivisionsByElection,
    DivisionsWithNomination,
    AddDivisionsByModule,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DivisionsByElection => "get_divisions_by_election_id",
            Self::DivisionsWithNomination => "get_divisions_with_nomination",
            Self::AddDivisionsByModule => "add_divisions_by_module_id",
        }
    }

    /// Fixed message returned to callers when this operation fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::DivisionsByElection | Self::DivisionsWithNomination => "Server Error",
            Self::AddDivisionsByModule => "Server error",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only error a caller of the division service ever receives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceError {
    pub status: u16,
    pub message: &'static str,
}

/// Map any internal failure of `operation` to its uniform external error.
///
/// The cause is logged here and then dropped.
pub fn collapse(operation: Operation, error: DivisionError) -> ServiceError {
    match &error {
        DivisionError::NotFound => {
            tracing::debug!(operation = %operation, "no divisions found")
        }
        DivisionError::Repository(e) => {
            tracing::warn!(operation = %operation, error = %e, "repository failure")
        }
        DivisionError::MalformedBody(reason) => {
            tracing::debug!(operation = %operation, %reason, "rejected request body")
        }
        DivisionError::MalformedPath(reason) => {
            tracing::debug!(operation = %operation, %reason, "rejected path parameters")
        }
    }

    ServiceError {
        status: SERVER_ERROR_STATUS,
        message: operation.failure_message(),
    }
}
