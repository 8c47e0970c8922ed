//! Command routines, one per verb
//!
//! Each routine is a linear pipeline (resolve, validate, submit, report).
//! Agent calls are awaited one at a time, never concurrently, and never
//! retried. A routine returns the process exit code or an [`Error`](crate::Error) for the
//! dispatcher to log.
//!
//! # Module Organization
//!
//! - `instances` - list, create and delete instances
//! - `versions` - list service versions
//! - `operations` - query operation status
//! - `backups` - list, create and restore instance backups
//! - `resolve` - name matching and selection

pub mod backups;
pub mod instances;
pub mod operations;
pub mod resolve;
pub mod versions;

use crate::{model::OperationStatus, prompt::Confirmation, service::ManagementAgent};
use tracing::{info, warn};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Collaborators handed to every routine
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub agent: &'a dyn ManagementAgent,
    pub prompt: &'a dyn Confirmation,
}

impl<'a> Context<'a> {
    #[must_use]
    pub fn new(agent: &'a dyn ManagementAgent, prompt: &'a dyn Confirmation) -> Self {
        Self { agent, prompt }
    }
}

fn report(statuses: &[OperationStatus]) {
    info!(count = statuses.len(), "operation status received");

    for status in statuses {
        info!(
            operation_id = %status.operation_id,
            status = %status.status,
            location = ?status.operation_location,
            resource = ?status.resource_location,
            "operation"
        );

        for error in &status.errors {
            warn!(operation_id = %status.operation_id, %error, "operation reported an error");
        }

        for information in &status.information {
            info!(operation_id = %status.operation_id, %information, "operation information");
        }
    }
}
