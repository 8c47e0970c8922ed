//! Contract between the command routines and the remote management API
//!
//! - `rest` - HTTP implementation backed by `reqwest`

pub mod rest;

pub use rest::{Connection, RestAgent};

use crate::{
    error::Error,
    model::{
        CreateInstance, CreateInstanceBackup, DeleteInstance, GetInstanceBackups,
        GetOperationStatus, Instance, InstanceBackup, OperationStatus, RestoreInstanceBackup,
        ServiceVersion,
    },
};
use async_trait::async_trait;

/// Operations offered by the tenant management API
///
/// Every call is a single attempt. Validate-only requests must be forwarded
/// with their flag untouched.
#[async_trait]
pub trait ManagementAgent: Send + Sync {
    /// List instances visible to the caller, optionally pre-filtered by unique name
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] or [`Error::Auth`] when the call fails
    async fn get_instances(&self, unique_name: Option<&str>) -> Result<Vec<Instance>, Error>;

    /// List service versions, optionally filtered by name
    ///
    /// # Errors
    ///
    /// Same as [`ManagementAgent::get_instances`]
    async fn get_service_versions(&self, name: Option<&str>)
    -> Result<Vec<ServiceVersion>, Error>;

    /// # Errors
    ///
    /// Same as [`ManagementAgent::get_instances`]
    async fn create_instance(&self, request: &CreateInstance)
    -> Result<Vec<OperationStatus>, Error>;

    /// # Errors
    ///
    /// Same as [`ManagementAgent::get_instances`]
    async fn delete_instance(&self, request: &DeleteInstance)
    -> Result<Vec<OperationStatus>, Error>;

    /// # Errors
    ///
    /// Same as [`ManagementAgent::get_instances`]
    async fn get_operation_status(
        &self,
        request: &GetOperationStatus,
    ) -> Result<Vec<OperationStatus>, Error>;

    /// # Errors
    ///
    /// Same as [`ManagementAgent::get_instances`]
    async fn get_instance_backups(
        &self,
        request: &GetInstanceBackups,
    ) -> Result<Vec<InstanceBackup>, Error>;

    /// # Errors
    ///
    /// Same as [`ManagementAgent::get_instances`]
    async fn create_instance_backup(
        &self,
        request: &CreateInstanceBackup,
    ) -> Result<Vec<OperationStatus>, Error>;

    /// # Errors
    ///
    /// Same as [`ManagementAgent::get_instances`]
    async fn restore_instance_backup(
        &self,
        request: &RestoreInstanceBackup,
    ) -> Result<Vec<OperationStatus>, Error>;
}
