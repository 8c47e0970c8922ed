//! Records exchanged with the tenant management API
//!
//! Results (`Instance`, `ServiceVersion`, `OperationStatus`, `InstanceBackup`)
//! are read-only snapshots produced by the service. Requests carrying an
//! identifier are built through constructors that reject the nil uuid, so no
//! request with an empty id ever reaches the agent.

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A provisioned tenant-scoped application environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    pub id: Uuid,
    #[serde(default)]
    pub unique_name: String,
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A named release of the platform an instance is provisioned against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceVersion {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
}

/// Known instance types, the wire value is the raw integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceType {
    Production = 1,
    Sandbox = 2,
}

impl InstanceType {
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Production),
            2 => Some(Self::Sandbox),
            _ => None,
        }
    }
}

/// Provisioning request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInstance {
    pub service_version_id: Uuid,
    /// Raw type code, forwarded without local validation
    #[serde(rename = "Type")]
    pub instance_type: i32,
    pub base_language: String,
    pub friendly_name: String,
    pub domain_name: String,
    pub initial_user_email: String,
    pub is_validate_only_request: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteInstance {
    pub instance_id: Uuid,
    pub is_validate_only_request: bool,
}

impl DeleteInstance {
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if `instance_id` is nil
    pub fn new(instance_id: Uuid, validate_only: bool) -> Result<Self, Error> {
        Ok(Self {
            instance_id: require_id(instance_id, "instance id")?,
            is_validate_only_request: validate_only,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOperationStatus {
    pub operation_id: Uuid,
}

impl GetOperationStatus {
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if `operation_id` is nil
    pub fn new(operation_id: Uuid) -> Result<Self, Error> {
        Ok(Self {
            operation_id: require_id(operation_id, "operation id")?,
        })
    }
}

/// The service's record of an asynchronous provisioning, deletion or backup job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationStatus {
    #[serde(default)]
    pub operation_id: Uuid,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub information: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceBackup {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub is_azure_backup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetInstanceBackups {
    pub instance_id: Uuid,
}

impl GetInstanceBackups {
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if `instance_id` is nil
    pub fn new(instance_id: Uuid) -> Result<Self, Error> {
        Ok(Self {
            instance_id: require_id(instance_id, "instance id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInstanceBackup {
    pub instance_id: Uuid,
    pub label: String,
    pub is_azure_backup: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateInstanceBackup {
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if `instance_id` is nil or `label` is blank
    pub fn new(
        instance_id: Uuid,
        label: &str,
        is_azure_backup: bool,
        notes: Option<&str>,
    ) -> Result<Self, Error> {
        let instance_id = require_id(instance_id, "instance id")?;
        if label.trim().is_empty() {
            return Err(Error::Argument("backup label must not be empty".into()));
        }

        Ok(Self {
            instance_id,
            label: label.to_string(),
            is_azure_backup,
            notes: notes.map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreInstanceBackup {
    pub source_instance_id: Uuid,
    pub target_instance_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_backup_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
}

impl RestoreInstanceBackup {
    /// Build a restore request; a nil backup id and a blank label count as
    /// not supplied, and at least one backup selector must remain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if either instance id is nil or no backup
    /// selector is left
    pub fn new(
        source_instance_id: Uuid,
        target_instance_id: Uuid,
        instance_backup_id: Option<Uuid>,
        label: Option<&str>,
        created_on: Option<DateTime<Utc>>,
    ) -> Result<Self, Error> {
        let source_instance_id = require_id(source_instance_id, "source instance id")?;
        let target_instance_id = require_id(target_instance_id, "target instance id")?;
        let instance_backup_id = instance_backup_id.filter(|id| !id.is_nil());
        let label = label
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        if instance_backup_id.is_none() && label.is_none() && created_on.is_none() {
            return Err(Error::Argument(
                "one of instance backup id, label or created on is required".into(),
            ));
        }

        Ok(Self {
            source_instance_id,
            target_instance_id,
            instance_backup_id,
            label,
            created_on,
        })
    }
}

fn require_id(id: Uuid, what: &str) -> Result<Uuid, Error> {
    if id.is_nil() {
        Err(Error::Argument(format!("{what} must not be empty")))
    } else {
        Ok(id)
    }
}
