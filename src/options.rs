//! Typed options, one record per verb, produced by `cli::dispatch`

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInstancesOptions {
    pub unique_name: Option<String>,
    pub friendly_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateInstanceOptions {
    pub friendly_name: String,
    pub domain_name: String,
    pub initial_user_email: String,
    pub service_version_name: Option<String>,
    /// 1 = Production, 2 = Sandbox
    pub instance_type: i32,
    pub base_language: String,
    pub validate_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteInstanceOptions {
    pub friendly_name: Option<String>,
    pub instance_id: Option<Uuid>,
    pub validate_only: bool,
    pub confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOperationOptions {
    pub operation_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceVersionsOptions {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBackupsOptions {
    pub instance_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBackupOptions {
    pub instance_id: Uuid,
    pub label: String,
    pub is_azure_backup: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreBackupOptions {
    pub source_instance_id: Uuid,
    pub target_instance_id: Uuid,
    pub instance_backup_id: Option<Uuid>,
    pub label: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
}
