mod run;

use crate::{
    options::{
        CreateBackupOptions, CreateInstanceOptions, DeleteInstanceOptions, GetBackupsOptions,
        GetOperationOptions, ListInstancesOptions, RestoreBackupOptions, ServiceVersionsOptions,
    },
    tenant::Context,
};

/// Action enum representing each possible command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GetInstances(ListInstancesOptions),
    CreateInstance(CreateInstanceOptions),
    DeleteInstance(DeleteInstanceOptions),
    GetOperation(GetOperationOptions),
    GetServiceVersions(ServiceVersionsOptions),
    GetBackups(GetBackupsOptions),
    CreateBackup(CreateBackupOptions),
    RestoreBackup(RestoreBackupOptions),
}

impl Action {
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::GetInstances(_) => "GetInstances",
            Self::CreateInstance(_) => "CreateInstance",
            Self::DeleteInstance(_) => "DeleteInstance",
            Self::GetOperation(_) => "GetOperation",
            Self::GetServiceVersions(_) => "GetServiceVersions",
            Self::GetBackups(_) => "GetBackups",
            Self::CreateBackup(_) => "CreateBackup",
            Self::RestoreBackup(_) => "RestoreBackup",
        }
    }

    /// Execute the action and return the process exit code
    ///
    /// Errors and panics raised by the command are logged here and turned
    /// into a non-zero exit code.
    pub async fn execute(&self, ctx: &Context<'_>) -> i32 {
        run::execute(self, ctx).await
    }
}
