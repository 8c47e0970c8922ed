use super::{Context, EXIT_SUCCESS, report};
use crate::{
    error::Error,
    model::{CreateInstanceBackup, GetInstanceBackups, RestoreInstanceBackup},
    options::{CreateBackupOptions, GetBackupsOptions, RestoreBackupOptions},
};
use tracing::info;

/// List the backups of an instance
///
/// # Errors
///
/// Returns [`Error::Argument`] for a nil instance id, or the agent error
pub async fn list(ctx: &Context<'_>, options: &GetBackupsOptions) -> Result<i32, Error> {
    let request = GetInstanceBackups::new(options.instance_id)?;
    let backups = ctx.agent.get_instance_backups(&request).await?;
    info!(
        instance_id = %request.instance_id,
        count = backups.len(),
        "backups found"
    );

    for backup in &backups {
        info!(
            id = %backup.id,
            label = ?backup.label,
            created_on = ?backup.created_on,
            created_by = ?backup.created_by,
            is_azure_backup = backup.is_azure_backup,
            notes = ?backup.notes,
            "backup"
        );
    }

    Ok(EXIT_SUCCESS)
}

/// Back up an instance under a label
///
/// # Errors
///
/// Returns [`Error::Argument`] for a nil instance id or blank label, or the
/// agent error
pub async fn create(ctx: &Context<'_>, options: &CreateBackupOptions) -> Result<i32, Error> {
    let request = CreateInstanceBackup::new(
        options.instance_id,
        &options.label,
        options.is_azure_backup,
        options.notes.as_deref(),
    )?;
    info!(?request, "creating instance backup");

    let statuses = ctx.agent.create_instance_backup(&request).await?;
    report(&statuses);

    Ok(EXIT_SUCCESS)
}

/// Restore a backup of the source instance onto the target instance
///
/// # Errors
///
/// Returns [`Error::Argument`] for nil instance ids or when no backup selector
/// is given, or the agent error
pub async fn restore(ctx: &Context<'_>, options: &RestoreBackupOptions) -> Result<i32, Error> {
    let request = RestoreInstanceBackup::new(
        options.source_instance_id,
        options.target_instance_id,
        options.instance_backup_id,
        options.label.as_deref(),
        options.created_on,
    )?;
    info!(?request, "restoring instance backup");

    let statuses = ctx.agent.restore_instance_backup(&request).await?;
    report(&statuses);

    Ok(EXIT_SUCCESS)
}
