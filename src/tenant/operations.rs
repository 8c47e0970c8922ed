use super::{Context, EXIT_SUCCESS, report};
use crate::{error::Error, model::GetOperationStatus, options::GetOperationOptions};
use tracing::info;

/// Query the status of an operation by id
///
/// # Errors
///
/// Returns [`Error::Argument`] for a nil operation id, or the agent error
pub async fn status(ctx: &Context<'_>, options: &GetOperationOptions) -> Result<i32, Error> {
    let request = GetOperationStatus::new(options.operation_id)?;
    info!(operation_id = %request.operation_id, "retrieving operation status");

    let statuses = ctx.agent.get_operation_status(&request).await?;
    report(&statuses);

    Ok(EXIT_SUCCESS)
}
