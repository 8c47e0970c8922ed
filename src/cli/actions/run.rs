use super::Action;
use crate::{
    error::Error,
    tenant::{Context, EXIT_FAILURE, backups, instances, operations, versions},
};
use futures::FutureExt;
use std::{any::Any, panic::AssertUnwindSafe};
use tracing::{Instrument, debug, error, info_span};

/// Run the command for `action`, the single boundary where failures become exit codes
pub async fn execute(action: &Action, ctx: &Context<'_>) -> i32 {
    let span = info_span!("command", verb = action.verb());
    span.in_scope(|| debug!(?action, "input parameters"));

    let outcome = AssertUnwindSafe(route(action, ctx).instrument(span.clone()))
        .catch_unwind()
        .await;

    span.in_scope(|| match outcome {
        Ok(Ok(code)) => code,
        Ok(Err(err)) => {
            error!(error = %err, "command failed");
            EXIT_FAILURE
        }
        Err(panic) => {
            error!(panic = panic_message(&*panic), "command panicked");
            EXIT_FAILURE
        }
    })
}

/// Delegate to the routine of each verb
async fn route(action: &Action, ctx: &Context<'_>) -> Result<i32, Error> {
    match action {
        Action::GetInstances(options) => instances::list(ctx, options).await,
        Action::CreateInstance(options) => instances::create(ctx, options).await,
        Action::DeleteInstance(options) => instances::delete(ctx, options).await,
        Action::GetOperation(options) => operations::status(ctx, options).await,
        Action::GetServiceVersions(options) => versions::list(ctx, options).await,
        Action::GetBackups(options) => backups::list(ctx, options).await,
        Action::CreateBackup(options) => backups::create(ctx, options).await,
        Action::RestoreBackup(options) => backups::restore(ctx, options).await,
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
