use super::{Context, EXIT_SUCCESS, resolve::non_empty};
use crate::{error::Error, options::ServiceVersionsOptions};
use tracing::info;

/// List the service versions, filtering is left to the service
///
/// # Errors
///
/// Returns the agent error if the versions cannot be retrieved
pub async fn list(ctx: &Context<'_>, options: &ServiceVersionsOptions) -> Result<i32, Error> {
    let versions = ctx
        .agent
        .get_service_versions(non_empty(options.name.as_deref()))
        .await?;
    info!(count = versions.len(), "service versions found");

    for version in &versions {
        info!(
            id = %version.id,
            name = %version.name,
            localized_name = ?version.localized_name,
            "service version"
        );
    }

    Ok(EXIT_SUCCESS)
}
