use super::{
    Context, EXIT_FAILURE, EXIT_SUCCESS, report,
    resolve::{find_instance_id, non_empty, select_instances, select_service_version},
};
use crate::{
    error::Error,
    model::{CreateInstance, DeleteInstance, InstanceType},
    options::{CreateInstanceOptions, DeleteInstanceOptions, ListInstancesOptions},
    prompt::is_yes,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

const DELETE_QUESTION: &str = "Are you sure to proceed with deletion of the instance? [y/N]";

/// List instances, filtered locally by friendly or unique name
///
/// # Errors
///
/// Returns an error if the instances cannot be retrieved
pub async fn list(ctx: &Context<'_>, options: &ListInstancesOptions) -> Result<i32, Error> {
    let instances = ctx.agent.get_instances(None).await?;
    let total = instances.len();

    let instances = select_instances(instances, options);
    info!(total, matching = instances.len(), "instances found");

    for instance in &instances {
        info!(
            id = %instance.id,
            unique_name = %instance.unique_name,
            friendly_name = %instance.friendly_name,
            state = ?instance.state,
            url = ?instance.url,
            "instance"
        );
    }

    Ok(EXIT_SUCCESS)
}

/// Provision a new instance against the requested (or first) service version
///
/// # Errors
///
/// Returns [`Error::Resolution`] if no service version resolves, before any
/// creation call is made, or the agent error of either remote call
pub async fn create(ctx: &Context<'_>, options: &CreateInstanceOptions) -> Result<i32, Error> {
    info!("retrieving service versions");
    let versions = ctx.agent.get_service_versions(None).await?;
    info!(count = versions.len(), "service versions available");

    let version = select_service_version(&versions, options.service_version_name.as_deref())?;
    info!(id = %version.id, name = %version.name, "using service version");

    if InstanceType::from_code(options.instance_type).is_none() {
        // forwarded unchanged, the service decides whether it is acceptable
        warn!(
            instance_type = options.instance_type,
            "unknown instance type, expected 1 (Production) or 2 (Sandbox)"
        );
    }

    let request = CreateInstance {
        service_version_id: version.id,
        instance_type: options.instance_type,
        base_language: options.base_language.clone(),
        friendly_name: options.friendly_name.clone(),
        domain_name: options.domain_name.clone(),
        initial_user_email: options.initial_user_email.clone(),
        is_validate_only_request: options.validate_only,
    };

    info!(?request, "creating new instance");
    let statuses = ctx.agent.create_instance(&request).await?;
    report(&statuses);
    info!("operation completed successfully");

    Ok(EXIT_SUCCESS)
}

/// Delete an instance given by id or friendly name
///
/// Asks for confirmation unless the request is validate-only or was
/// confirmed up front; any answer other than `y`/`Y` aborts with
/// [`EXIT_FAILURE`] and no delete call.
///
/// # Errors
///
/// Returns [`Error::Argument`] if neither an id nor a name is given,
/// [`Error::Resolution`] if the instance cannot be resolved, or the agent error
pub async fn delete(ctx: &Context<'_>, options: &DeleteInstanceOptions) -> Result<i32, Error> {
    let instance_id = resolve_instance_id(ctx, options).await?;

    if !options.validate_only && !options.confirm {
        let answer = ctx.prompt.ask(DELETE_QUESTION)?;
        if !is_yes(&answer) {
            warn!(%instance_id, "user aborted deletion of instance, exiting");
            return Ok(EXIT_FAILURE);
        }
    }

    let request = DeleteInstance::new(instance_id, options.validate_only)?;
    info!(
        %instance_id,
        validate_only = request.is_validate_only_request,
        "deleting instance"
    );

    let statuses = ctx.agent.delete_instance(&request).await?;
    report(&statuses);

    Ok(EXIT_SUCCESS)
}

async fn resolve_instance_id(
    ctx: &Context<'_>,
    options: &DeleteInstanceOptions,
) -> Result<Uuid, Error> {
    if let Some(instance_id) = options.instance_id.filter(|id| !id.is_nil()) {
        debug!(%instance_id, "using instance id parameter");
        return Ok(instance_id);
    }

    if let Some(friendly_name) = non_empty(options.friendly_name.as_deref()) {
        debug!(friendly_name, "resolving instance from friendly name");
        let instances = ctx.agent.get_instances(None).await?;
        return find_instance_id(&instances, friendly_name).ok_or_else(|| {
            Error::Resolution(format!(
                "unable to resolve unique instance identifier for {friendly_name}"
            ))
        });
    }

    if options.instance_id.is_some() {
        return Err(Error::Resolution(
            "unable to resolve unique instance identifier".into(),
        ));
    }

    Err(Error::Argument(
        "instance id or instance friendly name not provided".into(),
    ))
}
