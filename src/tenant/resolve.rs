//! Name matching and selection over service results
//!
//! Every lookup takes the first match in the order the service returned; no
//! ambiguity detection is done when several records share a name.

use crate::{
    error::Error,
    model::{Instance, ServiceVersion},
    options::ListInstancesOptions,
};
use uuid::Uuid;

/// Case-insensitive comparison using Unicode lowercase folding
#[must_use]
pub fn names_match(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// Treat an empty string the same as an absent value
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Keep the instances matching the filter
///
/// The friendly name filter takes precedence; the unique name filter only
/// applies when no friendly name is given.
#[must_use]
pub fn select_instances(instances: Vec<Instance>, filter: &ListInstancesOptions) -> Vec<Instance> {
    if let Some(friendly_name) = non_empty(filter.friendly_name.as_deref()) {
        instances
            .into_iter()
            .filter(|i| names_match(&i.friendly_name, friendly_name))
            .collect()
    } else if let Some(unique_name) = non_empty(filter.unique_name.as_deref()) {
        instances
            .into_iter()
            .filter(|i| names_match(&i.unique_name, unique_name))
            .collect()
    } else {
        instances
    }
}

/// Pick the version named `name`, or the first one when no name is given
///
/// # Errors
///
/// Returns [`Error::Resolution`] if `versions` is empty or nothing matches
pub fn select_service_version<'a>(
    versions: &'a [ServiceVersion],
    name: Option<&str>,
) -> Result<&'a ServiceVersion, Error> {
    let selected = match non_empty(name) {
        Some(name) => versions.iter().find(|v| names_match(&v.name, name)),
        None => versions.first(),
    };

    selected
        .filter(|v| !v.id.is_nil())
        .ok_or_else(|| Error::Resolution("no service version found".into()))
}

/// Id of the first instance whose friendly name matches
#[must_use]
pub fn find_instance_id(instances: &[Instance], friendly_name: &str) -> Option<Uuid> {
    instances
        .iter()
        .find(|i| names_match(&i.friendly_name, friendly_name))
        .map(|i| i.id)
        .filter(|id| !id.is_nil())
}
