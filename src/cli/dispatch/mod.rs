use crate::{
    cli::actions::Action,
    options::{
        CreateBackupOptions, CreateInstanceOptions, DeleteInstanceOptions, GetBackupsOptions,
        GetOperationOptions, ListInstancesOptions, RestoreBackupOptions, ServiceVersionsOptions,
    },
    service::{Connection, rest::DEFAULT_SERVICE_URL},
};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::ArgMatches;
use uuid::Uuid;

/// Matches of the invoked verb, global arguments are propagated down to it
#[must_use]
pub fn leaf(matches: &ArgMatches) -> &ArgMatches {
    matches.subcommand().map_or(matches, |(_, sub)| sub)
}

/// Extract the service connection from the global arguments
///
/// # Errors
///
/// Returns an error if the service url is invalid
pub fn connection(matches: &ArgMatches) -> Result<Connection> {
    let matches = leaf(matches);
    let service_url = matches
        .get_one::<String>("serviceurl")
        .map_or(DEFAULT_SERVICE_URL, String::as_str);

    Connection::new(
        service_url,
        string(matches, "username"),
        string(matches, "password"),
    )
    .context("Invalid service url")
}

/// Convert `ArgMatches` into typed Action enum with validation
///
/// # Errors
///
/// Returns an error if no verb was given or required parameters are missing
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    let (verb, m) = matches.subcommand().context("A command is required")?;

    let action = match verb {
        "GetInstances" => Action::GetInstances(ListInstancesOptions {
            unique_name: string(m, "uniquename"),
            friendly_name: string(m, "friendlyname"),
        }),
        "CreateInstance" => Action::CreateInstance(CreateInstanceOptions {
            friendly_name: required(m, "friendlyname")?,
            domain_name: required(m, "domainname")?,
            initial_user_email: required(m, "initialuseremail")?,
            service_version_name: string(m, "serviceversionname"),
            instance_type: m.get_one::<i32>("type").copied().unwrap_or(2),
            base_language: string(m, "baselanguage").unwrap_or_else(|| "1033".to_string()),
            validate_only: m.get_flag("validateonly"),
        }),
        "DeleteInstance" => Action::DeleteInstance(DeleteInstanceOptions {
            friendly_name: string(m, "friendlyname"),
            instance_id: m.get_one::<Uuid>("instanceid").copied(),
            validate_only: m.get_flag("validateonly"),
            confirm: m.get_flag("confirm"),
        }),
        "GetOperation" => Action::GetOperation(GetOperationOptions {
            operation_id: required(m, "operationid")?,
        }),
        "GetServiceVersions" => Action::GetServiceVersions(ServiceVersionsOptions {
            name: string(m, "name"),
        }),
        "GetBackups" => Action::GetBackups(GetBackupsOptions {
            instance_id: required(m, "instanceid")?,
        }),
        "CreateBackup" => Action::CreateBackup(CreateBackupOptions {
            instance_id: required(m, "instanceid")?,
            label: required(m, "label")?,
            is_azure_backup: m.get_flag("isazurebackup"),
            notes: string(m, "notes"),
        }),
        "RestoreBackup" => Action::RestoreBackup(RestoreBackupOptions {
            source_instance_id: required(m, "sourceinstanceid")?,
            target_instance_id: required(m, "targetinstanceid")?,
            instance_backup_id: m.get_one::<Uuid>("instancebackupid").copied(),
            label: string(m, "label"),
            created_on: m.get_one::<DateTime<Utc>>("createdon").copied(),
        }),
        other => bail!("Unknown command: {other}"),
    };

    Ok(action)
}

fn string(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

fn required<T>(matches: &ArgMatches, id: &str) -> Result<T>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(id)
        .cloned()
        .with_context(|| format!("--{id} is required"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]

    use super::*;
    use crate::cli::commands;

    fn matches(args: &[&str]) -> ArgMatches {
        commands::new()
            .try_get_matches_from(commands::normalize_args(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_dispatch_get_instances() {
        let action = dispatch(&matches(&[
            "tenantctl",
            "GetInstances",
            "--friendlyname",
            "Contoso",
        ]))
        .unwrap();

        match action {
            Action::GetInstances(options) => {
                assert_eq!(options.friendly_name.as_deref(), Some("Contoso"));
                assert_eq!(options.unique_name, None);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_case_insensitive() {
        let action = dispatch(&matches(&[
            "tenantctl",
            "getinstances",
            "--UNIQUENAME",
            "org1a2b3c",
        ]))
        .unwrap();

        assert_eq!(
            action,
            Action::GetInstances(ListInstancesOptions {
                unique_name: Some("org1a2b3c".into()),
                friendly_name: None,
            })
        );
    }

    #[test]
    fn test_dispatch_create_instance() {
        let action = dispatch(&matches(&[
            "tenantctl",
            "CreateInstance",
            "--friendlyname",
            "A",
            "--domainname",
            "a",
            "--initialuseremail",
            "e@x.com",
            "--serviceversionname",
            "9.1",
            "--type",
            "1",
            "--validateonly",
        ]))
        .unwrap();

        assert_eq!(
            action,
            Action::CreateInstance(CreateInstanceOptions {
                friendly_name: "A".into(),
                domain_name: "a".into(),
                initial_user_email: "e@x.com".into(),
                service_version_name: Some("9.1".into()),
                instance_type: 1,
                base_language: "1033".into(),
                validate_only: true,
            })
        );
    }

    #[test]
    fn test_dispatch_delete_instance() {
        let action = dispatch(&matches(&[
            "tenantctl",
            "DeleteInstance",
            "--instanceid",
            "00000000-0000-0000-0000-000000000000",
            "--confirm",
        ]))
        .unwrap();

        assert_eq!(
            action,
            Action::DeleteInstance(DeleteInstanceOptions {
                friendly_name: None,
                instance_id: Some(Uuid::nil()),
                validate_only: false,
                confirm: true,
            })
        );
    }

    #[test]
    fn test_dispatch_restore_backup() {
        let source = Uuid::new_v4();
        let target = Uuid::new_v4();
        let action = dispatch(&matches(&[
            "tenantctl",
            "RestoreBackup",
            "--sourceinstanceid",
            &source.to_string(),
            "--targetinstanceid",
            &target.to_string(),
            "--createdon",
            "2017-05-01",
        ]))
        .unwrap();

        match action {
            Action::RestoreBackup(options) => {
                assert_eq!(options.source_instance_id, source);
                assert_eq!(options.target_instance_id, target);
                assert_eq!(options.instance_backup_id, None);
                assert_eq!(
                    options.created_on.map(|d| d.to_rfc3339()),
                    Some("2017-05-01T00:00:00+00:00".to_string())
                );
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_create_backup() {
        let id = Uuid::new_v4();
        let action = dispatch(&matches(&[
            "tenantctl",
            "CreateBackup",
            "-i",
            &id.to_string(),
            "-l",
            "nightly",
            "-a",
        ]))
        .unwrap();

        assert_eq!(
            action,
            Action::CreateBackup(CreateBackupOptions {
                instance_id: id,
                label: "nightly".into(),
                is_azure_backup: true,
                notes: None,
            })
        );
    }

    #[test]
    fn test_connection_defaults() {
        let connection = connection(&matches(&["tenantctl", "GetServiceVersions"])).unwrap();
        assert_eq!(connection.service_url.as_str(), "https://admin.services.crm6.dynamics.com/");
    }

    #[test]
    fn test_connection_from_flags() {
        let connection = connection(&matches(&[
            "tenantctl",
            "--serviceurl",
            "http://localhost:8080",
            "GetServiceVersions",
            "--username",
            "admin@contoso.com",
            "--password",
            "secret",
        ]))
        .unwrap();

        assert_eq!(connection.service_url.as_str(), "http://localhost:8080/");
        assert_eq!(connection.username.as_deref(), Some("admin@contoso.com"));
        assert_eq!(connection.password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_connection_invalid_url() {
        let result = connection(&matches(&[
            "tenantctl",
            "GetInstances",
            "--serviceurl",
            "not-a-url",
        ]));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid service url")
        );
    }
}
