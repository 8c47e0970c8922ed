use crate::service::rest::DEFAULT_SERVICE_URL;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::{
        NonEmptyStringValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};
use uuid::Uuid;

/// Verb names as they appear in help output
pub const VERBS: [&str; 8] = [
    "GetInstances",
    "CreateInstance",
    "DeleteInstance",
    "GetOperation",
    "GetServiceVersions",
    "GetBackups",
    "CreateBackup",
    "RestoreBackup",
];

/// Pure clap command definitions with zero business logic
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("serviceurl")
                .default_value(DEFAULT_SERVICE_URL)
                .env("TENANTCTL_SERVICE_URL")
                .global(true)
                .help("A valid service url")
                .long("serviceurl")
                .value_name("URL"),
        )
        .arg(
            Arg::new("username")
                .env("TENANTCTL_USERNAME")
                .global(true)
                .help("The username to connect to the service")
                .long("username"),
        )
        .arg(
            Arg::new("password")
                .env("TENANTCTL_PASSWORD")
                .global(true)
                .help("The password associated with username")
                .hide_env_values(true)
                .long("password"),
        )
        .arg(
            Arg::new("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v debug, -vv trace)")
                .long("verbose")
                .short('v'),
        )
        .subcommand(
            Command::new("GetInstances")
                .about("Retrieves the instances in your tenant")
                .arg(
                    Arg::new("uniquename")
                        .help("Retrieve instance using a unique name")
                        .long("uniquename")
                        .short('u'),
                )
                .arg(
                    Arg::new("friendlyname")
                        .help("Retrieve instance using a friendly name")
                        .long("friendlyname")
                        .short('f'),
                ),
        )
        .subcommand(
            Command::new("CreateInstance")
                .about("Provisions (creates) an instance in your tenant")
                .arg(
                    Arg::new("friendlyname")
                        .help("Friendly name for the new instance")
                        .long("friendlyname")
                        .required(true)
                        .short('f')
                        .value_parser(NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("domainname")
                        .help("Domain name for the new instance")
                        .long("domainname")
                        .required(true)
                        .short('d')
                        .value_parser(NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("initialuseremail")
                        .help("Initial user email address")
                        .long("initialuseremail")
                        .required(true)
                        .short('e')
                        .value_parser(NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("serviceversionname")
                        .help("Service version name, defaults to the first one returned by the service")
                        .long("serviceversionname"),
                )
                .arg(
                    Arg::new("type")
                        .allow_negative_numbers(true)
                        .default_value("2")
                        .help("Instance type: 1 = Production, 2 = Sandbox")
                        .long("type")
                        .short('t')
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(
                    Arg::new("baselanguage")
                        .default_value("1033")
                        .help("Base language id, defaults to English (1033)")
                        .long("baselanguage")
                        .short('l'),
                )
                .arg(
                    Arg::new("validateonly")
                        .action(ArgAction::SetTrue)
                        .help("Only validate the request")
                        .long("validateonly"),
                ),
        )
        .subcommand(
            Command::new("DeleteInstance")
                .about("Deletes an instance in your tenant")
                .arg(
                    Arg::new("friendlyname")
                        .help("The friendly name of the instance to delete")
                        .long("friendlyname")
                        .short('f'),
                )
                .arg(
                    Arg::new("instanceid")
                        .help("The unique identifier of the instance to delete")
                        .long("instanceid")
                        .short('i')
                        .value_parser(clap::value_parser!(Uuid)),
                )
                .arg(
                    Arg::new("validateonly")
                        .action(ArgAction::SetTrue)
                        .help("Only validate the request")
                        .long("validateonly"),
                )
                .arg(
                    Arg::new("confirm")
                        .action(ArgAction::SetTrue)
                        .help("Confirm the deletion of the instance without prompting")
                        .long("confirm")
                        .short('c'),
                ),
        )
        .subcommand(
            Command::new("GetOperation")
                .about("Retrieves the status of an operation")
                .arg(
                    Arg::new("operationid")
                        .help("Operation id")
                        .long("operationid")
                        .required(true)
                        .short('o')
                        .value_parser(clap::value_parser!(Uuid)),
                ),
        )
        .subcommand(
            Command::new("GetServiceVersions")
                .about("Retrieves the supported service versions")
                .arg(
                    Arg::new("name")
                        .help("Service version name")
                        .long("name")
                        .short('n'),
                ),
        )
        .subcommand(
            Command::new("GetBackups")
                .about("Retrieves all backups of an instance")
                .arg(
                    Arg::new("instanceid")
                        .help("The unique identifier of the instance")
                        .long("instanceid")
                        .required(true)
                        .short('i')
                        .value_parser(clap::value_parser!(Uuid)),
                ),
        )
        .subcommand(
            Command::new("CreateBackup")
                .about("Backs up an instance")
                .arg(
                    Arg::new("instanceid")
                        .help("The unique identifier of the instance to back up")
                        .long("instanceid")
                        .required(true)
                        .short('i')
                        .value_parser(clap::value_parser!(Uuid)),
                )
                .arg(
                    Arg::new("label")
                        .help("Label to identify this backup for future restoration")
                        .long("label")
                        .required(true)
                        .short('l')
                        .value_parser(NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("isazurebackup")
                        .action(ArgAction::SetTrue)
                        .help("Store the backup in Azure storage")
                        .long("isazurebackup")
                        .short('a'),
                )
                .arg(
                    Arg::new("notes")
                        .help("Notes to identify this backup for future restoration")
                        .long("notes")
                        .short('n'),
                ),
        )
        .subcommand(
            Command::new("RestoreBackup")
                .about("Restores a backup onto an instance")
                .arg(
                    Arg::new("sourceinstanceid")
                        .help("The unique identifier of the source instance")
                        .long("sourceinstanceid")
                        .required(true)
                        .short('s')
                        .value_parser(clap::value_parser!(Uuid)),
                )
                .arg(
                    Arg::new("targetinstanceid")
                        .help("The unique identifier of the target instance")
                        .long("targetinstanceid")
                        .required(true)
                        .short('t')
                        .value_parser(clap::value_parser!(Uuid)),
                )
                .arg(
                    Arg::new("instancebackupid")
                        .help("The unique identifier of the backup to restore")
                        .long("instancebackupid")
                        .short('b')
                        .value_parser(clap::value_parser!(Uuid)),
                )
                .arg(
                    Arg::new("label")
                        .help("Label of the backup to restore")
                        .long("label")
                        .short('l'),
                )
                .arg(
                    Arg::new("createdon")
                        .help("Creation time of the backup to restore (RFC 3339, 'YYYY-MM-DD HH:MM:SS' or 'YYYY-MM-DD', UTC)")
                        .long("createdon")
                        .short('c')
                        .value_parser(parse_created_on),
                ),
        )
}

/// Make verbs and long flags case-insensitive before clap sees them
///
/// Long flag names are lowercased (values after `=` are kept), and the first
/// argument matching a verb ignoring ASCII case is replaced by its canonical
/// spelling.
#[must_use]
pub fn normalize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut verb_seen = false;

    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 {
                return arg;
            }

            if let Some(flag) = arg.strip_prefix("--") {
                return match flag.split_once('=') {
                    Some((name, value)) => format!("--{}={value}", name.to_lowercase()),
                    None => format!("--{}", flag.to_lowercase()),
                };
            }

            let canonical = if verb_seen {
                None
            } else {
                VERBS.iter().find(|verb| verb.eq_ignore_ascii_case(&arg))
            };

            match canonical {
                Some(verb) => {
                    verb_seen = true;
                    (*verb).to_string()
                }
                None => arg,
            }
        })
        .collect()
}

fn parse_created_on(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
        .ok_or_else(|| format!("invalid date: {value}"))
}
