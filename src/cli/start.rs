use super::{commands, dispatch, telemetry};
use crate::{
    prompt::Console,
    service::RestAgent,
    tenant::{Context, EXIT_FAILURE, EXIT_SUCCESS},
};
use clap::error::ErrorKind;
use tracing::error;

/// Main orchestrator - Pure orchestration with no business logic
///
/// Five-step data flow:
/// 1. Parse: Extract CLI arguments (verbs and flags are case-insensitive)
/// 2. Extract Verbosity: Convert flag count to logging level
/// 3. Initialize Telemetry: Set up structured logging/tracing
/// 4. Dispatch: Convert `ArgMatches` into typed Action enum
/// 5. Execute: Run the action's business logic
///
/// Returns the process exit code.
pub async fn start() -> i32 {
    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    start_with(args).await
}

/// Same as [`start`] with explicit arguments, the first one is the program name
pub async fn start_with<I>(args: I) -> i32
where
    I: IntoIterator<Item = String>,
{
    // 1. Parse: a usage error never reaches a command
    let matches = match commands::new().try_get_matches_from(commands::normalize_args(args)) {
        Ok(matches) => matches,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_FAILURE,
            };
        }
    };

    // 2. Extract Verbosity
    let verbosity = dispatch::leaf(&matches).get_count("verbose");

    // 3. Initialize Telemetry
    if let Err(err) = telemetry::init(verbosity) {
        eprintln!("{err:#}");
    }

    // 4. Dispatch: Convert ArgMatches into typed Action enum
    let action = match dispatch::dispatch(&matches) {
        Ok(action) => action,
        Err(err) => {
            error!("{err:#}");
            return EXIT_FAILURE;
        }
    };

    let agent = match dispatch::connection(&matches)
        .and_then(|connection| RestAgent::new(connection).map_err(anyhow::Error::from))
    {
        Ok(agent) => agent,
        Err(err) => {
            error!("{err:#}");
            return EXIT_FAILURE;
        }
    };

    // 5. Execute: Run the action's business logic
    action.execute(&Context::new(&agent, &Console)).await
}
