use std::process::ExitCode;
use tenantctl::cli::start;

#[tokio::main]
async fn main() -> ExitCode {
    let code = start::start().await;
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
