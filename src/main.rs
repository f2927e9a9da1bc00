use std::process::ExitCode;

use gitgate::engine::DispatchError;
use gitgate::ui::output;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    match gitgate::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            let code = err
                .downcast_ref::<DispatchError>()
                .map(DispatchError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

/// Install the stderr log subscriber, filtered by `GITGATE_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("GITGATE_LOG").unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
