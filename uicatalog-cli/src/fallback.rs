//! Startup with a single limited-mode retry

use crate::error::CliResult;
use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use std::future::Future;

/// Start the full server, or the limited one if the full server never started
///
/// `start_limited` is only called when `start_full` fails. A session that
/// started and later failed ends the process with that failure's exit code.
/// A limited session that ends normally exits with [`EXIT_WARNING`].
pub async fn run_with_fallback<T, Full, Limited, LimitedFut, Run, RunFut>(
    start_full: Full,
    start_limited: Limited,
    run: Run,
) -> i32
where
    Full: Future<Output = CliResult<T>>,
    Limited: FnOnce() -> LimitedFut,
    LimitedFut: Future<Output = CliResult<T>>,
    Run: Fn(T) -> RunFut,
    RunFut: Future<Output = CliResult<()>>,
{
    match start_full.await {
        Ok(session) => return session_exit_code(run(session).await, EXIT_SUCCESS),
        Err(e) => tracing::error!("{}", e.full_chain()),
    }

    tracing::info!("Retrying with only the catalog tool");
    match start_limited().await {
        Ok(session) => session_exit_code(run(session).await, EXIT_WARNING),
        Err(e) => {
            tracing::error!("{}", e.full_chain());
            EXIT_ERROR
        }
    }
}

fn session_exit_code(outcome: CliResult<()>, on_success: i32) -> i32 {
    match outcome {
        Ok(()) => on_success,
        Err(e) => {
            tracing::error!("{}", e.full_chain());
            e.exit_code
        }
    }
}
