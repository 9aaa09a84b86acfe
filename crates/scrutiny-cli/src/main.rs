//! Scrutiny console binary.
//!
//! Logs go to stderr so they don't interleave with the console output;
//! `RUST_LOG` overrides the default `scrutiny=info` filter.

use std::sync::Arc;

use clap::Parser;
use scrutiny_app::{App, Runtime};
use scrutiny_cli::{Args, CliError, TerminalDriver};
use scrutiny_client::{ApiClient, Backend};
use scrutiny_core::{RedbStorage, SessionState};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CliError> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scrutiny=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(args))
}

async fn run(args: Args) -> Result<(), CliError> {
    let storage = RedbStorage::open(args.session_path())?;
    let session = SessionState::hydrate(storage)?;
    tracing::info!(
        port = args.port,
        store = %args.session_path().display(),
        authenticated = session.is_authenticated(),
        "starting console"
    );

    let backend: Arc<dyn Backend> = Arc::new(ApiClient::with_timeout(args.timeout())?);
    let app = App::new(session, args.connection(), args.notifications(), backend);

    let driver = TerminalDriver::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
    let mut runtime = Runtime::new(driver, app);
    runtime.run().await?;
    Ok(())
}
