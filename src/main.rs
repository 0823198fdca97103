use anyhow::Result;
use shotlog::cli::run_cli;
use tracing::error;

fn main() -> Result<()> {
    run_cli().inspect_err(|e| {
        error!("Error running tracker {e:?}");
    })?;
    Ok(())
}
