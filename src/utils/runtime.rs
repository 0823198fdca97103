use anyhow::Result;

/// The tracker is strictly sequential, so everything runs on the calling thread.
pub fn single_thread_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
