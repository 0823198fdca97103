//! Turns a screenshot into a one line description of what the user is doing.
//!
//! [Summarizer] reports failures explicitly through [SummarizeError]. A failed summary must never
//! stop the tracker, so callers go through [summary_or_fallback] which degrades any error into
//! [FALLBACK_SUMMARY].

pub mod openai;

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

pub const FALLBACK_SUMMARY: &str = "AI summary unavailable";

pub const SYSTEM_PROMPT: &str = "You are a productivity tracker assistant.";
pub const USER_PROMPT: &str = "Summarize what task this screenshot shows. Be concise.";

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("failed to read screenshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("request to the summarization service failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("summarization service responded with {status}: {body}")]
    Api { status: u16, body: String },
    #[error("summarization service returned no summary")]
    EmptyResponse,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Returns a trimmed, non-empty summary of the image stored at `image_path`.
    async fn summarize(&self, image_path: &Path) -> Result<String, SummarizeError>;
}

/// Maps the outcome of [Summarizer::summarize] to the text that ends up in the activity log.
pub fn summary_or_fallback(result: Result<String, SummarizeError>) -> String {
    match result {
        Ok(summary) => {
            info!("Summary received: {summary}");
            println!("[AI] {summary}");
            summary
        }
        Err(e) => {
            error!("Failed to summarize screenshot {e:?}");
            println!("[Error] Failed to summarize screenshot: {e}");
            FALLBACK_SUMMARY.to_owned()
        }
    }
}
