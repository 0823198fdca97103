//! Periodic activity tracker. Every few minutes it takes a screenshot, asks a vision model what
//! the user is working on and appends the answer to a CSV log. When interrupted it compiles the
//! log into a plain text report.

pub mod capture;
pub mod cli;
pub mod config;
pub mod report;
pub mod storage;
pub mod summarizer;
pub mod tracker;
pub mod utils;
