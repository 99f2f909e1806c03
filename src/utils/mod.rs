//! Utility modules for the CDN filter.
//! Error types and logging helpers shared across the crate.

mod logging;
mod error;

pub use logging::{
    init_logging,
    log_fetch_event,
    log_classification_summary,
};

pub use error::{CheckError, CheckResult, FetchError, FetchResult};
