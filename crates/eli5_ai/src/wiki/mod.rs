use eli5_core::error::AppError;

/// Capability for looking up a plain-text summary of a topic.
///
/// Production uses the Wikipedia REST API; tests substitute deterministic
/// stubs so no network is needed during verification.
pub trait SummarySource {
    fn fetch_summary(&self, topic: &str) -> Result<String, AppError>;
}

pub mod rest_client;
