use eli5_core::error::AppError;
use serde::Deserialize;

use super::SummarySource;

/// Summaries are capped to keep prompts small; matches the source tool's
/// 1500-character limit.
pub const SUMMARY_CHAR_LIMIT: usize = 1500;

const USER_AGENT: &str = "eli5-explainer/0.1";

/// Wikipedia edition to read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WikiLang {
    English,
    SimpleEnglish,
}

impl WikiLang {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "en" => Ok(Self::English),
            "simple" => Ok(Self::SimpleEnglish),
            other => Err(AppError::new(
                "WIKI_LANG_INVALID",
                "Wikipedia edition must be 'en' or 'simple'",
            )
            .with_details(format!("lang={other}"))),
        }
    }

    fn host(&self) -> &'static str {
        match self {
            Self::English => "en.wikipedia.org",
            Self::SimpleEnglish => "simple.wikipedia.org",
        }
    }
}

#[derive(Debug, Clone)]
pub struct WikipediaClient {
    base_url: String,
}

impl WikipediaClient {
    pub fn new(lang: WikiLang) -> Self {
        Self {
            base_url: format!("https://{}/api/rest_v1", lang.host()),
        }
    }

    /// Point the client at a different endpoint (local fixture server in
    /// tests). Must be an http(s) URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::new(
                "WIKI_BASE_URL_INVALID",
                "Wikipedia base URL must be http(s)",
            )
            .with_details(format!("base_url={base_url}")));
        }
        Ok(Self { base_url })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SummaryResponse {
    extract: String,
}

/// Wikipedia page title for a topic: underscores for spaces, then
/// percent-encoded so characters like `/`, `?`, `#`, and `%` stay inside
/// the path segment.
fn encode_title(topic: &str) -> String {
    let title = topic.trim().replace(' ', "_");
    urlencoding::encode(&title).into_owned()
}

impl SummarySource for WikipediaClient {
    fn fetch_summary(&self, topic: &str) -> Result<String, AppError> {
        let title = encode_title(topic);
        if title.is_empty() {
            return Err(AppError::new("WIKI_TOPIC_EMPTY", "Topic must be non-empty"));
        }

        let url = format!("{}/page/summary/{title}", self.base_url);
        tracing::debug!(%url, "fetching wikipedia summary");
        let resp = ureq::get(&url)
            .set("User-Agent", USER_AGENT)
            .timeout(std::time::Duration::from_secs(20))
            .call();

        match resp {
            Ok(r) => {
                let v: SummaryResponse = r.into_json().map_err(|e| {
                    AppError::new("WIKI_FETCH_FAILED", "Failed to decode summary response")
                        .with_details(e.to_string())
                })?;
                let extract = v.extract.trim();
                if extract.is_empty() {
                    return Err(AppError::new(
                        "WIKI_NOT_FOUND",
                        "Article exists but has no summary text",
                    )
                    .with_details(format!("topic={topic}")));
                }
                // Char-boundary-safe truncation.
                if extract.chars().count() > SUMMARY_CHAR_LIMIT {
                    Ok(extract.chars().take(SUMMARY_CHAR_LIMIT).collect())
                } else {
                    Ok(extract.to_string())
                }
            }
            Err(ureq::Error::Status(404, _)) => Err(AppError::new(
                "WIKI_NOT_FOUND",
                "Topic not found on Wikipedia",
            )
            .with_details(format!("topic={topic}"))),
            Err(ureq::Error::Status(code, _)) => Err(AppError::new(
                "WIKI_FETCH_FAILED",
                "Summary request failed",
            )
            .with_details(format!("status={code}"))),
            Err(e) => Err(
                AppError::new("WIKI_FETCH_FAILED", "Failed to reach Wikipedia")
                    .with_details(e.to_string())
                    .with_retryable(true),
            ),
        }
    }
}
