use crate::error::CaptionError;
use bevy::log::debug;
use std::time::Duration;

/// Where the caption text comes from.
pub trait CaptionSource: Send + Sync + 'static {
    fn fetch(&self) -> Result<String, CaptionError>;
}

pub const DEFAULT_URL: &str = "https://cdn.realmaz.ggff.net/main.txt";

/// Plain-text GET with no retries or caching. Any HTTP status counts as an answer; only
/// transport failures and non-text bodies are errors.
pub struct HttpCaption {
    url: String,
    agent: ureq::Agent,
}

impl HttpCaption {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(30))
                .build(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpCaption {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

impl CaptionSource for HttpCaption {
    fn fetch(&self) -> Result<String, CaptionError> {
        let response = match self.agent.get(&self.url).call() {
            Ok(response) => response,
            // Error pages are still text worth showing.
            Err(ureq::Error::Status(status, response)) => {
                debug!("Caption server answered {status}");
                response
            }
            Err(err) => return Err(Box::new(err).into()),
        };
        response.into_string().map_err(CaptionError::NonText)
    }
}

/// Fixed text, used when the caption is given up front.
#[derive(Debug, Clone, Default)]
pub struct StaticCaption(pub String);

impl CaptionSource for StaticCaption {
    fn fetch(&self) -> Result<String, CaptionError> {
        Ok(self.0.clone())
    }
}
