use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptionError {
    #[error("Network error: {0}")]
    Network(#[from] Box<ureq::Error>),
    #[error("Response is not text: {0}")]
    NonText(#[source] std::io::Error),
}
