use super::*;

#[derive(Debug, Error)]
pub(crate) enum SearchError {
  #[error("malformed response: {0}")]
  MalformedResponse(#[from] serde_json::Error),
  #[error("request failed: {0}")]
  TransportFailure(#[from] reqwest::Error),
}
