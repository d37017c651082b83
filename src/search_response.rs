use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
  pub(crate) hits: Vec<Item>,
  #[serde(default, rename = "nbPages")]
  pub(crate) nb_pages: Option<usize>,
  pub(crate) page: usize,
}

impl SearchResponse {
  pub(crate) fn parse(body: &str) -> Result<Self, SearchError> {
    Ok(serde_json::from_str(body)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_hits_and_page() {
    let response = SearchResponse::parse(
      r#"{
        "hits": [{"objectID": "1", "title": "Redux Basics"}],
        "page": 3,
        "nbPages": 10,
        "hitsPerPage": 100
      }"#,
    )
    .unwrap();

    assert_eq!(response.hits.len(), 1);
    assert_eq!(response.page, 3);
    assert_eq!(response.nb_pages, Some(10));
  }

  #[test]
  fn page_count_is_optional() {
    let response = SearchResponse::parse(r#"{"hits": [], "page": 0}"#).unwrap();

    assert!(response.hits.is_empty());
    assert_eq!(response.nb_pages, None);
  }

  #[test]
  fn missing_hits_is_malformed() {
    assert!(matches!(
      SearchResponse::parse(r#"{"page": 0}"#),
      Err(SearchError::MalformedResponse(_))
    ));
  }

  #[test]
  fn missing_page_is_malformed() {
    assert!(matches!(
      SearchResponse::parse(r#"{"hits": []}"#),
      Err(SearchError::MalformedResponse(_))
    ));
  }

  #[test]
  fn non_json_body_is_malformed() {
    assert!(matches!(
      SearchResponse::parse("<html>rate limited</html>"),
      Err(SearchError::MalformedResponse(_))
    ));
  }
}
