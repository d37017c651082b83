use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
  hits_per_page: usize,
}

impl Client {
  pub(crate) fn new(
    base_url: &str,
    hits_per_page: usize,
    timeout: Duration,
  ) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .context("could not build http client")?;

    Ok(Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client,
      hits_per_page: hits_per_page.max(1),
    })
  }

  pub(crate) async fn search(
    &self,
    query: &str,
    page: usize,
  ) -> Result<SearchResponse, SearchError> {
    let (page, hits_per_page) =
      (page.to_string(), self.hits_per_page.to_string());

    debug!(query, %page, %hits_per_page, "requesting search page");

    let body = self
      .client
      .get(format!("{}/search", self.base_url))
      .query(&[
        ("query", query),
        ("page", page.as_str()),
        ("hitsPerPage", hits_per_page.as_str()),
      ])
      .send()
      .await?
      .error_for_status()?
      .text()
      .await?;

    SearchResponse::parse(&body)
  }
}
