use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hnsearch",
  version,
  about = "Search Hacker News stories from the terminal"
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "HNSEARCH_API_URL",
    default_value = "https://hn.algolia.com/api/v1",
    help = "Base url of the search API"
  )]
  pub(crate) api_url: String,
  #[arg(
    long,
    env = "HNSEARCH_HITS_PER_PAGE",
    default_value_t = 100,
    value_parser = clap::value_parser!(u16).range(1..=1000),
    help = "Number of stories requested per page"
  )]
  pub(crate) hits_per_page: u16,
  #[arg(
    long,
    env = "HNSEARCH_LOG_FILE",
    help = "Write diagnostic logs to this file, filtered by HNSEARCH_LOG"
  )]
  pub(crate) log_file: Option<PathBuf>,
  #[arg(
    long,
    env = "HNSEARCH_QUERY",
    default_value = "redux",
    help = "Search submitted at startup"
  )]
  pub(crate) query: String,
  #[arg(
    long,
    env = "HNSEARCH_TIMEOUT",
    default_value_t = 30,
    help = "Request timeout in seconds"
  )]
  pub(crate) timeout: u64,
}

impl Arguments {
  pub(crate) fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout.max(1))
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    clap::{CommandFactory, FromArgMatches},
  };

  /// Parses `args` with the `HNSEARCH_*` fallbacks detached, so the result
  /// does not depend on the environment the tests run in.
  fn parse(args: &[&str]) -> Result<Arguments, clap::Error> {
    let matches = Arguments::command()
      .mut_args(|arg| arg.env(None::<&str>))
      .try_get_matches_from(args)?;

    Arguments::from_arg_matches(&matches)
  }

  #[test]
  fn defaults_match_public_api() {
    let arguments = parse(&["hnsearch"]).unwrap();

    assert_eq!(arguments.query, "redux");
    assert_eq!(arguments.hits_per_page, 100);
    assert_eq!(arguments.api_url, "https://hn.algolia.com/api/v1");
    assert_eq!(arguments.timeout(), Duration::from_secs(30));
    assert!(arguments.log_file.is_none());
  }

  #[test]
  fn every_option_has_an_environment_fallback() {
    let command = Arguments::command();

    let mut variables = command
      .get_arguments()
      .filter_map(clap::Arg::get_env)
      .map(|name| name.to_string_lossy().into_owned())
      .collect::<Vec<_>>();

    variables.sort();

    assert_eq!(
      variables,
      [
        "HNSEARCH_API_URL",
        "HNSEARCH_HITS_PER_PAGE",
        "HNSEARCH_LOG_FILE",
        "HNSEARCH_QUERY",
        "HNSEARCH_TIMEOUT",
      ]
    );
  }

  #[test]
  fn flags_override_defaults() {
    let arguments = parse(&[
      "hnsearch",
      "--query",
      "rust",
      "--hits-per-page",
      "20",
      "--timeout",
      "0",
      "--log-file",
      "hnsearch.log",
    ])
    .unwrap();

    assert_eq!(arguments.query, "rust");
    assert_eq!(arguments.hits_per_page, 20);
    assert_eq!(arguments.timeout(), Duration::from_secs(1));
    assert_eq!(arguments.log_file, Some(PathBuf::from("hnsearch.log")));
  }

  #[test]
  fn zero_page_size_is_rejected() {
    assert!(parse(&["hnsearch", "--hits-per-page", "0"]).is_err());
  }
}
