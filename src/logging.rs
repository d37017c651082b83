use super::*;

const FILTER_ENV: &str = "HNSEARCH_LOG";

/// Installs a file-backed subscriber. The terminal belongs to the UI, so
/// without a log file nothing is recorded.
pub(crate) fn initialize(path: Option<&Path>) -> Result {
  let Some(path) = path else {
    return Ok(());
  };

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  let filter = EnvFilter::try_from_env(FILTER_ENV)
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .try_init()
    .map_err(|error| anyhow!("could not install logger: {error}"))?;

  Ok(())
}
