#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FetchState {
  Fetched,
  Fetching,
  NotFetched,
}
