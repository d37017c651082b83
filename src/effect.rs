#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchPage { key: String, page: usize },
  OpenUrl { url: String },
}
