use super::*;

pub(crate) enum Event {
  Page {
    key: String,
    result: Result<SearchResponse, SearchError>,
  },
}
