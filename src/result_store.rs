use super::*;

#[derive(Debug, Default)]
pub(crate) struct ResultStore {
  results: HashMap<String, PageResult>,
}

impl ResultStore {
  /// Removes every hit with the given identifier from the entry at `key`,
  /// returning how many were removed. The stored page is left alone.
  pub(crate) fn dismiss(&mut self, key: &str, id: &str) -> usize {
    let Some(result) = self.results.get_mut(key) else {
      return 0;
    };

    let before = result.hits.len();

    result.hits.retain(|item| item.id != id);

    before - result.hits.len()
  }

  pub(crate) fn get(&self, key: &str) -> Option<&PageResult> {
    self.results.get(key)
  }

  pub(crate) fn has_key(&self, key: &str) -> bool {
    self.results.contains_key(key)
  }

  pub(crate) fn hits(&self, key: &str) -> &[Item] {
    self.get(key).map_or(&[], |result| result.hits.as_slice())
  }

  /// Appends `hits` to the entry at `key`, creating it if absent, and
  /// records `page` as the last fetched page.
  pub(crate) fn merge(&mut self, key: &str, hits: Vec<Item>, page: usize) {
    match self.results.get_mut(key) {
      Some(result) => {
        result.hits.extend(hits);
        result.page = page;
      }
      None => {
        self.results.insert(key.to_string(), PageResult { hits, page });
      }
    }
  }

  pub(crate) fn page(&self, key: &str) -> usize {
    self.get(key).map_or(0, |result| result.page)
  }
}
