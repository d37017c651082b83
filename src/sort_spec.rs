use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SortSpec {
  pub(crate) key: SortKey,
  pub(crate) reverse: bool,
}

impl SortSpec {
  pub(crate) fn describe(self) -> String {
    match (self.key, self.reverse) {
      (SortKey::None, _) => "unsorted".to_string(),
      (key, false) => format!("sorted by {}", key.label().to_lowercase()),
      (key, true) => {
        format!("sorted by {} (reversed)", key.label().to_lowercase())
      }
    }
  }

  pub(crate) fn indicator(self, column: SortKey) -> &'static str {
    if column != self.key {
      return "";
    }

    let descending = matches!(column, SortKey::Comments | SortKey::Points);

    if descending == self.reverse {
      " ▲"
    } else {
      " ▼"
    }
  }

  /// Picking the active key again flips the order; any other key starts
  /// unreversed.
  pub(crate) fn select(&mut self, key: SortKey) {
    self.reverse = self.key == key && !self.reverse;
    self.key = key;
  }
}
