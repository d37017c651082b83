use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum SortKey {
  Author,
  Comments,
  #[default]
  None,
  Points,
  Title,
}

impl SortKey {
  pub(crate) const COLUMNS: [SortKey; 4] = [
    SortKey::Title,
    SortKey::Author,
    SortKey::Comments,
    SortKey::Points,
  ];

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Author => "Author",
      Self::Comments => "Comments",
      Self::None => "None",
      Self::Points => "Points",
      Self::Title => "Title",
    }
  }

  /// Stable sort; text columns ascend, count columns descend.
  pub(crate) fn sort(self, items: &mut [&Item]) {
    match self {
      Self::Author => items.sort_by(|a, b| a.author.cmp(&b.author)),
      Self::Comments => items.sort_by_key(|item| Reverse(item.comments)),
      Self::None => {}
      Self::Points => items.sort_by_key(|item| Reverse(item.points)),
      Self::Title => items.sort_by(|a, b| a.title.cmp(&b.title)),
    }
  }
}
