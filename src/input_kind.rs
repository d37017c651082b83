#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputKind {
  Filter,
  Search,
}

impl InputKind {
  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Filter => "Filter",
      Self::Search => "Search",
    }
  }
}
