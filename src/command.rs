use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelInput,
  Dismiss,
  HideHelp,
  LoadMore,
  None,
  OpenSelected,
  PageDown,
  PageUp,
  Quit,
  Search(String),
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  Sort(SortKey),
  StartFilter,
  StartSearch,
  SubmitInput,
}
