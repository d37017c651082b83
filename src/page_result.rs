use super::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PageResult {
  pub(crate) hits: Vec<Item>,
  pub(crate) page: usize,
}
