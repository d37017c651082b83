use super::*;

/// Filters `items` by title, sorts them by `sort_key` and optionally reverses
/// the result. The reversal applies after the sort, so reversing a descending
/// column yields ascending order.
pub(crate) fn render<'a>(
  items: &'a [Item],
  filter: &str,
  sort_key: SortKey,
  reverse: bool,
) -> Vec<&'a Item> {
  let mut rendered = items
    .iter()
    .filter(|item| item.matches_filter(filter))
    .collect::<Vec<_>>();

  sort_key.sort(&mut rendered);

  if reverse {
    rendered.reverse();
  }

  rendered
}
