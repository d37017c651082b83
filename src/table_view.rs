use super::*;

/// Selection and scroll position over the rendered result rows. The rows
/// themselves are recomputed from the store on every draw, so every accessor
/// takes the current row count and clamps against it.
#[derive(Debug, Default)]
pub(crate) struct TableView {
  offset: usize,
  selected: usize,
}

impl TableView {
  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Char('/') => Command::StartSearch,
      KeyCode::Char('f') => Command::StartFilter,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageUp
      }
      KeyCode::Char('d' | 'x') => Command::Dismiss,
      KeyCode::Char('m') => Command::LoadMore,
      KeyCode::Char('t') => Command::Sort(SortKey::Title),
      KeyCode::Char('a') => Command::Sort(SortKey::Author),
      KeyCode::Char('c') => Command::Sort(SortKey::Comments),
      KeyCode::Char('p') => Command::Sort(SortKey::Points),
      KeyCode::Char('0') => Command::Sort(SortKey::None),
      KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
      KeyCode::PageDown => Command::PageDown,
      KeyCode::PageUp => Command::PageUp,
      KeyCode::Home => Command::SelectFirst,
      KeyCode::End => Command::SelectLast,
      KeyCode::Enter | KeyCode::Char('o' | 'O') => Command::OpenSelected,
      _ => Command::None,
    }
  }

  pub(crate) fn offset(&self, len: usize) -> usize {
    match self.selected_index(len) {
      Some(selected) => self.offset.min(selected),
      None => 0,
    }
  }

  pub(crate) fn reset(&mut self) {
    self.offset = 0;
    self.selected = 0;
  }

  pub(crate) fn selected_index(&self, len: usize) -> Option<usize> {
    (len != 0).then(|| self.selected.min(len - 1))
  }

  pub(crate) fn selected_raw(&self) -> usize {
    self.selected
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    self.offset = offset;
  }

  pub(crate) fn set_selected(&mut self, index: usize, len: usize) {
    self.selected = index.min(len.saturating_sub(1));
  }
}
