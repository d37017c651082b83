use super::*;

/// Line editor shown in the status bar while the user types a search term or
/// a title filter. `original` holds the value to restore on cancel.
pub(crate) struct SearchInput {
  pub(crate) buffer: String,
  pub(crate) kind: InputKind,
  pub(crate) message_backup: String,
  pub(crate) original: String,
}

impl SearchInput {
  /// The buffer as a title filter. Surrounding whitespace is ignored both
  /// while typing and on submit.
  pub(crate) fn filter(&self) -> String {
    self.buffer.trim().to_string()
  }

  pub(crate) fn new(
    kind: InputKind,
    original: String,
    message_backup: String,
  ) -> Self {
    Self {
      buffer: original.clone(),
      kind,
      message_backup,
      original,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    format!("{}: {}", self.kind.label(), self.buffer)
  }
}
