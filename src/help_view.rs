use super::*;

/// Help overlay. While it is open the status line shows `HELP_STATUS`, and
/// the message it replaced is held here until the overlay closes.
#[derive(Default)]
pub(crate) struct HelpView {
  saved_status: Option<String>,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame, sort: SortSpec) {
    if !self.is_visible() {
      return;
    }

    let area = Self::help_area(frame.area());

    frame.render_widget(Clear, area);

    let title = format!("{HELP_TITLE} • results {}", sort.describe());

    let help = Paragraph::new(Self::help_lines())
      .block(Block::default().title(title).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  fn help_area(area: Rect) -> Rect {
    let (width, height) =
      HELP_TEXT.lines().fold((0u16, 2u16), |(width, height), line| {
        let line_width =
          u16::try_from(line.chars().count()).unwrap_or(u16::MAX);

        (width.max(line_width.saturating_add(4)), height.saturating_add(1))
      });

    let [area] = Layout::horizontal([Constraint::Length(width)])
      .flex(Flex::Center)
      .areas(area);

    let [area] = Layout::vertical([Constraint::Length(height)])
      .flex(Flex::Center)
      .areas(area);

    area
  }

  /// Section headings are highlighted, key rows are split into a bold key
  /// column and a plain description.
  fn help_lines() -> Vec<Line<'static>> {
    HELP_TEXT
      .lines()
      .map(|line| {
        if !line.starts_with(' ') && line.ends_with(':') {
          return Line::styled(
            line,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
          );
        }

        let row = line
          .strip_prefix("  ")
          .and_then(|row| row.split_at_checked(8));

        match row {
          Some((keys, description)) if !keys.trim().is_empty() => {
            Line::from(vec![
              Span::raw("  "),
              Span::styled(keys, Modifier::BOLD),
              Span::raw(description),
            ])
          }
          _ => Line::raw(line),
        }
      })
      .collect()
  }

  pub(crate) fn hide(&mut self, message: &mut String) {
    if let Some(saved) = self.saved_status.take() {
      *message = saved;
    }
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.saved_status.is_some()
  }

  /// The status that will be restored on close, if the overlay is open.
  pub(crate) fn saved_status_mut(&mut self) -> Option<&mut String> {
    self.saved_status.as_mut()
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.is_visible() {
      return;
    }

    self.saved_status = Some(std::mem::replace(message, HELP_STATUS.into()));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn help_area_is_centered_and_fits_screen() {
    let area = HelpView::help_area(Rect::new(0, 0, 200, 100));

    assert!(area.width < 200 && area.height < 100);
    assert!(area.x.abs_diff(200 - area.right()) <= 1);
    assert!(area.y.abs_diff(100 - area.bottom()) <= 1);
  }

  #[test]
  fn help_area_shrinks_on_tiny_screens() {
    let area = HelpView::help_area(Rect::new(0, 0, 10, 4));

    assert!(area.width <= 10);
    assert!(area.height <= 4);
  }

  #[test]
  fn help_area_fits_every_help_line() {
    let area = HelpView::help_area(Rect::new(0, 0, 200, 100));

    let widest = HELP_TEXT
      .lines()
      .map(|line| line.chars().count())
      .max()
      .unwrap();

    assert!(usize::from(area.width) >= widest + 2);
    assert_eq!(usize::from(area.height), HELP_TEXT.lines().count() + 2);
  }

  #[test]
  fn headings_and_key_rows_are_styled() {
    let lines = HelpView::help_lines();

    assert_eq!(lines.len(), HELP_TEXT.lines().count());

    let heading = &lines[0];
    assert_eq!(heading.to_string(), "Search:");
    assert_eq!(heading.style.fg, Some(Color::Cyan));

    let row = &lines[1];
    assert_eq!(row.spans.len(), 3);
    assert_eq!(row.spans[1].content.trim(), "/");
    assert!(row.spans[1].style.add_modifier.contains(Modifier::BOLD));
    assert_eq!(row.to_string(), HELP_TEXT.lines().nth(1).unwrap());
  }

  #[test]
  fn show_and_hide_round_trip_status() {
    let mut help = HelpView::default();
    let mut message = "ready".to_string();

    help.show(&mut message);
    assert!(help.is_visible());
    assert_eq!(message, HELP_STATUS);

    help.show(&mut message);
    assert_eq!(help.saved_status_mut().cloned(), Some("ready".into()));

    help.hide(&mut message);
    assert!(!help.is_visible());
    assert_eq!(message, "ready");
  }

  #[test]
  fn status_replaced_while_open_is_restored_on_close() {
    let mut help = HelpView::default();
    let mut message = "Searching...".to_string();

    help.show(&mut message);

    *help.saved_status_mut().unwrap() = "Found 3 results".into();

    help.hide(&mut message);
    assert_eq!(message, "Found 3 results");
    assert!(help.saved_status_mut().is_none());
  }
}
