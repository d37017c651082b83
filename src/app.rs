use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  /// Applies a command and runs whatever effects it produced. Returns
  /// whether the app should exit.
  pub(crate) fn dispatch(&mut self, command: Command) -> bool {
    let dispatch = self.state.dispatch_command(command);

    for effect in dispatch.effects {
      self.execute_effect(effect);
    }

    dispatch.should_exit
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self
      .state
      .set_list_height(usize::from(layout[1].height.saturating_sub(1)));

    let mut summary = vec![Span::styled(
      self.state.summary(),
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if self.state.is_loading() {
      summary.push(Span::styled(
        format!("  {LOADING_INDICATOR}"),
        Style::default().fg(Color::Yellow),
      ));
    }

    frame.render_widget(Paragraph::new(Line::from(summary)), layout[0]);

    let items = self.state.visible_items();

    let row_count = items.len();

    let rows = items
      .iter()
      .map(|item| {
        Row::new(vec![
          Cell::from(item.title.clone()),
          Cell::from(item.author.clone()),
          Cell::from(item.comments.to_string()),
          Cell::from(item.points.to_string()),
        ])
      })
      .collect::<Vec<_>>();

    if rows.is_empty() {
      let text = if self.state.is_loading() {
        LOADING_INDICATOR
      } else if self.state.search_key().is_empty() {
        "Press / to search."
      } else if self.state.results_are_filtered_out() {
        "No titles match the filter."
      } else {
        "No results. Try another query or press m for more."
      };

      frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        layout[1],
      );
    } else {
      let sort = self.state.sort();

      let header = Row::new(SortKey::COLUMNS.iter().map(|column| {
        Cell::from(format!("{}{}", column.label(), sort.indicator(*column)))
      }))
      .style(
        Style::default()
          .fg(Color::DarkGray)
          .add_modifier(Modifier::BOLD),
      );

      let table = Table::new(
        rows,
        [
          Constraint::Percentage(52),
          Constraint::Percentage(24),
          Constraint::Percentage(12),
          Constraint::Percentage(12),
        ],
      )
      .header(header)
      .column_spacing(1)
      .row_highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      );

      let mut table_state = TableState::default()
        .with_selected(self.state.table().selected_index(row_count))
        .with_offset(self.state.table().offset(row_count));

      frame.render_stateful_widget(table, layout[1], &mut table_state);

      self.state.table_mut().set_offset(table_state.offset());
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame, self.state.sort());
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchPage { key, page } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let result = client.search(&key, page).await;

          let _ = sender.send(Event::Page { key, result });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          debug!(%url, "opened link");

          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(%url, %error, "could not open link");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(100))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.input_command(key) {
        command
      } else {
        TableView::handle_key(key)
      };

      if self.dispatch(command) {
        info!("exiting");
        break;
      }
    }

    Ok(())
  }
}
