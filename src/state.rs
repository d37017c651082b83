use super::*;

pub(crate) struct State {
  filter: String,
  help: HelpView,
  in_flight: HashMap<String, usize>,
  input: Option<SearchInput>,
  list_height: usize,
  message: String,
  page_counts: HashMap<String, usize>,
  pending_effects: Vec<Effect>,
  results: ResultStore,
  search_key: String,
  search_term: String,
  sort: SortSpec,
  table: TableView,
  transient_message: Option<TransientMessage>,
}

impl State {
  fn cancel_input(&mut self) {
    let Some(input) = self.input.take() else {
      return;
    };

    self.message = input.message_backup;

    if input.kind == InputKind::Filter {
      self.filter = input.original;
      self.table.reset();
    }
  }

  fn dismiss_selected(&mut self) {
    let Some((id, title)) = self
      .selected_item()
      .map(|item| (item.id.clone(), item.title.clone()))
    else {
      return;
    };

    let removed = self.results.dismiss(&self.search_key, &id);

    debug!(key = %self.search_key, %id, removed, "dismissed item");

    let len = self.visible_items().len();

    self.table.set_selected(self.table.selected_raw(), len);

    self.set_transient_status(format!(
      "Dismissed \"{}\"",
      truncate(&title, 40)
    ));
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::StartSearch => self.start_input(InputKind::Search),
      Command::StartFilter => self.start_input(InputKind::Filter),
      Command::CancelInput => self.cancel_input(),
      Command::SubmitInput => self.submit_input(),
      Command::Search(term) => self.submit_search(&term),
      Command::LoadMore => self.load_more(),
      Command::Dismiss => self.dismiss_selected(),
      Command::Sort(key) => self.sort_by(key),
      Command::SelectNext => self.select_next(),
      Command::SelectPrevious => self.select_previous(),
      Command::PageDown => self.page_down(),
      Command::PageUp => self.page_up(),
      Command::SelectFirst => self.select_index(0),
      Command::SelectLast => self.select_index(usize::MAX),
      Command::OpenSelected => self.open_selected(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  fn fetch_page(&mut self, key: String, page: usize) {
    *self.in_flight.entry(key.clone()).or_default() += 1;

    debug!(%key, page, "fetching search page");

    let truncated = truncate(&key, 40);

    self.set_status(if page == 0 {
      format!("Searching for \"{truncated}\"...")
    } else {
      format!(
        "Loading page {} for \"{truncated}\"...",
        page.saturating_add(1)
      )
    });

    self.pending_effects.push(Effect::FetchPage { key, page });
  }

  pub(crate) fn fetch_state(&self, key: &str) -> FetchState {
    if self.in_flight.contains_key(key) {
      FetchState::Fetching
    } else if !self.needs_fetch(key) {
      FetchState::Fetched
    } else {
      FetchState::NotFetched
    }
  }

  fn finish_fetch(&mut self, key: &str) {
    if let Some(count) = self.in_flight.get_mut(key) {
      *count = count.saturating_sub(1);

      if *count == 0 {
        self.in_flight.remove(key);
      }
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Page { key, result } => {
        self.finish_fetch(&key);

        match result {
          Ok(response) => {
            let (count, page) = (response.hits.len(), response.page);

            info!(%key, page, count, "merged search page");

            self.results.merge(&key, response.hits, page);

            if let Some(pages) = response.nb_pages {
              self.page_counts.insert(key.clone(), pages);
            }

            if key == self.search_key {
              let truncated = truncate(&key, 40);

              self.set_status(if page == 0 {
                match count {
                  0 => format!("No results for \"{truncated}\""),
                  _ => format!(
                    "Found {} for \"{truncated}\"",
                    format_count(count, "result")
                  ),
                }
              } else {
                format!(
                  "Loaded page {} for \"{truncated}\": {}",
                  page.saturating_add(1),
                  format_count(count, "more result")
                )
              });
            }
          }
          Err(error) => {
            warn!(%key, %error, "search page failed");

            self.set_transient_status(format!("Could not search: {error}"));
          }
        }
      }
    }
  }

  fn handle_input_key(&mut self, key: KeyEvent) -> Command {
    let Some(input) = self.input.as_mut() else {
      return Command::None;
    };

    match key.code {
      KeyCode::Esc => Command::CancelInput,
      KeyCode::Enter => Command::SubmitInput,
      KeyCode::Backspace => {
        input.buffer.pop();

        self.input_changed();

        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        input.buffer.push(ch);

        self.input_changed();

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  /// The status saved behind the help overlay or an open prompt, which is
  /// what the status line will show once it is visible again.
  fn hidden_status_mut(&mut self) -> Option<&mut String> {
    if self.help.is_visible() {
      self.help.saved_status_mut()
    } else {
      self.input.as_mut().map(|input| &mut input.message_backup)
    }
  }

  fn input_changed(&mut self) {
    let Some(input) = &self.input else {
      return;
    };

    self.message = truncate(&input.prompt(), 80);

    if input.kind == InputKind::Filter {
      self.filter = input.filter();
      self.table.reset();
    }
  }

  pub(crate) fn input_command(&mut self, key: KeyEvent) -> Option<Command> {
    if self.input.is_some() {
      Some(self.handle_input_key(key))
    } else {
      None
    }
  }

  pub(crate) fn is_loading(&self) -> bool {
    !self.in_flight.is_empty()
  }

  fn load_more(&mut self) {
    if self.search_key.is_empty() {
      return;
    }

    if self.is_loading() {
      self.set_transient_status(LOADING_STATUS.into());

      return;
    }

    let page = self.results.page(&self.search_key).saturating_add(1);

    self.fetch_page(self.search_key.clone(), page);
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn needs_fetch(&self, key: &str) -> bool {
    !self.results.has_key(key)
  }

  pub(crate) fn new(search_term: String) -> Self {
    Self {
      filter: String::new(),
      help: HelpView::default(),
      in_flight: HashMap::new(),
      input: None,
      list_height: 0,
      message: READY_STATUS.into(),
      page_counts: HashMap::new(),
      pending_effects: Vec::new(),
      results: ResultStore::default(),
      search_key: String::new(),
      search_term,
      sort: SortSpec::default(),
      table: TableView::default(),
      transient_message: None,
    }
  }

  fn open_selected(&mut self) {
    if let Some(url) = self.selected_item().map(Item::resolved_url) {
      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn page_down(&mut self) {
    let len = self.visible_items().len();

    let current = self.table.selected_index(len).unwrap_or(0);

    self.select_index(current.saturating_add(self.page_jump()));
  }

  fn page_jump(&self) -> usize {
    self.list_height.saturating_sub(1).max(1)
  }

  fn page_up(&mut self) {
    let len = self.visible_items().len();

    let current = self.table.selected_index(len).unwrap_or(0);

    self.select_index(current.saturating_sub(self.page_jump()));
  }

  pub(crate) fn results_are_filtered_out(&self) -> bool {
    !self.results.hits(&self.search_key).is_empty()
      && self.visible_items().is_empty()
  }

  pub(crate) fn search_key(&self) -> &str {
    &self.search_key
  }

  fn select_index(&mut self, target: usize) {
    let len = self.visible_items().len();

    self.table.set_selected(target, len);
  }

  fn select_next(&mut self) {
    let len = self.visible_items().len();

    let current = self.table.selected_index(len).unwrap_or(0);

    self.select_index(current.saturating_add(1));
  }

  fn select_previous(&mut self) {
    let len = self.visible_items().len();

    let current = self.table.selected_index(len).unwrap_or(0);

    self.select_index(current.saturating_sub(1));
  }

  pub(crate) fn selected_item(&self) -> Option<&Item> {
    let items = self.visible_items();

    self
      .table
      .selected_index(items.len())
      .and_then(|index| items.get(index).copied())
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  fn set_status(&mut self, message: String) {
    match self.hidden_status_mut() {
      Some(hidden) => *hidden = message,
      None => self.message = message,
    }
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  /// Like `set_transient_message`, but a message that arrives while the
  /// status line is covered replaces the saved status instead.
  fn set_transient_status(&mut self, message: String) {
    match self.hidden_status_mut() {
      Some(hidden) => *hidden = message,
      None => self.set_transient_message(message),
    }
  }

  pub(crate) fn sort(&self) -> SortSpec {
    self.sort
  }

  fn sort_by(&mut self, key: SortKey) {
    self.sort.select(key);

    self.table.reset();

    debug!(sort = ?self.sort, "changed sort");

    let message = format!("Results {}", self.sort.describe());

    self.set_transient_status(message);
  }

  fn start_input(&mut self, kind: InputKind) {
    if self.input.is_some() {
      return;
    }

    let original = match kind {
      InputKind::Filter => self.filter.clone(),
      InputKind::Search => self.search_term.clone(),
    };

    self.input = Some(SearchInput::new(kind, original, self.message.clone()));

    self.input_changed();
  }

  fn submit_input(&mut self) {
    let Some(input) = self.input.take() else {
      return;
    };

    self.message = input.message_backup.clone();

    match input.kind {
      InputKind::Filter => {
        self.filter = input.filter();
        self.table.reset();
      }
      InputKind::Search => self.submit_search(&input.buffer),
    }
  }

  fn submit_search(&mut self, term: &str) {
    let term = term.trim();

    if term.is_empty() {
      return;
    }

    debug!(term, "submitted search");

    self.search_term = term.to_string();
    self.search_key = term.to_string();
    self.table.reset();

    match self.fetch_state(term) {
      FetchState::NotFetched => self.fetch_page(term.to_string(), 0),
      FetchState::Fetching => {
        self.set_status(format!(
          "Searching for \"{}\"...",
          truncate(term, 40)
        ));
      }
      FetchState::Fetched => {
        let count = self.results.hits(term).len();

        self.set_status(format!(
          "Showing {} for \"{}\"",
          format_count(count, "cached result"),
          truncate(term, 40)
        ));
      }
    }
  }

  pub(crate) fn summary(&self) -> String {
    if self.search_key.is_empty() {
      return "No search yet".into();
    }

    let key = self.search_key.as_str();

    let total = self.results.hits(key).len();
    let shown = self.visible_items().len();

    let mut parts = vec![format!("\"{}\"", truncate(key, 30))];

    parts.push(if shown == total {
      format_count(total, "result")
    } else {
      format!("{shown} of {}", format_count(total, "result"))
    });

    if self.results.has_key(key) {
      let page = self.results.page(key).saturating_add(1);

      parts.push(match self.page_counts.get(key) {
        Some(pages) => format!("page {page} of {pages}"),
        None => format!("page {page}"),
      });
    }

    parts.push(self.sort.describe());

    if !self.filter.is_empty() {
      parts.push(format!("filter \"{}\"", truncate(&self.filter, 20)));
    }

    parts.join(" • ")
  }

  pub(crate) fn table(&self) -> &TableView {
    &self.table
  }

  pub(crate) fn table_mut(&mut self) -> &mut TableView {
    &mut self.table
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }

  /// The current key's hits after the title filter and sort are applied.
  pub(crate) fn visible_items(&self) -> Vec<&Item> {
    pipeline::render(
      self.results.hits(&self.search_key),
      &self.filter,
      self.sort.key,
      self.sort.reverse,
    )
  }
}
