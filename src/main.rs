use {
  anyhow::{Context, anyhow},
  app::App,
  arguments::Arguments,
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  fetch_state::FetchState,
  help_view::HelpView,
  input_kind::InputKind,
  item::Item,
  page_result::PageResult,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap,
    },
  },
  result_store::ResultStore,
  search_error::SearchError,
  search_input::SearchInput,
  search_response::SearchResponse,
  serde::{Deserialize, Deserializer},
  sort_key::SortKey,
  sort_spec::SortSpec,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    cmp::Reverse,
    collections::HashMap,
    fs::OpenOptions,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    sync::Mutex,
    time::{Duration, Instant},
  },
  table_view::TableView,
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  utils::{deserialize_null_default, format_count, truncate},
};

mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod effect;
mod event;
mod fetch_state;
mod help_view;
mod input_kind;
mod item;
mod logging;
mod page_result;
mod pipeline;
mod result_store;
mod search_error;
mod search_input;
mod search_response;
mod sort_key;
mod sort_spec;
mod state;
mod table_view;
mod transient_message;
mod utils;

const READY_STATUS: &str = "/ search • f filter • t/a/c/p sort • d dismiss • m more • o open • ? help • q quit";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_INDICATOR: &str = "Loading ...";
const LOADING_STATUS: &str = "Still loading, try again in a moment";

const HELP_TEXT: &str = "\
Search:
  /       edit the search term (enter submits, esc cancels)
  f       filter titles as you type (esc restores the old filter)
  m       load the next page for the current search

Sorting:
  t       sort by title
  a       sort by author
  c       sort by comments (most first)
  p       sort by points (most first)
  0       clear sorting
          pressing the active sort again reverses it

Results:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first result
  end     jump to last result
  enter   open the selected story in your browser
  o       open the selected story in your browser
  d / x   dismiss the selected story

General:
  ?       toggle this help
  q / esc quit hnsearch
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

fn run() -> Result {
  let arguments = Arguments::parse();

  logging::initialize(arguments.log_file.as_deref())?;

  info!(
    api_url = %arguments.api_url,
    hits_per_page = arguments.hits_per_page,
    query = %arguments.query,
    "starting"
  );

  let client = Client::new(
    &arguments.api_url,
    usize::from(arguments.hits_per_page),
    arguments.timeout(),
  )?;

  let mut app = App::new(client, State::new(arguments.query.clone()));

  let mut terminal =
    initialize_terminal().context("could not initialize terminal")?;

  app.dispatch(Command::Search(arguments.query));

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run() {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
