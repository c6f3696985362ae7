mod app;
mod components;
mod config;
mod draw;
mod keys;
mod luck;
mod pipeline;
mod state;
mod ui;

use crate::app::App;
use crate::config::{DEFAULT_LEAGUE_ID, DEFAULT_SEASON, DEFAULT_TEAM_ID, PipelineConfig};
use crate::state::app_settings::AppSettings;
use crate::state::messages::UiEvent;
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use espn_ffl_api::client::FflApi;
use log::{LevelFilter, error, info};
use std::io::Stdout;
use std::time::Duration;
use std::{io, panic};
use tokio::sync::mpsc;
use tui::{Terminal, backend::CrosstermBackend};

const INPUT_POLL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();

    let settings = AppSettings::load();
    let level = settings.log_level.unwrap_or(LevelFilter::Error);
    tui_logger::init_logger(level)?;
    tui_logger::set_default_level(level);

    // The whole season is fetched and crunched before the terminal is taken
    // over, so any failure prints as a plain error and exits non-zero.
    let config = PipelineConfig::default();
    let report = pipeline::run(&FflApi::new(), &config).await?;
    info!("season report ready, starting viewer");

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    let app = App::new(settings, report);

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx));

    main_ui_loop(terminal, app, ui_event_rx).await;

    input_handler.abort();
    cleanup_terminal()?;

    Ok(())
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("ffl-luck {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> String {
    format!(
        "ffl-luck - fantasy football season scores against the league average

Usage:
  ffl-luck
  ffl-luck --help
  ffl-luck --version

Plots ESPN league {DEFAULT_LEAGUE_ID}, season {DEFAULT_SEASON}, team {DEFAULT_TEAM_ID}.

Environment:
  RUST_LOG   Log level for the in-app log pane (error, warn, info, debug, trace)

Keys:
  q / Esc    quit
  f          chart only
  \"          toggle log pane
  ?          help"
    )
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    mut ui_events: mpsc::Receiver<UiEvent>,
) {
    draw::draw(&mut terminal, &mut app);

    while let Some(ui_event) = ui_events.recv().await {
        match ui_event {
            UiEvent::KeyPressed(key_event) => {
                if keys::handle_key_bindings(key_event, &mut app) {
                    break;
                }
            }
            UiEvent::Resize => {}
        }
        draw::draw(&mut terminal, &mut app);
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    while !ui_events.is_closed() {
        let event = match tokio::task::spawn_blocking(|| next_event(INPUT_POLL)).await {
            Ok(Ok(Some(event))) => event,
            Ok(Ok(None)) => continue,
            Ok(Err(e)) => {
                error!("terminal input failed: {e}");
                break;
            }
            Err(_) => break,
        };

        let ui_event = match event {
            Event::Key(key_event) if key_event.is_press() => Some(UiEvent::KeyPressed(key_event)),
            Event::Resize(_, _) => Some(UiEvent::Resize),
            _ => None,
        };

        if let Some(ui_event) = ui_event
            && ui_events.send(ui_event).await.is_err()
        {
            break;
        }
    }
}

/// Wait up to `timeout` for a terminal event so the input task can notice shutdown.
fn next_event(timeout: Duration) -> io::Result<Option<Event>> {
    if crossterm_event::poll(timeout)? {
        crossterm_event::read().map(Some)
    } else {
        Ok(None)
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

pub fn cleanup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::MoveTo(0, 0))?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    execute!(stdout, terminal::LeaveAlternateScreen)?;
    execute!(stdout, cursor::Show)?;
    terminal::disable_raw_mode()
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let _ = cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
