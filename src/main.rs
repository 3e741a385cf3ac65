use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use typeahead::config::{self, ConfigResult};
use typeahead::render::{AutocompleteLayout, render_autocomplete};
use typeahead::{Autocomplete, Candidate, HttpLookup};

const POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "typeahead")]
#[command(about = "Search a remote service and pick one result")]
#[command(version)]
struct Args {
    /// Lookup endpoint (overrides the config file)
    #[arg(long)]
    url: Option<String>,

    /// Query-string parameter carrying the search text
    #[arg(long)]
    param: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    let _ = env_logger::try_init();

    let args = Args::parse();

    let ConfigResult {
        config: mut cfg,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    if let Some(url) = args.url {
        cfg.lookup.url = Some(url);
    }
    if let Some(param) = args.param {
        cfg.lookup.query_param = param;
    }

    // Fail before touching the terminal so the message stays readable
    let service = HttpLookup::from_config(&cfg.lookup)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let mut autocomplete = Autocomplete::new(
        Arc::new(service),
        runtime.handle().clone(),
        &cfg.autocomplete,
    );

    let terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut autocomplete, warning);

    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    autocomplete.teardown();
    result
}

fn run(
    mut terminal: DefaultTerminal,
    autocomplete: &mut Autocomplete,
    warning: Option<String>,
) -> Result<()> {
    let chosen: Rc<RefCell<Option<Candidate>>> = Rc::new(RefCell::new(None));
    let sink = chosen.clone();
    autocomplete.subscribe(Box::new(move |selected| {
        *sink.borrow_mut() = selected.cloned();
    }));
    autocomplete.on_focus();

    loop {
        let mut layout = AutocompleteLayout::default();
        terminal.draw(|frame| {
            let [control, status] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
            layout = render_autocomplete(frame, control, autocomplete);
            render_status(frame, status, chosen.borrow().as_ref(), warning.as_deref());
        })?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        break;
                    }
                    autocomplete.handle_key(key, Instant::now());
                }
                Event::Mouse(mouse) => {
                    autocomplete.handle_mouse(mouse, &layout, Instant::now());
                }
                _ => {}
            }
        }

        autocomplete.tick(Instant::now());
    }

    Ok(())
}

fn render_status(frame: &mut Frame, area: Rect, chosen: Option<&Candidate>, warning: Option<&str>) {
    let line = match (chosen, warning) {
        (Some(candidate), _) => {
            let id = candidate
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            Line::styled(
                format!(" Selected: {} (id {})", candidate.name, id),
                Style::default().fg(Color::Green),
            )
        }
        (None, Some(warning)) => Line::styled(
            format!(" Config ignored: {}", warning),
            Style::default().fg(Color::Yellow),
        ),
        (None, None) => Line::styled(
            " Type to search · ↑/↓ move · Enter select · Esc close · Ctrl+C quit",
            Style::default().fg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}
