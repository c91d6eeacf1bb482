mod api;
mod app;
mod browser;
mod config;
mod event;
mod logging;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use api::client::{Backend, HttpBackend};
use app::{App, LoadState, Mode};
use event::{AppEvent, EventHandler};
use ui::components::header::Header;
use ui::components::note_panel::NotePanel;
use ui::components::quote_banner::QuoteBanner;
use ui::components::word_card::WordCard;
use ui::layout::AppLayout;

#[derive(Parser)]
#[command(name = "lexigo", version, about = "Terminal client for the Lexigo vocabulary trainer")]
struct Cli {
    #[arg(short, long, help = "Backend base URL (default http://localhost:5000)")]
    server: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let mut app = App::new();

    if let Some(server) = cli.server {
        app.config.server_url = server;
    }
    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
        }
    }

    let backend: Arc<dyn Backend> = Arc::new(
        HttpBackend::new(&app.config.server_url).context("failed to build HTTP client")?,
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend_io = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_io)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events, backend);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    backend: Arc<dyn Backend>,
) -> Result<()> {
    loop {
        for request in app.take_requests() {
            api::dispatch(backend.clone(), request, events.sender());
        }

        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.tick(Instant::now()),
            AppEvent::Resize(_, _) => {}
            AppEvent::Api(event) => app.apply_api(event, Instant::now()),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Browse => handle_browse_key(app, key),
        Mode::EditNote => handle_edit_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.previous_word(),
        KeyCode::Right | KeyCode::Char('l') => app.next_word(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_editing(),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => app.save_note(),
        KeyCode::Char('r') => app.refresh(),
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.stop_editing(),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => app.save_note(),
        _ => app.note.handle(key),
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);

    frame.render_widget(
        Header {
            user: app.user.as_ref(),
            total: app.pager.total(),
            theme: app.theme,
        },
        layout.header,
    );

    if let Some(quote_area) = layout.quote {
        frame.render_widget(
            QuoteBanner {
                quote: &app.quote,
                theme: app.theme,
            },
            quote_area,
        );
    }

    frame.render_widget(
        WordCard {
            word: if app.words == LoadState::Ready {
                app.pager.current()
            } else {
                None
            },
            state: app.words,
            position: app.pager.position(),
            total: app.pager.total(),
            theme: app.theme,
        },
        layout.word,
    );

    frame.render_widget(
        NotePanel {
            input: &app.note,
            editing: app.mode == Mode::EditNote,
            status: &app.save,
            theme: app.theme,
        },
        layout.note,
    );

    render_footer(frame, app, layout.footer);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;
    let enabled = Style::default().fg(colors.fg());
    let disabled = Style::default().fg(colors.dim());

    let spans = match app.mode {
        Mode::Browse => vec![
            Span::styled(
                " [←] Prev ",
                if app.pager.prev_enabled() { enabled } else { disabled },
            ),
            Span::styled(
                " [→] Next ",
                if app.pager.next_enabled() { enabled } else { disabled },
            ),
            Span::styled(
                " [e] Edit note  [^S] Save  [r] Refresh  [q] Quit ",
                Style::default().fg(colors.dim()),
            ),
        ],
        Mode::EditNote => vec![Span::styled(
            " [Esc] Done  [^S] Save note  [Enter] New line ",
            Style::default().fg(colors.dim()),
        )],
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
