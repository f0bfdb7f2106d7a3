mod app;
mod audio;
mod ui;

use anyhow::Result;
use app::{App, InputMode};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::time::Duration;
use tracing::info;

// Display tick cadence. Remaining time is recomputed from the absolute
// deadline, so correctness does not depend on this value.
const TICK_MILLIS: u64 = 200;

fn setup_logging(log_level: &str) -> Result<()> {
    let mut log_path = std::env::temp_dir();
    log_path.push("paceshift.log");

    let log_file = std::fs::File::create(log_path)?;
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_level)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        let _ = crossterm::execute!(std::io::stdout(), crossterm::cursor::Show);

        tracing::error!(?panic_info, "Application panicked");

        eprintln!("A fatal error occurred: {}", panic_info);

        original_hook(panic_info);
    }));
}

#[derive(Parser, Debug)]
#[command(name = "paceshift")]
#[command(about = "Alternating slow/fast walking interval timer", long_about = None)]
struct Args {
    /// Log filter (tracing env-filter syntax)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Start with audio cues muted
    #[arg(long)]
    mute: bool,
}

fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.input_mode == InputMode::ConfirmQuit {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') => {
                app.input_mode = InputMode::Normal;
            }
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        KeyCode::Char('q') | KeyCode::Esc => {
            if app.engine.session().is_active {
                app.input_mode = InputMode::ConfirmQuit;
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_timer(),
        KeyCode::Char('n') => app.skip_interval(),
        KeyCode::Char('m') => app.toggle_cues(),
        _ => {}
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level)?;
    setup_panic_hook();
    info!("PaceShift starting up");

    let mut app = App::new(args.mute)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = std::time::Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_quit {
            break;
        }

        tokio::time::sleep(Duration::from_millis(50)).await;

        if last_tick.elapsed() >= Duration::from_millis(TICK_MILLIS) {
            app.tick(chrono::Utc::now());
            last_tick = std::time::Instant::now();
        }

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(&mut app, key.code, key.modifiers);
                }
                Event::Resize(width, height) => {
                    info!(width, height, "Terminal resized");
                }
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("PaceShift shut down");

    Ok(())
}
