use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info, Level};

use rocketcade::app::App;
use rocketcade::event::EventHandler;
use rocketcade::game::{Command, Msg, RandomDice, TICK_DELAY};
use rocketcade::ui;

const LOG_FILE: &str = "rocketcade.log";
const LOG_LEVEL: Level = Level::INFO;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    init_logging();
    info!("rocketcade v{}", env!("CARGO_PKG_VERSION"));

    let result = play();
    match &result {
        Ok(()) => info!("session ended"),
        Err(err) => error!("{err:#}"),
    }
    result
}

// stdout belongs to the game, so logs go to a file. No file, no logs.
fn init_logging() {
    let Ok(file) = File::create(log_path()) else {
        return;
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LOG_LEVEL)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn log_path() -> PathBuf {
    // Keep the log next to the executable
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join(LOG_FILE);
        }
    }
    PathBuf::from(LOG_FILE)
}

fn play() -> Result<()> {
    let mut terminal = enter().context("failed to set up the terminal")?;
    let result = run(&mut terminal);

    // Always try to restore terminal state.
    let restored = leave(&mut terminal).context("failed to restore the terminal");
    result.and(restored)
}

fn enter() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err);
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn leave(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

fn run(terminal: &mut Tui) -> Result<()> {
    let mut app = App::new(RandomDice::from_entropy());
    let events = EventHandler::new();

    // The first frame needs a size, and the tick chain needs its first link.
    let (columns, rows) = crossterm::terminal::size().context("failed to read the terminal size")?;
    app.dispatch(Msg::Resize { columns, rows });
    events.schedule_tick(TICK_DELAY);

    loop {
        terminal
            .draw(|frame| ui::render(frame, &app))
            .context("failed to draw a frame")?;

        let msg = events.next().context("event queue closed")?;
        match app.dispatch(msg) {
            Command::ScheduleTick(delay) => events.schedule_tick(delay),
            Command::Quit => break,
            Command::None => {}
        }
    }

    info!(points = app.world.points, "player quit");
    Ok(())
}
