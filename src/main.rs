use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use minesweeper::app::App;
use minesweeper::config::Cli;
use minesweeper::constants::FRAME_INTERVAL_MS;
use minesweeper::game::GameController;
use minesweeper::{logging, ui};

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Logging is optional; the game runs without it
    let log_path = logging::init(cli.log_file.as_deref(), cli.log_level).ok();

    let (config, warning) = cli.game_config();
    if let Some(warning) = &warning {
        eprintln!("{}", warning);
        warn!(raw = ?cli.mines, "{}", warning);
    }

    let game = match cli.seed {
        Some(seed) => GameController::with_seed(config, seed),
        None => GameController::new(config),
    }
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    info!(?log_path, seed = ?cli.seed, "starting");

    let mut app = App::new(game).with_notice(warning);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal, even when the loop failed
    let _ = disable_raw_mode();
    let _ = terminal.backend_mut().execute(DisableMouseCapture);
    let _ = terminal.backend_mut().execute(LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Err(e) = &result {
        warn!(error = %e, "terminal loop failed");
    }
    info!(
        games = app.game().game_number(),
        status = ?app.game().status(),
        "exiting"
    );
    result
}

/// Draw, read input and advance frames at a fixed rate until the player quits.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut last_frame = Instant::now();
    // last time the game clock was fed; may be later than `last_frame`
    let mut last_clock = last_frame;

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;
            let now = Instant::now();
            app.advance_clock(now.duration_since(last_clock));
            last_clock = now;

            let area = terminal.size()?;
            app.handle_event(&event, area);
            if app.should_quit() {
                return Ok(());
            }
        }

        let now = Instant::now();
        if now.duration_since(last_frame) >= frame_interval {
            app.on_frame(now.duration_since(last_clock));
            last_clock = now;
            last_frame = now;
        }
    }
}
