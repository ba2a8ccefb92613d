use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use cubes::compute::{init_state, tick};
use cubes::config::{parse_cell_size, GameConfig};
use cubes::display::{render, TerminalSurface};
use cubes::input::KeyTracker;

/// Run, jump and shoot across a grid of blocks.
///
/// ← → : Move   SPACE : Jump   A : Shoot   Q / Esc : Quit
#[derive(Parser, Debug)]
#[command(name = "cubes", version, about)]
struct Args {
    /// Milliseconds per simulation tick
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Pixels covered by one terminal column
    #[arg(long, default_value_t = 10.0, value_parser = parse_cell_size)]
    cell_width: f32,

    /// Pixels covered by one terminal row
    #[arg(long, default_value_t = 25.0, value_parser = parse_cell_size)]
    cell_height: f32,

    /// Write logs here (the terminal itself is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            tick: Duration::from_millis(self.tick_ms.max(1)),
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            ..GameConfig::default()
        }
    }
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn is_quit(event: &KeyEvent) -> bool {
    if event.kind != KeyEventKind::Press {
        return false;
    }
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fixed-period update-then-draw loop. Returns when a quit key is pressed.
///
/// Input is drained without blocking at the top of every frame; a frame
/// that overruns its period simply starts the next one late.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    reports_release: bool,
) -> Result<()> {
    let (cols, rows) = terminal::size().context("Failed to query terminal size")?;
    let (width, height) = config.viewport_for(cols, rows);
    log::info!("Viewport {width}x{height} px ({cols}x{rows} cells), tick {:?}", config.tick);

    let mut state = init_state(width, height);
    let mut surface = TerminalSurface::new(out, config.cell_width, config.cell_height, cols, rows);
    let mut tracker = KeyTracker::new(config.hold_window_frames(), reports_release);

    loop {
        let frame_start = Instant::now();
        let frame = state.frame + 1;

        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                if is_quit(&key) {
                    return Ok(());
                }
                tracker.handle(&key, frame);
            }
        }

        let keys = tracker.snapshot(frame);
        state = tick(&state, &keys, &config.physics);
        render(&mut surface, &state).context("Failed to draw frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < config.tick {
            thread::sleep(config.tick - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;
    let config = args.config();

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for key-release events where the terminal speaks the kitty
    // protocol; elsewhere keys fall back to the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::info!("Keyboard enhancement: {keyboard_enhanced}");

    // Dedicate a thread to blocking event reads so the loop never waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &config, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
