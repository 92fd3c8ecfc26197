//! Terminal 2Power runner (default binary).
//!
//! A thin host around the engine: crossterm raw-mode input, a plain-text board,
//! and a JSON file for the best score. Everything game-related goes through
//! `two_power::core`.

use std::fs::File;
use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, queue, style::Print, terminal};
use env_logger::{Env, Target};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use two_power::config::ShellConfig;
use two_power::core::{handle_move_and_spawn, GameState, HighScore};
use two_power::input::{handle_key_event, should_quit};
use two_power::store::FileHighScoreStore;
use two_power::view;
use two_power::types::{GameAction, MoveEvent};

fn main() -> Result<()> {
    let config = ShellConfig::from_env();
    init_logging(&config)?;

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    queue!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
    stdout.flush()?;

    let result = run(&config, &mut stdout);

    // Always try to restore terminal state.
    let _ = queue!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = stdout.flush();
    let _ = terminal::disable_raw_mode();
    result
}

fn init_logging(config: &ShellConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        // Nothing may write to the alternate screen.
        env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(config: &ShellConfig, out: &mut impl Write) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut store = FileHighScoreStore::new(&config.high_score_path);
    let mut high = HighScore::load(&mut store);
    info!("best score {} from {}", high.best(), store.path().display());

    let mut game = GameState::new_with(&mut rng, config.initial_tiles);
    let mut last_event: Option<MoveEvent> = None;

    loop {
        draw(out, &game, &high, last_event.as_ref())?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        match handle_key_event(key) {
            Some(GameAction::Move(direction)) => {
                let outcome = handle_move_and_spawn(direction, &game, &mut rng)?;
                game = outcome.state;
                if outcome.event.is_some() {
                    last_event = outcome.event;
                }
                high.record(game.score(), &mut store);
            }
            Some(GameAction::NewGame) => {
                game = game.reset(&mut rng, config.initial_tiles);
                last_event = None;
            }
            None => {}
        }
    }
}

fn draw(
    out: &mut impl Write,
    game: &GameState,
    high: &HighScore,
    last_event: Option<&MoveEvent>,
) -> Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        Print(view::status_line(game, high.best())),
        Print("\r\n\r\n")
    )?;

    for line in game.board().to_string().lines() {
        queue!(out, Print(line), Print("\r\n"))?;
    }

    queue!(
        out,
        Print("\r\n"),
        Print(view::points_line(last_event)),
        Print("\r\n"),
        Print(view::footer_line(game)),
        Print("\r\n")
    )?;

    out.flush()?;
    Ok(())
}
