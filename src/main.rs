//! Terminal Snake runner (default binary).
//!
//! Configuration comes from `SNAKE_*` environment variables (see
//! [`EngineConfig::from_env`]). Logs go to a file so they never fight the
//! renderer for the terminal.

use std::fs::File;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use crossterm::tty::IsTty;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

use tui_snake::engine::{run, Engine, EngineConfig, TimerQueue};
use tui_snake::input::CrosstermInput;
use tui_snake::term::TerminalSink;

fn main() -> Result<()> {
    let mut config = EngineConfig::from_env();
    init_logging(&config)?;

    let seed = *config.seed.get_or_insert_with(rand::random);
    info!("seed {seed}");

    if !std::io::stdout().is_tty() {
        bail!("tui-snake needs an interactive terminal on stdout");
    }

    let mut sink = TerminalSink::default();
    sink.enter()?;

    let result = play(&config, &mut sink);

    // Always try to restore terminal state.
    let _ = sink.exit();
    result
}

fn play(config: &EngineConfig, sink: &mut TerminalSink) -> Result<()> {
    let mut engine = Engine::with_config(config, TimerQueue::new());
    let mut input = CrosstermInput::new();

    let result = run(&mut engine, &mut input, sink);
    engine.shutdown();
    result
}

fn init_logging(config: &EngineConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let level = LevelFilter::from_str(&config.log_level).unwrap_or(LevelFilter::Info);
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    WriteLogger::init(level, Config::default(), file).context("initializing logger")?;
    Ok(())
}
