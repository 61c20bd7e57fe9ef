//! Gomoku GUI: play freestyle Gomoku against the monkey.

use anyhow::{anyhow, ensure, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::ui::GomokuApp;
use gomoku::{Difficulty, EngineConfig, RulesConfig, Stone};

/// Play Gomoku against a computer opponent
#[derive(Debug, Parser)]
#[command(name = "monkey-gomoku", version, about)]
struct Cli {
    /// Opponent strength: easy, normal or hard
    #[arg(long, default_value = "normal")]
    difficulty: Difficulty,

    /// Your color; black moves first
    #[arg(long, default_value = "black")]
    human_color: Stone,

    /// Board side length
    #[arg(long, default_value_t = gomoku::BOARD_SIZE)]
    board_size: usize,

    /// Stones in a row needed to win
    #[arg(long, default_value_t = gomoku::config::WIN_LENGTH)]
    win_length: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    ensure!(
        (5..=26).contains(&cli.board_size),
        "board size must be between 5 and 26, got {}",
        cli.board_size
    );
    ensure!(
        (3..=cli.board_size).contains(&cli.win_length),
        "win length must be between 3 and the board size, got {}",
        cli.win_length
    );
    ensure!(cli.human_color != Stone::Empty, "human color must be black or white");

    let config = EngineConfig::with_rules(RulesConfig {
        board_size: cli.board_size,
        win_length: cli.win_length,
    });
    info!(
        difficulty = %cli.difficulty,
        human = cli.human_color.name(),
        board_size = cli.board_size,
        win_length = cli.win_length,
        "starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Monkey Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Monkey Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config, cli.difficulty, cli.human_color)))),
    )
    .map_err(|e| anyhow!("GUI failed: {e}"))
}
