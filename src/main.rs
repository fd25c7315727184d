use anyhow::{Context, Result};
use clap::Parser;

use pig_dice::{ConsoleInput, ConsoleReporter, GameBuilder, GameConfig, PlayerKind};

#[derive(Parser)]
#[command(name = "pig")]
#[command(about = "Play the Pig dice game.")]
struct Cli {
    /// Type of player 1 (human or computer)
    #[arg(long, default_value = "human", value_parser = parse_kind)]
    player1: PlayerKind,
    /// Type of player 2 (human or computer)
    #[arg(long, default_value = "human", value_parser = parse_kind)]
    player2: PlayerKind,
    /// Enable timed game mode (60 seconds)
    #[arg(long)]
    timed: bool,
    /// RNG seed for reproducible dice
    #[arg(long)]
    seed: Option<u64>,
    /// Print a JSON summary of the game when it ends
    #[arg(long)]
    summary: bool,
}

fn parse_kind(s: &str) -> Result<PlayerKind, pig_dice::PigError> {
    s.parse()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = GameConfig::new()
        .with_players(cli.player1, cli.player2)
        .with_timed(cli.timed);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    log::debug!("config: {:?}", config);

    let mut game = GameBuilder::new(config).build_timed(ConsoleInput, ConsoleReporter);
    let result = game.start_game().context("game aborted")?;
    log::info!("result: {:?}", result);

    if cli.summary {
        let summary = serde_json::to_string_pretty(&game.game().summary())
            .context("serializing game summary")?;
        println!("{summary}");
    }
    Ok(())
}
