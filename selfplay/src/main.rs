mod match_runner;
mod selfplay_config;

use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate};
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::log;
use tictactoe_engine::logger::{self, LogLevel};

use match_runner::run_matches;
use selfplay_config::SelfPlayConfig;

#[derive(Parser)]
#[command(name = "tictactoe_selfplay")]
struct Args {
    #[arg(long, default_value = "selfplay.yaml")]
    config: PathBuf,

    /// Overrides the number of games from the config file.
    #[arg(long)]
    games: Option<u32>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Save the effective config when the config file does not exist yet.
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager: ConfigManager<FileContentConfigProvider, SelfPlayConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix {
        Some("SelfPlay".to_string())
    } else {
        None
    };
    let level = if config.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger::init_logger(prefix, level);

    if args.write_default_config && !config_manager.provider().exists() {
        config_manager.set_config(&config)?;
        log!("Wrote config to {}", args.config.display());
    }

    if let Some(games) = args.games {
        config.games = games;
        config.validate()?;
    }

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Starting {} games: X={:?}, O={:?}, seed={}",
        config.games,
        config.player_x,
        config.player_o,
        rng.seed()
    );

    let summary = run_matches(&config, &mut rng)?;

    log!(
        "Finished {} games: X wins {}, O wins {}, draws {}",
        summary.games(),
        summary.x_wins,
        summary.o_wins,
        summary.draws
    );

    Ok(())
}
