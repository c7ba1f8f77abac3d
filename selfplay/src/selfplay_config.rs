use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::tictactoe::BotType;

pub const MAX_GAMES: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub games: u32,
    pub player_x: BotType,
    pub player_o: BotType,
    /// Fixed seed for the random bot; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Log every move, not just game results.
    pub verbose: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            player_x: BotType::Minimax,
            player_o: BotType::Minimax,
            seed: None,
            verbose: false,
        }
    }
}

impl Validate for SelfPlayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_GAMES {
            return Err(format!("Games must be between 1 and {}", MAX_GAMES));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_is_valid() {
        assert!(SelfPlayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_games_bounds() {
        let mut config = SelfPlayConfig::default();
        config.games = 0;
        assert!(config.validate().is_err());
        config.games = MAX_GAMES + 1;
        assert!(config.validate().is_err());
        config.games = MAX_GAMES;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: SelfPlayConfig = YamlConfigSerializer::new()
            .deserialize("player_o: random\nseed: 9\n")
            .unwrap();
        assert_eq!(config.games, 10);
        assert_eq!(config.player_x, BotType::Minimax);
        assert_eq!(config.player_o, BotType::Random);
        assert_eq!(config.seed, Some(9));
        assert!(!config.verbose);
    }
}
