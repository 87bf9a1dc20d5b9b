//! Match runner for playing games between engines

use game_core::{legal_moves, Color, Engine, Position};
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for the negamax side(s)
    pub depth: u8,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Toss a coin for who takes white in the first game
    pub shuffle_start: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 2,
            max_plies: 300,
            alternate_colors: true,
            shuffle_start: false,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Read match settings from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so a config file only
    /// needs the settings it wants to change.
    pub fn from_toml_file(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();
        let mut engine1_white = !self.config.shuffle_start || thread_rng().gen_bool(0.5);

        for game_num in 0..self.config.num_games {
            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is black
                match self.play_game(engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }

            if self.config.alternate_colors {
                engine1_white = !engine1_white;
            }
        }

        result
    }

    /// Play a single game, returns the result from white's perspective
    fn play_game<'a>(&self, white: &'a mut dyn Engine, black: &'a mut dyn Engine) -> GameResult {
        let mut pos = Position::new();

        for _ply in 0..self.config.max_plies {
            let legal = legal_moves(&mut pos);
            if legal.is_empty() {
                return if pos.checkmate {
                    // The side to move is the side that got mated
                    if pos.side_to_move == Color::White {
                        GameResult::Loss
                    } else {
                        GameResult::Win
                    }
                } else {
                    GameResult::Draw
                };
            }

            let mover = if pos.side_to_move == Color::White {
                &mut *white
            } else {
                &mut *black
            };

            // An engine may decline to move; fall back to a random choice
            // so the game always advances while moves remain.
            let chosen = mover
                .choose_move(&mut pos, &legal)
                .or_else(|| random_engine::random_move(&legal));

            match chosen {
                Some(mv) => pos.make_move(mv),
                None => return GameResult::Draw,
            }
        }

        // Ply cap reached
        GameResult::Draw
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use negamax_engine::NegamaxEngine;
    use random_engine::RandomEngine;

    #[test]
    fn test_self_play() {
        let mut engine1 = RandomEngine::new();
        let mut engine2 = RandomEngine::new();

        let config = MatchConfig {
            num_games: 2,
            max_plies: 80,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut engine1, &mut engine2);

        // Self-play should complete without panic
        assert_eq!(result.total_games(), 2);
    }

    #[test]
    fn test_shallow_search_against_random() {
        let mut engine1 = NegamaxEngine::with_depth(1);
        let mut engine2 = RandomEngine::new();

        let result = quick_match(&mut engine1, &mut engine2, 1, 1);
        assert_eq!(result.total_games(), 1);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: MatchConfig = toml::from_str("num_games = 4\ndepth = 3\n").unwrap();
        assert_eq!(config.num_games, 4);
        assert_eq!(config.depth, 3);
        assert_eq!(config.max_plies, MatchConfig::default().max_plies);
        assert!(config.alternate_colors);
    }
}
