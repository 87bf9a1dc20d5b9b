//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::match_runner::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete results for an arena series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaResults {
    /// Name/description of the series
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// All match results
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: MatchConfig,
}

/// A single match entry in the series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

impl ArenaResults {
    pub fn new(name: &str, participants: Vec<String>, config: MatchConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Arena: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, depth {}, ply cap {}\n\n",
            self.config.num_games, self.config.depth, self.config.max_plies
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
            "Engine 1", "Engine 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_percentage() {
        let result = MatchResult {
            wins: 7,
            losses: 1,
            draws: 2,
        };
        assert_eq!(result.total_games(), 10);
        assert!((result.score() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_empty_match_scores_half() {
        assert!((MatchResult::new().score() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_report_lists_matches() {
        let mut results = ArenaResults::new(
            "smoke",
            vec!["negamax".to_string(), "random".to_string()],
            MatchConfig::default(),
        );
        results.add_match(
            "negamax",
            "random",
            MatchResult {
                wins: 7,
                losses: 1,
                draws: 2,
            },
        );

        let report = results.generate_report();
        assert!(report.contains("negamax"));
        assert!(report.contains("random"));
        assert!(report.contains("7"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut results = ArenaResults::new(
            "round-trip",
            vec!["a".to_string(), "b".to_string()],
            MatchConfig::default(),
        );
        results.add_match(
            "a",
            "b",
            MatchResult {
                wins: 3,
                losses: 4,
                draws: 3,
            },
        );

        let json = serde_json::to_string(&results).unwrap();
        let back: ArenaResults = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "round-trip");
        assert_eq!(back.matches.len(), 1);
        assert_eq!(back.matches[0].result.wins, 3);
        assert_eq!(back.config.num_games, results.config.num_games);
    }
}
