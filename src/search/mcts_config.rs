//! MCTS configuration parameters.

use serde::Deserialize;

use crate::search::mcts::SearchError;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Iterations (select, expand, rollout, backpropagate) per search.
    pub num_simulations: u32,

    /// UCB1 exploration constant C. Larger values favour less-visited children.
    pub exploration_constant: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: 200,
            exploration_constant: std::f64::consts::SQRT_2,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_simulations: 32,
            ..Self::default()
        }
    }

    /// Builder pattern: set number of simulations.
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.num_simulations = n;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration_constant(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.num_simulations == 0 {
            return Err(SearchError::InvalidConfig(
                "num_simulations must be positive".to_owned(),
            ));
        }
        if !(self.exploration_constant.is_finite() && self.exploration_constant > 0.0) {
            return Err(SearchError::InvalidConfig(format!(
                "exploration_constant must be a positive real, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.num_simulations, 200);
        assert!((config.exploration_constant - 1.414).abs() < 1e-3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_simulations(10)
            .with_exploration_constant(0.5);
        assert_eq!(config.num_simulations, 10);
        assert!((config.exploration_constant - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_simulations_are_rejected() {
        let config = MctsConfig::default().with_simulations(0);
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn non_positive_exploration_is_rejected() {
        for c in [0.0, -1.0, f64::NAN] {
            let config = MctsConfig::default().with_exploration_constant(c);
            assert!(config.validate().is_err(), "c = {c}");
        }
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: MctsConfig = toml::from_str("num_simulations = 5").expect("valid toml");
        assert_eq!(config.num_simulations, 5);
        assert_eq!(
            config.exploration_constant,
            MctsConfig::default().exploration_constant
        );
    }
}
