//! Client configuration management.
//!
//! Command-line values win over environment variables, which win over
//! the built-in defaults.

use odds_evens::{Balls, GameSettings};

/// Environment variable for the starting stack.
pub const BALLS_VAR: &str = "ODDS_EVENS_BALLS";
/// Environment variable that turns off concealed number entry.
pub const NO_CONCEAL_VAR: &str = "ODDS_EVENS_NO_CONCEAL";

/// Largest starting stack; both stacks together must fit in a ball count.
pub const MAX_STARTING_BALLS: Balls = Balls::MAX / 2;

/// Complete client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Rule settings handed to the game
    pub settings: GameSettings,
    /// Hide typed numbers when reading from a terminal
    pub conceal: bool,
}

impl ClientConfig {
    /// Load configuration from the command line and environment
    ///
    /// # Arguments
    ///
    /// * `balls_override` - Starting stack from `--balls`
    /// * `no_conceal` - Whether `--no-conceal` was given
    pub fn from_env(balls_override: Option<Balls>, no_conceal: bool) -> Self {
        let starting_balls = balls_override
            .unwrap_or_else(|| parse_env_or(BALLS_VAR, odds_evens::DEFAULT_STARTING_BALLS));
        let no_conceal = no_conceal || parse_env_or(NO_CONCEAL_VAR, false);

        Self {
            settings: GameSettings::new(starting_balls),
            conceal: !no_conceal,
        }
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        let balls = self.settings.starting_balls;
        if balls == 0 {
            return Err(ConfigError::Invalid {
                var: BALLS_VAR.to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if balls > MAX_STARTING_BALLS {
            return Err(ConfigError::Invalid {
                var: BALLS_VAR.to_string(),
                reason: format!("Must be at most {MAX_STARTING_BALLS}"),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let config = ClientConfig::from_env(Some(25), true);
        assert_eq!(config.settings.starting_balls, 25);
        assert!(!config.conceal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_balls() {
        let config = ClientConfig {
            settings: GameSettings::new(0),
            conceal: true,
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains(BALLS_VAR));
    }

    #[test]
    fn test_config_validation_too_many_balls() {
        let config = ClientConfig {
            settings: GameSettings::new(MAX_STARTING_BALLS + 1),
            conceal: false,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_default_stack() {
        let config = ClientConfig {
            settings: GameSettings::default(),
            conceal: true,
        };

        assert!(config.validate().is_ok());
    }
}
