//! Configuration for sessions, AI endpoints and auto-play.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    adapters::Endpoints,
    session::{ClearPolicy, ClearTiming},
    types::Strategy,
};

/// Settings for one game type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// AI service URL per strategy
    pub endpoints: Endpoints,
    /// When a resolved board is emptied
    pub clear_policy: ClearPolicy,
    /// Delay between auto-play ticks
    pub autoplay_interval_ms: u64,
}

impl GameConfig {
    /// Tic-tac-toe defaults: local services on 5000/5001, immediate clears, 50 ms ticks
    pub fn tictactoe() -> Self {
        Self {
            endpoints: Endpoints::tictactoe_default(),
            clear_policy: ClearPolicy::IMMEDIATE,
            autoplay_interval_ms: 50,
        }
    }

    /// Connect-four defaults: local services on 4000/4001, wins held on display, 1.5 s ticks
    pub fn connect4() -> Self {
        Self {
            endpoints: Endpoints::connect4_default(),
            clear_policy: ClearPolicy::HOLD_WINS,
            autoplay_interval_ms: 1500,
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_clear_policy(mut self, policy: ClearPolicy) -> Self {
        self.clear_policy = policy;
        self
    }

    pub fn with_autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    fn validate(&self, game: &str) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(invalid(format!("{game}.autoplay_interval_ms must be positive")));
        }
        for strategy in Strategy::ALL {
            let url = self.endpoints.url_for(strategy);
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid(format!(
                    "{game} {strategy} endpoint '{url}' is not an http(s) URL"
                )));
            }
        }
        Ok(())
    }
}

/// Top-level configuration for both games.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use arcade::app::{ArcadeConfig, GameConfig};
///
/// let config = ArcadeConfig::default()
///     .with_request_timeout(Duration::from_secs(2))
///     .with_connect4(GameConfig::connect4().with_autoplay_interval(Duration::from_millis(200)));
/// config.validate()?;
/// # Ok::<(), arcade::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcadeConfig {
    pub tictactoe: GameConfig,
    pub connect4: GameConfig,
    /// Per-request timeout for the AI services
    pub request_timeout_ms: u64,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            tictactoe: GameConfig::tictactoe(),
            connect4: GameConfig::connect4(),
            request_timeout_ms: 5000,
        }
    }
}

impl ArcadeConfig {
    /// Load a JSON config file; keys left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse JSON overrides on top of the defaults and validate the result
    pub fn from_json(text: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(text)?;
        let mut config = Self::default();
        file.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Write the full configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| Error::Io {
            operation: format!("write config {}", path.display()),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_ms == 0 {
            return Err(invalid("request_timeout_ms must be positive".to_string()));
        }
        self.tictactoe.validate("tictactoe")?;
        self.connect4.validate("connect4")
    }

    pub fn with_tictactoe(mut self, game: GameConfig) -> Self {
        self.tictactoe = game;
        self
    }

    pub fn with_connect4(mut self, game: GameConfig) -> Self {
        self.connect4 = game;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfiguration { message }
}

// On-disk shape: every key optional so a file only has to name what it changes.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    tictactoe: GameOverrides,
    connect4: GameOverrides,
    request_timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GameOverrides {
    endpoints: EndpointOverrides,
    clear_policy: PolicyOverrides,
    autoplay_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct EndpointOverrides {
    rule_based: Option<String>,
    q_learning: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PolicyOverrides {
    on_win: Option<ClearTiming>,
    on_draw: Option<ClearTiming>,
}

impl ConfigFile {
    fn apply(self, config: &mut ArcadeConfig) {
        self.tictactoe.apply(&mut config.tictactoe);
        self.connect4.apply(&mut config.connect4);
        if let Some(ms) = self.request_timeout_ms {
            config.request_timeout_ms = ms;
        }
    }
}

impl GameOverrides {
    fn apply(self, game: &mut GameConfig) {
        if let Some(url) = self.endpoints.rule_based {
            game.endpoints.rule_based = url;
        }
        if let Some(url) = self.endpoints.q_learning {
            game.endpoints.q_learning = url;
        }
        if let Some(timing) = self.clear_policy.on_win {
            game.clear_policy.on_win = timing;
        }
        if let Some(timing) = self.clear_policy.on_draw {
            game.clear_policy.on_draw = timing;
        }
        if let Some(ms) = self.autoplay_interval_ms {
            game.autoplay_interval_ms = ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_service_layout() {
        let config = ArcadeConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.tictactoe.autoplay_interval(), Duration::from_millis(50));
        assert_eq!(config.connect4.autoplay_interval(), Duration::from_millis(1500));
        assert_eq!(config.tictactoe.clear_policy, ClearPolicy::IMMEDIATE);
        assert_eq!(config.connect4.clear_policy, ClearPolicy::HOLD_WINS);
        config.validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = ArcadeConfig::from_json(
            r#"{
                "connect4": {
                    "endpoints": { "q_learning": "http://ai-box:9001/ai-move" },
                    "clear_policy": { "on_win": "immediate", "on_draw": "immediate" }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.connect4.endpoints.q_learning, "http://ai-box:9001/ai-move");
        assert_eq!(config.connect4.endpoints.rule_based, "http://localhost:4000/ai-move");
        assert_eq!(config.connect4.clear_policy.on_win, ClearTiming::Immediate);
        assert_eq!(config.tictactoe, GameConfig::tictactoe());
    }

    #[test]
    fn clear_policy_fields_override_one_at_a_time() {
        let config =
            ArcadeConfig::from_json(r#"{"connect4": {"clear_policy": {"on_win": "immediate"}}}"#)
                .unwrap();
        assert_eq!(config.connect4.clear_policy, ClearPolicy::IMMEDIATE);

        let config =
            ArcadeConfig::from_json(r#"{"tictactoe": {"clear_policy": {"on_draw": "deferred"}}}"#)
                .unwrap();
        assert_eq!(config.tictactoe.clear_policy.on_win, ClearTiming::Immediate);
        assert_eq!(config.tictactoe.clear_policy.on_draw, ClearTiming::Deferred);
        assert_eq!(config.connect4.clear_policy, ClearPolicy::HOLD_WINS);
    }

    #[test]
    fn rejects_zero_values_and_bad_urls() {
        let err = ArcadeConfig::from_json(r#"{"request_timeout_ms": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));

        let err = ArcadeConfig::from_json(r#"{"tictactoe": {"autoplay_interval_ms": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("tictactoe.autoplay_interval_ms"));

        let err = ArcadeConfig::from_json(r#"{"tictactoe": {"endpoints": {"rule_based": "ftp://x"}}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ArcadeConfig::from_json(r#"{"checkers": {}}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
