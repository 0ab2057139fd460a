//! Who controls each mark: a human or one of the remote AI strategies.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Remote AI strategy, identified by name on the wire (`aiMode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    RuleBased,
    QLearning,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::RuleBased, Strategy::QLearning];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::RuleBased => "rule-based",
            Strategy::QLearning => "q-learning",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controller of a mark.
///
/// Serialized with the short names the UI and services share (`me`,
/// `rule-based`, `q-learning`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PlayerType {
    #[default]
    Human,
    Ai(Strategy),
}

impl PlayerType {
    pub fn is_human(self) -> bool {
        matches!(self, PlayerType::Human)
    }

    /// The strategy to request moves from, if AI-controlled
    pub fn strategy(self) -> Option<Strategy> {
        match self {
            PlayerType::Human => None,
            PlayerType::Ai(strategy) => Some(strategy),
        }
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerType::Human => f.write_str("me"),
            PlayerType::Ai(strategy) => write!(f, "{strategy}"),
        }
    }
}

impl FromStr for PlayerType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "me" | "human" => Ok(PlayerType::Human),
            "rule-based" | "rule_based" | "rules" => Ok(PlayerType::Ai(Strategy::RuleBased)),
            "q-learning" | "q_learning" | "q" => Ok(PlayerType::Ai(Strategy::QLearning)),
            _ => Err(crate::Error::ParsePlayerType {
                input: s.to_string(),
                expected: "me/human, rule-based, q-learning".to_string(),
            }),
        }
    }
}

impl From<PlayerType> for String {
    fn from(value: PlayerType) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for PlayerType {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
