use crate::game::history::PlayHistory;
use crate::game::session::GameSession;
use crate::model::card::Card;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted form of a session: card tokens in play order plus the trump
/// pip. Older records without a trump field load with the default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub plays: Vec<String>,
    #[serde(default = "default_trump_token")]
    pub trump: String,
}

fn default_trump_token() -> String {
    Suit::Spades.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    MalformedCard(String),
    DuplicateCard(String),
    UnknownTrump(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::MalformedCard(token) => {
                write!(f, "unrecognized card token '{token}'")
            }
            SnapshotError::DuplicateCard(token) => {
                write!(f, "card '{token}' appears twice")
            }
            SnapshotError::UnknownTrump(token) => {
                write!(f, "unrecognized trump suit '{token}'")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

impl SessionSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        SessionSnapshot {
            plays: session.history().iter().map(|card| card.to_string()).collect(),
            trump: session.trump().to_string(),
        }
    }

    pub fn restore(self) -> Result<GameSession, SnapshotError> {
        let trump = Suit::from_token(&self.trump)
            .ok_or_else(|| SnapshotError::UnknownTrump(self.trump.clone()))?;

        let mut history = PlayHistory::new();
        for token in &self.plays {
            let card: Card = token
                .parse()
                .map_err(|_| SnapshotError::MalformedCard(token.clone()))?;
            history
                .append(card)
                .map_err(|_| SnapshotError::DuplicateCard(token.clone()))?;
        }

        Ok(GameSession::from_history(history, trump))
    }

    pub fn to_json(session: &GameSession) -> serde_json::Result<String> {
        let snapshot = Self::capture(session);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
