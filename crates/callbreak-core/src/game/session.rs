use crate::game::history::{HistoryError, PlayHistory};
use crate::game::replay::{Replay, replay};
use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_TRUMP: Suit = Suit::Spades;

/// Explicit session state the host threads through its event handlers. Only
/// the history and the trump live here; tricks, winners, and the leader
/// rotation are derived on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: PlayHistory,
    trump: Suit,
    opening_leader: Seat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    TrumpLocked,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::TrumpLocked => {
                write!(f, "trump cannot change after the first card is played")
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl GameSession {
    pub fn new() -> Self {
        Self::with_trump(DEFAULT_TRUMP)
    }

    pub fn with_trump(trump: Suit) -> Self {
        Self::from_history(PlayHistory::new(), trump)
    }

    pub fn from_history(history: PlayHistory, trump: Suit) -> Self {
        Self {
            history,
            trump,
            opening_leader: Seat::FIRST,
        }
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn opening_leader(&self) -> Seat {
        self.opening_leader
    }

    pub fn history(&self) -> &PlayHistory {
        &self.history
    }

    /// Record a play and return the refreshed view of the game.
    pub fn play(&mut self, card: Card) -> Result<Replay, HistoryError> {
        self.history.append(card)?;
        Ok(self.replay())
    }

    pub fn undo(&mut self) -> Option<Card> {
        self.history.undo_last()
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Trump is fixed for the whole game once the first card is recorded;
    /// changing it later would rewrite already-resolved tricks.
    pub fn set_trump(&mut self, trump: Suit) -> Result<(), SessionError> {
        if !self.history.is_empty() {
            return Err(SessionError::TrumpLocked);
        }
        self.trump = trump;
        Ok(())
    }

    pub fn replay(&self) -> Replay {
        replay(&self.history, self.trump, self.opening_leader)
    }

    pub fn used(&self) -> HashSet<Card> {
        self.history.used()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameSession, SessionError};
    use crate::game::history::HistoryError;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::seat::Seat;
    use crate::model::suit::Suit;

    #[test]
    fn play_returns_the_refreshed_view() {
        let mut session = GameSession::new();
        let card = Card::new(Rank::Ace, Suit::Hearts);
        let view = session.play(card).unwrap();
        assert_eq!(view.current().plays()[0].card, card);
        assert!(session.used().contains(&card));
    }

    #[test]
    fn duplicate_play_leaves_the_session_untouched() {
        let mut session = GameSession::new();
        let card = Card::new(Rank::Ace, Suit::Hearts);
        session.play(card).unwrap();
        let before = session.clone();

        assert_eq!(
            session.play(card).unwrap_err(),
            HistoryError::DuplicateCard(card)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn undo_rolls_back_the_derived_leader() {
        let mut session = GameSession::new();
        for card in [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
        ] {
            session.play(card).unwrap();
        }
        assert_eq!(session.replay().next_leader(), Seat::C);

        assert_eq!(session.undo(), Some(Card::new(Rank::Queen, Suit::Hearts)));
        let view = session.replay();
        assert!(view.completed().is_empty());
        assert_eq!(view.next_leader(), Seat::A);
        assert_eq!(view.current().plays().len(), 3);
    }

    #[test]
    fn trump_locks_after_the_first_play() {
        let mut session = GameSession::new();
        session.set_trump(Suit::Hearts).unwrap();
        assert_eq!(session.trump(), Suit::Hearts);

        session.play(Card::new(Rank::Ace, Suit::Clubs)).unwrap();
        assert_eq!(
            session.set_trump(Suit::Diamonds),
            Err(SessionError::TrumpLocked)
        );
        assert_eq!(session.trump(), Suit::Hearts);
    }

    #[test]
    fn reset_unlocks_trump_and_clears_everything() {
        let mut session = GameSession::new();
        session.play(Card::new(Rank::Ace, Suit::Clubs)).unwrap();
        session.reset();

        assert!(session.history().is_empty());
        assert!(session.used().is_empty());
        assert!(session.replay().completed().is_empty());
        session.set_trump(Suit::Diamonds).unwrap();
    }
}
