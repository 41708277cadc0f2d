use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Trick {
    leader: Seat,
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrickError {
    TrickComplete,
}

impl fmt::Display for TrickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrickError::TrickComplete => write!(f, "trick already has four cards"),
        }
    }
}

impl std::error::Error for TrickError {}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(4),
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|play| play.card.suit)
    }

    /// Seat that acts next, `None` once all four cards are down.
    pub fn expected_seat(&self) -> Option<Seat> {
        if self.is_complete() {
            None
        } else {
            Some(self.leader.advance(self.plays.len()))
        }
    }

    /// Record the next card; the seat is implied by rotation from the leader.
    pub fn push(&mut self, card: Card) -> Result<Seat, TrickError> {
        let seat = self.expected_seat().ok_or(TrickError::TrickComplete)?;
        self.plays.push(Play { seat, card });
        Ok(seat)
    }

    /// Seat holding the strongest card once the trick is complete. Unique
    /// because no card appears twice in a play history.
    pub fn winner(&self, trump: Suit) -> Option<Seat> {
        if !self.is_complete() {
            return None;
        }
        let lead = self.lead_suit()?;
        self.plays
            .iter()
            .max_by_key(|play| play.card.strength(lead, trump))
            .map(|play| play.seat)
    }
}
