use crate::game::history::PlayHistory;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use crate::model::trick::Trick;
use std::mem;

/// Derived projection of a play history: the completed tricks in order plus
/// the trick in progress. Never stored; rebuilt from the history on every
/// read so that undo and reload need no bookkeeping of their own.
#[derive(Debug, Clone)]
pub struct Replay {
    completed: Vec<Trick>,
    current: Trick,
    trump: Suit,
}

/// Partition the history into consecutive tricks of four. Each completed
/// trick's winner leads the next; a trailing chunk of fewer than four cards
/// is the trick in progress.
pub fn replay(history: &PlayHistory, trump: Suit, opening_leader: Seat) -> Replay {
    let mut completed = Vec::with_capacity(history.len() / 4);
    let mut current = Trick::new(opening_leader);

    for &card in history.iter() {
        current
            .push(card)
            .expect("current trick is rotated out before it can overflow");
        if current.is_complete() {
            let winner = current.winner(trump).expect("complete trick has a winner");
            completed.push(mem::replace(&mut current, Trick::new(winner)));
        }
    }

    Replay {
        completed,
        current,
        trump,
    }
}

impl Replay {
    pub fn completed(&self) -> &[Trick] {
        &self.completed
    }

    pub fn current(&self) -> &Trick {
        &self.current
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    /// Leader of the trick in progress: the opening leader while the history
    /// is empty, afterwards the winner of the last completed trick.
    pub fn next_leader(&self) -> Seat {
        self.current.leader()
    }

    pub fn next_to_act(&self) -> Seat {
        self.current
            .expected_seat()
            .expect("trick in progress always has an open slot")
    }

    pub fn winners(&self) -> impl Iterator<Item = Seat> + '_ {
        self.completed
            .iter()
            .filter_map(|trick| trick.winner(self.trump))
    }

    pub fn tricks_won(&self) -> [u8; 4] {
        let mut counts = [0u8; 4];
        for winner in self.winners() {
            let idx = winner.index();
            counts[idx] = counts[idx].saturating_add(1);
        }
        counts
    }
}
