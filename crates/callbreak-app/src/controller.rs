use crate::store::StateStore;
use callbreak_core::game::history::HistoryError;
use callbreak_core::game::replay::Replay;
use callbreak_core::game::session::{GameSession, SessionError};
use callbreak_core::model::card::Card;
use callbreak_core::model::suit::Suit;
use tracing::warn;

/// Owns the live session and its store. Every accepted event is persisted
/// best-effort; a failed save is logged and play continues in memory.
pub struct TrackerController {
    session: GameSession,
    store: StateStore,
}

impl TrackerController {
    pub fn open(store: StateStore) -> Self {
        let session = store.load();
        Self { session, store }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn view(&self) -> Replay {
        self.session.replay()
    }

    pub fn play(&mut self, card: Card) -> Result<Replay, HistoryError> {
        let view = self.session.play(card)?;
        self.persist();
        Ok(view)
    }

    pub fn undo(&mut self) -> Option<Card> {
        let undone = self.session.undo();
        if undone.is_some() {
            self.persist();
        }
        undone
    }

    pub fn reset(&mut self) {
        self.session.reset();
        if let Err(error) = self.store.clear() {
            warn!(%error, "failed to remove state file");
        }
    }

    pub fn set_trump(&mut self, trump: Suit) -> Result<(), SessionError> {
        self.session.set_trump(trump)?;
        self.persist();
        Ok(())
    }

    pub fn status_text(&self) -> String {
        let view = self.view();
        format!(
            "Trick {} • Trump: {} • Leader: {}",
            view.completed().len() + 1,
            self.session.trump(),
            view.next_leader(),
        )
    }

    fn persist(&self) {
        if let Err(error) = self.store.save(&self.session) {
            warn!(%error, "failed to save state file");
        }
    }
}
