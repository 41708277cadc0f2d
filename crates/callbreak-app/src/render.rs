use callbreak_core::game::replay::Replay;
use callbreak_core::model::card::Card;
use callbreak_core::model::rank::Rank;
use callbreak_core::model::suit::Suit;
use callbreak_core::model::trick::Trick;
use std::collections::HashSet;

/// One line per trick with the winner starred, then the picker grid with
/// already-played cards crossed out.
pub fn render_view(view: &Replay, used: &HashSet<Card>) -> String {
    let mut out = String::new();
    for (index, trick) in view.completed().iter().enumerate() {
        out.push_str(&trick_line(index + 1, trick, view.trump()));
    }
    if !view.current().plays().is_empty() {
        out.push_str(&trick_line(
            view.completed().len() + 1,
            view.current(),
            view.trump(),
        ));
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&render_grid(used));
    out
}

fn trick_line(number: usize, trick: &Trick, trump: Suit) -> String {
    let winner = trick.winner(trump);
    let mut line = format!("{number:>2}.");
    for play in trick.plays() {
        let marker = if winner == Some(play.seat) { "*" } else { "" };
        line.push_str(&format!("  {} → {}{}", play.seat, play.card, marker));
    }
    line.push('\n');
    line
}

/// Four rows, aces first, matching the table the cards are picked from.
pub fn render_grid(used: &HashSet<Card>) -> String {
    let mut out = String::new();
    for suit in Suit::ALL.iter().copied() {
        for rank in Rank::ORDERED.iter().rev().copied() {
            let card = Card::new(rank, suit);
            if used.contains(&card) {
                out.push_str("   --");
            } else {
                out.push_str(&format!("{:>5}", card.to_string()));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_grid, render_view};
    use callbreak_core::game::session::GameSession;
    use callbreak_core::model::card::Card;
    use std::collections::HashSet;

    fn card(text: &str) -> Card {
        text.parse().expect("valid card")
    }

    #[test]
    fn winner_of_a_resolved_trick_is_starred() {
        let mut session = GameSession::new();
        for token in ["A♥", "K♥", "2♠", "Q♥"] {
            session.play(card(token)).unwrap();
        }

        let text = render_view(&session.replay(), &session.used());
        assert!(text.contains("C → 2♠*"));
        assert!(text.contains("A → A♥"));
        assert!(!text.contains("A → A♥*"));
    }

    #[test]
    fn used_cards_are_crossed_out_in_the_grid() {
        let mut used = HashSet::new();
        used.insert(card("A♠"));

        let grid = render_grid(&used);
        assert!(!grid.contains("A♠"));
        assert!(grid.contains("--"));
        assert!(grid.contains("K♠"));
    }

    #[test]
    fn grid_has_one_row_per_suit() {
        let grid = render_grid(&HashSet::new());
        assert_eq!(grid.lines().count(), 4);
        assert!(grid.contains("10♣"));
    }

    #[test]
    fn empty_view_renders_only_the_grid() {
        let session = GameSession::new();
        let text = render_view(&session.replay(), &session.used());
        assert_eq!(text.lines().count(), 4);
    }
}
