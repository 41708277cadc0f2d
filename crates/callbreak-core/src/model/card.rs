use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedCard {
    token: String,
}

impl MalformedCard {
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for MalformedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized card token '{}'", self.token)
    }
}

impl std::error::Error for MalformedCard {}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump
    }

    /// Three-tier trick score: trump beats lead suit beats off-suit; rank
    /// only breaks ties within a tier.
    pub fn strength(self, lead: Suit, trump: Suit) -> u8 {
        if self.suit == trump {
            100 + self.rank.power()
        } else if self.suit == lead {
            50 + self.rank.power()
        } else {
            self.rank.power()
        }
    }

    /// All 52 cards, suits in display order, aces first within a suit.
    pub fn deck() -> impl Iterator<Item = Card> {
        Suit::ALL.iter().copied().flat_map(|suit| {
            Rank::ORDERED
                .iter()
                .rev()
                .copied()
                .map(move |rank| Card::new(rank, suit))
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = MalformedCard;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedCard {
            token: text.to_string(),
        };
        let suit_char = text.chars().next_back().ok_or_else(malformed)?;
        let suit = Suit::from_char(suit_char).ok_or_else(malformed)?;
        let rank_text = &text[..text.len() - suit_char.len_utf8()];
        let rank = Rank::from_symbol(rank_text).ok_or_else(malformed)?;
        Ok(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Rank, Suit};

    #[test]
    fn parses_pip_tokens() {
        assert_eq!("A♠".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("10♦".parse(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
    }

    #[test]
    fn parses_letter_suits() {
        assert_eq!("QH".parse(), Ok(Card::new(Rank::Queen, Suit::Hearts)));
        assert_eq!("2c".parse(), Ok(Card::new(Rank::Two, Suit::Clubs)));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["", "A", "1♠", "A♠♠", "X♥", "10"] {
            let result: Result<Card, _> = token.parse();
            let error = result.expect_err("token should not parse");
            assert_eq!(error.token(), token);
        }
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for card in Card::deck() {
            assert_eq!(card.to_string().parse(), Ok(card));
        }
    }

    #[test]
    fn strength_tiers_never_overlap() {
        let trump_low = Card::new(Rank::Two, Suit::Spades);
        let lead_high = Card::new(Rank::Ace, Suit::Hearts);
        let off_high = Card::new(Rank::Ace, Suit::Diamonds);

        let lead = Suit::Hearts;
        let trump = Suit::Spades;
        assert!(trump_low.strength(lead, trump) > lead_high.strength(lead, trump));
        assert!(lead_high.strength(lead, trump) > off_high.strength(lead, trump));
    }

    #[test]
    fn deck_has_52_unique_cards() {
        let cards: Vec<Card> = Card::deck().collect();
        assert_eq!(cards.len(), 52);
        for (i, card) in cards.iter().enumerate() {
            assert!(!cards[..i].contains(card));
        }
    }
}
