//! French-suited playing cards.

use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

use ansi_term::ANSIString;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::error::DeckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}
impl Suit {
    /// All suits, in alphabetical order.
    pub fn all_suits() -> &'static [Suit] {
        static SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];
        &SUITS
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Diamond | Suit::Heart => Color::Red,
            Suit::Club | Suit::Spade => Color::Black,
        }
    }

    fn to_abbr(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }
}
impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = match self {
            Suit::Club => "♣",
            Suit::Diamond => "♦",
            Suit::Heart => "♥",
            Suit::Spade => "♠",
        };
        f.write_str(sym)
    }
}
impl TryFrom<char> for Suit {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'C' | 'c' | '♣' => Suit::Club,
            'D' | 'd' | '♦' => Suit::Diamond,
            'H' | 'h' | '♥' => Suit::Heart,
            'S' | 's' | '♠' => Suit::Spade,
            _ => return Err(()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}
impl Rank {
    /// All ranks, from ace to king.
    pub fn all_ranks() -> &'static [Rank] {
        static RANKS: [Rank; 13] = [
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ];
        &RANKS
    }

    fn to_abbr(self) -> char {
        match self {
            Rank::Ace => 'a',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 't',
            Rank::Jack => 'j',
            Rank::Queen => 'q',
            Rank::King => 'k',
        }
    }
}
impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = self.to_abbr().to_ascii_uppercase().to_string();
        f.write_str(&sym)
    }
}
impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c.to_ascii_lowercase() {
            'a' => Rank::Ace,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            't' => Rank::Ten,
            'j' => Rank::Jack,
            'q' => Rank::Queen,
            'k' => Rank::King,
            _ => return Err(()),
        })
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    RankSuit(Rank, Suit),
    Joker,
    BigJoker,
}
impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::RankSuit(r, s) => write!(f, "{r}{s}"),
            Card::Joker => write!(f, " 🃟"),
            Card::BigJoker => write!(f, "!🃟"),
        }
    }
}
impl FromStr for Card {
    type Err = DeckError;

    /// Parses a two-letter abbreviation, such as `ah` or `td`. The jokers are `jo` and `bj`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DeckError::InvalidCard(s.to_string());
        match s.to_ascii_lowercase().as_str() {
            "jo" => return Ok(Card::Joker),
            "bj" => return Ok(Card::BigJoker),
            _ => (),
        }
        let mut chars = s.chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = Rank::try_from(r).map_err(|()| invalid())?;
        let suit = Suit::try_from(u).map_err(|()| invalid())?;
        Ok(Card::RankSuit(rank, suit))
    }
}
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_abbr())
    }
}
impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::from_str(&s).map_err(serde::de::Error::custom)
    }
}
impl Card {
    /// Returns the suit, if this isn't a joker.
    pub fn suit(self) -> Option<Suit> {
        match self {
            Card::RankSuit(_, s) => Some(s),
            Card::Joker | Card::BigJoker => None,
        }
    }

    /// Returns the two-letter abbreviation accepted by [`FromStr`].
    pub fn to_abbr(self) -> String {
        match self {
            Card::RankSuit(r, s) => [r.to_abbr(), s.to_abbr()].iter().collect(),
            Card::Joker => "jo".into(),
            Card::BigJoker => "bj".into(),
        }
    }

    /// Returns a string representation of the card, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::Red;
        match self.suit().map(Suit::color) {
            Some(Color::Red) => Red.paint(self.to_string()),
            Some(Color::Black) | None => self.to_string().into(),
        }
    }

    /// The standard 52 cards, grouped by rank.
    pub fn standard() -> impl Iterator<Item = Card> {
        iproduct!(Rank::all_ranks(), Suit::all_suits()).map(|(&r, &s)| Card::RankSuit(r, s))
    }
}

/// A standard 52-card deck, unshuffled.
pub fn standard_deck<R>(rng: R) -> Deck<Card, R> {
    Deck::new(Card::standard(), rng)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use itertools::Itertools;

    use super::*;
    use crate::random::Scripted;

    #[test]
    fn test_parse() {
        assert_eq!(
            "ah".parse::<Card>().unwrap(),
            Card::RankSuit(Rank::Ace, Suit::Heart)
        );
        assert_eq!(
            "TD".parse::<Card>().unwrap(),
            Card::RankSuit(Rank::Ten, Suit::Diamond)
        );
        assert_eq!("jo".parse::<Card>().unwrap(), Card::Joker);
        assert_eq!("BJ".parse::<Card>().unwrap(), Card::BigJoker);
        assert_matches!("1h".parse::<Card>(), Err(DeckError::InvalidCard(s)) if s == "1h");
        assert_matches!("ahh".parse::<Card>(), Err(DeckError::InvalidCard(_)));
        assert_matches!("".parse::<Card>(), Err(DeckError::InvalidCard(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::RankSuit(Rank::Queen, Suit::Spade).to_string(), "Q♠");
        assert_eq!(Card::RankSuit(Rank::Two, Suit::Club).to_abbr(), "2c");
    }

    #[test]
    fn test_serde() {
        let cards = vec![Card::RankSuit(Rank::King, Suit::Heart), Card::BigJoker];
        let json = serde_json::to_string(&cards).unwrap();
        assert_eq!(json, r#"["kh","bj"]"#);

        let mut deck = standard_deck(Scripted::default());
        deck.load_json(&json).unwrap();
        assert_eq!(deck.into_cards(), cards);
    }

    #[test]
    fn test_standard_deck() {
        let deck = standard_deck(Scripted::default());
        assert_eq!(deck.remaining(), 52);
        assert!(deck.iter().all_unique());
        assert_eq!(deck.top().copied(), Some(Card::RankSuit(Rank::Ace, Suit::Club)));
        assert_eq!(deck.bottom().copied(), Some(Card::RankSuit(Rank::King, Suit::Spade)));
    }
}
