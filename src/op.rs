//! Deck operations, as given on the command line.

use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

use itertools::Itertools;

use deckhand::french::{Card, Suit};
use deckhand::{DeckError, LoggingDeck, RandomSource};

/// A single step of the pipeline. Operations without a count act on one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Shuffle,
    Remaining,
    Top(Option<usize>),
    Bottom(Option<usize>),
    Random(Option<usize>),
    Draw(Option<usize>),
    DrawBottom(Option<usize>),
    DrawRandom(Option<usize>),
    DrawSuit(Suit, Option<usize>),
    DiscardTop(Vec<Card>),
    DiscardBottom(Vec<Card>),
    ShuffleTop(Vec<Card>),
    ShuffleBottom(Vec<Card>),
    DiscardRandom(Vec<Card>),
}

/// The result of applying an [`Op`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Count(usize),
    Card(Option<Card>),
    Cards(Vec<Card>),
}
impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Done => f.write_str("ok"),
            Outcome::Count(n) => write!(f, "{n}"),
            Outcome::Card(None) => f.write_str("-"),
            Outcome::Card(Some(card)) => write!(f, "{}", card.to_ansi_string()),
            Outcome::Cards(cards) => {
                write!(f, "[{}]", cards.iter().map(|c| c.to_ansi_string()).join(" "))
            }
        }
    }
}

fn parse_count(op: &str, arg: Option<&str>) -> Result<Option<usize>, DeckError> {
    arg.map(|n| n.parse().map_err(|_| DeckError::InvalidOp(op.to_string())))
        .transpose()
}

fn parse_cards(op: &str, arg: Option<&str>) -> Result<Vec<Card>, DeckError> {
    let arg = arg
        .filter(|a| !a.is_empty())
        .ok_or_else(|| DeckError::InvalidOp(op.to_string()))?;
    arg.split(',').map(|c| c.trim().parse()).collect()
}

impl FromStr for Op {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DeckError::InvalidOp(s.to_string());
        let mut parts = s.split(':');
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        let op = match name {
            "shuffle" if arg.is_none() => Op::Shuffle,
            "remaining" if arg.is_none() => Op::Remaining,
            "top" => Op::Top(parse_count(s, arg)?),
            "bottom" => Op::Bottom(parse_count(s, arg)?),
            "random" => Op::Random(parse_count(s, arg)?),
            "draw" => Op::Draw(parse_count(s, arg)?),
            "draw-bottom" => Op::DrawBottom(parse_count(s, arg)?),
            "draw-random" => Op::DrawRandom(parse_count(s, arg)?),
            "draw-suit" => {
                let mut chars = arg.unwrap_or_default().chars();
                let suit = match (chars.next(), chars.next()) {
                    (Some(c), None) => Suit::try_from(c).map_err(|()| invalid())?,
                    _ => return Err(invalid()),
                };
                Op::DrawSuit(suit, parse_count(s, parts.next())?)
            }
            "discard-top" => Op::DiscardTop(parse_cards(s, arg)?),
            "discard-bottom" => Op::DiscardBottom(parse_cards(s, arg)?),
            "shuffle-top" => Op::ShuffleTop(parse_cards(s, arg)?),
            "shuffle-bottom" => Op::ShuffleBottom(parse_cards(s, arg)?),
            "discard-random" => Op::DiscardRandom(parse_cards(s, arg)?),
            _ => return Err(invalid()),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(op)
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = |name: &str, n: &Option<usize>| match n {
            Some(n) => format!("{name}:{n}"),
            None => name.to_string(),
        };
        let cards = |name: &str, cards: &[Card]| {
            format!("{name}:{}", cards.iter().map(|c| c.to_abbr()).join(","))
        };
        let s = match self {
            Op::Shuffle => "shuffle".to_string(),
            Op::Remaining => "remaining".to_string(),
            Op::Top(n) => count("top", n),
            Op::Bottom(n) => count("bottom", n),
            Op::Random(n) => count("random", n),
            Op::Draw(n) => count("draw", n),
            Op::DrawBottom(n) => count("draw-bottom", n),
            Op::DrawRandom(n) => count("draw-random", n),
            Op::DrawSuit(suit, n) => count(&format!("draw-suit:{suit}"), n),
            Op::DiscardTop(cs) => cards("discard-top", cs),
            Op::DiscardBottom(cs) => cards("discard-bottom", cs),
            Op::ShuffleTop(cs) => cards("shuffle-top", cs),
            Op::ShuffleBottom(cs) => cards("shuffle-bottom", cs),
            Op::DiscardRandom(cs) => cards("discard-random", cs),
        };
        f.write_str(&s)
    }
}

impl Op {
    /// Applies the operation to the deck.
    pub fn apply<R: RandomSource>(&self, deck: &mut LoggingDeck<Card, R>) -> Outcome {
        let copied = |cards: Vec<&Card>| Outcome::Cards(cards.into_iter().copied().collect());
        match self {
            Op::Shuffle => {
                deck.shuffle();
                Outcome::Done
            }
            Op::Remaining => Outcome::Count(deck.remaining()),
            Op::Top(None) => Outcome::Card(deck.top().copied()),
            Op::Top(Some(n)) => copied(deck.top_n(*n)),
            Op::Bottom(None) => Outcome::Card(deck.bottom().copied()),
            Op::Bottom(Some(n)) => copied(deck.bottom_n(*n)),
            Op::Random(None) => Outcome::Card(deck.random().copied()),
            Op::Random(Some(n)) => copied(deck.random_n(*n)),
            Op::Draw(None) => Outcome::Card(deck.draw()),
            Op::Draw(Some(n)) => Outcome::Cards(deck.draw_n(*n)),
            Op::DrawBottom(None) => Outcome::Card(deck.draw_from_bottom()),
            Op::DrawBottom(Some(n)) => Outcome::Cards(deck.draw_n_from_bottom(*n)),
            Op::DrawRandom(None) => Outcome::Card(deck.draw_random()),
            Op::DrawRandom(Some(n)) => Outcome::Cards(deck.draw_n_random(*n)),
            Op::DrawSuit(suit, None) => {
                Outcome::Card(deck.draw_where(|c| c.suit() == Some(*suit)))
            }
            Op::DrawSuit(suit, Some(n)) => {
                Outcome::Cards(deck.draw_n_where(|c| c.suit() == Some(*suit), *n))
            }
            Op::DiscardTop(cards) => {
                match cards.as_slice() {
                    [card] => deck.discard_to_top(*card),
                    _ => deck.discard_all_to_top(cards.iter().copied()),
                };
                Outcome::Done
            }
            Op::DiscardBottom(cards) => {
                match cards.as_slice() {
                    [card] => deck.discard_to_bottom(*card),
                    _ => deck.discard_all_to_bottom(cards.iter().copied()),
                };
                Outcome::Done
            }
            Op::ShuffleTop(cards) => {
                match cards.as_slice() {
                    [card] => deck.shuffle_to_top(*card),
                    _ => deck.shuffle_all_to_top(cards.iter().copied()),
                };
                Outcome::Done
            }
            Op::ShuffleBottom(cards) => {
                match cards.as_slice() {
                    [card] => deck.shuffle_to_bottom(*card),
                    _ => deck.shuffle_all_to_bottom(cards.iter().copied()),
                };
                Outcome::Done
            }
            Op::DiscardRandom(cards) => {
                match cards.as_slice() {
                    [card] => deck.discard_random(*card),
                    _ => deck.discard_all_random(cards.iter().copied()),
                };
                Outcome::Done
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use deckhand::french::{self, Rank};
    use deckhand::Scripted;

    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!("shuffle".parse::<Op>().unwrap(), Op::Shuffle);
        assert_eq!("draw".parse::<Op>().unwrap(), Op::Draw(None));
        assert_eq!("draw:3".parse::<Op>().unwrap(), Op::Draw(Some(3)));
        assert_eq!(
            "draw-suit:h:2".parse::<Op>().unwrap(),
            Op::DrawSuit(Suit::Heart, Some(2))
        );
        assert_eq!(
            "discard-top:ah,td".parse::<Op>().unwrap(),
            Op::DiscardTop(vec![card("ah"), card("td")])
        );
        assert_matches!("draw:x".parse::<Op>(), Err(DeckError::InvalidOp(_)));
        assert_matches!("draw:1:2".parse::<Op>(), Err(DeckError::InvalidOp(_)));
        assert_matches!("shuffle:1".parse::<Op>(), Err(DeckError::InvalidOp(_)));
        assert_matches!("draw-suit:x".parse::<Op>(), Err(DeckError::InvalidOp(_)));
        assert_matches!("discard-top".parse::<Op>(), Err(DeckError::InvalidOp(_)));
        assert_matches!("discard-top:zz".parse::<Op>(), Err(DeckError::InvalidCard(_)));
        assert_matches!("deal".parse::<Op>(), Err(DeckError::InvalidOp(_)));
    }

    #[test]
    fn test_display() {
        for s in ["shuffle", "top:2", "draw-suit:♥:2", "discard-random:ah,2c"] {
            assert_eq!(s.parse::<Op>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_apply() {
        let mut deck = LoggingDeck::from(french::standard_deck(Scripted::default()));
        let ace = |suit| Card::RankSuit(Rank::Ace, suit);

        assert_eq!(Op::Draw(None).apply(&mut deck), Outcome::Card(Some(ace(Suit::Club))));
        assert_eq!(
            Op::DrawSuit(Suit::Spade, None).apply(&mut deck),
            Outcome::Card(Some(ace(Suit::Spade)))
        );
        assert_eq!(
            Op::Top(Some(2)).apply(&mut deck),
            Outcome::Cards(vec![ace(Suit::Diamond), ace(Suit::Heart)])
        );
        assert_eq!(Op::DiscardTop(vec![card("jo")]).apply(&mut deck), Outcome::Done);
        assert_eq!(Op::Top(None).apply(&mut deck), Outcome::Card(Some(Card::Joker)));
        assert_eq!(Op::Remaining.apply(&mut deck), Outcome::Count(51));
        assert_eq!(deck.log().len(), 3);
    }
}
