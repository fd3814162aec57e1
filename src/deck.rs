//! A deck of cards.
//!
//! The deck is an ordered pile. Position zero is the top and the last position is the bottom.
//! Cards are opaque: the deck never looks at them, except through predicates supplied by the
//! caller.
//!
//! Operations that take a count clamp it to the number of cards remaining, so asking for too many
//! cards yields whatever is left. Single-card operations return `None` when the deck is empty.

use std::collections::vec_deque::{self, VecDeque};
use std::convert::Infallible;
use std::iter::FromIterator;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DeckError;
use crate::random::{self, RandomSource, RngSource};


/// A deck of cards, drawing on `R` for randomness.
#[derive(Debug, Clone)]
pub struct Deck<C, R = RngSource> {
    cards: VecDeque<C>,
    rng: R,
}

/// A serializable snapshot of a deck, listed from top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDeck<C> {
    pub cards: Vec<C>,
}
impl<'a, C: Clone, R> From<&'a Deck<C, R>> for RawDeck<C> {
    fn from(deck: &'a Deck<C, R>) -> Self {
        RawDeck {
            cards: deck.cards.iter().cloned().collect(),
        }
    }
}
impl<C, R> From<Deck<C, R>> for RawDeck<C> {
    fn from(deck: Deck<C, R>) -> Self {
        RawDeck {
            cards: deck.into_cards(),
        }
    }
}

impl<C, R: Default> Default for Deck<C, R> {
    fn default() -> Self {
        Self::with_rng(R::default())
    }
}

impl<C, R: Default> FromIterator<C> for Deck<C, R> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self::new(iter, R::default())
    }
}

impl<C, R> Extend<C> for Deck<C, R> {
    fn extend<T: IntoIterator<Item = C>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl<C, R> Deck<C, R> {
    /// Creates an empty deck.
    pub fn with_rng(rng: R) -> Self {
        Self {
            cards: VecDeque::new(),
            rng,
        }
    }

    /// Creates a deck holding `cards`, listed from top to bottom.
    pub fn new<I: IntoIterator<Item = C>>(cards: I, rng: R) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            rng,
        }
    }

    /// Restores a deck from a snapshot.
    pub fn from_raw(raw: RawDeck<C>, rng: R) -> Self {
        Self::new(raw.cards, rng)
    }

    /// Replaces the contents of the deck. An empty sequence empties the deck.
    pub fn set_cards<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        self.cards = cards.into_iter().collect();
        self
    }

    /// The number of cards remaining in the deck.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if there are no cards in the deck.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards, from top to bottom.
    pub fn iter(&self) -> vec_deque::Iter<'_, C> {
        self.cards.iter()
    }

    /// Returns a mutable reference to the random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consumes the deck, returning its cards from top to bottom.
    pub fn into_cards(self) -> Vec<C> {
        self.cards.into()
    }

    /// The top card, without removing it.
    pub fn top(&self) -> Option<&C> {
        self.cards.front()
    }

    /// Up to `n` cards from the top, in top-to-bottom order, without removing them.
    pub fn top_n(&self, n: usize) -> Vec<&C> {
        self.cards.iter().take(n).collect()
    }

    /// The bottom card, without removing it.
    pub fn bottom(&self) -> Option<&C> {
        self.cards.back()
    }

    /// Up to `n` cards from the bottom, starting with the bottom card, without removing them.
    pub fn bottom_n(&self, n: usize) -> Vec<&C> {
        self.cards.iter().rev().take(n).collect()
    }

    /// Removes the top card.
    pub fn draw(&mut self) -> Option<C> {
        self.cards.pop_front()
    }

    /// Removes up to `n` cards from the top, returned in top-to-bottom order.
    pub fn draw_n(&mut self, n: usize) -> Vec<C> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Removes the bottom card.
    pub fn draw_from_bottom(&mut self) -> Option<C> {
        self.cards.pop_back()
    }

    /// Removes up to `n` cards from the bottom, returned starting with the bottom card.
    pub fn draw_n_from_bottom(&mut self, n: usize) -> Vec<C> {
        let idx = self.cards.len().saturating_sub(n);
        self.cards.drain(idx..).rev().collect()
    }

    /// Removes the card nearest the top that satisfies `pred`.
    pub fn draw_where<F>(&mut self, pred: F) -> Option<C>
    where
        F: FnMut(&C) -> bool,
    {
        self.draw_n_where(pred, 1).pop()
    }

    /// Removes the first `n` cards, scanning from the top, that satisfy `pred`. Drawn cards are
    /// returned in the order they were found, and the cards left behind keep their order.
    pub fn draw_n_where<F>(&mut self, mut pred: F, n: usize) -> Vec<C>
    where
        F: FnMut(&C) -> bool,
    {
        match self.try_draw_n_where(|card| Ok::<_, Infallible>(pred(card)), n) {
            Ok(cards) => cards,
            Err(never) => match never {},
        }
    }

    /// Like [`draw_n_where`](`Deck::draw_n_where`), with a fallible predicate. The first error is
    /// returned as-is, and the deck is left untouched.
    pub fn try_draw_n_where<E, F>(&mut self, mut pred: F, n: usize) -> Result<Vec<C>, E>
    where
        F: FnMut(&C) -> Result<bool, E>,
    {
        let mut hits = Vec::new();
        for (idx, card) in self.cards.iter().enumerate() {
            if hits.len() == n {
                break;
            }
            if pred(card)? {
                hits.push(idx);
            }
        }
        Ok(self.extract(&hits))
    }

    /// Places a card on top of the deck.
    pub fn discard_to_top(&mut self, card: C) -> &mut Self {
        self.cards.push_front(card);
        self
    }

    /// Places cards on top of the deck. The first card becomes the new top.
    pub fn discard_all_to_top<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        let cards: Vec<C> = cards.into_iter().collect();
        for card in cards.into_iter().rev() {
            self.cards.push_front(card);
        }
        self
    }

    /// Places a card at the bottom of the deck.
    pub fn discard_to_bottom(&mut self, card: C) -> &mut Self {
        self.cards.push_back(card);
        self
    }

    /// Places cards at the bottom of the deck. The last card becomes the new bottom.
    pub fn discard_all_to_bottom<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        self.cards.extend(cards);
        self
    }

    /// Removes the cards at `positions`, returning them in the order given. Positions must be
    /// distinct and in range.
    fn extract(&mut self, positions: &[usize]) -> Vec<C> {
        if positions.is_empty() {
            return Vec::new();
        }
        let mut slots: Vec<Option<C>> = self.cards.drain(..).map(Some).collect();
        let taken = positions
            .iter()
            .filter_map(|&idx| slots[idx].take())
            .collect();
        self.cards = slots.into_iter().flatten().collect();
        taken
    }
}

impl<C, R: RandomSource> Deck<C, R> {
    /// A card chosen at random, without removing it.
    pub fn random(&mut self) -> Option<&C> {
        if self.cards.is_empty() {
            return None;
        }
        let idx = self.rng.next_index(self.cards.len());
        self.cards.get(idx)
    }

    /// Up to `n` distinct cards chosen at random, without removing them.
    pub fn random_n(&mut self, n: usize) -> Vec<&C> {
        let positions = random::sample_indices(&mut self.rng, self.cards.len(), n);
        let cards = &self.cards;
        positions.into_iter().map(|idx| &cards[idx]).collect()
    }

    /// Removes a card chosen at random.
    pub fn draw_random(&mut self) -> Option<C> {
        if self.cards.is_empty() {
            return None;
        }
        let idx = self.rng.next_index(self.cards.len());
        self.cards.remove(idx)
    }

    /// Removes up to `n` cards chosen at random, returned in the order they were chosen. The
    /// cards left behind keep their order.
    pub fn draw_n_random(&mut self, n: usize) -> Vec<C> {
        let positions = random::sample_indices(&mut self.rng, self.cards.len(), n);
        self.extract(&positions)
    }

    /// Shuffles the deck in place.
    pub fn shuffle(&mut self) -> &mut Self {
        random::shuffle(&mut self.rng, self.cards.make_contiguous());
        self
    }

    /// Places a card on top of the deck.
    pub fn shuffle_to_top(&mut self, card: C) -> &mut Self {
        self.discard_to_top(card)
    }

    /// Places cards on top of the deck, in random order.
    pub fn shuffle_all_to_top<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        let mut cards: Vec<C> = cards.into_iter().collect();
        random::shuffle(&mut self.rng, &mut cards);
        self.discard_all_to_top(cards)
    }

    /// Places a card at the bottom of the deck.
    pub fn shuffle_to_bottom(&mut self, card: C) -> &mut Self {
        self.discard_to_bottom(card)
    }

    /// Places cards at the bottom of the deck, in random order.
    pub fn shuffle_all_to_bottom<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        let mut cards: Vec<C> = cards.into_iter().collect();
        random::shuffle(&mut self.rng, &mut cards);
        self.discard_all_to_bottom(cards)
    }

    /// Inserts a card at a random position, anywhere from the top to the bottom.
    pub fn discard_random(&mut self, card: C) -> &mut Self {
        let idx = self.rng.next_index(self.cards.len() + 1);
        self.cards.insert(idx, card);
        self
    }

    /// Inserts cards at random positions.
    ///
    /// Positions are chosen against the size of the deck after insertion: the incoming cards are
    /// assigned to distinct random slots, and the existing cards fill the remaining slots in their
    /// current order.
    pub fn discard_all_random<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        let cards: Vec<C> = cards.into_iter().collect();
        if cards.is_empty() {
            return self;
        }
        let total = self.cards.len() + cards.len();
        let positions = random::sample_indices(&mut self.rng, total, cards.len());
        let mut slots: Vec<Option<C>> = (0..total).map(|_| None).collect();
        for (idx, card) in positions.into_iter().zip(cards) {
            slots[idx] = Some(card);
        }
        let mut existing = std::mem::take(&mut self.cards).into_iter();
        self.cards = slots
            .into_iter()
            .filter_map(|slot| slot.or_else(|| existing.next()))
            .collect();
        self
    }
}

impl<C: DeserializeOwned, R> Deck<C, R> {
    /// Replaces the contents of the deck with a JSON array of cards. Any other JSON value is
    /// ignored. On error, the deck is left untouched.
    pub fn load_json(&mut self, json: &str) -> Result<&mut Self, DeckError> {
        self.replace_from_json(json)?;
        Ok(self)
    }

    /// Returns true if the contents were replaced.
    pub(crate) fn replace_from_json(&mut self, json: &str) -> Result<bool, DeckError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_array() {
            return Ok(false);
        }
        let cards: Vec<C> = serde_json::from_value(value)?;
        self.set_cards(cards);
        Ok(true)
    }
}
