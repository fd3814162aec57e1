//! A deck that maintains a log of mutations.

use std::collections::vec_deque;

use delegate::delegate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::deck::{Deck, RawDeck};
use crate::error::DeckError;
use crate::random::{RandomSource, RngSource};

#[cfg(test)]
mod test;

pub type Id = usize;

/// Where cards were taken from, or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Top,
    Bottom,
    Random,
    /// Chosen by a caller-supplied predicate.
    Matching,
}

/// A mutation applied to the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The contents were replaced wholesale.
    Replace { count: usize },
    /// The deck was shuffled.
    Shuffle,
    /// Cards were removed.
    Draw { from: Position, count: usize },
    /// Cards were inserted. `shuffled` is set when a batch was put in random order first.
    Insert {
        to: Position,
        count: usize,
        shuffled: bool,
    },
}

/// An entry in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Id,
    #[serde(flatten)]
    pub event: Event,
}

/// An append-only log of deck mutations. An entry's ID is its position in the log.
#[derive(Debug, Clone, Default)]
pub struct Log {
    entries: Vec<Entry>,
}
impl Log {
    /// Appends an event, returning its ID.
    fn push(&mut self, event: Event) -> Id {
        let id = self.entries.len();
        self.entries.push(Entry { id, event });
        id
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterates over the events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.entries.iter().map(|e| &e.event)
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A serializable version of the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLog<C> {
    /// The deck before any logged mutation.
    pub initial: RawDeck<C>,
    /// Logged mutations, oldest first.
    pub entries: Vec<Entry>,
}

/// A [`Deck`] that records every mutation in a [`Log`].
#[derive(Debug)]
pub struct LoggingDeck<C, R = RngSource> {
    deck: Deck<C, R>,
    initial: RawDeck<C>,
    log: Log,
}
impl<C: Clone, R> From<Deck<C, R>> for LoggingDeck<C, R> {
    fn from(deck: Deck<C, R>) -> Self {
        Self {
            initial: RawDeck::from(&deck),
            deck,
            log: Log::default(),
        }
    }
}
impl<C, R> From<LoggingDeck<C, R>> for RawLog<C> {
    fn from(value: LoggingDeck<C, R>) -> Self {
        RawLog {
            initial: value.initial,
            entries: value.log.entries,
        }
    }
}
impl<'a, C: Clone, R> From<&'a LoggingDeck<C, R>> for RawLog<C> {
    fn from(value: &'a LoggingDeck<C, R>) -> Self {
        RawLog {
            initial: value.initial.clone(),
            entries: value.log.entries.clone(),
        }
    }
}

impl<C, R> LoggingDeck<C, R> {
    delegate! {
        to self.deck {
            pub fn remaining(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> vec_deque::Iter<'_, C>;
            pub fn top(&self) -> Option<&C>;
            pub fn top_n(&self, n: usize) -> Vec<&C>;
            pub fn bottom(&self) -> Option<&C>;
            pub fn bottom_n(&self, n: usize) -> Vec<&C>;
        }
    }

    /// Returns an immutable reference to the wrapped deck.
    pub fn deck(&self) -> &Deck<C, R> {
        &self.deck
    }

    /// Returns an immutable reference to the log.
    pub fn log(&self) -> &Log {
        &self.log
    }

    /// Discards the log, returning the wrapped deck.
    pub fn into_inner(self) -> Deck<C, R> {
        self.deck
    }

    fn record(&mut self, event: Event) -> &mut Self {
        self.log.push(event);
        self
    }

    fn record_draw(&mut self, from: Position, count: usize) -> &mut Self {
        self.record(Event::Draw { from, count })
    }

    fn record_insert(&mut self, to: Position, count: usize, shuffled: bool) -> &mut Self {
        self.record(Event::Insert {
            to,
            count,
            shuffled,
        })
    }

    pub fn set_cards<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        self.deck.set_cards(cards);
        let count = self.deck.remaining();
        self.record(Event::Replace { count })
    }

    pub fn draw(&mut self) -> Option<C> {
        let card = self.deck.draw();
        self.record_draw(Position::Top, usize::from(card.is_some()));
        card
    }

    pub fn draw_n(&mut self, n: usize) -> Vec<C> {
        let cards = self.deck.draw_n(n);
        self.record_draw(Position::Top, cards.len());
        cards
    }

    pub fn draw_from_bottom(&mut self) -> Option<C> {
        let card = self.deck.draw_from_bottom();
        self.record_draw(Position::Bottom, usize::from(card.is_some()));
        card
    }

    pub fn draw_n_from_bottom(&mut self, n: usize) -> Vec<C> {
        let cards = self.deck.draw_n_from_bottom(n);
        self.record_draw(Position::Bottom, cards.len());
        cards
    }

    pub fn draw_where<F>(&mut self, pred: F) -> Option<C>
    where
        F: FnMut(&C) -> bool,
    {
        let card = self.deck.draw_where(pred);
        self.record_draw(Position::Matching, usize::from(card.is_some()));
        card
    }

    pub fn draw_n_where<F>(&mut self, pred: F, n: usize) -> Vec<C>
    where
        F: FnMut(&C) -> bool,
    {
        let cards = self.deck.draw_n_where(pred, n);
        self.record_draw(Position::Matching, cards.len());
        cards
    }

    /// Failed draws leave the deck untouched, and are not logged.
    pub fn try_draw_n_where<E, F>(&mut self, pred: F, n: usize) -> Result<Vec<C>, E>
    where
        F: FnMut(&C) -> Result<bool, E>,
    {
        let cards = self.deck.try_draw_n_where(pred, n)?;
        self.record_draw(Position::Matching, cards.len());
        Ok(cards)
    }

    pub fn discard_to_top(&mut self, card: C) -> &mut Self {
        self.deck.discard_to_top(card);
        self.record_insert(Position::Top, 1, false)
    }

    pub fn discard_all_to_top<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        let cards: Vec<C> = cards.into_iter().collect();
        let count = cards.len();
        self.deck.discard_all_to_top(cards);
        self.record_insert(Position::Top, count, false)
    }

    pub fn discard_to_bottom(&mut self, card: C) -> &mut Self {
        self.deck.discard_to_bottom(card);
        self.record_insert(Position::Bottom, 1, false)
    }

    pub fn discard_all_to_bottom<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        let cards: Vec<C> = cards.into_iter().collect();
        let count = cards.len();
        self.deck.discard_all_to_bottom(cards);
        self.record_insert(Position::Bottom, count, false)
    }
}

impl<C, R: RandomSource> LoggingDeck<C, R> {
    delegate! {
        to self.deck {
            pub fn random(&mut self) -> Option<&C>;
            pub fn random_n(&mut self, n: usize) -> Vec<&C>;
        }
    }

    pub fn draw_random(&mut self) -> Option<C> {
        let card = self.deck.draw_random();
        self.record_draw(Position::Random, usize::from(card.is_some()));
        card
    }

    pub fn draw_n_random(&mut self, n: usize) -> Vec<C> {
        let cards = self.deck.draw_n_random(n);
        self.record_draw(Position::Random, cards.len());
        cards
    }

    pub fn shuffle(&mut self) -> &mut Self {
        self.deck.shuffle();
        self.record(Event::Shuffle)
    }

    pub fn shuffle_to_top(&mut self, card: C) -> &mut Self {
        self.deck.shuffle_to_top(card);
        self.record_insert(Position::Top, 1, true)
    }

    pub fn shuffle_all_to_top<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        let cards: Vec<C> = cards.into_iter().collect();
        let count = cards.len();
        self.deck.shuffle_all_to_top(cards);
        self.record_insert(Position::Top, count, true)
    }

    pub fn shuffle_to_bottom(&mut self, card: C) -> &mut Self {
        self.deck.shuffle_to_bottom(card);
        self.record_insert(Position::Bottom, 1, true)
    }

    pub fn shuffle_all_to_bottom<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        let cards: Vec<C> = cards.into_iter().collect();
        let count = cards.len();
        self.deck.shuffle_all_to_bottom(cards);
        self.record_insert(Position::Bottom, count, true)
    }

    pub fn discard_random(&mut self, card: C) -> &mut Self {
        self.deck.discard_random(card);
        self.record_insert(Position::Random, 1, false)
    }

    pub fn discard_all_random<I: IntoIterator<Item = C>>(&mut self, cards: I) -> &mut Self {
        let cards: Vec<C> = cards.into_iter().collect();
        let count = cards.len();
        self.deck.discard_all_random(cards);
        self.record_insert(Position::Random, count, false)
    }
}

impl<C: DeserializeOwned, R> LoggingDeck<C, R> {
    /// Like [`Deck::load_json`]. Only an actual replacement is logged.
    pub fn load_json(&mut self, json: &str) -> Result<&mut Self, DeckError> {
        if self.deck.replace_from_json(json)? {
            let count = self.deck.remaining();
            self.record(Event::Replace { count });
        }
        Ok(self)
    }
}
