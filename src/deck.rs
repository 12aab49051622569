//! The deck: one card per catalog color, each paired with a point value.

use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::card::{Card, Color, PointValue};
use crate::distribution::build_distribution;
use crate::error::{ConfigError, DeckError};
use crate::options::GameRules;
use crate::shuffle::shuffled_copy;

/// An ordered set of cards with pairwise distinct colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds a deck by pairing a shuffled copy of the color catalog with a
    /// fresh point distribution. Every card starts on its color face.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the rules are inconsistent, including a
    /// catalog whose size differs from the deck size.
    pub fn build<R: Rng + ?Sized>(rules: &GameRules, rng: &mut R) -> Result<Self, ConfigError> {
        rules.validate()?;

        let colors = shuffled_copy(rules.colors, rng);
        let points = build_distribution(rules, rng)?;
        let cards: Vec<Card> = colors
            .into_iter()
            .zip(points.into_vec())
            .map(|(color, point)| Card::new(color, point))
            .collect();

        debug!(cards = cards.len(), "deck built");
        Ok(Self { cards })
    }

    /// Toggles the card at `index` between its color and point faces.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if `index` is past the end.
    pub fn reveal_card(&mut self, index: usize) -> Result<(), DeckError> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(DeckError::IndexOutOfRange { index, len })?;
        card.flip();
        Ok(())
    }

    /// Turns every hidden card to its point face. Revealed cards are left alone.
    pub fn reveal_all(&mut self) {
        self.cards
            .iter_mut()
            .filter(|card| !card.is_revealed())
            .for_each(Card::flip);
    }

    /// Toggles every revealed card back to its color face.
    ///
    /// Returns the number of cards flipped.
    pub fn flip_back(&mut self) -> usize {
        let mut flipped = 0;
        for card in self.cards.iter_mut().filter(|card| card.is_revealed()) {
            card.flip();
            flipped += 1;
        }
        flipped
    }

    /// Re-pairs every card positionally with `colors[i]` and `points[i]` and
    /// turns it to its color face.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::LengthMismatch`] unless both inputs have exactly
    /// as many entries as the deck. The deck is unchanged on error.
    pub fn reassign_all(&mut self, colors: &[Color], points: &[PointValue]) -> Result<(), DeckError> {
        if colors.len() != self.cards.len() || points.len() != self.cards.len() {
            return Err(DeckError::LengthMismatch {
                deck: self.cards.len(),
                colors: colors.len(),
                points: points.len(),
            });
        }

        for ((card, &color), &point) in self.cards.iter_mut().zip(colors).zip(points) {
            card.repaint(color, point);
        }

        debug!(cards = self.cards.len(), "deck reassigned");
        Ok(())
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the number of revealed cards.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_revealed()).count()
    }

    /// Returns whether any card is revealed.
    #[must_use]
    pub fn any_revealed(&self) -> bool {
        self.cards.iter().any(Card::is_revealed)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::COLOR_CATALOG;
    use crate::distribution::validate_distribution;

    fn deck(seed: u64) -> Deck {
        Deck::build(&GameRules::default(), &mut ChaCha8Rng::seed_from_u64(seed)).unwrap()
    }

    fn points(deck: &Deck) -> Vec<PointValue> {
        deck.cards().iter().map(|card| card.point).collect()
    }

    #[test]
    fn build_pairs_every_catalog_color_once() {
        let deck = deck(1);
        assert_eq!(deck.len(), 11);
        for color in &COLOR_CATALOG {
            assert_eq!(deck.cards().iter().filter(|c| c.color == *color).count(), 1);
        }
        assert_eq!(deck.revealed_count(), 0);
        assert!(validate_distribution(&points(&deck), &GameRules::default()));
    }

    #[test]
    fn build_rejects_short_catalog() {
        let rules = GameRules::default().with_colors(&COLOR_CATALOG[..9]);
        let err = Deck::build(&rules, &mut ChaCha8Rng::seed_from_u64(0)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::CatalogSize {
                expected: 11,
                actual: 9
            }
        );
    }

    #[test]
    fn reveal_card_toggles_and_checks_bounds() {
        let mut deck = deck(2);
        deck.reveal_card(4).unwrap();
        assert!(deck.get(4).unwrap().is_revealed());
        deck.reveal_card(4).unwrap();
        assert!(!deck.get(4).unwrap().is_revealed());
        assert_eq!(
            deck.reveal_card(11),
            Err(DeckError::IndexOutOfRange { index: 11, len: 11 })
        );
    }

    #[test]
    fn reveal_all_is_idempotent() {
        let mut deck = deck(3);
        deck.reveal_card(0).unwrap();
        deck.reveal_all();
        assert_eq!(deck.revealed_count(), 11);
        deck.reveal_all();
        assert_eq!(deck.revealed_count(), 11);
    }

    #[test]
    fn flip_back_hides_only_revealed() {
        let mut deck = deck(4);
        deck.reveal_card(1).unwrap();
        deck.reveal_card(7).unwrap();
        assert_eq!(deck.flip_back(), 2);
        assert!(!deck.any_revealed());
        assert_eq!(deck.flip_back(), 0);
    }

    #[test]
    fn reassign_all_repaints_and_hides() {
        let mut deck = deck(5);
        deck.reveal_all();
        let target = self::deck(6);
        let colors: Vec<Color> = target.cards().iter().map(|c| c.color).collect();
        deck.reassign_all(&colors, &points(&target)).unwrap();
        assert_eq!(deck, target);
    }

    #[test]
    fn reassign_all_rejects_mismatched_lengths() {
        let mut deck = deck(7);
        let before = deck.clone();
        let err = deck
            .reassign_all(&COLOR_CATALOG[..10], &points(&before))
            .unwrap_err();
        assert_eq!(
            err,
            DeckError::LengthMismatch {
                deck: 11,
                colors: 10,
                points: 11
            }
        );
        assert_eq!(deck, before);
    }
}
