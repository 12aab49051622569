//! Error types for deck and game operations.

use thiserror::Error;

/// The game rules are mutually inconsistent.
///
/// These are programmer errors: they surface when a game is constructed and
/// keep it from ever reaching [`GameState::Ready`](crate::GameState::Ready).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Regular cards plus the two special cards do not add up to the deck size.
    #[error("points distribution mismatch: expected {expected}, got {actual}")]
    DistributionSize {
        /// Configured number of cards.
        expected: usize,
        /// Number of point values the rules produce.
        actual: usize,
    },
    /// The color catalog does not hold exactly one color per card.
    #[error("color catalog holds {actual} colors, expected {expected}")]
    CatalogSize {
        /// Configured number of cards.
        expected: usize,
        /// Colors in the catalog.
        actual: usize,
    },
    /// No regular point values were configured.
    #[error("no regular point values configured")]
    NoRegularPoints,
    /// The deck size is zero.
    #[error("number of cards is zero")]
    ZeroCards,
}

/// Misuse of the deck API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Card index is past the end of the deck.
    #[error("card index {index} out of range for deck of {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Deck length.
        len: usize,
    },
    /// Reassignment inputs do not match the deck length.
    #[error("length mismatch: deck {deck}, colors {colors}, points {points}")]
    LengthMismatch {
        /// Deck length.
        deck: usize,
        /// Number of colors supplied.
        colors: usize,
        /// Number of point values supplied.
        points: usize,
    },
}

/// Errors returned by the [`Game`](crate::Game) controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A randomize is already waiting on its flip-back delay.
    #[error("a randomize is already pending")]
    Busy,
    /// The game has not been initialized.
    #[error("game is not ready")]
    NotReady,
    /// Inconsistent rules.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Deck misuse.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
