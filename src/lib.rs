//! A card engine for the Color Typhoon memory game with optional `no_std` support.
//!
//! The crate provides a [`Game`] controller that owns a deck of uniquely
//! colored cards, each hiding a point value. The deck can be revealed,
//! re-shuffled, and reset; a re-shuffle always flips revealed cards back to
//! their color face before the deck is re-paired.
//!
//! # Example
//!
//! ```no_run
//! use typhoon::{Game, GameRules, ManualScheduler};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let mut game = Game::with_parts(GameRules::default(), rng, ManualScheduler::new()).unwrap();
//! game.init().unwrap();
//! assert_eq!(game.snapshot().cards.len(), 11);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod distribution;
pub mod error;
pub mod game;
pub mod options;
pub mod scheduler;
pub mod shuffle;

// Re-export main types
pub use card::{COLOR_CATALOG, Card, Color, PointValue};
pub use deck::Deck;
pub use distribution::{Distribution, build_distribution, validate_distribution};
pub use error::{ConfigError, DeckError, GameError};
pub use game::{CardView, FlipBackTicket, Game, GameState, Randomize, Snapshot};
pub use options::GameRules;
#[cfg(feature = "std")]
pub use scheduler::SystemScheduler;
pub use scheduler::{ManualScheduler, Scheduler, TimerHandle};
pub use shuffle::{shuffle, shuffled_copy};
