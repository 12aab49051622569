//! Game controller and state management.

#[cfg(feature = "std")]
use rand::SeedableRng;
use rand::RngCore;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::deck::Deck;
use crate::error::{ConfigError, GameError};
use crate::options::GameRules;
use crate::scheduler::Scheduler;
#[cfg(feature = "std")]
use crate::scheduler::SystemScheduler;

mod randomize;
mod snapshot;
pub mod state;

pub use snapshot::{CardView, Snapshot};
pub use state::{FlipBackTicket, GameState, Randomize};

/// The Color Typhoon controller.
///
/// The game exclusively owns the deck and every piece of mutable game state.
/// A presentation layer renders from [`snapshot`](Self::snapshot) and signals
/// intents (reveal, randomize, reset) through the methods below. Randomness
/// and timers are injected so the controller can run on a seeded RNG and a
/// virtual clock.
pub struct Game<S, R = ChaCha8Rng> {
    /// Rule constants.
    rules: GameRules,
    /// The cards in play. Empty until [`init`](Self::init).
    deck: Deck,
    /// Current controller state.
    state: GameState,
    /// Whether color names are shown on card faces.
    names_visible: bool,
    /// Bumped by `init` and `reset`; stale continuations compare against it.
    generation: u64,
    /// Continuation waiting on the flip-back delay.
    pending: Option<FlipBackTicket>,
    /// Timer source for the flip-back delay.
    scheduler: S,
    /// Random source for colors and points.
    rng: R,
}

#[cfg(feature = "std")]
impl Game<SystemScheduler> {
    /// Creates a game on the system clock with a seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `rules` are inconsistent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use typhoon::{Game, GameRules};
    ///
    /// let mut game = Game::new(GameRules::default(), 42).unwrap();
    /// game.init().unwrap();
    /// ```
    pub fn new(rules: GameRules, seed: u64) -> Result<Self, ConfigError> {
        Self::with_parts(rules, ChaCha8Rng::seed_from_u64(seed), SystemScheduler::new())
    }
}

impl<S: Scheduler, R: RngCore> Game<S, R> {
    /// Creates a game from explicit parts. No deck is built until
    /// [`init`](Self::init).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `rules` are inconsistent.
    pub fn with_parts(rules: GameRules, rng: R, scheduler: S) -> Result<Self, ConfigError> {
        rules.validate()?;

        Ok(Self {
            rules,
            deck: Deck::new(),
            state: GameState::Uninitialized,
            names_visible: true,
            generation: 0,
            pending: None,
            scheduler,
            rng,
        })
    }

    /// Builds a fresh deck and moves to [`GameState::Ready`].
    ///
    /// On an initialized game this is a full [`reset`](Self::reset) followed
    /// by a rebuild, so the outcome does not depend on the prior state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if the deck cannot be built; the game is
    /// then left uninitialized.
    pub fn init(&mut self) -> Result<(), GameError> {
        self.reset();

        self.deck = Deck::build(&self.rules, &mut self.rng)?;
        self.state = GameState::Ready;

        info!(generation = self.generation, cards = self.deck.len(), "game initialized");
        Ok(())
    }

    /// Clears the deck and returns to [`GameState::Uninitialized`].
    ///
    /// Any pending flip-back continuation is cancelled and its ticket becomes
    /// stale. Color names are made visible again.
    pub fn reset(&mut self) {
        if let Some(ticket) = self.pending.take() {
            self.scheduler.cancel(ticket.timer);
        }
        self.generation += 1;
        self.deck.clear();
        self.names_visible = true;
        self.state = GameState::Uninitialized;

        info!(generation = self.generation, "game reset");
    }

    /// Reveals every hidden card.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is [`GameState::Ready`].
    pub fn reveal_all_cards(&mut self) -> Result<(), GameError> {
        self.ensure_ready()?;
        self.deck.reveal_all();
        Ok(())
    }

    /// Toggles the card at `index` between its color and point faces.
    ///
    /// # Errors
    ///
    /// Returns an error unless the game is [`GameState::Ready`], or if
    /// `index` is out of range.
    pub fn request_reveal(&mut self, index: usize) -> Result<(), GameError> {
        self.ensure_ready()?;
        self.deck.reveal_card(index)?;
        Ok(())
    }

    /// Shows or hides the color names. Does not touch the deck.
    pub const fn set_names_visible(&mut self, visible: bool) {
        self.names_visible = visible;
    }

    /// Returns whether the color names are shown.
    pub const fn names_visible(&self) -> bool {
        self.names_visible
    }

    /// Returns the current controller state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether a randomize is waiting on its flip-back delay.
    pub const fn is_busy(&self) -> bool {
        matches!(self.state, GameState::AwaitingFlipBack)
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the rule constants.
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Returns the current generation.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the pending flip-back ticket, if any.
    pub const fn pending(&self) -> Option<FlipBackTicket> {
        self.pending
    }

    /// Returns the scheduler.
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the scheduler mutably, e.g. to advance a virtual clock.
    pub const fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn ensure_ready(&self) -> Result<(), GameError> {
        match self.state {
            GameState::Ready => Ok(()),
            GameState::AwaitingFlipBack => Err(GameError::Busy),
            GameState::Uninitialized => Err(GameError::NotReady),
        }
    }
}
