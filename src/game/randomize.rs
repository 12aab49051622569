use rand::RngCore;
use tracing::{debug, warn};

use crate::distribution::build_distribution;
use crate::error::GameError;
use crate::scheduler::Scheduler;
use crate::shuffle::shuffled_copy;

use super::{FlipBackTicket, Game, GameState, Randomize};

impl<S: Scheduler, R: RngCore> Game<S, R> {
    /// Re-pairs every card with a fresh color order and point distribution.
    ///
    /// If no card is revealed the deck is re-paired immediately. Otherwise the
    /// revealed cards are flipped back to their color faces right away and
    /// the re-pairing is deferred until the animation delay elapses; call
    /// [`poll`](Self::poll) or [`complete_flip_back`](Self::complete_flip_back)
    /// to run it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Busy`] while a previous randomize is still
    /// pending, and [`GameError::NotReady`] before [`init`](Self::init).
    pub fn randomize(&mut self) -> Result<Randomize, GameError> {
        match self.state {
            GameState::Ready => {}
            GameState::AwaitingFlipBack => {
                warn!(generation = self.generation, "randomize rejected, flip-back pending");
                return Err(GameError::Busy);
            }
            GameState::Uninitialized => return Err(GameError::NotReady),
        }

        if !self.deck.any_revealed() {
            self.reassign()?;
            return Ok(Randomize::Immediate);
        }

        let flipped = self.deck.flip_back();
        let ticket = FlipBackTicket {
            generation: self.generation,
            timer: self.scheduler.schedule(self.rules.animation_duration),
        };
        self.pending = Some(ticket);
        self.state = GameState::AwaitingFlipBack;

        debug!(flipped, generation = ticket.generation, "flip-back scheduled");
        Ok(Randomize::Deferred(ticket))
    }

    /// Runs the deferred re-pairing for `ticket` if its delay has elapsed.
    ///
    /// Returns `Ok(false)` and leaves the deck untouched when the ticket is
    /// stale (the game was reset or re-initialized since it was issued) or
    /// when its timer has not elapsed yet.
    ///
    /// # Errors
    ///
    /// Propagates deck errors from the re-pairing.
    pub fn complete_flip_back(&mut self, ticket: FlipBackTicket) -> Result<bool, GameError> {
        if ticket.generation != self.generation || self.pending != Some(ticket) {
            debug!(
                ticket = ticket.generation,
                generation = self.generation,
                "stale flip-back ignored"
            );
            return Ok(false);
        }
        if !self.scheduler.is_due(ticket.timer) {
            return Ok(false);
        }

        self.pending = None;
        self.scheduler.cancel(ticket.timer);
        self.state = GameState::Ready;
        self.reassign()?;
        Ok(true)
    }

    /// Completes the pending flip-back if its timer has elapsed.
    ///
    /// Returns whether the deck was re-paired.
    ///
    /// # Errors
    ///
    /// Propagates deck errors from the re-pairing.
    pub fn poll(&mut self) -> Result<bool, GameError> {
        match self.pending {
            Some(ticket) => self.complete_flip_back(ticket),
            None => Ok(false),
        }
    }

    fn reassign(&mut self) -> Result<(), GameError> {
        let colors = shuffled_copy(self.rules.colors, &mut self.rng);
        let points = build_distribution(&self.rules, &mut self.rng)?;
        self.deck.reassign_all(&colors, &points)?;
        Ok(())
    }
}
