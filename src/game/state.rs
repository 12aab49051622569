//! Controller state types.

use crate::scheduler::TimerHandle;

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No deck has been built, or the game was reset.
    Uninitialized,
    /// Cards are built and nothing is pending.
    Ready,
    /// A randomize is waiting for the flip-back animation to finish.
    AwaitingFlipBack,
}

/// Identifies a pending flip-back continuation.
///
/// A ticket is only honored while its generation matches the controller's;
/// [`Game::init`](crate::Game::init) and [`Game::reset`](crate::Game::reset)
/// move the generation on, turning older tickets into no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlipBackTicket {
    /// Controller generation at the time the randomize was requested.
    pub generation: u64,
    /// Timer armed for the flip-back delay.
    pub timer: TimerHandle,
}

/// How a randomize request was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Randomize {
    /// No card was revealed; the deck was re-paired right away.
    Immediate,
    /// Revealed cards were flipped back; the re-pairing runs once the ticket's
    /// timer elapses.
    Deferred(FlipBackTicket),
}
