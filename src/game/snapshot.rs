//! Read-only views of the game for presentation layers.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::RngCore;

use crate::card::PointValue;
use crate::scheduler::Scheduler;

use super::{Game, GameState};

/// A single card as a presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Color name.
    pub color_name: &'static str,
    /// Color hex value.
    pub hex: &'static str,
    /// The hidden point value.
    pub point: PointValue,
    /// Text for the point face, e.g. `"3 Points"` or `"Point Reset"`.
    pub point_label: String,
    /// Whether the point face is showing.
    pub revealed: bool,
}

/// A copy of everything a presentation layer needs to render the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Cards in deck order.
    pub cards: Vec<CardView>,
    /// Whether color names are shown.
    pub names_visible: bool,
    /// Whether a randomize is pending; triggers should be disabled.
    pub busy: bool,
    /// Controller state.
    pub state: GameState,
    /// Number of cards in the deck. Zero before `init` and after `reset`.
    pub card_count: usize,
    /// Number of revealed cards.
    pub revealed_count: usize,
}

impl<S: Scheduler, R: RngCore> Game<S, R> {
    /// Returns a snapshot of the current game.
    pub fn snapshot(&self) -> Snapshot {
        let cards = self
            .deck
            .cards()
            .iter()
            .map(|card| CardView {
                color_name: card.color.name,
                hex: card.color.hex,
                point: card.point,
                point_label: card.point.to_string(),
                revealed: card.is_revealed(),
            })
            .collect();

        Snapshot {
            cards,
            names_visible: self.names_visible,
            busy: self.is_busy(),
            state: self.state,
            card_count: self.deck.len(),
            revealed_count: self.deck.revealed_count(),
        }
    }
}
