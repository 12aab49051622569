//! Game rule constants.

use core::time::Duration;

use crate::card::{COLOR_CATALOG, Color};
use crate::error::ConfigError;

/// Rule constants for a Color Typhoon deck.
///
/// The defaults are the only rules the game ships with; the builder exists so
/// callers and tests can assemble alternative (or deliberately broken) rules:
///
/// ```
/// use core::time::Duration;
/// use typhoon::GameRules;
///
/// let rules = GameRules::default()
///     .with_bonus_points(7)
///     .with_animation_duration(Duration::from_millis(300));
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    /// Number of cards in a deck.
    pub number_of_cards: usize,
    /// Number of regular point cards.
    pub regular_point_cards: usize,
    /// Regular values, repeated cyclically to fill the regular cards.
    pub regular_points: &'static [u8],
    /// Value of the single bonus card.
    pub bonus_points: u8,
    /// Flip animation length; the re-pairing waits this long after a flip-back.
    pub animation_duration: Duration,
    /// Color catalog. Must hold exactly `number_of_cards` colors.
    pub colors: &'static [Color],
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            number_of_cards: 11,
            regular_point_cards: 9,
            regular_points: &[1, 2, 3],
            bonus_points: 5,
            animation_duration: Duration::from_millis(600),
            colors: &COLOR_CATALOG,
        }
    }
}

impl GameRules {
    /// Checks that the rule constants agree with each other.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first inconsistency found.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.number_of_cards == 0 {
            return Err(ConfigError::ZeroCards);
        }
        if self.regular_points.is_empty() {
            return Err(ConfigError::NoRegularPoints);
        }
        // One bonus card and one reset card.
        let actual = self.regular_point_cards + 2;
        if actual != self.number_of_cards {
            return Err(ConfigError::DistributionSize {
                expected: self.number_of_cards,
                actual,
            });
        }
        if self.colors.len() != self.number_of_cards {
            return Err(ConfigError::CatalogSize {
                expected: self.number_of_cards,
                actual: self.colors.len(),
            });
        }
        Ok(())
    }

    /// Sets the number of cards.
    #[must_use]
    pub const fn with_number_of_cards(mut self, number_of_cards: usize) -> Self {
        self.number_of_cards = number_of_cards;
        self
    }

    /// Sets the number of regular point cards.
    #[must_use]
    pub const fn with_regular_point_cards(mut self, count: usize) -> Self {
        self.regular_point_cards = count;
        self
    }

    /// Sets the regular point values.
    #[must_use]
    pub const fn with_regular_points(mut self, points: &'static [u8]) -> Self {
        self.regular_points = points;
        self
    }

    /// Sets the bonus card value.
    #[must_use]
    pub const fn with_bonus_points(mut self, points: u8) -> Self {
        self.bonus_points = points;
        self
    }

    /// Sets the flip animation duration.
    #[must_use]
    pub const fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Sets the color catalog.
    #[must_use]
    pub const fn with_colors(mut self, colors: &'static [Color]) -> Self {
        self.colors = colors;
        self
    }
}
