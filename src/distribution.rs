//! Point distribution for a deck.
//!
//! A distribution holds exactly `regular_point_cards` regular values (the
//! configured regular points repeated end to end), one bonus value and one
//! reset marker, in random order. Shuffling changes the order, never the
//! composition.

use alloc::vec::Vec;
use core::ops::Deref;

use rand::Rng;

use crate::card::PointValue;
use crate::error::ConfigError;
use crate::options::GameRules;
use crate::shuffle::shuffle;

/// An ordered sequence of point values, one per card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution(Vec<PointValue>);

impl Distribution {
    /// Consumes the distribution, returning the point values.
    #[must_use]
    pub fn into_vec(self) -> Vec<PointValue> {
        self.0
    }
}

impl Deref for Distribution {
    type Target = [PointValue];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Repeats `items` end to end and truncates to exactly `len` entries.
#[must_use]
pub fn distribute_evenly<T: Copy>(items: &[T], len: usize) -> Vec<T> {
    items.iter().copied().cycle().take(len).collect()
}

/// Builds a freshly shuffled distribution for `rules`.
///
/// With the default rules the result is always the multiset
/// `{1, 1, 1, 2, 2, 2, 3, 3, 3, 5, Point Reset}`.
///
/// # Errors
///
/// Returns [`ConfigError`] if the regular card count plus the two special
/// cards does not equal the deck size, or no regular values are configured.
pub fn build_distribution<R: Rng + ?Sized>(
    rules: &GameRules,
    rng: &mut R,
) -> Result<Distribution, ConfigError> {
    if rules.number_of_cards == 0 {
        return Err(ConfigError::ZeroCards);
    }
    if rules.regular_points.is_empty() {
        return Err(ConfigError::NoRegularPoints);
    }

    let mut values: Vec<PointValue> =
        distribute_evenly(rules.regular_points, rules.regular_point_cards)
            .into_iter()
            .map(PointValue::Regular)
            .collect();
    values.push(PointValue::Bonus(rules.bonus_points));
    values.push(PointValue::ResetMarker);

    if values.len() != rules.number_of_cards {
        return Err(ConfigError::DistributionSize {
            expected: rules.number_of_cards,
            actual: values.len(),
        });
    }

    shuffle(&mut values, rng);
    Ok(Distribution(values))
}

/// Returns whether `values` has the composition `rules` require.
///
/// Checks the length, exactly one bonus, exactly one reset marker and the
/// number of regular values. Order is not checked.
#[must_use]
pub fn validate_distribution(values: &[PointValue], rules: &GameRules) -> bool {
    if values.len() != rules.number_of_cards {
        return false;
    }

    let mut bonus = 0;
    let mut reset = 0;
    let mut regular = 0;
    for value in values {
        match *value {
            PointValue::Bonus(n) if n == rules.bonus_points => bonus += 1,
            PointValue::ResetMarker => reset += 1,
            PointValue::Regular(n) if rules.regular_points.contains(&n) => regular += 1,
            _ => {}
        }
    }

    bonus == 1 && reset == 1 && regular == rules.regular_point_cards
}
