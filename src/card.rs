//! Card types and the color catalog.

use core::fmt;

/// A card color: a display name and its `#RRGGBB` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Human-readable color name.
    pub name: &'static str,
    /// Hex color value, e.g. `"#FF0000"`.
    pub hex: &'static str,
}

impl Color {
    /// Creates a new color.
    #[must_use]
    pub const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }
}

/// The fixed catalog of card colors. One card per color per deck.
pub const COLOR_CATALOG: [Color; 11] = [
    Color::new("Red", "#FF0000"),
    Color::new("Orange", "#FFA500"),
    Color::new("Yellow", "#FFFF00"),
    Color::new("Green", "#008000"),
    Color::new("Blue", "#0000FF"),
    Color::new("Purple", "#800080"),
    Color::new("Black", "#000000"),
    Color::new("White", "#FFFFFF"),
    Color::new("Gray", "#808080"),
    Color::new("Brown", "#A52A2A"),
    Color::new("Pink", "#FFC0CB"),
];

/// The value hidden on the point face of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointValue {
    /// A baseline value (1, 2 or 3 under the default rules).
    Regular(u8),
    /// The single high-value card.
    Bonus(u8),
    /// The single "Point Reset" card.
    ResetMarker,
}

/// Label shown for [`PointValue::ResetMarker`].
pub const RESET_LABEL: &str = "Point Reset";

impl PointValue {
    /// Returns the numeric value, or `None` for the reset marker.
    #[must_use]
    pub const fn points(self) -> Option<u8> {
        match self {
            Self::Regular(n) | Self::Bonus(n) => Some(n),
            Self::ResetMarker => None,
        }
    }
}

impl fmt::Display for PointValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular(n) | Self::Bonus(n) => write!(f, "{n} Points"),
            Self::ResetMarker => f.write_str(RESET_LABEL),
        }
    }
}

/// A game card: a color face and a hidden point face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// The color shown on the neutral face.
    pub color: Color,
    /// The point value shown when revealed.
    pub point: PointValue,
    /// Whether the point face is showing.
    revealed: bool,
}

impl Card {
    /// Creates a new card showing its color face.
    #[must_use]
    pub const fn new(color: Color, point: PointValue) -> Self {
        Self {
            color,
            point,
            revealed: false,
        }
    }

    /// Returns whether the point face is showing.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Flips the card to its other face.
    pub const fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Replaces color and point and turns the card to its color face.
    pub const fn repaint(&mut self, color: Color, point: PointValue) {
        self.color = color;
        self.point = point;
        self.revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn catalog_colors_are_distinct() {
        for (i, a) in COLOR_CATALOG.iter().enumerate() {
            for b in &COLOR_CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.hex, b.hex);
            }
        }
    }

    #[test]
    fn point_labels() {
        assert_eq!(PointValue::Regular(2).to_string(), "2 Points");
        assert_eq!(PointValue::Bonus(5).to_string(), "5 Points");
        assert_eq!(PointValue::ResetMarker.to_string(), "Point Reset");
        assert_eq!(PointValue::ResetMarker.points(), None);
    }

    #[test]
    fn flip_and_repaint() {
        let mut card = Card::new(COLOR_CATALOG[0], PointValue::Regular(1));
        assert!(!card.is_revealed());
        card.flip();
        assert!(card.is_revealed());
        card.repaint(COLOR_CATALOG[1], PointValue::ResetMarker);
        assert!(!card.is_revealed());
        assert_eq!(card.color.name, "Orange");
    }
}
