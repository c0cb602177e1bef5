//! Hardcoded level list.

use super::types::PatternVariant;
use crate::core::grid::Grid;

/// One target board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub name: &'static str,
    /// Number of colours in play; tile values are `0..colors`.
    pub colors: u8,
    pub target: Grid,
}

pub const LEVELS: &[Level] = &[
    Level {
        name: "Corner",
        colors: 2,
        target: [[1, 0, 0], [0, 0, 0], [0, 0, 0]],
    },
    Level {
        name: "Cross",
        colors: 2,
        target: [[0, 1, 0], [1, 1, 1], [0, 1, 0]],
    },
    Level {
        name: "Diagonal",
        colors: 2,
        target: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    },
    Level {
        name: "Stripes",
        colors: 3,
        target: [[1, 1, 1], [2, 2, 2], [1, 1, 1]],
    },
    Level {
        name: "Frame",
        colors: 2,
        target: [[1, 1, 1], [1, 0, 1], [1, 1, 1]],
    },
    Level {
        name: "Bullseye",
        colors: 3,
        target: [[2, 2, 2], [2, 1, 2], [2, 2, 2]],
    },
    Level {
        name: "Checker",
        colors: 2,
        target: [[1, 0, 1], [0, 1, 0], [1, 0, 1]],
    },
    Level {
        name: "Sunrise",
        colors: 4,
        target: [[3, 3, 3], [2, 2, 2], [1, 1, 1]],
    },
    Level {
        name: "Pinwheel",
        colors: 4,
        target: [[1, 1, 2], [3, 0, 2], [3, 3, 2]],
    },
];

/// Levels playable in `variant`.
///
/// Flip advances whole neighbourhoods at once, so it sticks to two-colour
/// boards where every target is reachable.
pub fn levels_for(variant: PatternVariant) -> Vec<&'static Level> {
    LEVELS
        .iter()
        .filter(|level| variant != PatternVariant::Flip || level.colors == 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::GRID_SIZE;

    #[test]
    fn test_values_within_color_count() {
        for level in LEVELS {
            for row in &level.target {
                for &value in row {
                    assert!(value < level.colors, "{} has value {}", level.name, value);
                }
            }
        }
    }

    #[test]
    fn test_no_target_is_blank() {
        let blank = [[0u8; GRID_SIZE]; GRID_SIZE];
        for level in LEVELS {
            assert_ne!(level.target, blank, "{} would start solved", level.name);
        }
    }

    #[test]
    fn test_every_variant_has_levels() {
        assert_eq!(levels_for(PatternVariant::Cycle).len(), LEVELS.len());
        assert_eq!(levels_for(PatternVariant::Paint).len(), LEVELS.len());
        let flip = levels_for(PatternVariant::Flip);
        assert!(flip.len() >= 3);
        assert!(flip.iter().all(|l| l.colors == 2));
    }
}
