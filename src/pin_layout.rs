//! Placeholder Map Pin Layout
//!
//! Pins sit on a fixed grid derived from list position; coordinates are
//! not projected.

/// Pin anchor as percentages of the map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinPosition {
    pub left_pct: usize,
    pub top_pct: usize,
}

impl PinPosition {
    /// Inline style for an absolutely positioned pin
    pub fn style(&self) -> String {
        format!("left: {}%; top: {}%;", self.left_pct, self.top_pct)
    }
}

/// `left = 20 + 20*index`, `top = 30 + 20*(index mod 3)`
pub fn pin_position(index: usize) -> PinPosition {
    PinPosition {
        left_pct: 20 + index * 20,
        top_pct: 30 + (index % 3) * 20,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_pins() {
        let lefts: Vec<usize> = (0..4).map(|i| pin_position(i).left_pct).collect();
        let tops: Vec<usize> = (0..4).map(|i| pin_position(i).top_pct).collect();
        assert_eq!(lefts, vec![20, 40, 60, 80]);
        // index 3 wraps back to the first row
        assert_eq!(tops, vec![30, 50, 70, 30]);
    }

    #[test]
    fn test_style() {
        assert_eq!(pin_position(1).style(), "left: 40%; top: 50%;");
    }
}
