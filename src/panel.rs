//! Panel identity
//!
//! The three chart surfaces are fixed for the lifetime of the app, so they are
//! addressed by an enum rather than by widget identity.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Panel {
    One,
    Two,
    Three,
}

impl Panel {
    /// All panels, top to bottom
    pub const ALL: [Panel; 3] = [Panel::One, Panel::Two, Panel::Three];

    /// Slot index used for per-panel arrays
    pub fn index(self) -> usize {
        match self {
            Panel::One => 0,
            Panel::Two => 1,
            Panel::Three => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::One => "Panel 1",
            Panel::Two => "Panel 2",
            Panel::Three => "Panel 3",
        }
    }

    /// Background tint drawn behind the chart. Cosmetic only.
    pub fn tint(self) -> [u8; 3] {
        match self {
            Panel::One => [0, 0, 0],
            Panel::Two => [255, 255, 0],
            Panel::Three => [0, 85, 255],
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_distinct_slots() {
        let indices: Vec<usize> = Panel::ALL.iter().map(|p| p.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_display_uses_title() {
        assert_eq!(Panel::Three.to_string(), "Panel 3");
    }
}
