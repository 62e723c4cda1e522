//! Panel focus tracking
//!
//! Keeps the focused panel plus the one that was focused before it. The two differ
//! between a click landing on a new panel and the controller finishing its checkbox
//! resync; that window is what `is_transition` reports.

use crate::panel::Panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusModel {
    current: Panel,
    previous: Panel,
}

impl Default for FocusModel {
    fn default() -> Self {
        Self {
            current: Panel::One,
            previous: Panel::One,
        }
    }
}

impl FocusModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `panel` as focused. `previous` is left alone until `settle`.
    pub fn focus(&mut self, panel: Panel) {
        self.current = panel;
    }

    pub fn current(&self) -> Panel {
        self.current
    }

    pub fn is_transition(&self) -> bool {
        self.current != self.previous
    }

    /// Close the transition window
    pub fn settle(&mut self) {
        self.previous = self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn panel_strategy() -> impl Strategy<Value = Panel> {
        prop::sample::select(Panel::ALL.to_vec())
    }

    #[test]
    fn test_starts_settled_on_first_panel() {
        let focus = FocusModel::new();
        assert_eq!(focus.current(), Panel::One);
        assert!(!focus.is_transition());
    }

    #[test]
    fn test_refocusing_same_panel_is_not_a_transition() {
        let mut focus = FocusModel::new();
        focus.focus(Panel::One);
        assert!(!focus.is_transition());
    }

    #[test]
    fn test_settle_closes_transition() {
        let mut focus = FocusModel::new();
        focus.focus(Panel::Three);
        assert!(focus.is_transition());

        focus.settle();
        assert!(!focus.is_transition());

        // previous is now Three, so going back to One is a transition again
        focus.focus(Panel::One);
        assert!(focus.is_transition());
    }

    proptest! {
        #[test]
        fn focus_reports_current_and_transition(clicks in prop::collection::vec(panel_strategy(), 1..50)) {
            let mut focus = FocusModel::new();
            for panel in clicks {
                let before = focus.current();
                focus.focus(panel);
                prop_assert_eq!(focus.current(), panel);
                prop_assert_eq!(focus.is_transition(), panel != before);
                focus.settle();
            }
        }
    }
}
