//! Radio-class state reconciliation
//!
//! A radio only ever moves itself from `Unchecked` to `Checked`. Returning to
//! `Unchecked` happens through an external value, when the surrounding group
//! selects a sibling; the group enforces exclusivity, not the radio.

use crate::reconcile::{CheckState, Interaction, Reconcile};

/// Tracked state of one radio-class control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RadioState {
    checked: bool,
}

impl RadioState {
    /// Initial state from the controlled value, else the default
    pub fn new(controlled_checked: Option<bool>, default_checked: Option<bool>) -> Self {
        Self {
            checked: controlled_checked.or(default_checked).unwrap_or(false),
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn visual(&self) -> CheckState {
        if self.checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    /// Snap to the owner's value; `None` keeps the current one
    #[must_use]
    pub fn apply_external_value(self, checked: Option<bool>) -> Self {
        Self {
            checked: checked.unwrap_or(self.checked),
        }
    }

    /// Select in response to user activation
    ///
    /// Returns `None` while disabled and when already checked.
    pub fn apply_interaction(self, disabled: bool) -> Option<Interaction<Self>> {
        if disabled {
            tracing::trace!("radio interaction ignored: disabled");
            return None;
        }
        if self.checked {
            return None;
        }

        Some(Interaction {
            next_state: Self { checked: true },
            emitted_checked: true,
        })
    }
}

impl Reconcile for RadioState {
    type External = Option<bool>;

    fn visual(&self) -> CheckState {
        RadioState::visual(self)
    }

    fn apply_external_value(self, value: Option<bool>) -> Self {
        RadioState::apply_external_value(self, value)
    }

    fn apply_interaction(self, disabled: bool) -> Option<Interaction<Self>> {
        RadioState::apply_interaction(self, disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_once() {
        let state = RadioState::default();
        let step = state.apply_interaction(false).unwrap();
        assert!(step.next_state.checked());
        assert!(step.emitted_checked);

        assert_eq!(step.next_state.apply_interaction(false), None);
    }

    #[test]
    fn disabled_swallows_interaction() {
        assert_eq!(RadioState::default().apply_interaction(true), None);
    }

    #[test]
    fn external_value_can_uncheck() {
        let state = RadioState::new(Some(true), None);
        assert_eq!(state.apply_external_value(Some(false)).visual(), CheckState::Unchecked);
        assert_eq!(state.apply_external_value(None).visual(), CheckState::Checked);
    }

    #[test]
    fn controlled_value_beats_default() {
        assert!(!RadioState::new(Some(false), Some(true)).checked());
        assert!(RadioState::new(None, Some(true)).checked());
    }
}
