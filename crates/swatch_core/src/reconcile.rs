//! Shared reconciliation vocabulary
//!
//! Every selectable control has two transitions: an external-value
//! transition driven by its owner and an interaction transition driven by the
//! user. [`Reconcile`] names that contract; [`ControlMachine`] drives any
//! implementation and keeps a short transition history for debugging.

/// Visual state of a selectable control
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }

    pub fn is_indeterminate(self) -> bool {
        self == CheckState::Indeterminate
    }
}

/// Result of an accepted interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interaction<S> {
    /// State after the interaction
    pub next_state: S,
    /// The checked value reported to the owner, exactly once
    pub emitted_checked: bool,
}

/// The two-transition contract shared by checkbox and radio state
pub trait Reconcile: Copy {
    /// Controlled values the owner can push in
    type External;

    /// What the control currently shows
    fn visual(&self) -> CheckState;

    /// Snap to the owner's values; always applies, even when disabled
    fn apply_external_value(self, value: Self::External) -> Self;

    /// React to user activation; `None` when the interaction is swallowed
    fn apply_interaction(self, disabled: bool) -> Option<Interaction<Self>>;
}

/// What triggered a transition
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ControlEvent {
    External,
    Interaction,
}

/// History entries kept per control
const MAX_HISTORY: usize = 32;

/// A control's state plus a bounded record of its transitions
#[derive(Clone, Debug)]
pub struct ControlMachine<S: Reconcile> {
    state: S,
    /// (from, event, to), oldest first
    history: Vec<(CheckState, ControlEvent, CheckState)>,
}

impl<S: Reconcile> ControlMachine<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> S {
        self.state
    }

    pub fn visual(&self) -> CheckState {
        self.state.visual()
    }

    /// Transition history, oldest first
    pub fn history(&self) -> &[(CheckState, ControlEvent, CheckState)] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn record(&mut self, from: CheckState, event: ControlEvent) {
        let to = self.state.visual();
        tracing::trace!(?from, ?event, ?to, "control transition");
        if self.history.len() == MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push((from, event, to));
    }

    /// Apply the owner's values
    pub fn external(&mut self, value: S::External) -> CheckState {
        let from = self.state.visual();
        self.state = self.state.apply_external_value(value);
        self.record(from, ControlEvent::External);
        self.state.visual()
    }

    /// Apply a user activation, returning the checked value to notify with
    pub fn interact(&mut self, disabled: bool) -> Option<bool> {
        let from = self.state.visual();
        let interaction = self.state.apply_interaction(disabled)?;
        self.state = interaction.next_state;
        self.record(from, ControlEvent::Interaction);
        Some(interaction.emitted_checked)
    }
}

impl<S: Reconcile + Default> Default for ControlMachine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlInit, ControlState, ExternalValue};

    #[test]
    fn machine_records_transitions() {
        let mut machine =
            ControlMachine::new(ControlState::new(ControlInit::new().indeterminate(true)));

        assert_eq!(machine.interact(false), Some(true));
        assert_eq!(machine.external(ExternalValue::checked(false)), CheckState::Unchecked);
        assert_eq!(machine.interact(true), None);

        assert_eq!(
            machine.history(),
            &[
                (
                    CheckState::Indeterminate,
                    ControlEvent::Interaction,
                    CheckState::Checked
                ),
                (
                    CheckState::Checked,
                    ControlEvent::External,
                    CheckState::Unchecked
                ),
            ]
        );
    }

    #[test]
    fn history_is_bounded() {
        let mut machine = ControlMachine::<ControlState>::default();
        for _ in 0..(MAX_HISTORY + 5) {
            machine.interact(false);
        }
        assert_eq!(machine.history().len(), MAX_HISTORY);

        machine.clear_history();
        assert!(machine.history().is_empty());
    }
}
