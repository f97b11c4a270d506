//! Checkbox-class state reconciliation
//!
//! A checkbox tracks a `checked` flag and an `indeterminate` flag. Two kinds of
//! transition move it between its three visual states:
//!
//! - **external value**: the owning application supplies new controlled
//!   values; the state snaps to them, whatever the user did before
//! - **interaction**: the user activates the control; the state toggles
//!   between `Checked` and `Unchecked` and always leaves `Indeterminate`
//!
//! Interaction is ignored while the control is disabled. External values
//! always apply.

use crate::reconcile::{CheckState, Interaction, Reconcile};

/// Values a checkbox is created with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlInit {
    /// Controlled `checked` value, if the owner drives it
    pub controlled_checked: Option<bool>,
    /// Controlled `indeterminate` value
    pub controlled_indeterminate: Option<bool>,
    /// Initial `checked` value for an uncontrolled control
    pub default_checked: Option<bool>,
}

impl ControlInit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.controlled_checked = Some(checked);
        self
    }

    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.controlled_indeterminate = Some(indeterminate);
        self
    }

    pub fn default_checked(mut self, checked: bool) -> Self {
        self.default_checked = Some(checked);
        self
    }
}

/// New controlled values pushed in by the owner
///
/// Fields left as `None` keep their current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExternalValue {
    pub checked: Option<bool>,
    pub indeterminate: Option<bool>,
}

impl ExternalValue {
    pub fn checked(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            indeterminate: None,
        }
    }

    pub fn indeterminate(indeterminate: bool) -> Self {
        Self {
            checked: None,
            indeterminate: Some(indeterminate),
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn with_indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = Some(indeterminate);
        self
    }
}

/// Tracked state of one checkbox-class control
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    checked: bool,
    indeterminate: bool,
}

impl ControlState {
    /// Initial state: indeterminate wins, then the controlled checked value,
    /// then the default
    pub fn new(init: ControlInit) -> Self {
        Self {
            checked: init
                .controlled_checked
                .or(init.default_checked)
                .unwrap_or(false),
            indeterminate: init.controlled_indeterminate.unwrap_or(false),
        }
    }

    /// The tracked `checked` flag
    ///
    /// May be `true` while the control renders as indeterminate.
    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn indeterminate(&self) -> bool {
        self.indeterminate
    }

    /// What the control shows; indeterminate overrides the check mark
    pub fn visual(&self) -> CheckState {
        if self.indeterminate {
            CheckState::Indeterminate
        } else if self.checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    pub fn shows_check_mark(&self) -> bool {
        self.visual() == CheckState::Checked
    }

    /// Snap to the owner's values
    #[must_use]
    pub fn apply_external_value(self, value: ExternalValue) -> Self {
        Self {
            checked: value.checked.unwrap_or(self.checked),
            indeterminate: value.indeterminate.unwrap_or(self.indeterminate),
        }
    }

    /// Toggle in response to user activation
    ///
    /// Returns `None` while disabled. An indeterminate control counts as not
    /// checked, so its first activation always lands on `Checked`.
    pub fn apply_interaction(self, disabled: bool) -> Option<Interaction<Self>> {
        if disabled {
            tracing::trace!("checkbox interaction ignored: disabled");
            return None;
        }

        let checked = self.visual() != CheckState::Checked;
        Some(Interaction {
            next_state: Self {
                checked,
                indeterminate: false,
            },
            emitted_checked: checked,
        })
    }
}

impl Reconcile for ControlState {
    type External = ExternalValue;

    fn visual(&self) -> CheckState {
        ControlState::visual(self)
    }

    fn apply_external_value(self, value: ExternalValue) -> Self {
        ControlState::apply_external_value(self, value)
    }

    fn apply_interaction(self, disabled: bool) -> Option<Interaction<Self>> {
        ControlState::apply_interaction(self, disabled)
    }
}
