//! Swatch Core
//!
//! State reconciliation for selectable controls. A control's state is merged
//! from two sources:
//!
//! - a **controlled value** supplied by the owning application, which wins
//!   whenever it changes
//! - **user interaction**, which is the only source of change for an
//!   uncontrolled control and is ignored while the control is disabled
//!
//! [`ControlState`] covers checkbox-class controls (checked plus
//! indeterminate), [`RadioState`] covers radio-class controls. Both implement
//! [`Reconcile`] and can be driven through a [`ControlMachine`].
//!
//! ```rust
//! use swatch_core::{CheckState, ControlInit, ControlState, ExternalValue};
//!
//! let state = ControlState::new(ControlInit::new().indeterminate(true));
//! assert_eq!(state.visual(), CheckState::Indeterminate);
//!
//! let step = state.apply_interaction(false).unwrap();
//! assert_eq!(step.next_state.visual(), CheckState::Checked);
//! assert!(step.emitted_checked);
//!
//! let state = step.next_state.apply_external_value(ExternalValue::checked(false));
//! assert_eq!(state.visual(), CheckState::Unchecked);
//! ```

pub mod control;
pub mod radio;
pub mod reconcile;

pub use control::{ControlInit, ControlState, ExternalValue};
pub use radio::RadioState;
pub use reconcile::{CheckState, ControlEvent, ControlMachine, Interaction, Reconcile};
