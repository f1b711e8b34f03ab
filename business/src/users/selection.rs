//! Selected user and detail-modal visibility.
//!
//! The modal flag is set explicitly rather than toggled, so activating a row twice
//! in one frame still leaves the modal open.

use std::any::Any;

use log::debug;
use userdeck_states::{State, state_assign_impl};

use super::UserRecord;

/// The record shown in the detail modal and whether the modal is visible.
///
/// Selecting a user does not open the modal on its own; closing the modal keeps
/// the selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected_user: Option<UserRecord>,
    modal_open: bool,
}

impl SelectionState {
    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.selected_user.as_ref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// Publish `user` as the selected record.
    pub fn select_user(&mut self, user: UserRecord) {
        debug!("Selected user {}", user.id);
        self.selected_user = Some(user);
    }

    /// Show or hide the modal. Repeating a call leaves the flag unchanged.
    pub fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }

    /// Row activation: publish the record, then open the modal.
    pub fn open_details(&mut self, user: UserRecord) {
        self.select_user(user);
        self.set_modal_open(true);
    }
}

impl State for SelectionState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
