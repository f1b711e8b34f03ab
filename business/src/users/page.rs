//! Page position, load status and the loaded record snapshot.

use std::any::Any;

use userdeck_states::{State, state_assign_impl};

use super::UserRecord;

/// Current page (1-based) and whether forward navigation is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: u32,
    has_next_page: bool,
}

impl Default for PageState {
    /// Page 1, with Next enabled until the first lookahead says otherwise.
    fn default() -> Self {
        Self {
            page: 1,
            has_next_page: true,
        }
    }
}

impl PageState {
    /// Page numbers below 1 are clamped to 1.
    pub fn new(page: u32, has_next_page: bool) -> Self {
        Self {
            page: page.max(1),
            has_next_page,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Previous is enabled on every page but the first.
    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    /// Next follows the last lookahead result.
    pub fn can_go_next(&self) -> bool {
        self.has_next_page
    }

    /// Step back one page. No-op on page 1.
    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Step forward one page. No-op while `has_next_page` is false.
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.page += 1;
        true
    }
}

impl State for PageState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Whether a page load is in flight, and the message of the last failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    pub is_loading: bool,
    pub error: Option<String>,
}

impl LoadState {
    /// Enter loading and clear the previous error.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// The state published when a load ends, successful or not.
    pub fn finished(error: Option<String>) -> Self {
        Self {
            is_loading: false,
            error,
        }
    }

    /// Text for the inline error line, if the last load failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl State for LoadState {
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

/// Records of the last successfully fetched page. Replaced wholesale, never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedUsers {
    records: Vec<UserRecord>,
}

impl LoadedUsers {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// Records in server order; sorting happens in the view transform.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl State for LoadedUsers {
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
