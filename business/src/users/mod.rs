//! The users page: data loader, pagination controller, view transform and the
//! selection/modal bridge.
//!
//! UI code reads these states through `StateCtx` and calls the navigation
//! functions; it never performs network IO itself.

pub mod api;
mod loader;
mod page;
mod record;
mod selection;
mod view;

pub use api::{FETCH_USERS_FAILED, UsersApiError, fetch_users};
pub use loader::{
    LOOKAHEAD_THRESHOLD, LoadUsersPageCommand, go_next, go_previous, has_next_page,
    load_current_page, register_users_page,
};
pub use page::{LoadState, LoadedUsers, PageState};
pub use record::UserRecord;
pub use selection::SelectionState;
pub use view::{LocaleOrder, SortKey, ViewFilterState, view_transform};
