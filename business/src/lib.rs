//! Business layer of UserDeck: configuration, HTTP access and the users page logic.

mod config;
pub mod http;
pub mod users;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE, ENV_PREFIX};
pub use users::{
    FETCH_USERS_FAILED, LoadState, LoadUsersPageCommand, LoadedUsers, PageState,
    SelectionState, SortKey, UserRecord, UsersApiError, ViewFilterState, go_next, go_previous,
    load_current_page, register_users_page, view_transform,
};
