pub mod users;

pub use users::{pagination_bar, user_modal, users_page, users_table};
