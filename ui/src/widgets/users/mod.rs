//! Users page widgets:
//! - `panel`: search box, error line, spinner and page layout
//! - `table`: sortable, clickable users table
//! - `pagination`: Previous / Next bar
//! - `modal`: detail window for the selected user

mod modal;
mod pagination;
mod panel;
mod table;

pub use modal::user_modal;
pub use pagination::pagination_bar;
pub use panel::users_page;
pub use table::users_table;
