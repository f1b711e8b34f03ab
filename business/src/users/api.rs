//! Data loader: one page of the remote user listing.

use log::{error, info};
use thiserror::Error;

use super::UserRecord;
use crate::BusinessConfig;
use crate::http::Client;

/// User-facing text for any failed page fetch.
pub const FETCH_USERS_FAILED: &str = "Failed to fetch Users!";

/// Why a page fetch failed.
///
/// Transport and status failures share one user-facing message; the detail only
/// reaches the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsersApiError {
    /// The request never produced a response.
    #[error("Failed to fetch Users!")]
    Transport { detail: String },
    /// The endpoint answered with a non-2xx status.
    #[error("Failed to fetch Users!")]
    Status { status: u16 },
    /// The body was not a JSON array of users.
    #[error("Failed to parse users: {detail}")]
    Decode { detail: String },
}

pub type ApiResult<T> = Result<T, UsersApiError>;

/// GET `/users?_limit={page_size}&_page={page}`
///
/// Returns the page's records in server order, possibly empty.
pub async fn fetch_users(config: &BusinessConfig, page: u32) -> ApiResult<Vec<UserRecord>> {
    let url = config.users_url(page);
    info!("Fetching users page {page} from {url}");

    let response = Client::get(&url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            error!("Users request for page {page} failed: {e}");
            UsersApiError::Transport { detail: e.message }
        })?;

    if !response.is_success() {
        error!(
            "Users request for page {page} returned status {}",
            response.status
        );
        return Err(UsersApiError::Status {
            status: response.status,
        });
    }

    response.json::<Vec<UserRecord>>().map_err(|e| {
        error!("Users response for page {page} did not decode: {e}");
        UsersApiError::Decode {
            detail: e.to_string(),
        }
    })
}
