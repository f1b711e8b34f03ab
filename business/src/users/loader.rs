//! Page load protocol and navigation.
//!
//! A navigation moves `PageState`, marks `LoadState` loading and dispatches
//! [`LoadUsersPageCommand`]. The command fetches the page, replaces `LoadedUsers`,
//! then fetches the following page only to decide whether Next stays enabled.
//! Each dispatch supersedes the previous one, so a slow response from a page the
//! user already left is discarded instead of overwriting the current one.

use log::info;
use tokio_util::sync::CancellationToken;
use userdeck_states::{
    Command, CommandFuture, CommandSnapshot, LatestOnlyUpdater, StateCtx,
};

use super::api::{ApiResult, fetch_users};
use super::{LoadState, LoadedUsers, PageState, SelectionState, ViewFilterState};
use crate::BusinessConfig;

/// A lookahead page must hold more than this many records for Next to stay enabled.
pub const LOOKAHEAD_THRESHOLD: usize = 1;

/// Whether a lookahead page of `lookahead_len` records keeps Next enabled.
pub fn has_next_page(lookahead_len: usize) -> bool {
    lookahead_len > LOOKAHEAD_THRESHOLD
}

/// Register every state and command of the users page.
pub fn register_users_page(ctx: &mut StateCtx, config: BusinessConfig) {
    ctx.add_state(config);
    ctx.add_state(PageState::default());
    ctx.add_state(LoadState::default());
    ctx.add_state(LoadedUsers::default());
    ctx.add_state(ViewFilterState::default());
    ctx.add_state(SelectionState::default());
    ctx.record_command(LoadUsersPageCommand);
}

/// Load the page `PageState` currently points at.
///
/// Marks `LoadState` loading and clears the old error before dispatching; the
/// command resets `is_loading` when it finishes, whatever the outcome.
pub fn load_current_page(ctx: &mut StateCtx) {
    ctx.state_mut::<LoadState>().begin();
    ctx.dispatch::<LoadUsersPageCommand>();
}

/// Previous button. Returns whether a load was started.
pub fn go_previous(ctx: &mut StateCtx) -> bool {
    if !ctx.state_mut::<PageState>().go_previous() {
        return false;
    }
    info!("Navigating to page {}", ctx.state::<PageState>().page());
    load_current_page(ctx);
    true
}

/// Next button. Returns whether a load was started.
pub fn go_next(ctx: &mut StateCtx) -> bool {
    if !ctx.state_mut::<PageState>().go_next() {
        return false;
    }
    info!("Navigating to page {}", ctx.state::<PageState>().page());
    load_current_page(ctx);
    true
}

/// Fetches the snapshot's current page plus its lookahead page.
#[derive(Debug, Default)]
pub struct LoadUsersPageCommand;

impl Command for LoadUsersPageCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();
        let page = snap.state::<PageState>().page();

        Box::pin(async move {
            let result = load_page(&config, page, &updater, &cancel).await;
            // Partial progress stays applied; only the message is surfaced.
            let error = result.err().map(|e| e.to_string());
            updater.set(LoadState::finished(error));
        })
    }
}

async fn load_page(
    config: &BusinessConfig,
    page: u32,
    updater: &LatestOnlyUpdater,
    cancel: &CancellationToken,
) -> ApiResult<()> {
    let records = fetch_users(config, page).await?;
    info!("Loaded {} users for page {page}", records.len());
    updater.set(LoadedUsers::new(records));

    if cancel.is_cancelled() {
        return Ok(());
    }

    let lookahead = fetch_users(config, page + 1).await?;
    let has_next = has_next_page(lookahead.len());
    info!(
        "Lookahead page {} has {} users, next enabled: {has_next}",
        page + 1,
        lookahead.len()
    );
    updater.set(PageState::new(page, has_next));
    Ok(())
}
