//! Async side effects dispatched from the UI thread.

use std::any::Any;
use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

/// The future a command hands to the spawner. It owns everything it touches.
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A side effect dispatched explicitly through `StateCtx::dispatch`.
///
/// Commands never touch the context directly. They read the snapshot taken at
/// dispatch time and publish results through the updater, which the context
/// applies on its next `sync_states`.
pub trait Command: Any + Send + Sync {
    /// Build the future for one dispatch.
    ///
    /// `snap` holds clones of every state that opts into snapshots. `updater` is
    /// stamped with this dispatch's generation. `cancel` fires as soon as a newer
    /// dispatch of the same command starts; check it between network steps.
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
