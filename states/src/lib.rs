//! Typed state container shared by the business layer and the UI.
//!
//! - [`State`]: a value living in a [`StateCtx`] slot
//! - [`Command`]: an async side effect that publishes new state values
//! - [`LatestOnlyUpdater`]: how a command publishes; only the latest dispatch wins
//!
//! The UI thread owns the [`StateCtx`]. Per frame it calls
//! [`StateCtx::sync_states`], reads states to render, writes user input straight
//! into them, and dispatches commands. Dispatching takes a [`CommandSnapshot`] of
//! every state that opts in, so a command never borrows the context.

mod command;
mod ctx;
mod error;
mod runtime;
mod snapshot;
mod state;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{State, state_assign_impl};
pub use task::{TaskHandle, TaskId};
pub use updater::LatestOnlyUpdater;
