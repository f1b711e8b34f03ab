//! How running commands publish results.
//!
//! A command never holds the `StateCtx`. It sends replacement values through a
//! [`LatestOnlyUpdater`] instead, and the context applies them on the UI thread
//! during the next [`StateCtx::sync_states`](crate::StateCtx::sync_states).

use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

use crate::{State, TaskId};

/// Message carried from running commands back to the owning `StateCtx`.
pub(crate) enum Message {
    /// A replacement value for the state registered under `state_id`.
    Update {
        task: TaskId,
        state_id: TypeId,
        value: Box<dyn Any + Send>,
    },
    /// The command future for `TaskId` returned.
    Finished(TaskId),
}

/// An updater stamped with the dispatching task's id.
///
/// Values are applied only if no newer dispatch of the same command happened
/// since. Once the command is superseded, everything it sends is dropped, so a
/// command can publish intermediate results without checking for staleness
/// itself.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    task: TaskId,
    send: Sender<Message>,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(task: TaskId, send: Sender<Message>) -> Self {
        Self { task, send }
    }

    /// Queue `state` as the new value of its slot.
    ///
    /// The slot is replaced wholesale on the next sync. A closed context only
    /// logs a warning.
    pub fn set<T: State>(&self, state: T) {
        let message = Message::Update {
            task: self.task,
            state_id: TypeId::of::<T>(),
            value: Box::new(state),
        };
        if self.send.send(message).is_err() {
            warn!("Dropped update for {}: state context is gone", type_name::<T>());
        }
    }
}
