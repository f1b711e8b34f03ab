//! Dispatch bookkeeping behind a `StateCtx`.
//!
//! The runtime owns the update channel and, per command type, the latest
//! [`TaskId`] handed out and the handle of the run still in flight. The context
//! asks it whether an update is current before applying it.

use std::any::TypeId;
use std::collections::BTreeMap;

use flume::{Receiver, Sender};
use tokio_util::sync::CancellationToken;

use crate::updater::Message;
use crate::{LatestOnlyUpdater, TaskHandle, TaskId};

/// Channel plus generation bookkeeping behind a `StateCtx`.
#[derive(Debug)]
pub(crate) struct StateRuntime {
    send: Sender<Message>,
    recv: Receiver<Message>,

    // latest generation handed out per command type
    latest: BTreeMap<TypeId, TaskId>,
    running: BTreeMap<TypeId, TaskHandle>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            latest: BTreeMap::new(),
            running: BTreeMap::new(),
        }
    }

    /// Updater stamped with `task`, for the command future of that dispatch.
    pub fn latest_only_updater(&self, task: TaskId) -> LatestOnlyUpdater {
        LatestOnlyUpdater::new(task, self.send.clone())
    }

    pub(crate) fn sender(&self) -> Sender<Message> {
        self.send.clone()
    }

    /// Start a new generation for `type_id`, cancelling the one still running.
    pub fn begin_task(&mut self, type_id: TypeId) -> TaskHandle {
        let id = match self.latest.get(&type_id) {
            Some(previous) => previous.next(),
            None => TaskId::new(type_id, 1),
        };
        self.latest.insert(type_id, id);

        let handle = TaskHandle::new(id, CancellationToken::new());
        if let Some(previous) = self.running.insert(type_id, handle.clone()) {
            previous.cancel();
        }
        handle
    }

    /// Whether `task` is the most recent dispatch of its command type.
    pub fn is_latest(&self, task: TaskId) -> bool {
        self.latest.get(&task.type_id()) == Some(&task)
    }

    /// Whether the latest dispatch of `type_id` has not reported `Finished` yet.
    pub fn is_running(&self, type_id: TypeId) -> bool {
        self.running.contains_key(&type_id)
    }

    /// Clear the running entry, unless a newer dispatch already replaced it.
    pub(crate) fn finish(&mut self, task: TaskId) {
        let is_current = self
            .running
            .get(&task.type_id())
            .is_some_and(|handle| handle.id() == task);
        if is_current {
            self.running.remove(&task.type_id());
        }
    }

    pub(crate) fn drain(&self) -> Vec<Message> {
        self.recv.try_iter().collect()
    }
}
