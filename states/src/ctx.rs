use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use log::{debug, error, warn};

use crate::updater::Message;
use crate::runtime::StateRuntime;
use crate::{Command, CommandSnapshot, Error, State, TaskId};

/// Owner of all registered states and commands.
///
/// The UI thread owns the context: it reads and mutates states synchronously,
/// dispatches commands, and calls [`StateCtx::sync_states`] once per frame to
/// apply whatever the running commands have published.
#[derive(Default)]
pub struct StateCtx {
    runtime: StateRuntime,

    states: BTreeMap<TypeId, Box<dyn State>>,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,
}

impl StateCtx {
    /// An empty context. Register states and commands before the first frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `state`, replacing any earlier value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Make `C` available to [`StateCtx::dispatch`].
    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Arc::new(command));
    }

    /// Borrow the state of type `T`, or [`Error::StateNotFound`].
    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found::<T>("try_state"))
    }

    /// Mutably borrow the state of type `T`. UI input writes go through here.
    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found::<T>("try_state_mut"))
    }

    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        match self.try_state_mut::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Dispatch `C`, logging instead of failing when it was never recorded.
    pub fn dispatch<C: Command>(&mut self) {
        if let Err(err) = self.try_dispatch::<C>() {
            error!("{err}");
        }
    }

    /// Snapshot the states, open a new generation for `C` and spawn it.
    ///
    /// A still-running earlier dispatch of `C` is cancelled and everything it
    /// publishes afterwards is discarded by [`StateCtx::sync_states`].
    pub fn try_dispatch<C: Command>(&mut self) -> Result<TaskId, Error> {
        let command = self
            .commands
            .get(&TypeId::of::<C>())
            .cloned()
            .ok_or_else(|| Error::command_not_found::<C>("dispatch"))?;

        let snap = self.snapshot();
        let handle = self.runtime.begin_task(TypeId::of::<C>());
        let task = handle.id();
        debug!("Dispatching {} generation {}", type_name::<C>(), task.generation());

        let updater = self.runtime.latest_only_updater(task);
        let future = command.run(snap, updater, handle.cancellation_token());
        let done = self.runtime.sender();

        spawn(async move {
            future.await;
            if done.send(Message::Finished(task)).is_err() {
                debug!("State context dropped before {} finished", type_name::<C>());
            }
        });

        Ok(task)
    }

    /// Whether the latest dispatch of `C` has not finished yet.
    pub fn has_pending_tasks<C: Command>(&self) -> bool {
        self.runtime.is_running(TypeId::of::<C>())
    }

    /// Apply every update published since the last call.
    ///
    /// Updates tagged with a superseded generation are dropped.
    pub fn sync_states(&mut self) {
        for message in self.runtime.drain() {
            match message {
                Message::Update {
                    task,
                    state_id,
                    value,
                } => {
                    if !self.runtime.is_latest(task) {
                        debug!(
                            "Dropping stale update from generation {}",
                            task.generation()
                        );
                        continue;
                    }
                    match self.states.get_mut(&state_id) {
                        Some(state) => state.assign_box(value),
                        None => warn!("Update for unregistered state {state_id:?} ignored"),
                    }
                }
                Message::Finished(task) => self.runtime.finish(task),
            }
        }
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(cloned) = state.snapshot() {
                snap.insert_cloned(*id, cloned);
            }
        }
        snap
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("runtime", &self.runtime)
            .field("states", &self.states.len())
            .field("commands", &self.commands.len())
            .finish()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn(future: impl Future<Output = ()> + Send + 'static) {
    tokio::spawn(future);
}

#[cfg(target_arch = "wasm32")]
fn spawn(future: impl Future<Output = ()> + Send + 'static) {
    wasm_bindgen_futures::spawn_local(future);
}
