//! Task identity and cooperative cancellation for dispatched commands.
//!
//! Every `StateCtx::dispatch` call starts a new generation for that command type.
//! Updates sent by a command carry its [`TaskId`]; the context only applies them while
//! that generation is still the latest one, so a slow request from an earlier dispatch
//! can never overwrite the result of a newer one.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Identifies one run of a command: the command type plus a monotonically increasing
/// generation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self { type_id, generation }
    }

    /// The command type this task belongs to.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher values were dispatched later.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The id the next dispatch of the same command type will receive.
    pub fn next(self) -> Self {
        Self {
            type_id: self.type_id,
            generation: self.generation + 1,
        }
    }
}

/// A running command with its cancellation token.
///
/// Cancellation is cooperative: the command observes `is_cancelled()` between
/// steps and stops early. It is never aborted mid-request.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// A clone of the token passed to the command future.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Signal the command to stop at its next check.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_keeps_type_and_bumps_generation() {
        let first = TaskId::new(TypeId::of::<String>(), 1);
        let second = first.next();

        assert_eq!(second.type_id(), first.type_id());
        assert_eq!(second.generation(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn ids_of_different_types_differ() {
        let a = TaskId::new(TypeId::of::<String>(), 1);
        let b = TaskId::new(TypeId::of::<u32>(), 1);
        assert_ne!(a, b);
    }

    #[test]
    fn cancel_is_shared_between_clones() {
        let handle = TaskHandle::new(
            TaskId::new(TypeId::of::<String>(), 1),
            CancellationToken::new(),
        );
        let token = handle.cancellation_token();
        let cloned = handle.clone();

        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
        assert!(cloned.is_cancelled());
    }
}
