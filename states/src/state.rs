use std::any::{Any, type_name};

use log::error;

/// A value stored in a [`StateCtx`](crate::StateCtx) slot, keyed by its type.
///
/// `snapshot` decides whether commands can read the state: return a boxed clone
/// to expose it through [`CommandSnapshot`](crate::CommandSnapshot), or `None`
/// (the default) to keep it UI-only.
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value produced by an updater.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body: downcast and overwrite, logging a mismatched type.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!("Discarded update for {}: value has a different type", type_name::<T>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Counter(u32);

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
            state_assign_impl(self, new_self);
        }
    }

    #[test]
    fn assign_replaces_matching_type() {
        let mut counter = Counter(1);
        counter.assign_box(Box::new(Counter(7)));
        assert_eq!(counter, Counter(7));
    }

    #[test]
    fn assign_ignores_other_types() {
        let mut counter = Counter(1);
        counter.assign_box(Box::new("not a counter"));
        assert_eq!(counter, Counter(1));
    }

    #[test]
    fn snapshot_defaults_to_none() {
        assert!(Counter(3).snapshot().is_none());
    }
}
