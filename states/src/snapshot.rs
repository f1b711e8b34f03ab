//! Point-in-time state clones handed to commands.
//!
//! Only states whose [`State::snapshot`](crate::State::snapshot) returns `Some`
//! appear here; UI-only states such as search text stay out.

use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

/// Read-only clones of the states a command may see, taken at dispatch time.
#[derive(Default)]
pub struct CommandSnapshot {
    states: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self {
            states: BTreeMap::new(),
        }
    }

    /// Store a clone produced by [`State::snapshot`](crate::State::snapshot).
    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.states.insert(id, value);
    }

    /// The cloned `T`, if its state opted into snapshots.
    pub fn try_state<T: 'static>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was not registered or does not provide a snapshot.
    pub fn state<T: 'static>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|| panic!("State snapshot for {} is missing", type_name::<T>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_inserted_value() {
        let mut snap = CommandSnapshot::new();
        snap.insert_cloned(TypeId::of::<u32>(), Box::new(5_u32));

        assert_eq!(snap.try_state::<u32>(), Some(&5));
        assert_eq!(*snap.state::<u32>(), 5);
    }

    #[test]
    fn missing_value_is_none() {
        let snap = CommandSnapshot::new();
        assert!(snap.try_state::<String>().is_none());
    }

    #[test]
    #[should_panic(expected = "State snapshot for")]
    fn state_panics_when_missing() {
        let snap = CommandSnapshot::new();
        let _value: &String = snap.state::<String>();
    }
}
