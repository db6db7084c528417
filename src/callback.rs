//! Typed listener registrations for change notifications
//!
//! Components expose one `Listeners<T>` per semantic event ("color changed",
//! "palette parameters changed") instead of a general event bus. Listeners
//! receive the event payload by reference and cannot reach back into the
//! component that emitted it, so a notification can never re-enter the
//! mutation that triggered it.
//!
//! # Examples
//!
//! ```ignore
//! use huewheel::callback::Listeners;
//!
//! let mut on_change: Listeners<f32> = Listeners::new();
//! let id = on_change.add(|value| log::info!("changed to {value}"));
//! on_change.emit(&0.5);
//! on_change.remove(id);
//! ```

use std::fmt;

/// Handle returned by [`Listeners::add`], used to unregister a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// An ordered set of listeners for one event type.
///
/// # Type Parameters
///
/// - `T`: The event payload, passed to each listener by reference
pub struct Listeners<T: ?Sized> {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn FnMut(&T)>)>,
}

impl<T: ?Sized> Listeners<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a listener.
    pub fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&T) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invoke every registered listener exactly once.
    pub fn emit(&mut self, value: &T) {
        for (_, listener) in self.entries.iter_mut() {
            listener(value);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
