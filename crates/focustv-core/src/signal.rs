//! Signal/slot system for focustv.
//!
//! A type-safe observer mechanism: objects expose [`Signal`]s that emit when
//! their state changes, and connected slots (closures) are invoked in
//! response.
//!
//! Slots are always invoked directly on the emitting thread. The widget tree
//! this crate serves is single-threaded and event-loop driven, so there is no
//! queued or cross-thread dispatch here.
//!
//! # Example
//!
//! ```
//! use focustv_core::Signal;
//!
//! let focus_changed = Signal::<bool>::new();
//!
//! let id = focus_changed.connect(|&focused| {
//!     println!("focused: {focused}");
//! });
//!
//! focus_changed.emit(true);
//! focus_changed.disconnect(id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Returned by [`Signal::connect`]; pass it to [`Signal::disconnect`] to
    /// remove the slot.
    pub struct ConnectionId;
}

struct Connection<Args> {
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal with any number of connected slots.
///
/// `Args` is the argument type passed to slots; use `()` for signals with no
/// payload.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// Returns a [`ConnectionId`] for later disconnection.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a specific slot.
    ///
    /// Returns `true` if the connection existed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block or unblock emission.
    ///
    /// While blocked, [`emit`](Self::emit) does nothing. Useful during batch
    /// setup to avoid cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check whether emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking every connected slot with `args`.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: crate::logging::targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        // Snapshot the slots so a slot that connects or disconnects during
        // emission does not deadlock on the connection table.
        let slots: Vec<_> = self
            .connections
            .lock()
            .iter()
            .map(|(_, conn)| conn.slot.clone())
            .collect();

        tracing::trace!(
            target: crate::logging::targets::SIGNAL,
            connection_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<bool>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

    #[test]
    fn test_connect_and_emit() {
        let signal = Signal::<i32>::new();
        let sum = Arc::new(AtomicU32::new(0));

        let sum_clone = sum.clone();
        signal.connect(move |&n| {
            sum_clone.fetch_add(n as u32, Ordering::SeqCst);
        });

        signal.emit(3);
        signal.emit(4);
        assert_eq!(sum.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let fired = Arc::new(AtomicBool::new(false));

        let fired_clone = fired.clone();
        let id = signal.connect(move |_| {
            fired_clone.store(true, Ordering::SeqCst);
        });

        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));

        signal.emit(());
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[test]
    fn test_multiple_slots() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicU32::new(0));

        for _ in 0..3 {
            let count_clone = count.clone();
            signal.connect(move |_| {
                count_clone.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(signal.connection_count(), 3);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_blocked_signal_does_not_emit() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        assert!(signal.is_blocked());
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();
        signal.connect(|_| {});
        signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 2);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }
}
