//! Component-scoped result slots.
//!
//! A page mounts a [`Scope`] for the lifetime of one render. Each piece of
//! fetched state lives in a [`Slot`] created from that scope. A completion
//! is applied only while the scope is mounted and only if it answers the
//! most recent request issued on the slot; anything else is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct Scope {
    alive: Arc<AtomicBool>,
}

impl Scope {
    pub fn mount() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    pub fn slot<T>(&self) -> Slot<T> {
        Slot {
            alive: Arc::clone(&self.alive),
            inner: Arc::new(Mutex::new(SlotInner {
                generation: 0,
                value: None,
            })),
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

/// Identifies one request issued on a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
struct SlotInner<T> {
    generation: u64,
    value: Option<T>,
}

#[derive(Debug)]
pub struct Slot<T> {
    alive: Arc<AtomicBool>,
    inner: Arc<Mutex<SlotInner<T>>>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            alive: Arc::clone(&self.alive),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Slot<T> {
    /// Starts a request; earlier tickets become stale.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.lock();
        inner.generation += 1;
        Ticket(inner.generation)
    }

    /// Applies `value` if `ticket` is current and the scope is mounted.
    pub fn settle(&self, ticket: Ticket, value: T) -> bool {
        if !self.alive.load(Ordering::SeqCst) {
            tracing::debug!(ticket = ticket.0, "scope unmounted; dropping late result");
            return false;
        }
        let mut inner = self.lock();
        if inner.generation != ticket.0 {
            tracing::debug!(
                ticket = ticket.0,
                current = inner.generation,
                "stale result dropped"
            );
            return false;
        }
        inner.value = Some(value);
        true
    }

    pub fn take(&self) -> Option<T> {
        self.lock().value.take()
    }

    pub fn is_settled(&self) -> bool {
        self.lock().value.is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SlotInner<T>> {
        // A poisoned slot only means a writer panicked mid-store; the
        // generation counter is still consistent.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: Clone> Slot<T> {
    pub fn snapshot(&self) -> Option<T> {
        self.lock().value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn latest_request_wins_over_slow_earlier_one() {
        let scope = Scope::mount();
        let slot = scope.slot::<&'static str>();

        let slow_ticket = slot.begin();
        let fast_ticket = slot.begin();

        let (release_tx, release_rx) = mpsc::channel::<()>();
        let slow = {
            let slot = slot.clone();
            thread::spawn(move || {
                release_rx.recv().unwrap();
                slot.settle(slow_ticket, "first")
            })
        };

        assert!(slot.settle(fast_ticket, "second"));
        release_tx.send(()).unwrap();
        assert!(!slow.join().unwrap());
        assert_eq!(slot.snapshot(), Some("second"));
    }

    #[test]
    fn completion_after_unmount_is_dropped() {
        let scope = Scope::mount();
        let slot = scope.slot::<Vec<u8>>();
        let ticket = slot.begin();
        drop(scope);

        assert!(!slot.settle(ticket, vec![1, 2, 3]));
        assert!(!slot.is_settled());
    }

    #[test]
    fn slots_are_independent() {
        let scope = Scope::mount();
        let logo = scope.slot::<u8>();
        let nav = scope.slot::<u8>();
        let a = logo.begin();
        let b = nav.begin();
        assert!(nav.settle(b, 2));
        assert!(logo.settle(a, 1));
        assert_eq!(logo.take(), Some(1));
        assert_eq!(nav.take(), Some(2));
        assert_eq!(nav.take(), None);
    }
}
