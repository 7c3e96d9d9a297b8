//! Full-screen image viewer state and the background scroll lock it holds.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Page-level background scroll lock.
///
/// The lock is only ever taken through [`ScrollLock::acquire`] and counts
/// its live guards; scrolling comes back when the last guard drops.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::SeqCst)
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.holders.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }
}

#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    Backdrop,
    CloseButton,
    Escape,
}

/// Where a click inside the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    Backdrop,
    CloseButton,
    Image,
}

#[derive(Debug)]
pub struct ImageModal {
    lock: ScrollLock,
    image: Option<String>,
    guard: Option<ScrollLockGuard>,
}

impl ImageModal {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            lock,
            image: None,
            guard: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Shows `url`. Opening while already open swaps the image and keeps
    /// the existing lock.
    pub fn open(&mut self, url: impl Into<String>) {
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
        self.image = Some(url.into());
    }

    pub fn dismiss(&mut self, how: Dismissal) -> bool {
        if !self.is_open() {
            return false;
        }
        tracing::trace!(?how, "image modal dismissed");
        self.image = None;
        self.guard = None;
        true
    }

    /// Clicks on the image itself never close the modal.
    pub fn click(&mut self, target: ModalTarget) -> bool {
        match target {
            ModalTarget::Backdrop => self.dismiss(Dismissal::Backdrop),
            ModalTarget::CloseButton => self.dismiss(Dismissal::CloseButton),
            ModalTarget::Image => false,
        }
    }

    pub fn key(&mut self, key: &str) -> bool {
        if key == "Escape" {
            self.dismiss(Dismissal::Escape)
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_locks_and_every_dismissal_releases() {
        let lock = ScrollLock::new();
        let mut modal = ImageModal::new(lock.clone());

        for how in [Dismissal::Backdrop, Dismissal::CloseButton, Dismissal::Escape] {
            modal.open("https://img.example/p1.jpg");
            assert!(modal.is_open());
            assert!(lock.is_locked());

            assert!(modal.dismiss(how));
            assert!(!modal.is_open());
            assert!(!lock.is_locked(), "lock leaked after {how:?}");
        }
    }

    #[test]
    fn lock_is_held_until_the_last_guard_drops() {
        let lock = ScrollLock::new();
        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(lock.is_locked());

        drop(second);
        assert!(!lock.is_locked());
    }

    #[test]
    fn closing_one_modal_keeps_the_other_locking() {
        let lock = ScrollLock::new();
        let mut catalog = ImageModal::new(lock.clone());
        let mut banner = ImageModal::new(lock.clone());
        catalog.open("a.jpg");
        banner.open("b.jpg");

        assert!(catalog.key("Escape"));
        assert!(lock.is_locked());

        assert!(banner.click(ModalTarget::Backdrop));
        assert!(!lock.is_locked());
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn image_clicks_do_not_close() {
        let lock = ScrollLock::new();
        let mut modal = ImageModal::new(lock.clone());
        modal.open("a.jpg");

        assert!(!modal.click(ModalTarget::Image));
        assert!(modal.is_open());
        assert!(lock.is_locked());

        assert!(modal.click(ModalTarget::Backdrop));
        assert!(!lock.is_locked());
    }

    #[test]
    fn only_escape_key_closes() {
        let lock = ScrollLock::new();
        let mut modal = ImageModal::new(lock.clone());
        modal.open("a.jpg");

        assert!(!modal.key("Enter"));
        assert!(modal.is_open());
        assert!(modal.key("Escape"));
        assert!(!lock.is_locked());
        assert!(!modal.key("Escape"));
    }

    #[test]
    fn reopening_swaps_image_without_leaking() {
        let lock = ScrollLock::new();
        let mut modal = ImageModal::new(lock.clone());
        modal.open("a.jpg");
        modal.open("b.jpg");
        assert_eq!(modal.image(), Some("b.jpg"));

        modal.click(ModalTarget::CloseButton);
        assert!(!lock.is_locked());

        modal.open("c.jpg");
        assert!(lock.is_locked());
        modal.key("Escape");
        assert!(!lock.is_locked());
    }

    #[test]
    fn dropping_an_open_modal_releases_the_lock() {
        let lock = ScrollLock::new();
        {
            let mut modal = ImageModal::new(lock.clone());
            modal.open("a.jpg");
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn lock_released_when_unwinding() {
        let lock = ScrollLock::new();
        let inner = lock.clone();
        let result = std::panic::catch_unwind(move || {
            let mut modal = ImageModal::new(inner);
            modal.open("a.jpg");
            panic!("render failed");
        });
        assert!(result.is_err());
        assert!(!lock.is_locked());
    }
}
