use std::time::Duration;

pub const HOT_SERIES_INTERVAL: Duration = Duration::from_millis(5000);
pub const PREMIUM_SERIES_INTERVAL: Duration = Duration::from_millis(5500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    /// No items yet; rendered as a placeholder, timer disarmed.
    Loading,
    Showing { index: usize },
}

/// Auto-advancing slide index over a list of items.
///
/// The timer is modelled as accumulated elapsed time so that manual
/// navigation moves the index without touching the timer phase.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    interval: Duration,
    elapsed: Duration,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>, interval: Duration) -> Self {
        Self {
            items,
            index: 0,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timer_armed(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn state(&self) -> CarouselState {
        if self.items.is_empty() {
            CarouselState::Loading
        } else {
            CarouselState::Showing { index: self.index }
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Replaces the items. An empty list clears the timer; a shorter list
    /// wraps the index back into range.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.items.is_empty() {
            self.index = 0;
            self.elapsed = Duration::ZERO;
        } else {
            self.index %= self.items.len();
        }
    }

    pub fn tick(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        if let Some(n) = self.nonzero_len() {
            self.index = (self.index + 1) % n;
        }
    }

    pub fn prev(&mut self) {
        if let Some(n) = self.nonzero_len() {
            self.index = (self.index + n - 1) % n;
        }
    }

    /// Jumps to `index`, wrapping out-of-range values.
    pub fn select(&mut self, index: usize) {
        if let Some(n) = self.nonzero_len() {
            self.index = index % n;
        }
    }

    /// Feeds wall-clock time to the timer and returns how many ticks fired.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.timer_armed() || self.interval.is_zero() {
            return 0;
        }
        self.elapsed += elapsed;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.tick();
            fired += 1;
        }
        fired
    }

    fn nonzero_len(&self) -> Option<usize> {
        match self.items.len() {
            0 => None,
            n => Some(n),
        }
    }
}
