//! Fixed-capacity sliding window over recent samples

use std::collections::VecDeque;

/// Ordered buffer of the most recent N samples.
///
/// Insertion order is semantically meaningful: it defines "recent". Once
/// capacity is reached, every push evicts the oldest sample (strict FIFO),
/// so length never exceeds capacity and never shrinks below it again.
///
/// Carries no synchronization of its own; the analytics engine holds its
/// lock for the duration of any read-modify sequence.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create an empty window. Capacity must be at least 1.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be at least 1");
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest if the window is full
    pub fn push(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the window has reached capacity
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate samples oldest-first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Owned copy of the contents in insertion order
    pub fn snapshot(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_bounded_by_capacity() {
        let mut window = SlidingWindow::new(3);
        for i in 0..10 {
            window.push(i as f64);
            assert_eq!(window.len(), (i + 1).min(3));
        }
    }

    #[test]
    fn push_evicts_oldest_first() {
        let mut window = SlidingWindow::new(3);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
            window.push(v);
        }
        assert_eq!(window.snapshot(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn stays_full_once_filled() {
        let mut window = SlidingWindow::new(2);
        window.push(1.0);
        assert!(!window.is_full());
        window.push(2.0);
        assert!(window.is_full());
        window.push(3.0);
        assert!(window.is_full());
        assert_eq!(window.len(), 2);
    }

    #[test]
    #[should_panic(expected = "capacity must be at least 1")]
    fn zero_capacity_is_rejected() {
        SlidingWindow::new(0);
    }
}
