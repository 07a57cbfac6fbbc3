//! Bounded rolling histories and running session maxima.

/// Fixed-capacity FIFO of the most recent `N` samples.
///
/// Backed by an inline array with head/length indices, so pushing never
/// allocates. Iteration is oldest to newest.
#[derive(Debug, Clone)]
pub struct History<T, const N: usize> {
    slots: [T; N],
    head: usize,
    len: usize,
}

impl<T: Copy + Default, const N: usize> Default for History<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> History<T, N> {
    pub fn new() -> Self {
        Self {
            slots: [T::default(); N],
            head: 0,
            len: 0,
        }
    }

    /// Appends at the tail, evicting the oldest sample once full.
    pub fn push(&mut self, value: T) {
        if N == 0 {
            return;
        }
        let tail = (self.head + self.len) % N;
        self.slots[tail] = value;
        if self.len < N {
            self.len += 1;
        } else {
            self.head = (self.head + 1) % N;
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        (0..self.len).map(move |i| self.slots[(self.head + i) % N])
    }

    /// Oldest-to-newest copy of the retained samples.
    pub fn values(&self) -> Vec<T> {
        self.iter().collect()
    }

    pub fn last(&self) -> Option<T> {
        self.iter().next_back()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

/// `max(current, sample, floor)`.
pub fn update_max(current: f64, sample: f64, floor: f64) -> f64 {
    current.max(sample).max(floor)
}

/// Running, never-decreasing ceiling for a metric, seeded at its floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionMax {
    value: f64,
    floor: f64,
}

impl SessionMax {
    pub fn new(floor: f64) -> Self {
        Self {
            value: floor,
            floor,
        }
    }

    pub fn update(&mut self, sample: f64) -> f64 {
        self.value = update_max(self.value, sample, self.floor);
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn history_starts_empty() {
        let h: History<f64, 3> = History::new();
        assert!(h.is_empty());
        assert_eq!(h.last(), None);
        assert_eq!(h.capacity(), 3);
        assert!(h.values().is_empty());
    }

    #[test]
    fn history_evicts_oldest() {
        let mut h: History<u32, 3> = History::new();
        for v in 1..=5 {
            h.push(v);
        }
        assert_eq!(h.values(), vec![3, 4, 5]);
        assert_eq!(h.last(), Some(5));
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn zero_capacity_history_stays_empty() {
        let mut h: History<u32, 0> = History::new();
        h.push(1);
        assert!(h.is_empty());
    }

    #[test]
    fn session_max_respects_floor() {
        let mut m = SessionMax::new(10.0);
        assert_eq!(m.value(), 10.0);
        assert_eq!(m.update(3.0), 10.0);
        assert_eq!(m.update(42.0), 42.0);
        assert_eq!(m.update(5.0), 42.0);
        assert_eq!(m.update(f64::NAN), 42.0);
    }

    proptest! {
        #[test]
        fn prop_history_keeps_most_recent(values in proptest::collection::vec(any::<u32>(), 0..100)) {
            let mut h: History<u32, 10> = History::new();
            for v in &values {
                h.push(*v);
            }
            let keep = values.len().min(10);
            prop_assert_eq!(h.len(), keep);
            prop_assert_eq!(h.values(), values[values.len() - keep..].to_vec());
        }

        #[test]
        fn prop_session_max_never_decreases(samples in proptest::collection::vec(0.0f64..1e9, 0..50)) {
            let mut m = SessionMax::new(1024.0);
            let mut prev = m.value();
            for s in samples {
                let next = m.update(s);
                prop_assert!(next >= prev);
                prop_assert!(next >= 1024.0);
                prev = next;
            }
        }
    }
}
