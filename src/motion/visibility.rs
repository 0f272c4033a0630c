use std::collections::BTreeSet;

pub const DEFAULT_THRESHOLD: f64 = 0.3;
const RATIO_TOLERANCE: f64 = 1e-3;

/// One intersection callback entry, reduced to what the tracker needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub index: usize,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Timeline entries that have been seen at least once. Never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenSet {
    seen: BTreeSet<usize>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.seen.iter().copied()
    }

    /// Folds a batch of samples in. Returns whether anything new was seen.
    pub fn observe(
        &mut self,
        samples: impl IntoIterator<Item = IntersectionSample>,
        entries: usize,
        threshold: f64,
    ) -> bool {
        let mut changed = false;
        for sample in samples {
            if sample.index >= entries {
                log::warn!("intersection for unknown timeline entry {}", sample.index);
                continue;
            }
            // reported ratios can land just under the threshold that fired them
            let reached = sample.ratio + RATIO_TOLERANCE >= threshold;
            if sample.is_intersecting && reached && self.seen.insert(sample.index) {
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(index: usize, ratio: f64) -> IntersectionSample {
        IntersectionSample {
            index,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn test_marks_entries_over_threshold() {
        let mut seen = SeenSet::new();
        assert!(seen.observe([sample(0, 0.35), sample(1, 0.1)], 3, DEFAULT_THRESHOLD));
        assert!(seen.contains(0));
        assert!(!seen.contains(1));
        assert!(!seen.observe([sample(0, 0.9)], 3, DEFAULT_THRESHOLD));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_ratio_rounded_below_threshold_still_counts() {
        let mut seen = SeenSet::new();
        let crossing = IntersectionSample {
            index: 0,
            is_intersecting: true,
            ratio: 0.299_999_98,
        };
        assert!(seen.observe([crossing], 1, DEFAULT_THRESHOLD));
        assert!(seen.contains(0));
    }

    #[test]
    fn test_never_shrinks() {
        let mut seen = SeenSet::new();
        let events = [
            sample(2, 0.5),
            sample(2, 0.0),
            sample(0, 0.3),
            sample(0, 0.0),
            sample(1, 0.29),
            sample(1, 1.0),
            sample(2, 0.0),
        ];
        let mut previous = seen.clone();
        for event in events {
            seen.observe([event], 3, DEFAULT_THRESHOLD);
            assert!(previous.iter().all(|i| seen.contains(i)));
            previous = seen.clone();
        }
        assert_eq!(seen.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_ignores_unknown_entries() {
        let mut seen = SeenSet::new();
        assert!(!seen.observe([sample(7, 1.0)], 3, DEFAULT_THRESHOLD));
        assert!(seen.is_empty());
    }

    #[test]
    fn test_not_intersecting_is_ignored() {
        let mut seen = SeenSet::new();
        let stale = IntersectionSample {
            index: 0,
            is_intersecting: false,
            ratio: 0.5,
        };
        assert!(!seen.observe([stale], 1, DEFAULT_THRESHOLD));
    }
}
