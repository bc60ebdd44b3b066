use std::fmt;

/// Pickups gathered during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectableTally {
    collected: u32,
    total: u32,
}

impl CollectableTally {
    pub fn new(total: u32) -> Self {
        Self {
            collected: 0,
            total,
        }
    }

    pub fn collect(&mut self) -> u32 {
        self.collected = self.collected.saturating_add(1);
        self.collected
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.collected >= self.total
    }

    /// Counter text, e.g. `3/10`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CollectableTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collected, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_counts_up_to_total() {
        let mut tally = CollectableTally::new(2);
        assert_eq!(tally.label(), "0/2");

        tally.collect();
        assert!(!tally.is_complete());
        assert_eq!(tally.collect(), 2);
        assert_eq!(tally.label(), "2/2");
        assert!(tally.is_complete());
    }

    #[test]
    fn empty_course_is_never_complete() {
        assert!(!CollectableTally::new(0).is_complete());
    }
}
