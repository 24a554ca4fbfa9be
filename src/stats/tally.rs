use std::collections::HashMap;

use super::types::{Bin, LabelHistogram};

/// Counter that remembers the order in which keys were first seen
#[derive(Debug, Default)]
pub struct OrderedTally {
    bins: LabelHistogram,
    positions: HashMap<String, usize>,
}

impl OrderedTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.positions.get(key) {
            Some(&position) => self.bins[position].count += 1,
            None => self.insert(key),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn into_bins(self) -> LabelHistogram {
        self.bins
    }

    fn insert(&mut self, key: &str) {
        self.positions.insert(key.to_string(), self.bins.len());
        self.bins.push(Bin::new(key.to_string(), 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let mut tally = OrderedTally::new();
        for key in ["b", "a", "b", "c", "a", "b"] {
            tally.add(key);
        }

        assert_eq!(
            tally.into_bins(),
            vec![
                Bin::new("b".to_string(), 3),
                Bin::new("a".to_string(), 2),
                Bin::new("c".to_string(), 1)
            ]
        );
    }
}
