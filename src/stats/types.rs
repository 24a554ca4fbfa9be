use serde::{Serialize, Serializer};
use std::fmt;

use super::summary::SummaryMetrics;

pub const NO_DATA_LABEL: &str = "No Data";

/// One labelled value handed to the charting side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: i64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

pub type RatingSeries = Vec<SeriesPoint>;

/// Difficulty rounded down to the hundred, or a placeholder.
///
/// Ordering puts every numeric bucket before `Unknown`, and `Unknown` before
/// `NoData`; placeholders never share a histogram with numeric buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DifficultyBucket {
    Rated(i32),
    Unknown,
    NoData,
}

impl DifficultyBucket {
    pub fn from_rating(rating: i32) -> Self {
        DifficultyBucket::Rated(rating.div_euclid(100) * 100)
    }

    /// Chart label, e.g. `1200+`
    pub fn label(&self) -> String {
        match self {
            DifficultyBucket::Rated(floor) => format!("{}+", floor),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for DifficultyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyBucket::Rated(floor) => write!(f, "{}", floor),
            DifficultyBucket::Unknown => write!(f, "Unknown"),
            DifficultyBucket::NoData => write!(f, "{}", NO_DATA_LABEL),
        }
    }
}

impl Serialize for DifficultyBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Histogram entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bin<K> {
    pub key: K,
    pub count: u32,
}

impl<K> Bin<K> {
    pub fn new(key: K, count: u32) -> Self {
        Self { key, count }
    }
}

pub type DifficultyHistogram = Vec<Bin<DifficultyBucket>>;
pub type LabelHistogram = Vec<Bin<String>>;

/// Everything derived from one loaded profile and history
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    pub rating_series: RatingSeries,
    pub difficulty: DifficultyHistogram,
    pub verdicts: LabelHistogram,
    pub topics: LabelHistogram,
    pub summary: SummaryMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_round_down_to_hundreds() {
        assert_eq!(DifficultyBucket::from_rating(1250), DifficultyBucket::Rated(1200));
        assert_eq!(DifficultyBucket::from_rating(1299), DifficultyBucket::Rated(1200));
        assert_eq!(DifficultyBucket::from_rating(800), DifficultyBucket::Rated(800));
        assert_eq!(DifficultyBucket::from_rating(3499), DifficultyBucket::Rated(3400));
    }

    #[test]
    fn bucket_key_and_label() {
        let bucket = DifficultyBucket::Rated(1200);
        assert_eq!(bucket.to_string(), "1200");
        assert_eq!(bucket.label(), "1200+");
        assert_eq!(DifficultyBucket::Unknown.label(), "Unknown");
    }

    #[test]
    fn numeric_buckets_sort_numerically_before_placeholders() {
        let mut buckets = vec![
            DifficultyBucket::Unknown,
            DifficultyBucket::Rated(1000),
            DifficultyBucket::Rated(800),
        ];
        buckets.sort();
        assert_eq!(
            buckets,
            vec![
                DifficultyBucket::Rated(800),
                DifficultyBucket::Rated(1000),
                DifficultyBucket::Unknown
            ]
        );
    }
}
