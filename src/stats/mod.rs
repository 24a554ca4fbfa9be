mod charts;
pub mod difficulty;
pub mod rating_series;
pub mod summary;
mod tally;
pub mod topics;
pub mod types;
pub mod verdicts;

pub use charts::{ChartKind, ChartSpec};
pub use difficulty::difficulty_histogram;
pub use rating_series::rating_series;
pub use summary::{SummaryMetrics, summarize};
pub use topics::topic_histogram;
pub use types::{Aggregates, Bin, DifficultyBucket, SeriesPoint};
pub use verdicts::verdict_histogram;

use crate::domain::{History, UserProfile};

/// Derive every chart and metric from a loaded profile and its history.
///
/// Pure: no I/O, inputs untouched, identical inputs give identical output.
pub fn aggregate(profile: &UserProfile, history: &History) -> Aggregates {
    Aggregates {
        rating_series: rating_series(&history.ratings),
        difficulty: difficulty_histogram(&history.submissions),
        verdicts: verdict_histogram(&history.submissions),
        topics: topic_histogram(&history.submissions),
        summary: summarize(profile.rating, history),
    }
}
