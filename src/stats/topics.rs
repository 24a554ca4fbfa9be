use crate::domain::Submission;

use super::tally::OrderedTally;
use super::types::{Bin, LabelHistogram, NO_DATA_LABEL};

pub const TOP_TOPICS: usize = 10;
const NO_TOPICS_LABEL: &str = "No topics available";

/// Most frequent tags across accepted submissions.
///
/// Sorted by count descending; equal counts keep first-seen order.
pub fn topic_histogram(submissions: &[Submission]) -> LabelHistogram {
    if submissions.is_empty() {
        return vec![Bin::new(NO_DATA_LABEL.to_string(), 0)];
    }

    let tally = count_accepted_tags(submissions);
    if tally.is_empty() {
        return vec![Bin::new(NO_TOPICS_LABEL.to_string(), 0)];
    }

    top_by_count(tally.into_bins(), TOP_TOPICS)
}

fn count_accepted_tags(submissions: &[Submission]) -> OrderedTally {
    let mut tally = OrderedTally::new();

    for tag in submissions
        .iter()
        .filter(|s| s.is_accepted())
        .flat_map(|s| s.problem.tags.iter())
    {
        tally.add(tag);
    }

    tally
}

fn top_by_count(mut bins: LabelHistogram, limit: usize) -> LabelHistogram {
    // stable sort keeps encounter order among ties
    bins.sort_by(|a, b| b.count.cmp(&a.count));
    bins.truncate(limit);
    bins
}
