use crate::domain::Submission;

use super::tally::OrderedTally;
use super::types::{Bin, LabelHistogram, NO_DATA_LABEL};

/// Submissions per verdict, in first-seen order
pub fn verdict_histogram(submissions: &[Submission]) -> LabelHistogram {
    if submissions.is_empty() {
        return vec![Bin::new(NO_DATA_LABEL.to_string(), 1)];
    }

    let mut tally = OrderedTally::new();
    for submission in submissions {
        tally.add(submission.verdict_label());
    }
    tally.into_bins()
}
