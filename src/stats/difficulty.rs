use std::collections::BTreeMap;

use crate::domain::Submission;

use super::types::{Bin, DifficultyBucket, DifficultyHistogram};

/// Accepted submissions with a known problem rating, bucketed by hundreds.
///
/// Counts every accepted submission, so solving the same problem twice counts
/// twice.
pub fn difficulty_histogram(submissions: &[Submission]) -> DifficultyHistogram {
    if submissions.is_empty() {
        return vec![Bin::new(DifficultyBucket::NoData, 1)];
    }

    let counts = count_rated_accepted(submissions);
    if counts.is_empty() {
        return vec![Bin::new(DifficultyBucket::Unknown, 1)];
    }

    counts
        .into_iter()
        .map(|(bucket, count)| Bin::new(bucket, count))
        .collect()
}

fn count_rated_accepted(submissions: &[Submission]) -> BTreeMap<DifficultyBucket, u32> {
    let mut counts = BTreeMap::new();

    for rating in submissions
        .iter()
        .filter(|s| s.is_accepted())
        .filter_map(|s| s.problem.rating)
    {
        *counts.entry(DifficultyBucket::from_rating(rating)).or_insert(0) += 1;
    }

    counts
}
