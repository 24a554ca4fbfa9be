use crate::domain::RatingChange;

use super::types::{NO_DATA_LABEL, RatingSeries, SeriesPoint};

/// One point per contest in upstream order, or a single zero placeholder
pub fn rating_series(ratings: &[RatingChange]) -> RatingSeries {
    if ratings.is_empty() {
        return vec![SeriesPoint::new(NO_DATA_LABEL, 0)];
    }

    ratings
        .iter()
        .enumerate()
        .map(|(index, change)| to_point(index, change))
        .collect()
}

fn to_point(index: usize, change: &RatingChange) -> SeriesPoint {
    SeriesPoint::new(format!("Contest {}", index + 1), i64::from(change.new_rating))
}
