use serde::{Serialize, Serializer};

use crate::domain::{History, RatingChange, Submission};

const NOT_AVAILABLE: &str = "N/A";

/// Headline numbers for the analysis panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    /// Accepted share in percent, one decimal; `None` without submissions
    #[serde(serialize_with = "serialize_success_rate")]
    pub success_rate: Option<f64>,
    #[serde(serialize_with = "serialize_avg_rating")]
    pub avg_rating: Option<i64>,
    pub contest_count: usize,
    pub total_submissions: usize,
}

impl SummaryMetrics {
    pub fn success_rate_label(&self) -> String {
        match self.success_rate {
            Some(rate) => format!("{:.1}%", rate),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn avg_rating_label(&self) -> String {
        match self.avg_rating {
            Some(rating) => rating.to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Summary over the loaded history, falling back to the profile rating
/// when the user has no rated contests
pub fn summarize(current_rating: Option<i32>, history: &History) -> SummaryMetrics {
    SummaryMetrics {
        success_rate: success_rate(&history.submissions),
        avg_rating: average_rating(&history.ratings).or(current_rating.map(i64::from)),
        contest_count: history.ratings.len(),
        total_submissions: history.submissions.len(),
    }
}

fn success_rate(submissions: &[Submission]) -> Option<f64> {
    if submissions.is_empty() {
        return None;
    }

    let accepted = submissions.iter().filter(|s| s.is_accepted()).count();
    let percent = accepted as f64 / submissions.len() as f64 * 100.0;
    Some(round_to_tenth(percent))
}

fn average_rating(ratings: &[RatingChange]) -> Option<i64> {
    if ratings.is_empty() {
        return None;
    }

    let sum: i64 = ratings.iter().map(|r| i64::from(r.new_rating)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    Some(mean.round() as i64)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// --- Serialization Helpers ---

fn serialize_success_rate<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(rate) => serializer.collect_str(&format_args!("{:.1}%", rate)),
        None => serializer.serialize_str(NOT_AVAILABLE),
    }
}

fn serialize_avg_rating<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(rating) => serializer.serialize_i64(*rating),
        None => serializer.serialize_str(NOT_AVAILABLE),
    }
}
