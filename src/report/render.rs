use chrono::{DateTime, Utc};
use colored::Colorize;

use super::palette::{rank_color, rating_color};
use crate::domain::{History, LoadResult, UserProfile};
use crate::services::Snapshot;
use crate::stats::{ChartSpec, SummaryMetrics};

const BAR_WIDTH: usize = 32;
const LABEL_WIDTH: usize = 22;

/// Full terminal report for one lookup
pub fn snapshot_report(snapshot: &Snapshot) -> String {
    let mut out = profile_card(&snapshot.profile);

    if let Some(history) = snapshot.history.data() {
        out.push_str(&activity(history));
    }

    if let Some(notice) = history_notice(&snapshot.history) {
        out.push('\n');
        out.push_str(&notice);
        out.push('\n');
    }

    for spec in snapshot.aggregates.charts() {
        out.push('\n');
        out.push_str(&chart(&spec));
    }

    out
}

pub fn profile_card(profile: &UserProfile) -> String {
    let color = rank_color(profile.rank.as_deref());
    let initial = profile.avatar_initial().unwrap_or('?');

    let mut out = format!(
        "[{}] {}\n",
        initial.to_string().color(color).bold(),
        profile.handle.color(color).bold()
    );
    out.push_str(&format!(
        "  Rank:       {}\n",
        profile.rank.as_deref().unwrap_or("Unrated").color(color)
    ));
    out.push_str(&format!("  Rating:     {}\n", colored_rating(profile.rating)));
    out.push_str(&format!("  Max rating: {}\n", colored_rating(profile.max_rating)));
    if let Some(max_rank) = &profile.max_rank {
        out.push_str(&format!("  Max rank:   {}\n", max_rank));
    }
    if let Some(country) = &profile.country {
        out.push_str(&format!("  Country:    {}\n", country));
    }
    if let Some(organization) = &profile.organization {
        out.push_str(&format!("  Org:        {}\n", organization));
    }

    out
}

/// Most recent contest and submission, dated in UTC
pub fn activity(history: &History) -> String {
    if history.is_empty() {
        return "  No rated contests or submissions yet\n".to_string();
    }

    let mut out = String::new();
    if let Some(contest) = history.ratings.last() {
        out.push_str(&format!(
            "  Last contest:    {} on {} ({:+})\n",
            contest.contest_name,
            format_date(contest.updated_at()),
            contest.delta()
        ));
    }
    if let Some(submission) = history.submissions.iter().max_by_key(|s| s.creation_time_seconds) {
        out.push_str(&format!(
            "  Last submission: {} on {}\n",
            submission.verdict_label(),
            format_date(submission.submitted_at())
        ));
    }
    out
}

/// Horizontal ASCII bars scaled to the largest value in the chart
pub fn chart(spec: &ChartSpec) -> String {
    let mut out = format!("{}\n", spec.title.bold());

    let max = spec.points.iter().map(|p| p.value).max().unwrap_or(0).max(0);
    for point in &spec.points {
        out.push_str(&format!(
            "  {:<width$} {} {}\n",
            truncate(&point.label, LABEL_WIDTH),
            bar(point.value, max),
            point.value,
            width = LABEL_WIDTH
        ));
    }

    out
}

pub fn summary(metrics: &SummaryMetrics) -> String {
    [
        format!("{}", "Analysis".bold()),
        format!("  Success rate:      {}", metrics.success_rate_label()),
        format!("  Average rating:    {}", metrics.avg_rating_label()),
        format!("  Contests:          {}", metrics.contest_count),
        format!("  Total submissions: {}", metrics.total_submissions),
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect()
}

pub fn history_notice(history: &LoadResult<History>) -> Option<String> {
    history
        .reason()
        .map(|reason| format!("{} {}", "!".yellow().bold(), reason.yellow()))
}

// --- Helper Methods ---

fn format_date(at: Option<DateTime<Utc>>) -> String {
    at.map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "an unknown date".to_string())
}

fn colored_rating(rating: Option<i32>) -> String {
    match rating {
        Some(value) => value.to_string().color(rating_color(value)).to_string(),
        None => "Unrated".to_string(),
    }
}

fn bar(value: i64, max: i64) -> String {
    if max <= 0 || value <= 0 {
        return String::new();
    }
    let width = (value as f64 / max as f64 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(width.max(1))
}

fn truncate(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    let mut short: String = label.chars().take(width - 1).collect();
    short.push('…');
    short
}
