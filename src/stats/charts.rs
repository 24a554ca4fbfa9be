use serde::Serialize;

use super::types::{Aggregates, Bin, SeriesPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Pie,
    HorizontalBar,
}

/// Declarative chart description; rendering is left to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub dataset_label: Option<&'static str>,
    pub points: Vec<SeriesPoint>,
}

impl Aggregates {
    /// Rating, difficulty, verdict and topic charts, in display order
    pub fn charts(&self) -> Vec<ChartSpec> {
        vec![
            ChartSpec {
                id: "rating",
                title: "Rating History",
                kind: ChartKind::Line,
                dataset_label: Some("Rating"),
                points: self.rating_series.clone(),
            },
            ChartSpec {
                id: "difficulty",
                title: "Solved by Difficulty",
                kind: ChartKind::Doughnut,
                dataset_label: None,
                points: bins_to_points(&self.difficulty, |bucket| bucket.label()),
            },
            ChartSpec {
                id: "verdicts",
                title: "Verdicts",
                kind: ChartKind::Pie,
                dataset_label: None,
                points: bins_to_points(&self.verdicts, String::clone),
            },
            ChartSpec {
                id: "topics",
                title: "Top Topics",
                kind: ChartKind::HorizontalBar,
                dataset_label: Some("Solved Problems"),
                points: bins_to_points(&self.topics, String::clone),
            },
        ]
    }
}

fn bins_to_points<K>(bins: &[Bin<K>], label: impl Fn(&K) -> String) -> Vec<SeriesPoint> {
    bins.iter()
        .map(|bin| SeriesPoint::new(label(&bin.key), i64::from(bin.count)))
        .collect()
}
