mod palette;
mod render;

pub use palette::{rank_color, rating_color};
pub use render::{activity, chart, history_notice, profile_card, snapshot_report, summary};
