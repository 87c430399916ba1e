use super::domain::Score;
use serde::Serialize;

/// Fill for shapes and badges with no score.
pub const NO_DATA_COLOR: &str = "#9ca3af";

const SCORE_RAMP: [&str; 5] = [
    "#ef4444", // red
    "#f97316", // orange
    "#eab308", // yellow
    "#84cc16", // lime
    "#22c55e", // green
];

/// Maps a score level to its ramp color; anything outside `1..=5` gets the no-data gray.
pub fn color_of(score: Option<u8>) -> &'static str {
    match score {
        Some(value @ 1..=5) => SCORE_RAMP[usize::from(value - 1)],
        _ => NO_DATA_COLOR,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub score: Score,
    pub color: &'static str,
    pub label: &'static str,
}

pub fn legend() -> Vec<LegendEntry> {
    Score::all()
        .map(|score| LegendEntry {
            score,
            color: score.color(),
            label: score.level_label(),
        })
        .collect()
}
