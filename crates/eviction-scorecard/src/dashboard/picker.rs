use crate::scoring::{IndicatorId, RegionCode, RegionKind, Score, Scorecard};
use serde::Serialize;
use std::str::FromStr;

/// Which regions the province picker lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerScope {
    #[default]
    All,
    ProvincesOnly,
}

impl PickerScope {
    fn admits(self, kind: RegionKind) -> bool {
        match self {
            PickerScope::All => true,
            PickerScope::ProvincesOnly => kind == RegionKind::Province,
        }
    }
}

impl FromStr for PickerScope {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "provinces" | "provinces_only" => Ok(Self::ProvincesOnly),
            other => Err(format!("unknown picker scope '{other}' (expected all or provinces)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerEntry {
    pub code: RegionCode,
    pub name: &'static str,
    pub score: Score,
    pub color: &'static str,
}

/// Regions in the picker, alphabetical, scored under `indicator`.
pub fn province_picker(
    scorecard: &Scorecard,
    indicator: IndicatorId,
    scope: PickerScope,
) -> Vec<PickerEntry> {
    let mut entries: Vec<PickerEntry> = scorecard
        .regions()
        .iter()
        .filter(|region| scope.admits(region.kind))
        .map(|region| {
            let score = scorecard.score(region.code, indicator);
            PickerEntry {
                code: region.code,
                name: region.display_name,
                score,
                color: score.color(),
            }
        })
        .collect();
    entries.sort_by_key(|entry| entry.name.to_lowercase());
    entries
}

/// Case-insensitive substring match; a blank query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Regions whose display name matches the search query, in display order.
pub fn filtered_regions(scorecard: &Scorecard, query: &str) -> Vec<RegionCode> {
    scorecard
        .regions()
        .iter()
        .filter(|region| matches_query(region.display_name, query))
        .map(|region| region.code)
        .collect()
}
