use super::domain::{IndicatorId, RegionCode, Score};
use super::standard::STANDARD_SCORES;
use std::collections::HashMap;

/// Region × indicator scores. Absent pairs are allowed; readers default them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    entries: HashMap<(RegionCode, IndicatorId), Score>,
}

impl ScoreTable {
    pub fn standard() -> Self {
        let mut table = Self::default();
        for (region, row) in STANDARD_SCORES {
            for (indicator, raw) in IndicatorId::ordered().into_iter().zip(row.iter()) {
                if let Some(score) = Score::new(*raw) {
                    table.entries.insert((*region, indicator), score);
                }
            }
        }
        table
    }

    /// Inserts an entry and returns the score it replaced, if any.
    pub fn insert(
        &mut self,
        region: RegionCode,
        indicator: IndicatorId,
        score: Score,
    ) -> Option<Score> {
        self.entries.insert((region, indicator), score)
    }

    pub fn get(&self, region: RegionCode, indicator: IndicatorId) -> Option<Score> {
        self.entries.get(&(region, indicator)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs of the fixed region and indicator sets with no entry.
    pub fn missing_pairs(&self) -> Vec<(RegionCode, IndicatorId)> {
        RegionCode::ordered()
            .into_iter()
            .flat_map(|region| {
                IndicatorId::ordered()
                    .into_iter()
                    .map(move |indicator| (region, indicator))
            })
            .filter(|pair| !self.entries.contains_key(pair))
            .collect()
    }

    /// Entries in region then indicator display order.
    pub fn rows(&self) -> Vec<(RegionCode, IndicatorId, Score)> {
        RegionCode::ordered()
            .into_iter()
            .flat_map(|region| {
                IndicatorId::ordered()
                    .into_iter()
                    .filter_map(move |indicator| {
                        self.get(region, indicator)
                            .map(|score| (region, indicator, score))
                    })
            })
            .collect()
    }
}
