pub mod domain;
pub mod import;
pub mod palette;
mod standard;
mod table;

pub use domain::{
    Criterion, GeneralFact, Indicator, IndicatorId, OfficialLink, Region, RegionCode, RegionKind,
    RegionProfile, ResourceLink, Rubric, Score,
};
pub use import::{ScoreImportError, ScoreTableImporter};
pub use palette::{color_of, legend, LegendEntry, NO_DATA_COLOR};
pub use table::ScoreTable;

use std::collections::HashMap;
use tracing::warn;

pub const NO_DESCRIPTION: &str = "No description available";

/// Immutable scoring dataset handed to the map and the detail panel.
#[derive(Debug, Clone)]
pub struct Scorecard {
    regions: Vec<Region>,
    indicators: Vec<Indicator>,
    scores: ScoreTable,
    profiles: HashMap<RegionCode, RegionProfile>,
    resources: Vec<ResourceLink>,
}

impl Scorecard {
    pub fn standard() -> Self {
        Self {
            regions: standard::standard_regions(),
            indicators: standard::standard_indicators(),
            scores: ScoreTable::standard(),
            profiles: standard::standard_profiles()
                .into_iter()
                .map(|profile| (profile.code, profile))
                .collect(),
            resources: standard::standard_resources(),
        }
    }

    /// Swaps in another score table, keeping the metadata.
    pub fn with_scores(mut self, scores: ScoreTable) -> Self {
        let missing = scores.missing_pairs();
        if !missing.is_empty() {
            warn!(
                missing = missing.len(),
                "score table is incomplete; absent pairs read as moderate"
            );
        }
        self.scores = scores;
        self
    }

    /// Score for a pair, or `Score::MODERATE` when the table has no entry.
    pub fn score(&self, region: RegionCode, indicator: IndicatorId) -> Score {
        self.scores.get(region, indicator).unwrap_or_else(|| {
            warn!(%region, %indicator, "no score entry; using moderate default");
            Score::MODERATE
        })
    }

    /// String-keyed form of [`Scorecard::score`]; unknown keys also yield the default.
    pub fn score_of(&self, region: &str, indicator: &str) -> Score {
        match (RegionCode::parse(region), IndicatorId::parse(indicator)) {
            (Some(region), Some(indicator)) => self.score(region, indicator),
            _ => {
                warn!(region, indicator, "unknown score key; using moderate default");
                Score::MODERATE
            }
        }
    }

    /// Prose for a score level of an indicator, or [`NO_DESCRIPTION`].
    pub fn explanation_of(&self, indicator: &str, score: u8) -> &'static str {
        let Some(score) = Score::new(score) else {
            return NO_DESCRIPTION;
        };
        IndicatorId::parse(indicator)
            .and_then(|id| self.indicator(id))
            .map(|indicator| indicator.describe(score))
            .unwrap_or(NO_DESCRIPTION)
    }

    pub fn rubric_of(&self, indicator: &str) -> Option<&Rubric> {
        IndicatorId::parse(indicator)
            .and_then(|id| self.indicator(id))
            .and_then(|indicator| indicator.rubric.as_ref())
    }

    pub fn indicator(&self, id: IndicatorId) -> Option<&Indicator> {
        self.indicators.iter().find(|indicator| indicator.id == id)
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Indicator selected when a session starts.
    pub fn first_indicator(&self) -> IndicatorId {
        self.indicators
            .first()
            .map(|indicator| indicator.id)
            .unwrap_or(IndicatorId::NoticeTermination)
    }

    pub fn region(&self, code: RegionCode) -> Option<&Region> {
        self.regions.iter().find(|region| region.code == code)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn display_name(&self, code: RegionCode) -> &'static str {
        self.region(code)
            .map(|region| region.display_name)
            .unwrap_or(code.as_str())
    }

    pub fn profile(&self, code: RegionCode) -> Option<&RegionProfile> {
        self.profiles.get(&code)
    }

    pub fn resources(&self) -> &[ResourceLink] {
        &self.resources
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_standard_score_is_on_the_scale() {
        let scorecard = Scorecard::standard();
        for region in RegionCode::ordered() {
            for indicator in IndicatorId::ordered() {
                let score = scorecard.score(region, indicator).value();
                assert!((1..=5).contains(&score), "{region}/{indicator} = {score}");
            }
        }
    }

    #[test]
    fn absent_pairs_default_to_moderate() {
        let scorecard = Scorecard::standard().with_scores(ScoreTable::default());
        assert_eq!(
            scorecard.score(RegionCode::PE, IndicatorId::RentControl),
            Score::MODERATE
        );
        assert_eq!(scorecard.score_of("XX", "rent_control"), Score::MODERATE);
        assert_eq!(scorecard.score_of("PE", "unknown"), Score::MODERATE);
    }

    #[test]
    fn explanation_falls_back_for_unknown_inputs() {
        let scorecard = Scorecard::standard();
        assert_eq!(scorecard.explanation_of("rent_control", 1), "No rent control");
        assert_eq!(scorecard.explanation_of("nope", 3), NO_DESCRIPTION);
        assert_eq!(scorecard.explanation_of("rent_control", 0), NO_DESCRIPTION);
        assert_eq!(scorecard.explanation_of("rent_control", 9), NO_DESCRIPTION);
    }

    #[test]
    fn rubric_present_only_for_documented_indicators() {
        let scorecard = Scorecard::standard();
        let rubric = scorecard.rubric_of("rent_control").expect("rent control rubric");
        assert_eq!(rubric.levels().count(), 5);
        assert!(scorecard.rubric_of("appeals").is_none());
        assert!(scorecard.rubric_of("missing").is_none());
    }

    #[test]
    fn indicator_order_is_preserved() {
        let scorecard = Scorecard::standard();
        let ids: Vec<_> = scorecard.indicators().iter().map(|i| i.id).collect();
        assert_eq!(ids, IndicatorId::ordered().to_vec());
        assert_eq!(scorecard.first_indicator(), IndicatorId::NoticeTermination);
    }
}
