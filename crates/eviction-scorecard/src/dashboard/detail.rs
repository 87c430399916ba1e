use super::selection::SelectionState;
use crate::scoring::{
    Criterion, IndicatorId, RegionCode, RegionProfile, ResourceLink, Score, Scorecard,
};
use serde::Serialize;

/// Resource keys linked from inside the detail dialog.
const DIALOG_RESOURCES: [&str; 2] = ["process_map", "methodology"];

#[derive(Debug, Clone, Serialize)]
pub struct RubricLevelView {
    pub score: Score,
    pub label: &'static str,
    pub color: &'static str,
    pub active: bool,
    pub criteria: &'static [Criterion],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorScoreView {
    pub indicator: IndicatorId,
    pub name: &'static str,
    pub short_name: &'static str,
    pub score: Score,
    pub color: &'static str,
    pub current: bool,
}

/// Everything the region dialog shows for the current selection.
#[derive(Debug, Clone, Serialize)]
pub struct DetailPanel {
    pub region: RegionCode,
    pub region_name: &'static str,
    pub indicator: IndicatorId,
    pub indicator_name: &'static str,
    pub score: Score,
    pub color: &'static str,
    pub level_label: &'static str,
    pub explanation: &'static str,
    /// `None` when the indicator carries no rubric; the section is omitted.
    pub rubric: Option<Vec<RubricLevelView>>,
    pub scores: Vec<IndicatorScoreView>,
    pub profile: Option<RegionProfile>,
    pub resources: Vec<ResourceLink>,
}

impl DetailPanel {
    pub fn active_level(&self) -> Option<&RubricLevelView> {
        self.rubric.as_ref()?.iter().find(|level| level.active)
    }
}

pub fn detail_panel(scorecard: &Scorecard, state: &SelectionState) -> Option<DetailPanel> {
    let reading = state.reading(scorecard)?;
    let indicator = scorecard.indicator(reading.indicator);

    let rubric = indicator.and_then(|indicator| indicator.rubric.as_ref()).map(|rubric| {
        rubric
            .levels()
            .map(|(score, criteria)| RubricLevelView {
                score,
                label: score.level_label(),
                color: score.color(),
                active: score == reading.score,
                criteria,
            })
            .collect()
    });

    let scores = scorecard
        .indicators()
        .iter()
        .map(|indicator| {
            let score = scorecard.score(reading.region, indicator.id);
            IndicatorScoreView {
                indicator: indicator.id,
                name: indicator.name,
                short_name: indicator.short_name,
                score,
                color: score.color(),
                current: indicator.id == reading.indicator,
            }
        })
        .collect();

    let resources = scorecard
        .resources()
        .iter()
        .filter(|resource| DIALOG_RESOURCES.contains(&resource.key))
        .cloned()
        .collect();

    Some(DetailPanel {
        region: reading.region,
        region_name: scorecard.display_name(reading.region),
        indicator: reading.indicator,
        indicator_name: indicator
            .map(|indicator| indicator.name)
            .unwrap_or(reading.indicator.as_str()),
        score: reading.score,
        color: reading.color,
        level_label: reading.score.level_label(),
        explanation: reading.explanation,
        rubric,
        scores,
        profile: scorecard.profile(reading.region).cloned(),
        resources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::selection::{IndicatorOrigin, SelectionEvent};
    use crate::geography::EqualEarth;

    fn selected(region: RegionCode, indicator: IndicatorId) -> SelectionState {
        let projection = EqualEarth::canada();
        let mut state = SelectionState::for_scorecard(&Scorecard::standard());
        state.apply(SelectionEvent::SelectRegion(region), &projection);
        state.apply(
            SelectionEvent::ChooseIndicator {
                indicator,
                origin: IndicatorOrigin::Sidebar,
            },
            &projection,
        );
        state
    }

    #[test]
    fn no_panel_without_region() {
        let scorecard = Scorecard::standard();
        let state = SelectionState::for_scorecard(&scorecard);
        assert!(detail_panel(&scorecard, &state).is_none());
    }

    #[test]
    fn rubric_marks_only_the_active_level() {
        let scorecard = Scorecard::standard();
        let panel = detail_panel(&scorecard, &selected(RegionCode::PE, IndicatorId::RentControl))
            .expect("panel");
        let rubric = panel.rubric.as_ref().expect("rent control has a rubric");
        assert_eq!(rubric.len(), 5);
        assert_eq!(rubric.iter().filter(|level| level.active).count(), 1);
        assert_eq!(panel.active_level().map(|level| level.score.value()), Some(5));
    }

    #[test]
    fn rubric_section_omitted_when_absent() {
        let scorecard = Scorecard::standard();
        let panel = detail_panel(&scorecard, &selected(RegionCode::ON, IndicatorId::Appeals))
            .expect("panel");
        assert!(panel.rubric.is_none());
        assert!(panel.active_level().is_none());
    }

    #[test]
    fn lists_ten_scores_with_current_flag() {
        let scorecard = Scorecard::standard();
        let panel = detail_panel(&scorecard, &selected(RegionCode::AB, IndicatorId::RentControl))
            .expect("panel");
        assert_eq!(panel.scores.len(), 10);
        let current: Vec<_> = panel.scores.iter().filter(|s| s.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].indicator, IndicatorId::RentControl);
        assert_eq!(current[0].score.value(), 1);
    }

    #[test]
    fn dialog_links_exclude_rubric_document() {
        let scorecard = Scorecard::standard();
        let panel = detail_panel(&scorecard, &selected(RegionCode::BC, IndicatorId::Appeals))
            .expect("panel");
        let keys: Vec<_> = panel.resources.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["process_map", "methodology"]);
        assert!(panel.profile.is_some());
    }
}
