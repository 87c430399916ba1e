use super::viewport::Viewport;
use crate::geography::EqualEarth;
use crate::scoring::{IndicatorId, RegionCode, Score, Scorecard};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown indicator '{0}'")]
    UnknownIndicator(String),
    #[error("unknown region code '{0}'")]
    UnknownRegion(String),
}

/// Where an indicator choice was made; choices made inside the detail dialog close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorOrigin {
    Sidebar,
    Dialog,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    ChooseIndicator {
        indicator: IndicatorId,
        origin: IndicatorOrigin,
    },
    SelectRegion(RegionCode),
    CloseDialog,
    ToggleDropdown,
    Hover(Option<usize>),
    Search(String),
    ZoomIn,
    ZoomOut,
    ResetView,
    Pan { dx: f64, dy: f64 },
    MoveEnd { center: (f64, f64), zoom: f64 },
}

/// Everything the user can change during a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    indicator: IndicatorId,
    region: Option<RegionCode>,
    dialog_open: bool,
    dropdown_open: bool,
    hovered: Option<usize>,
    query: String,
    viewport: Viewport,
}

impl SelectionState {
    pub fn new(first_indicator: IndicatorId) -> Self {
        Self {
            indicator: first_indicator,
            region: None,
            dialog_open: false,
            dropdown_open: false,
            hovered: None,
            query: String::new(),
            viewport: Viewport::default(),
        }
    }

    pub fn for_scorecard(scorecard: &Scorecard) -> Self {
        Self::new(scorecard.first_indicator())
    }

    pub fn apply(&mut self, event: SelectionEvent, projection: &EqualEarth) {
        debug!(?event, "selection event");
        match event {
            SelectionEvent::ChooseIndicator { indicator, origin } => {
                self.indicator = indicator;
                if origin == IndicatorOrigin::Dialog {
                    self.dialog_open = false;
                }
            }
            SelectionEvent::SelectRegion(region) => {
                self.region = Some(region);
                self.dialog_open = true;
                self.dropdown_open = false;
            }
            SelectionEvent::CloseDialog => self.dialog_open = false,
            SelectionEvent::ToggleDropdown => self.dropdown_open = !self.dropdown_open,
            SelectionEvent::Hover(index) => self.hovered = index,
            SelectionEvent::Search(query) => self.query = query,
            SelectionEvent::ZoomIn => self.viewport.zoom_in(),
            SelectionEvent::ZoomOut => self.viewport.zoom_out(),
            SelectionEvent::ResetView => self.viewport.reset(),
            SelectionEvent::Pan { dx, dy } => self.viewport.pan_by(projection, dx, dy),
            SelectionEvent::MoveEnd { center, zoom } => self.viewport.move_to(center, zoom),
        }
    }

    pub fn indicator(&self) -> IndicatorId {
        self.indicator
    }

    /// Last selected region; kept after the dialog closes.
    pub fn region(&self) -> Option<RegionCode> {
        self.region
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Score, color and explanation of the selected region under the current indicator.
    pub fn reading(&self, scorecard: &Scorecard) -> Option<Reading> {
        let region = self.region?;
        let score = scorecard.score(region, self.indicator);
        Some(Reading {
            region,
            indicator: self.indicator,
            score,
            color: score.color(),
            explanation: scorecard.explanation_of(self.indicator.as_str(), score.value()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub region: RegionCode,
    pub indicator: IndicatorId,
    pub score: Score,
    pub color: &'static str,
    pub explanation: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (SelectionState, EqualEarth) {
        (
            SelectionState::for_scorecard(&Scorecard::standard()),
            EqualEarth::canada(),
        )
    }

    #[test]
    fn starts_on_first_indicator_with_nothing_selected() {
        let (state, _) = state();
        assert_eq!(state.indicator(), IndicatorId::NoticeTermination);
        assert_eq!(state.region(), None);
        assert!(!state.dialog_open());
        assert!(!state.dropdown_open());
        assert_eq!(state.viewport(), &Viewport::default());
    }

    #[test]
    fn selecting_region_opens_dialog_and_closes_dropdown() {
        let (mut state, projection) = state();
        state.apply(SelectionEvent::ToggleDropdown, &projection);
        assert!(state.dropdown_open());
        state.apply(SelectionEvent::SelectRegion(RegionCode::ON), &projection);
        assert_eq!(state.region(), Some(RegionCode::ON));
        assert!(state.dialog_open());
        assert!(!state.dropdown_open());
    }

    #[test]
    fn sidebar_indicator_change_keeps_dialog_open() {
        let (mut state, projection) = state();
        state.apply(SelectionEvent::SelectRegion(RegionCode::PE), &projection);
        state.apply(
            SelectionEvent::ChooseIndicator {
                indicator: IndicatorId::Appeals,
                origin: IndicatorOrigin::Sidebar,
            },
            &projection,
        );
        assert!(state.dialog_open());
        assert_eq!(state.region(), Some(RegionCode::PE));
    }

    #[test]
    fn dialog_indicator_change_closes_dialog_but_keeps_region() {
        let (mut state, projection) = state();
        state.apply(SelectionEvent::SelectRegion(RegionCode::PE), &projection);
        state.apply(
            SelectionEvent::ChooseIndicator {
                indicator: IndicatorId::RentControl,
                origin: IndicatorOrigin::Dialog,
            },
            &projection,
        );
        assert!(!state.dialog_open());
        assert_eq!(state.indicator(), IndicatorId::RentControl);
        assert_eq!(state.region(), Some(RegionCode::PE));
    }

    #[test]
    fn reading_follows_region_and_indicator() {
        let scorecard = Scorecard::standard();
        let (mut state, projection) = state();
        assert!(state.reading(&scorecard).is_none());

        state.apply(SelectionEvent::SelectRegion(RegionCode::PE), &projection);
        state.apply(
            SelectionEvent::ChooseIndicator {
                indicator: IndicatorId::RentControl,
                origin: IndicatorOrigin::Sidebar,
            },
            &projection,
        );
        let reading = state.reading(&scorecard).expect("region selected");
        assert_eq!(reading.score.value(), 5);
        assert_eq!(reading.color, "#22c55e");
        assert_eq!(
            reading.explanation,
            "Comprehensive rent control with strict enforcement"
        );

        state.apply(SelectionEvent::CloseDialog, &projection);
        assert!(state.reading(&scorecard).is_some());
    }
}
