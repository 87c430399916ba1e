pub mod detail;
pub mod map;
pub mod picker;
pub mod render;
pub mod selection;
pub mod theme;
pub mod viewport;

pub use detail::{detail_panel, DetailPanel, IndicatorScoreView, RubricLevelView};
pub use map::{shape_style, Cursor, MapRenderer, MapScene, MapShape, ShapeStyle};
pub use picker::{filtered_regions, matches_query, province_picker, PickerEntry, PickerScope};
pub use render::{render_page, render_svg, Page};
pub use selection::{IndicatorOrigin, Reading, SelectionError, SelectionEvent, SelectionState};
pub use theme::{Theme, ThemeName};
pub use viewport::{ViewTransform, Viewport};

use crate::geography::{BoundaryDataset, EqualEarth, GeographySource, RegionResolver};
use crate::scoring::{IndicatorId, RegionCode, Scorecard};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct DashboardOptions {
    pub theme: Theme,
    pub picker_scope: PickerScope,
}

/// One interactive session over a scorecard and a boundary dataset.
#[derive(Debug)]
pub struct Dashboard {
    scorecard: Arc<Scorecard>,
    resolver: RegionResolver,
    projection: EqualEarth,
    theme: Theme,
    picker_scope: PickerScope,
    dataset: BoundaryDataset,
    source: GeographySource,
    state: SelectionState,
}

impl Dashboard {
    pub fn new(
        scorecard: Arc<Scorecard>,
        dataset: BoundaryDataset,
        source: GeographySource,
        options: DashboardOptions,
    ) -> Self {
        let state = SelectionState::for_scorecard(&scorecard);
        Self {
            scorecard,
            resolver: RegionResolver::standard(),
            projection: EqualEarth::canada(),
            theme: options.theme,
            picker_scope: options.picker_scope,
            dataset,
            source,
            state,
        }
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.scorecard
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn source(&self) -> &GeographySource {
        &self.source
    }

    pub fn projection(&self) -> &EqualEarth {
        &self.projection
    }

    /// Replaces the boundary dataset, e.g. after the probe switched sources.
    pub fn set_geography(&mut self, source: GeographySource, dataset: BoundaryDataset) {
        info!(%source, features = dataset.len(), "geography source changed");
        self.source = source;
        self.dataset = dataset;
        self.state.apply(SelectionEvent::Hover(None), &self.projection);
    }

    pub fn dispatch(&mut self, event: SelectionEvent) {
        self.state.apply(event, &self.projection);
    }

    pub fn choose_indicator(
        &mut self,
        raw: &str,
        origin: IndicatorOrigin,
    ) -> Result<IndicatorId, SelectionError> {
        let indicator = IndicatorId::parse(raw)
            .filter(|id| self.scorecard.indicator(*id).is_some())
            .ok_or_else(|| SelectionError::UnknownIndicator(raw.trim().to_string()))?;
        self.dispatch(SelectionEvent::ChooseIndicator { indicator, origin });
        Ok(indicator)
    }

    /// Picker or free-text region choice.
    pub fn select_region(&mut self, raw: &str) -> Result<RegionCode, SelectionError> {
        let region = self
            .resolver
            .resolve_code_or_name(raw)
            .ok_or_else(|| SelectionError::UnknownRegion(raw.trim().to_string()))?;
        self.dispatch(SelectionEvent::SelectRegion(region));
        Ok(region)
    }

    /// Click at a canvas pixel; selects the region under it when interactive.
    pub fn click(&mut self, x: f64, y: f64) -> Option<RegionCode> {
        let region = self.map_scene().shape_at(x, y).and_then(|shape| shape.region);
        match region {
            Some(region) => self.dispatch(SelectionEvent::SelectRegion(region)),
            None => debug!(x, y, "click hit no interactive shape"),
        }
        region
    }

    /// Pointer moved to a canvas pixel; returns the hovered shape's region.
    pub fn hover_at(&mut self, x: f64, y: f64) -> Option<RegionCode> {
        let (index, region) = self
            .map_scene()
            .shape_at(x, y)
            .map_or((None, None), |shape| (Some(shape.index), shape.region));
        self.dispatch(SelectionEvent::Hover(index));
        region
    }

    pub fn map_scene(&self) -> MapScene {
        MapRenderer::new(&self.scorecard, &self.resolver, &self.projection, &self.theme)
            .render(&self.dataset, &self.state)
    }

    pub fn detail_panel(&self) -> Option<DetailPanel> {
        detail_panel(&self.scorecard, &self.state)
    }

    pub fn picker(&self) -> Vec<PickerEntry> {
        province_picker(&self.scorecard, self.state.indicator(), self.picker_scope)
    }

    pub fn filtered_regions(&self) -> Vec<RegionCode> {
        filtered_regions(&self.scorecard, self.state.query())
    }

    pub fn reading(&self) -> Option<Reading> {
        self.state.reading(&self.scorecard)
    }

    pub fn render_html(&self, stamp: Option<&str>) -> String {
        let scene = self.map_scene();
        let detail = self.detail_panel();
        let picker = self.picker();
        render_page(
            &Page {
                scorecard: &self.scorecard,
                state: &self.state,
                scene: &scene,
                detail: detail.as_ref(),
                picker: &picker,
                source: &self.source,
                stamp,
            },
            &self.theme,
        )
    }
}
