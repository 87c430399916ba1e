use super::picker::matches_query;
use super::selection::SelectionState;
use super::theme::Theme;
use super::viewport::ViewTransform;
use crate::geography::{feature_name, BoundaryDataset, EqualEarth, RegionResolver, Resolution};
use crate::scoring::{color_of, IndicatorId, RegionCode, Score, Scorecard};
use geo::{Contains, Coord, LineString, MapCoords, MultiPolygon, Point};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use tracing::debug;

const DIMMED_OPACITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    Pointer,
    Default,
}

/// Presentation of one shape, derived from data and interaction flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub opacity: f64,
    pub cursor: Cursor,
    pub emphasized: bool,
}

/// Hover only changes the outline; fill always encodes the score.
pub fn shape_style(
    fill: &'static str,
    interactive: bool,
    hovered: bool,
    dimmed: bool,
    theme: &Theme,
) -> ShapeStyle {
    let emphasized = interactive && hovered;
    ShapeStyle {
        fill,
        stroke: if emphasized {
            theme.hover_stroke
        } else {
            theme.shape_stroke
        },
        stroke_width: if emphasized {
            theme.hover_stroke_width
        } else {
            theme.shape_stroke_width
        },
        opacity: if dimmed { DIMMED_OPACITY } else { 1.0 },
        cursor: if interactive {
            Cursor::Pointer
        } else {
            Cursor::Default
        },
        emphasized,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MapShape {
    pub index: usize,
    pub name: Option<String>,
    pub region: Option<RegionCode>,
    pub score: Option<Score>,
    pub path: String,
    pub style: ShapeStyle,
    /// Projected outline in untransformed canvas units.
    #[serde(skip)]
    outline: MultiPolygon<f64>,
}

impl MapShape {
    pub fn interactive(&self) -> bool {
        self.region.is_some()
    }

    fn contains(&self, (x, y): (f64, f64)) -> bool {
        self.outline.contains(&Point::new(x, y))
    }
}

/// A fully styled frame of the map for one selection state.
#[derive(Debug, Clone, Serialize)]
pub struct MapScene {
    pub width: f64,
    pub height: f64,
    pub indicator: IndicatorId,
    pub transform: ViewTransform,
    pub shapes: Vec<MapShape>,
}

impl MapScene {
    /// Topmost shape under a canvas pixel.
    pub fn shape_at(&self, x: f64, y: f64) -> Option<&MapShape> {
        let point = self.transform.invert((x, y));
        self.shapes.iter().rev().find(|shape| shape.contains(point))
    }

    /// Fill used for each painted region.
    pub fn region_fills(&self) -> BTreeMap<RegionCode, &'static str> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.region.map(|region| (region, shape.style.fill)))
            .collect()
    }
}

pub struct MapRenderer<'a> {
    scorecard: &'a Scorecard,
    resolver: &'a RegionResolver,
    projection: &'a EqualEarth,
    theme: &'a Theme,
}

impl<'a> MapRenderer<'a> {
    pub fn new(
        scorecard: &'a Scorecard,
        resolver: &'a RegionResolver,
        projection: &'a EqualEarth,
        theme: &'a Theme,
    ) -> Self {
        Self {
            scorecard,
            resolver,
            projection,
            theme,
        }
    }

    pub fn render(&self, dataset: &BoundaryDataset, state: &SelectionState) -> MapScene {
        let shapes = dataset
            .features()
            .iter()
            .enumerate()
            .filter(|(_, feature)| feature.has_area())
            .map(|(index, feature)| {
                let name = feature_name(feature);
                let region = match self.resolver.resolve_feature(feature) {
                    Resolution::Resolved(code) => Some(code),
                    Resolution::Unresolved => {
                        debug!(
                            index,
                            name = name.as_deref().unwrap_or("<unnamed>"),
                            "unresolved boundary feature"
                        );
                        None
                    }
                };
                let score = region.map(|code| self.scorecard.score(code, state.indicator()));
                let dimmed = region.is_some_and(|code| {
                    !matches_query(self.scorecard.display_name(code), state.query())
                });
                let style = shape_style(
                    color_of(score.map(Score::value)),
                    region.is_some(),
                    state.hovered() == Some(index),
                    dimmed,
                    self.theme,
                );

                let outline = feature.geometry.map_coords(|Coord { x, y }| {
                    let (x, y) = self.projection.project(x, y);
                    Coord { x, y }
                });

                MapShape {
                    index,
                    name,
                    region,
                    score,
                    path: svg_path(&outline),
                    style,
                    outline,
                }
            })
            .collect();

        MapScene {
            width: self.projection.width(),
            height: self.projection.height(),
            indicator: state.indicator(),
            transform: state.viewport().transform(self.projection),
            shapes,
        }
    }
}

fn svg_path(outline: &MultiPolygon<f64>) -> String {
    let mut path = String::new();
    let rings = outline
        .iter()
        .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()));
    for ring in rings {
        write_ring(&mut path, ring);
    }
    path
}

/// `Z` closes the ring, so a repeated closing coordinate is skipped.
fn write_ring(path: &mut String, ring: &LineString<f64>) {
    let coords = match ring.0.split_last() {
        Some((_, open)) if ring.is_closed() => open,
        _ => ring.0.as_slice(),
    };
    if coords.is_empty() {
        return;
    }
    for (i, Coord { x, y }) in coords.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{command}{x:.2},{y:.2}");
    }
    path.push('Z');
}
