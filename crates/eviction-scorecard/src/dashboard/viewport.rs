use crate::geography::EqualEarth;
use serde::Serialize;

pub const DEFAULT_CENTER: (f64, f64) = (-96.0, 61.0);
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const ZOOM_STEP: f64 = 1.4;
pub const MIN_ZOOM: f64 = 0.6;
pub const MAX_ZOOM: f64 = 8.0;

const MAX_LATITUDE: f64 = 85.0;

/// Geographic center and zoom factor of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    center: (f64, f64),
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom / ZOOM_STEP);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies the position reported at the end of a drag or wheel gesture.
    pub fn move_to(&mut self, center: (f64, f64), zoom: f64) {
        self.center = clamp_center(center);
        if zoom.is_finite() {
            self.zoom = clamp_zoom(zoom);
        }
    }

    /// Drags the map by a canvas-pixel delta; content follows the pointer.
    pub fn pan_by(&mut self, projection: &EqualEarth, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        let (cx, cy) = projection.project(self.center.0, self.center.1);
        let moved = projection.invert(cx - dx / self.zoom, cy - dy / self.zoom);
        self.center = clamp_center(moved);
    }

    pub fn transform(&self, projection: &EqualEarth) -> ViewTransform {
        let (cx, cy) = projection.project(self.center.0, self.center.1);
        ViewTransform {
            translate: (
                projection.width() / 2.0 - cx * self.zoom,
                projection.height() / 2.0 - cy * self.zoom,
            ),
            scale: self.zoom,
        }
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

fn clamp_center((lon, lat): (f64, f64)) -> (f64, f64) {
    if !lon.is_finite() || !lat.is_finite() {
        return DEFAULT_CENTER;
    }
    (lon.clamp(-180.0, 180.0), lat.clamp(-MAX_LATITUDE, MAX_LATITUDE))
}

/// Canvas transform `screen = projected * scale + translate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewTransform {
    pub translate: (f64, f64),
    pub scale: f64,
}

impl ViewTransform {
    pub fn apply(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            x * self.scale + self.translate.0,
            y * self.scale + self.translate.1,
        )
    }

    pub fn invert(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            (x - self.translate.0) / self.scale,
            (y - self.translate.1) / self.scale,
        )
    }

    pub fn svg_attribute(&self) -> String {
        format!(
            "translate({:.2} {:.2}) scale({:.4})",
            self.translate.0, self.translate.1, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_in_is_monotonic_and_capped() {
        let mut viewport = Viewport::default();
        let mut previous = viewport.zoom();
        for _ in 0..20 {
            viewport.zoom_in();
            assert!(viewport.zoom() >= previous);
            assert!(viewport.zoom() <= MAX_ZOOM);
            previous = viewport.zoom();
        }
        assert_eq!(viewport.zoom(), MAX_ZOOM);
    }

    #[test]
    fn zoom_out_is_monotonic_and_floored() {
        let mut viewport = Viewport::default();
        let mut previous = viewport.zoom();
        for _ in 0..20 {
            viewport.zoom_out();
            assert!(viewport.zoom() <= previous);
            assert!(viewport.zoom() >= MIN_ZOOM);
            previous = viewport.zoom();
        }
        assert_eq!(viewport.zoom(), MIN_ZOOM);
    }

    #[test]
    fn reset_restores_defaults_exactly() {
        let projection = EqualEarth::canada();
        let mut viewport = Viewport::default();
        viewport.zoom_in();
        viewport.pan_by(&projection, 120.0, -40.0);
        viewport.move_to((-70.0, 50.0), 3.3);
        viewport.reset();
        assert_eq!(viewport.center(), DEFAULT_CENTER);
        assert_eq!(viewport.zoom(), DEFAULT_ZOOM);
    }

    #[test]
    fn dragging_right_moves_center_west() {
        let projection = EqualEarth::canada();
        let mut viewport = Viewport::default();
        viewport.pan_by(&projection, 50.0, 0.0);
        assert!(viewport.center().0 < DEFAULT_CENTER.0);

        let mut zoomed = Viewport::default();
        zoomed.move_to(DEFAULT_CENTER, 4.0);
        zoomed.pan_by(&projection, 50.0, 0.0);
        assert!(zoomed.center().0 > viewport.center().0);
    }

    #[test]
    fn dragging_down_past_the_pole_stops_at_the_latitude_cap() {
        let projection = EqualEarth::canada();
        let mut start = Viewport::default();
        start.move_to(DEFAULT_CENTER, MIN_ZOOM);
        start.pan_by(&projection, 200.0, 0.0);
        let (start_lon, _) = start.center();

        let mut previous = start.center().1;
        for dy in [50.0, 100.0, 200.0, 400.0, 800.0, 1600.0, 3200.0, 10_000.0] {
            let mut viewport = start;
            viewport.pan_by(&projection, 0.0, dy);
            let (lon, lat) = viewport.center();
            assert!(lat >= previous, "dy {dy}: {lat} < {previous}");
            assert!((lon - start_lon).abs() < 45.0, "dy {dy}: lon {lon}");
            previous = lat;
        }
        assert_eq!(previous, MAX_LATITUDE);
    }

    #[test]
    fn move_to_clamps_zoom_and_ignores_nan() {
        let mut viewport = Viewport::default();
        viewport.move_to((-80.0, 50.0), 40.0);
        assert_eq!(viewport.zoom(), MAX_ZOOM);
        viewport.move_to((f64::NAN, 50.0), f64::NAN);
        assert_eq!(viewport.center(), DEFAULT_CENTER);
        assert_eq!(viewport.zoom(), MAX_ZOOM);
    }

    #[test]
    fn default_transform_keeps_canvas_identity() {
        let projection = EqualEarth::canada();
        let transform = Viewport::default().transform(&projection);
        let (x, y) = transform.apply((380.0, 280.0));
        assert!((x - 380.0).abs() < 1e-9 && (y - 280.0).abs() < 1e-9);
        let back = transform.invert(transform.apply((10.0, 20.0)));
        assert!((back.0 - 10.0).abs() < 1e-9 && (back.1 - 20.0).abs() < 1e-9);
    }
}
