//! Equal Earth projection (Šavrič, Patterson & Jenny, 2018) fitted to the map canvas.

const A1: f64 = 1.340264;
const A2: f64 = -0.081106;
const A3: f64 = 0.000893;
const A4: f64 = 0.003796;
const INVERT_EPSILON: f64 = 1e-12;
const INVERT_ITERATIONS: usize = 12;

fn m() -> f64 {
    3f64.sqrt() / 2.0
}

/// Unit-sphere forward projection; radians in, projection-plane units out (y up).
fn raw_forward(lambda: f64, phi: f64) -> (f64, f64) {
    let l = (m() * phi.sin()).asin();
    let l2 = l * l;
    let l6 = l2 * l2 * l2;
    let x = lambda * l.cos() / (m() * (A1 + 3.0 * A2 * l2 + l6 * (7.0 * A3 + 9.0 * A4 * l2)));
    let y = l * (A1 + A2 * l2 + l6 * (A3 + A4 * l2));
    (x, y)
}

/// Points past the poles invert onto the pole instead of wrapping.
fn raw_invert(x: f64, y: f64) -> (f64, f64) {
    let l_max = m().asin();
    let y_max = raw_forward(0.0, std::f64::consts::FRAC_PI_2).1;
    let y = y.clamp(-y_max, y_max);
    let mut l = y.clamp(-l_max, l_max);
    let mut l2 = l * l;
    let mut l6 = l2 * l2 * l2;
    for _ in 0..INVERT_ITERATIONS {
        let fy = l * (A1 + A2 * l2 + l6 * (A3 + A4 * l2)) - y;
        let fpy = A1 + 3.0 * A2 * l2 + l6 * (7.0 * A3 + 9.0 * A4 * l2);
        let delta = fy / fpy;
        l = (l - delta).clamp(-l_max, l_max);
        l2 = l * l;
        l6 = l2 * l2 * l2;
        if delta.abs() < INVERT_EPSILON {
            break;
        }
    }
    let lambda = m() * x * (A1 + 3.0 * A2 * l2 + l6 * (7.0 * A3 + 9.0 * A4 * l2)) / l.cos();
    let phi = (l.sin() / m()).clamp(-1.0, 1.0).asin();
    (lambda, phi)
}

/// Maps (longitude, latitude) degrees to canvas pixels with `center` at the canvas middle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualEarth {
    scale: f64,
    center: (f64, f64),
    width: f64,
    height: f64,
    origin: (f64, f64),
}

impl EqualEarth {
    pub fn new(scale: f64, center: (f64, f64), width: f64, height: f64) -> Self {
        let origin = raw_forward(center.0.to_radians(), center.1.to_radians());
        Self {
            scale,
            center,
            width,
            height,
            origin,
        }
    }

    /// Canvas used by the dashboard map.
    pub fn canada() -> Self {
        Self::new(650.0, (-96.0, 61.0), 760.0, 560.0)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = raw_forward(lon.to_radians(), lat.to_radians());
        (
            self.width / 2.0 + (x - self.origin.0) * self.scale,
            self.height / 2.0 - (y - self.origin.1) * self.scale,
        )
    }

    pub fn invert(&self, px: f64, py: f64) -> (f64, f64) {
        let x = (px - self.width / 2.0) / self.scale + self.origin.0;
        let y = (self.height / 2.0 - py) / self.scale + self.origin.1;
        let (lambda, phi) = raw_invert(x, y);
        (lambda.to_degrees(), phi.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
    }

    #[test]
    fn center_lands_mid_canvas() {
        let projection = EqualEarth::canada();
        assert!(close(projection.project(-96.0, 61.0), (380.0, 280.0)));
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let projection = EqualEarth::canada();
        let (x_west, _) = projection.project(-120.0, 55.0);
        let (x_east, _) = projection.project(-70.0, 55.0);
        assert!(x_west < x_east);
        let (_, y_south) = projection.project(-96.0, 49.0);
        let (_, y_north) = projection.project(-96.0, 70.0);
        assert!(y_north < y_south);
    }

    #[test]
    fn invert_undoes_project() {
        let projection = EqualEarth::canada();
        for (lon, lat) in [(-96.0, 61.0), (-123.1, 49.3), (-52.7, 47.6), (-68.5, 82.5)] {
            let (px, py) = projection.project(lon, lat);
            assert!(close(projection.invert(px, py), (lon, lat)), "{lon},{lat}");
        }
    }

    #[test]
    fn points_past_the_pole_invert_onto_it() {
        let projection = EqualEarth::canada();
        let (_, pole_y) = projection.project(-96.0, 90.0);
        let mut previous = f64::NEG_INFINITY;
        for py in [pole_y + 5.0, pole_y, pole_y - 50.0, pole_y - 500.0, pole_y - 5000.0] {
            let (lon, lat) = projection.invert(380.0, py);
            assert!(lon.is_finite() && lat.is_finite(), "{py}");
            assert!(lat >= previous - 1e-9, "{py}");
            assert!((-96.0 - lon).abs() < 30.0, "{py}");
            previous = lat;
        }
        assert!((previous - 90.0).abs() < 1e-4);

        let (_, south) = projection.invert(380.0, 1e6);
        assert!((south + 90.0).abs() < 1e-4);
    }
}
