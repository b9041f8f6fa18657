use std::f64::consts::{FRAC_PI_2, PI};

/// Surface spin: 0.002 rad per frame at 60 fps.
pub const EARTH_SPIN_RAD_PER_SEC: f64 = 0.12;
/// Cloud layer drifts slightly slower than the surface.
pub const CLOUD_SPIN_RAD_PER_SEC: f64 = 0.09;
/// Camera auto-rotation, one orbit every two minutes.
pub const AUTO_ROTATE_RAD_PER_SEC: f64 = PI / 60.0;
pub const SWAY_FREQUENCY: f64 = 0.2;
pub const SWAY_AMPLITUDE: f64 = 0.1;
pub const MIN_POLAR: f64 = PI / 3.0;
pub const MAX_POLAR: f64 = PI / 1.5;
/// Longest gap between frames that still advances the rotation; a
/// backgrounded tab resumes where it left off instead of jumping.
const MAX_FRAME_GAP_SECS: f64 = 0.1;

/// A translucent shell around the globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereLayer {
    /// Radius relative to the earth's radius of 2.0 scene units.
    pub radius: f64,
    pub opacity: f64,
    pub color: &'static str,
}

pub const EARTH_RADIUS: f64 = 2.0;
pub const TINT_LAYER: SphereLayer = SphereLayer { radius: 2.01, opacity: 0.08, color: "0, 152, 172" };
pub const CLOUD_LAYER: SphereLayer = SphereLayer { radius: 2.03, opacity: 0.4, color: "255, 255, 255" };
pub const ATMOSPHERE_LAYER: SphereLayer = SphereLayer { radius: 2.15, opacity: 0.15, color: "0, 152, 172" };

/// Dark-theme lighting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f64,
    /// Directional "sun" position in scene units.
    pub sun: (f64, f64, f64),
    pub sun_intensity: f64,
    pub emissive_intensity: f64,
}

pub const LIGHTING: Lighting = Lighting {
    ambient: 0.2,
    sun: (5.0, 3.0, 5.0),
    sun_intensity: 2.0,
    emissive_intensity: 1.5,
};

pub const STAR_COUNT: usize = 1_200;

/// Rotation state of the decorative globe.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeMotion {
    pub earth_yaw: f64,
    pub cloud_yaw: f64,
    pub orbit_yaw: f64,
    pub polar: f64,
    pub sway: f64,
    pub elapsed: f64,
    last_timestamp: Option<f64>,
}

impl Default for GlobeMotion {
    fn default() -> Self {
        Self {
            earth_yaw: 0.0,
            cloud_yaw: 0.0,
            orbit_yaw: 0.0,
            polar: FRAC_PI_2,
            sway: 0.0,
            elapsed: 0.0,
            last_timestamp: None,
        }
    }
}

impl GlobeMotion {
    /// Advance to the host frame timestamp (milliseconds).
    pub fn advance(&mut self, timestamp_ms: f64) {
        let dt = match self.last_timestamp {
            Some(previous) => ((timestamp_ms - previous) / 1000.0).clamp(0.0, MAX_FRAME_GAP_SECS),
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);

        self.elapsed += dt;
        self.earth_yaw = wrap_angle(self.earth_yaw + EARTH_SPIN_RAD_PER_SEC * dt);
        self.cloud_yaw = wrap_angle(self.cloud_yaw + CLOUD_SPIN_RAD_PER_SEC * dt);
        self.orbit_yaw = wrap_angle(self.orbit_yaw + AUTO_ROTATE_RAD_PER_SEC * dt);
        self.sway = (self.elapsed * SWAY_FREQUENCY).sin() * SWAY_AMPLITUDE;
    }

    /// Pointer drag in pixels over a globe drawn with `radius_px`.
    pub fn drag(&mut self, dx: f64, dy: f64, radius_px: f64) {
        if radius_px <= 0.0 {
            return;
        }
        self.orbit_yaw = wrap_angle(self.orbit_yaw + dx / radius_px);
        self.polar = (self.polar - dy / radius_px).clamp(MIN_POLAR, MAX_POLAR);
    }

    pub fn surface_yaw(&self) -> f64 {
        self.earth_yaw + self.orbit_yaw + self.sway
    }

    pub fn cloud_surface_yaw(&self) -> f64 {
        self.cloud_yaw + self.orbit_yaw + self.sway
    }

    /// Camera elevation above the equator.
    pub fn tilt(&self) -> f64 {
        FRAC_PI_2 - self.polar
    }
}

/// Follows one pointer (mouse, pen or finger) from press to release.
/// Other pointers are ignored while a drag is in progress, so a second
/// finger cannot make the globe jump.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerDrag {
    active: Option<(i32, f64, f64)>,
}

impl PointerDrag {
    /// Returns whether this pointer now owns the drag.
    pub fn press(&mut self, pointer_id: i32, x: f64, y: f64) -> bool {
        match self.active {
            Some((id, _, _)) if id != pointer_id => false,
            _ => {
                self.active = Some((pointer_id, x, y));
                true
            }
        }
    }

    /// Movement since the last position seen for this pointer.
    pub fn move_to(&mut self, pointer_id: i32, x: f64, y: f64) -> Option<(f64, f64)> {
        let (id, last_x, last_y) = self.active?;
        if id != pointer_id {
            return None;
        }
        self.active = Some((id, x, y));
        Some((x - last_x, y - last_y))
    }

    pub fn release(&mut self, pointer_id: i32) {
        if matches!(self.active, Some((id, _, _)) if id == pointer_id) {
            self.active = None;
        }
    }
}

fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(2.0 * PI)
}

/// Orthographic projection of a point on the unit sphere.
///
/// Returns `(x, y, depth)` with `y` pointing down the screen; the point faces
/// the viewer when `depth > 0`.
pub fn project(lat_deg: f64, lon_deg: f64, yaw: f64, tilt: f64) -> (f64, f64, f64) {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians() + yaw;

    let x = lat.cos() * lon.sin();
    let y = lat.sin();
    let z = lat.cos() * lon.cos();

    let y_tilted = y * tilt.cos() - z * tilt.sin();
    let z_tilted = y * tilt.sin() + z * tilt.cos();

    (x, -y_tilted, z_tilted)
}

/// Ray-casting point-in-polygon test over `(lon, lat)` vertices.
pub fn polygon_contains(polygon: &[(f64, f64)], lon: f64, lat: f64) -> bool {
    let mut inside = false;
    let mut j = polygon.len().wrapping_sub(1);
    for i in 0..polygon.len() {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > lat) != (yj > lat) && lon < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Rough continent outlines as `(lon, lat)` polygons.
const LANDMASSES: &[&[(f64, f64)]] = &[
    // North America
    &[(-165.0, 65.0), (-140.0, 70.0), (-95.0, 72.0), (-65.0, 60.0), (-55.0, 50.0), (-75.0, 40.0), (-80.0, 27.0), (-97.0, 20.0), (-105.0, 22.0), (-118.0, 33.0), (-125.0, 45.0), (-135.0, 58.0)],
    // Greenland
    &[(-55.0, 60.0), (-45.0, 60.0), (-20.0, 70.0), (-25.0, 82.0), (-60.0, 82.0), (-70.0, 77.0)],
    // South America
    &[(-80.0, 10.0), (-60.0, 10.0), (-35.0, -7.0), (-40.0, -22.0), (-55.0, -35.0), (-68.0, -55.0), (-75.0, -45.0), (-72.0, -18.0), (-81.0, -5.0)],
    // Europe
    &[(-10.0, 36.0), (0.0, 43.0), (-5.0, 48.0), (5.0, 58.0), (10.0, 63.0), (25.0, 71.0), (40.0, 67.0), (40.0, 45.0), (28.0, 41.0), (15.0, 38.0)],
    // Africa
    &[(-17.0, 21.0), (-10.0, 35.0), (10.0, 37.0), (32.0, 31.0), (43.0, 12.0), (51.0, 11.0), (40.0, -15.0), (33.0, -27.0), (20.0, -35.0), (12.0, -18.0), (9.0, 4.0), (-8.0, 4.0)],
    // Asia
    &[(40.0, 45.0), (40.0, 67.0), (70.0, 73.0), (110.0, 77.0), (150.0, 72.0), (178.0, 66.0), (160.0, 58.0), (140.0, 45.0), (122.0, 30.0), (108.0, 12.0), (100.0, 2.0), (92.0, 20.0), (80.0, 8.0), (72.0, 20.0), (57.0, 25.0), (48.0, 30.0)],
    // Arabia
    &[(35.0, 30.0), (48.0, 30.0), (57.0, 23.0), (52.0, 14.0), (43.0, 12.0), (35.0, 27.0)],
    // Australia
    &[(114.0, -22.0), (130.0, -12.0), (142.0, -11.0), (153.0, -27.0), (146.0, -39.0), (131.0, -32.0), (115.0, -34.0)],
];

/// `(lat, lon)` samples on land, every `step_deg` degrees.
pub fn land_points(step_deg: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    if step_deg <= 0.0 {
        return points;
    }
    let mut lat = -88.0;
    while lat <= 88.0 {
        let mut lon = -180.0;
        while lon < 180.0 {
            if LANDMASSES.iter().any(|polygon| polygon_contains(polygon, lon, lat)) {
                points.push((lat, lon));
            }
            lon += step_deg;
        }
        lat += step_deg;
    }
    points
}

/// Deterministic pseudo-random sequence in `[0, 1)` for star and cloud
/// placement, so every visit draws the same sky.
pub struct Scatter(u64);

impl Scatter {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_unit(&mut self) -> f64 {
        // xorshift64*
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        let value = self.0.wrapping_mul(0x2545_F491_4F6C_DD1D);
        (value >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_frame_only_records_the_clock() {
        let mut motion = GlobeMotion::default();
        motion.advance(5_000.0);
        assert_eq!(motion.earth_yaw, 0.0);
        assert_eq!(motion.elapsed, 0.0);
    }

    #[test]
    fn surface_spins_faster_than_clouds() {
        let mut motion = GlobeMotion::default();
        let mut now = 0.0;
        for _ in 0..60 {
            motion.advance(now);
            now += 1000.0 / 60.0;
        }
        assert!(motion.earth_yaw > motion.cloud_yaw);
        assert!(close(motion.earth_yaw, EARTH_SPIN_RAD_PER_SEC * 59.0 / 60.0));
    }

    #[test]
    fn long_pauses_do_not_jump_the_rotation() {
        let mut motion = GlobeMotion::default();
        motion.advance(0.0);
        motion.advance(60_000.0);
        assert!(close(motion.earth_yaw, EARTH_SPIN_RAD_PER_SEC * MAX_FRAME_GAP_SECS));
    }

    #[test]
    fn sway_stays_within_amplitude() {
        let mut motion = GlobeMotion::default();
        let mut now = 0.0;
        for _ in 0..5_000 {
            motion.advance(now);
            now += 50.0;
            assert!(motion.sway.abs() <= SWAY_AMPLITUDE + 1e-12);
        }
    }

    #[test]
    fn drag_tilt_respects_polar_limits() {
        let mut motion = GlobeMotion::default();
        motion.drag(0.0, 10_000.0, 100.0);
        assert!(close(motion.polar, MIN_POLAR));
        motion.drag(0.0, -10_000.0, 100.0);
        assert!(close(motion.polar, MAX_POLAR));
        motion.drag(50.0, 0.0, 0.0);
        assert!(close(motion.polar, MAX_POLAR));
    }

    #[test]
    fn projection_faces_the_viewer_at_the_meridian() {
        let (x, y, depth) = project(0.0, 0.0, 0.0, 0.0);
        assert!(close(x, 0.0) && close(y, 0.0) && close(depth, 1.0));

        let (_, _, back) = project(0.0, 180.0, 0.0, 0.0);
        assert!(back < 0.0);

        let (_, north_y, _) = project(60.0, 0.0, 0.0, 0.0);
        assert!(north_y < 0.0, "north should be drawn above the centre");
    }

    #[test]
    fn yaw_moves_points_around_the_sphere() {
        let (x, _, _) = project(0.0, 0.0, FRAC_PI_2, 0.0);
        assert!(close(x, 1.0));
    }

    #[test]
    fn polygon_test_handles_inside_and_outside() {
        let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        assert!(polygon_contains(&square, 5.0, 5.0));
        assert!(!polygon_contains(&square, 15.0, 5.0));
        assert!(!polygon_contains(&[], 0.0, 0.0));
    }

    #[test]
    fn land_samples_cover_known_places() {
        let points = land_points(2.0);
        assert!(!points.is_empty());
        // Sahara and central Australia are land; mid-Pacific is not.
        assert!(LANDMASSES.iter().any(|p| polygon_contains(p, 10.0, 20.0)));
        assert!(LANDMASSES.iter().any(|p| polygon_contains(p, 134.0, -25.0)));
        assert!(!LANDMASSES.iter().any(|p| polygon_contains(p, -150.0, 0.0)));
        assert!(land_points(0.0).is_empty());
    }

    #[test]
    fn scatter_is_deterministic_and_in_range() {
        let mut a = Scatter::new(7);
        let mut b = Scatter::new(7);
        for _ in 0..1_000 {
            let value = a.next_unit();
            assert_eq!(value, b.next_unit());
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn touch_drag_reports_deltas_between_moves() {
        let mut drag = PointerDrag::default();
        assert_eq!(drag.move_to(3, 10.0, 10.0), None);
        assert!(drag.press(3, 100.0, 200.0));
        assert_eq!(drag.move_to(3, 130.0, 190.0), Some((30.0, -10.0)));
        assert_eq!(drag.move_to(3, 125.0, 190.0), Some((-5.0, 0.0)));
        drag.release(3);
        assert_eq!(drag.move_to(3, 0.0, 0.0), None);
    }

    #[test]
    fn second_pointer_cannot_take_over_a_drag() {
        let mut drag = PointerDrag::default();
        assert!(drag.press(1, 0.0, 0.0));
        assert!(!drag.press(2, 50.0, 50.0));
        assert_eq!(drag.move_to(2, 80.0, 80.0), None);
        drag.release(2);
        assert_eq!(drag.move_to(1, 4.0, 0.0), Some((4.0, 0.0)));
        drag.release(1);
        assert!(drag.press(2, 0.0, 0.0));
    }

    #[test]
    fn touch_drag_rotates_the_globe() {
        let mut motion = GlobeMotion::default();
        let before = motion.surface_yaw();
        let mut drag = PointerDrag::default();
        drag.press(9, 0.0, 0.0);
        if let Some((dx, dy)) = drag.move_to(9, 40.0, 0.0) {
            motion.drag(dx, dy, 200.0);
        }
        assert!(close(motion.surface_yaw() - before, 0.2));
    }
}
