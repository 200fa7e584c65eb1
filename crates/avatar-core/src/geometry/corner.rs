//! Rounded-corner cutouts for a rectangular canvas.

use tiny_skia::{Path, PathBuilder, Transform};
use tracing::debug;

use super::GeometryError;

/// Handle length of a cubic Bezier approximating a unit quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// The four placed corner cutouts of a canvas.
#[derive(Debug, Clone)]
pub struct CornerMask {
    pub top_left: Path,
    pub top_right: Path,
    pub bottom_left: Path,
    pub bottom_right: Path,
}

impl CornerMask {
    /// The corners in fill order.
    pub fn paths(&self) -> [&Path; 4] {
        [
            &self.top_left,
            &self.bottom_left,
            &self.top_right,
            &self.bottom_right,
        ]
    }
}

/// Build the top-left corner cutout for a corner radius.
///
/// The shape is the square `(-0.5, -0.5)..(r - 0.5, r - 0.5)` minus the
/// circle of radius `r` centered at `(r - 0.5, r - 0.5)`: two straight edges
/// along the canvas border and a concave quarter arc between them.
///
/// # Errors
///
/// - `GeometryError::InvalidRadius` for negative or non-finite radii
/// - `GeometryError::DegeneratePath` for a zero radius
pub fn build_corner(radius: f32) -> Result<Path, GeometryError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(GeometryError::InvalidRadius(radius));
    }
    if radius == 0.0 {
        return Err(GeometryError::DegeneratePath);
    }

    let origin = -0.5;
    let center = radius - 0.5;
    let handle = KAPPA * radius;

    let mut pb = PathBuilder::new();
    pb.move_to(origin, origin);
    pb.line_to(center, origin);
    pb.cubic_to(center - handle, origin, origin, center - handle, origin, center);
    pb.close();

    pb.finish().ok_or(GeometryError::DegeneratePath)
}

/// Build and place the four corner cutouts for a `width x height` canvas.
///
/// The top-left cutout is rotated about its bounds center by 90, -90 and
/// 180 degrees for the top-right, bottom-left and bottom-right corners.
/// Right and bottom cutouts are shifted to `side - bounds + 1`, which
/// mirrors the half-pixel outward offset of the top-left cutout onto the
/// opposite edges.
///
/// # Errors
///
/// - `GeometryError::InvalidCanvas` if either side is zero
/// - `GeometryError::RadiusTooLarge` if the radius reaches the shorter side
/// - The errors of [`build_corner`]
pub fn build_corners(width: u32, height: u32, radius: f32) -> Result<CornerMask, GeometryError> {
    if width == 0 || height == 0 {
        return Err(GeometryError::InvalidCanvas { width, height });
    }
    let limit = width.min(height);
    if radius.is_finite() && radius >= limit as f32 {
        return Err(GeometryError::RadiusTooLarge { radius, limit });
    }

    let top_left = build_corner(radius)?;
    let bounds = top_left.bounds();
    let center_x = bounds.left() + bounds.width() / 2.0;
    let center_y = bounds.top() + bounds.height() / 2.0;

    let right_pos = width as f32 - bounds.width() + 1.0;
    let bottom_pos = height as f32 - bounds.height() + 1.0;
    debug!(
        radius,
        bounds_width = bounds.width(),
        right_pos,
        bottom_pos,
        "placing corner cutouts"
    );

    let place = |degrees: f32, dx: f32, dy: f32| {
        let ts = Transform::from_rotate_at(degrees, center_x, center_y).post_translate(dx, dy);
        top_left
            .clone()
            .transform(ts)
            .ok_or(GeometryError::DegeneratePath)
    };

    Ok(CornerMask {
        top_right: place(90.0, right_pos, 0.0)?,
        bottom_left: place(-90.0, 0.0, bottom_pos)?,
        bottom_right: place(180.0, right_pos, bottom_pos)?,
        top_left,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::{FillRule, Mask, Point};

    const TOLERANCE: f32 = 1e-3;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_same_points(a: &Path, b: &Path) {
        assert_eq!(a.points().len(), b.points().len());
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert!(pa.distance(*pb) < TOLERANCE, "{pa:?} != {pb:?}");
        }
    }

    /// Anti-aliased coverage of all four cutouts on a `width x height` canvas.
    fn coverage(mask: &CornerMask, width: u32, height: u32) -> Mask {
        let mut coverage = Mask::new(width, height).unwrap();
        for path in mask.paths() {
            coverage.fill_path(path, FillRule::Winding, true, Transform::identity());
        }
        coverage
    }

    fn covered(coverage: &Mask, x: u32, y: u32) -> u8 {
        coverage.data()[(y * coverage.width() + x) as usize]
    }

    #[test]
    fn test_build_corner_invalid_radius() {
        assert!(matches!(
            build_corner(-1.0),
            Err(GeometryError::InvalidRadius(r)) if r == -1.0
        ));
        assert!(matches!(
            build_corner(f32::NAN),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert!(matches!(
            build_corner(f32::INFINITY),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert!(matches!(
            build_corner(0.0),
            Err(GeometryError::DegeneratePath)
        ));
    }

    #[test]
    fn test_build_corner_bounds_are_radius_square() {
        let b = build_corner(20.0).unwrap().bounds();
        assert_close(b.left(), -0.5);
        assert_close(b.top(), -0.5);
        assert_close(b.width(), 20.0);
        assert_close(b.height(), 20.0);
    }

    #[test]
    fn test_build_corner_area() {
        // Square minus quarter disc: r^2 * (1 - pi/4). Shift the cutout fully
        // inside the mask so no coverage is clipped at the border.
        let r = 100.0f32;
        let expected = r * r * (1.0 - std::f32::consts::FRAC_PI_4);
        let corner = build_corner(r).unwrap();

        let mut mask = Mask::new(104, 104).unwrap();
        mask.fill_path(&corner, FillRule::Winding, true, Transform::from_translate(1.0, 1.0));
        let area: f32 = mask.data().iter().map(|&c| c as f32 / 255.0).sum();

        assert!((area - expected).abs() / expected < 0.01, "area {area}");
    }

    #[test]
    fn test_build_corner_excludes_arc_interior() {
        let mask = build_corners(200, 200, 100.0).unwrap();
        let coverage = coverage(&mask, 200, 200);

        assert_eq!(covered(&coverage, 0, 0), 255);
        assert_eq!(covered(&coverage, 5, 5), 255);
        // Inside the circle along the diagonal and just under the top edge
        assert_eq!(covered(&coverage, 50, 50), 0);
        assert_eq!(covered(&coverage, 99, 0), 0);
    }

    #[test]
    fn test_build_corners_positions() {
        let mask = build_corners(200, 200, 100.0).unwrap();

        let tr = mask.top_right.bounds();
        assert_close(tr.left(), 100.5);
        assert_close(tr.right(), 200.5);
        assert_close(tr.top(), -0.5);

        let bl = mask.bottom_left.bounds();
        assert_close(bl.left(), -0.5);
        assert_close(bl.top(), 100.5);
        assert_close(bl.bottom(), 200.5);

        let br = mask.bottom_right.bounds();
        assert_close(br.left(), 100.5);
        assert_close(br.top(), 100.5);
    }

    #[test]
    fn test_build_corners_cover_canvas_corners_only() {
        let mask = build_corners(200, 200, 20.0).unwrap();
        let coverage = coverage(&mask, 200, 200);

        for (x, y) in [(0, 0), (199, 0), (0, 199), (199, 199)] {
            assert_eq!(covered(&coverage, x, y), 255, "corner pixel ({x}, {y})");
        }
        for (x, y) in [(100, 100), (100, 0), (0, 100), (199, 100), (100, 199)] {
            assert_eq!(covered(&coverage, x, y), 0, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_corners_are_rotated_copies() {
        let mask = build_corners(200, 120, 40.0).unwrap();
        let right_pos = 200.0 - 40.0 + 1.0;
        let bottom_pos = 120.0 - 40.0 + 1.0;
        // Bounds center of the top-left cutout
        let (cx, cy) = (19.5, 19.5);

        let undo = |path: &Path, degrees: f32, dx: f32, dy: f32| {
            path.clone()
                .transform(Transform::from_translate(-dx, -dy))
                .and_then(|p| p.transform(Transform::from_rotate_at(-degrees, cx, cy)))
                .unwrap()
        };

        assert_same_points(&undo(&mask.top_right, 90.0, right_pos, 0.0), &mask.top_left);
        assert_same_points(&undo(&mask.bottom_left, -90.0, 0.0, bottom_pos), &mask.top_left);
        assert_same_points(
            &undo(&mask.bottom_right, 180.0, right_pos, bottom_pos),
            &mask.top_left,
        );
    }

    #[test]
    fn test_corners_mirror_across_canvas() {
        let width = 200.0;
        let mask = build_corners(200, 200, 60.0).unwrap();

        // Every top-left point (controls included) mirrored across
        // x = width / 2 is a point of the top-right cutout.
        for p in mask.top_left.points() {
            let mirrored = Point::from_xy(width - p.x, p.y);
            let nearest = mask
                .top_right
                .points()
                .iter()
                .map(|q| q.distance(mirrored))
                .fold(f32::INFINITY, f32::min);
            assert!(nearest < TOLERANCE, "{mirrored:?} not on top-right outline");
        }
    }

    #[test]
    fn test_build_corners_radius_limits() {
        assert!(build_corners(200, 200, 150.0).is_ok());
        assert!(matches!(
            build_corners(200, 200, 200.0),
            Err(GeometryError::RadiusTooLarge { limit: 200, .. })
        ));
        assert!(matches!(
            build_corners(300, 100, 120.0),
            Err(GeometryError::RadiusTooLarge { limit: 100, .. })
        ));
        assert!(matches!(
            build_corners(0, 200, 10.0),
            Err(GeometryError::InvalidCanvas {
                width: 0,
                height: 200
            })
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
