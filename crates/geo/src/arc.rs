//! Flight-arc paths: cubic Bézier curves bowed outward from the globe.

use bevy::prelude::*;

/// Outward scale applied to an arc's midpoint so the curve clears the
/// sphere's surface instead of cutting through it.
pub const BOW_FACTOR: f32 = 1.3;

/// Phase progression speed for the moving bullets, in cycles per second.
pub const ARC_PHASE_SPEED: f32 = 0.1;

/// A smooth path between two points on the globe surface.
///
/// Internally a cubic Bézier whose two interior control points are both the
/// straight-line midpoint of the endpoints pushed away from the origin by
/// [`BOW_FACTOR`]. Repeating the interior point degenerates the cubic toward
/// a quadratic-like bow, which is exactly the shape we want.
#[derive(Clone, Copy, Debug)]
pub struct ArcPath {
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
}

impl ArcPath {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        let mid = start.lerp(end, 0.5) * BOW_FACTOR;
        Self {
            p0: start,
            p1: mid,
            p2: mid,
            p3: end,
        }
    }

    pub fn start(&self) -> Vec3 {
        self.p0
    }

    pub fn end(&self) -> Vec3 {
        self.p3
    }

    /// Evaluate the curve at `phase`.
    ///
    /// `point_at(0.0)` returns the start point exactly and `point_at(1.0)`
    /// the end point exactly (the Bernstein weights are exactly one and zero
    /// at the ends). Phases outside `[0, 1]` extrapolate; callers clamp or
    /// wrap first.
    pub fn point_at(&self, phase: f32) -> Vec3 {
        let t = phase;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;
        let t2 = t * t;
        let t3 = t2 * t;
        self.p0 * mt3 + self.p1 * 3.0 * mt2 * t + self.p2 * 3.0 * mt * t2 + self.p3 * t3
    }

    /// Curve derivative at `phase`. Not normalized; callers that need a
    /// direction normalize it themselves.
    pub fn tangent_at(&self, phase: f32) -> Vec3 {
        let t = phase;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let t2 = t * t;
        (self.p1 - self.p0) * 3.0 * mt2
            + (self.p2 - self.p1) * 6.0 * mt * t
            + (self.p3 - self.p2) * 3.0 * t2
    }
}

/// Loop-relative progress along an arc for a given elapsed time.
///
/// `fract()` of a non-negative value is always in `[0, 1)`, so the bullets
/// cycle forever without a discontinuity at the wrap point.
pub fn loop_phase(elapsed_secs: f32, speed: f32) -> f32 {
    (elapsed_secs * speed).fract()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::lat_lon_to_world;

    const EPS: f32 = 1e-4;

    #[test]
    fn endpoints_are_exact() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let end = Vec3::new(-4.0, 5.0, -6.0);
        let arc = ArcPath::new(start, end);
        assert_eq!(arc.point_at(0.0), start);
        assert_eq!(arc.point_at(1.0), end);
        assert_eq!(arc.start(), start);
        assert_eq!(arc.end(), end);
    }

    #[test]
    fn midpoint_bows_outward() {
        let start = lat_lon_to_world(45.4642, 9.19, 10.0);
        let end = lat_lon_to_world(40.7128, -74.006, 10.0);
        let arc = ArcPath::new(start, end);
        let straight_mid = start.lerp(end, 0.5);
        assert!(
            arc.point_at(0.5).length() > straight_mid.length(),
            "arc midpoint {} should sit outside the chord midpoint {}",
            arc.point_at(0.5).length(),
            straight_mid.length()
        );
    }

    #[test]
    fn interior_stays_outside_the_chord() {
        // Every interior sample should be at least as far from the origin as
        // the corresponding point on the straight chord.
        let start = lat_lon_to_world(35.6895, 139.6917, 10.0);
        let end = lat_lon_to_world(-33.8688, 151.2093, 10.0);
        let arc = ArcPath::new(start, end);
        for i in 1..16 {
            let t = i as f32 / 16.0;
            let on_arc = arc.point_at(t).length();
            let on_chord = start.lerp(end, t).length();
            assert!(
                on_arc + EPS >= on_chord,
                "t = {t}: arc {on_arc} < chord {on_chord}"
            );
        }
    }

    #[test]
    fn tangent_matches_finite_difference() {
        let arc = ArcPath::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 10.0, 0.0));
        let h = 1e-3;
        for t in [0.1, 0.35, 0.5, 0.9] {
            let numeric = (arc.point_at(t + h) - arc.point_at(t - h)) / (2.0 * h);
            let analytic = arc.tangent_at(t);
            assert!(
                numeric.distance(analytic) < 0.05,
                "t = {t}: numeric {numeric} vs analytic {analytic}"
            );
        }
    }

    #[test]
    fn loop_phase_stays_in_unit_interval() {
        for elapsed in [0.0_f32, 0.4, 1.0, 9.999, 10.0, 123.456, 1e6] {
            let phase = loop_phase(elapsed, ARC_PHASE_SPEED);
            assert!((0.0..1.0).contains(&phase), "elapsed {elapsed}: {phase}");
        }
    }

    #[test]
    fn loop_phase_is_continuous_across_the_wrap() {
        // One cycle is 1/speed seconds; just before the wrap the phase
        // approaches 1, just after it approaches 0, and the motion along the
        // curve is continuous because point_at(1) and point_at(0) of
        // consecutive loops coincide with the arc endpoints.
        let cycle = 1.0 / ARC_PHASE_SPEED;
        let before = loop_phase(cycle - 1e-3, ARC_PHASE_SPEED);
        let after = loop_phase(cycle + 1e-3, ARC_PHASE_SPEED);
        assert!(before > 0.999, "before wrap: {before}");
        assert!(after < 0.001, "after wrap: {after}");
    }

    #[test]
    fn milano_to_new_york_endpoints_match_projection() {
        let hub = lat_lon_to_world(45.4642, 9.19, 10.0);
        let target = lat_lon_to_world(40.7128, -74.006, 10.0);
        let arc = ArcPath::new(hub, target);
        assert_eq!(arc.point_at(0.0), hub);
        assert_eq!(arc.point_at(1.0), target);
    }
}
