//! Geographic (lat/lon) to Cartesian projection onto the globe surface.

use bevy::prelude::*;

/// Radius of the globe in world units. Marker and arc geometry are sized
/// relative to this.
pub const GLOBE_RADIUS: f32 = 10.0;

/// Project a geographic coordinate onto a sphere of the given radius.
///
/// Latitude is in degrees in `[-90, 90]`, longitude in `[-180, 180]`.
/// Out-of-range values are not rejected; they produce mathematically defined
/// (if geographically meaningless) points.
///
/// The `lon + 180` offset and the negated x term align markers with the seam
/// of the equirectangular Earth texture. Both must stay exactly as they are
/// or every marker drifts off its city.
pub fn lat_lon_to_world(lat_deg: f32, lon_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();
    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}
