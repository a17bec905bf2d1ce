//! The embedded city table: one hub plus the destinations it connects to.

/// A named geographic coordinate. Latitude in degrees `[-90, 90]`, longitude
/// in degrees `[-180, 180]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub name: &'static str,
    pub lat: f32,
    pub lon: f32,
}

/// The hub every flight departs from.
pub const HUB: GeoPoint = GeoPoint {
    name: "Milano",
    lat: 45.4642,
    lon: 9.19,
};

/// Destination cities, one animated arc each.
pub const DESTINATIONS: &[GeoPoint] = &[
    GeoPoint {
        name: "New York",
        lat: 40.7128,
        lon: -74.0060,
    },
    GeoPoint {
        name: "Tokyo",
        lat: 35.6895,
        lon: 139.6917,
    },
    GeoPoint {
        name: "São Paulo",
        lat: -23.5505,
        lon: -46.6333,
    },
    GeoPoint {
        name: "Sydney",
        lat: -33.8688,
        lon: 151.2093,
    },
];
