//! Headless geometry and data for the globe: geographic projection,
//! flight-arc paths, and the static city table.
//!
//! Everything in this crate is pure math over `bevy::math` types (no
//! entities, no systems) so it can be unit-tested and benchmarked without
//! spinning up an `App`.

pub mod arc;
pub mod cities;
pub mod projection;
