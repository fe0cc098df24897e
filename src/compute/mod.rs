//! Input helpers that sit in front of filling: polygon validation and GeoJSON conversion.

#[cfg(feature = "geojson")]
pub mod geojson;
pub mod validation;
