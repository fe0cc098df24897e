//! Cover arbitrary polygons with geohash cells for spatial indexing.
//!
//! A [`RecursiveFiller`] walks the geohash tree from the root cell, keeping every cell the
//! polygon contains, dropping every cell it misses, and splitting boundary cells until the
//! maximum precision decides them according to the [`FillMode`]. The result is the minimal
//! variable precision cover, optionally expanded to a fixed precision.
//!
//! ```rust
//! use hashfill::{FillMode, Filler, FillerBuilder};
//! use geo::polygon;
//!
//! let fence = polygon![
//!     (x: -122.52, y: 37.70),
//!     (x: -122.35, y: 37.70),
//!     (x: -122.35, y: 37.83),
//!     (x: -122.52, y: 37.83),
//! ];
//!
//! let filler = FillerBuilder::new().max_precision(5).build();
//! let inside = filler.fill(&fence, FillMode::Contains, 10_000)?;
//! let touching = filler.fill(&fence, FillMode::Intersects, 10_000)?;
//! assert!(inside.iter().all(|h| touching.contains(h)));
//! # Ok::<(), hashfill::FillError>(())
//! ```

pub mod builder;
pub mod cell;
pub mod compute;
pub mod config;
pub mod error;
pub mod fill;
pub mod predicates;

pub use builder::FillerBuilder;
pub use config::FillerConfig;
pub use error::{FillError, Result};
pub use fill::{FillMode, Filler, RecursiveFiller};
pub use predicates::{CellPredicates, FnPredicates, GeoPredicates};

pub use geo::Polygon;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{FillError, FillMode, Filler, FillerBuilder, FillerConfig, Result};

    pub use crate::{CellPredicates, GeoPredicates, RecursiveFiller};

    pub use crate::cell::{GEOHASH_ALPHABET, cell_bounds, cell_polygon};

    #[cfg(feature = "geojson")]
    pub use crate::compute::geojson::polygon_from_geojson;

    pub use geo::Polygon;
}
