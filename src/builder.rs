//! Filler builder
//!
//! Collects the construction time options of a [`RecursiveFiller`]: maximum precision,
//! fixed precision output, and the predicate pair. Nothing is validated.

use crate::config::FillerConfig;
use crate::fill::RecursiveFiller;
use crate::predicates::GeoPredicates;

/// Builder for a [`RecursiveFiller`].
///
/// ```
/// use hashfill::FillerBuilder;
///
/// let filler = FillerBuilder::new().max_precision(4).fixed_precision().build();
/// assert_eq!(filler.max_precision(), 4);
/// assert!(filler.is_fixed_precision());
/// ```
#[derive(Debug, Clone)]
pub struct FillerBuilder<P = GeoPredicates> {
    config: FillerConfig,
    predicates: P,
}

impl FillerBuilder<GeoPredicates> {
    /// Builder with precision 6, variable precision output and [`GeoPredicates`].
    pub fn new() -> Self {
        Self {
            config: FillerConfig::default(),
            predicates: GeoPredicates,
        }
    }
}

impl<P> FillerBuilder<P> {
    /// Set the highest precision the filler searches to.
    pub fn max_precision(mut self, precision: usize) -> Self {
        self.config = self.config.with_max_precision(precision);
        self
    }

    /// Expand every accepted cell to the maximum precision.
    pub fn fixed_precision(mut self) -> Self {
        self.config = self.config.with_fixed_precision(true);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: FillerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the contains/intersects pair.
    pub fn predicates<Q>(self, predicates: Q) -> FillerBuilder<Q> {
        FillerBuilder {
            config: self.config,
            predicates,
        }
    }

    pub fn build(self) -> RecursiveFiller<P> {
        RecursiveFiller::from_parts(self.config, self.predicates)
    }
}

impl Default for FillerBuilder<GeoPredicates> {
    fn default() -> Self {
        Self::new()
    }
}
