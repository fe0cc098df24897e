//! Polygon filling.
//!
//! [`RecursiveFiller`] covers a polygon in two stages:
//! - a variable precision search that walks the implicit 32-ary geohash tree from the
//!   root cell and keeps the largest cells matching the [`FillMode`]
//! - an optional fixed precision pass that expands each kept cell into all of its
//!   descendants at the configured maximum precision
//!
//! Every place output accumulates is checked against the caller's `max_hashes` cap, so an
//! oversized cover fails fast instead of running the whole search first.

mod expand;
mod search;

use crate::config::FillerConfig;
use crate::error::{FillError, Result};
use crate::predicates::{CellPredicates, GeoPredicates};
use geo::Polygon;

/// Which cells at the precision limit count as part of the cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Cells straddling the boundary are kept.
    Intersects,
    /// Only cells fully inside the polygon are kept.
    Contains,
}

/// Anything that can fill a polygon with geohashes.
pub trait Filler {
    fn fill(
        &self,
        fence: &Polygon<f64>,
        mode: FillMode,
        max_hashes: usize,
    ) -> Result<Vec<String>>;
}

/// Fills a polygon by recursively searching for the largest cells accepted by the mode.
///
/// Immutable once built and reusable across any number of fills. It is `Send + Sync`
/// whenever the predicate pair is.
///
/// # Examples
///
/// ```
/// use hashfill::{FillMode, Filler, FillerBuilder};
/// use hashfill::cell::cell_polygon;
///
/// let fence = cell_polygon("9q8yy")?;
///
/// let filler = FillerBuilder::new().max_precision(6).build();
/// assert_eq!(filler.fill(&fence, FillMode::Contains, 1000)?, vec!["9q8yy"]);
///
/// let filler = FillerBuilder::new().max_precision(6).fixed_precision().build();
/// assert_eq!(filler.fill(&fence, FillMode::Contains, 1000)?.len(), 32);
/// # Ok::<(), hashfill::FillError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveFiller<P = GeoPredicates> {
    pub(crate) config: FillerConfig,
    pub(crate) predicates: P,
}

impl<P> RecursiveFiller<P> {
    pub(crate) fn from_parts(config: FillerConfig, predicates: P) -> Self {
        Self { config, predicates }
    }

    pub fn config(&self) -> &FillerConfig {
        &self.config
    }

    pub fn predicates(&self) -> &P {
        &self.predicates
    }

    pub fn max_precision(&self) -> usize {
        self.config.max_precision
    }

    pub fn is_fixed_precision(&self) -> bool {
        self.config.fixed_precision
    }
}

impl RecursiveFiller<GeoPredicates> {
    /// Filler with default configuration and the `geo` backed predicates.
    pub fn new() -> Self {
        Self::from_parts(FillerConfig::default(), GeoPredicates)
    }
}

impl Default for RecursiveFiller<GeoPredicates> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CellPredicates> Filler for RecursiveFiller<P> {
    /// Cover `fence` with geohashes, failing if more than `max_hashes` would be produced.
    ///
    /// The result is all-or-nothing: any predicate error or cap overflow aborts the fill.
    fn fill(
        &self,
        fence: &Polygon<f64>,
        mode: FillMode,
        max_hashes: usize,
    ) -> Result<Vec<String>> {
        let hashes = self
            .compute_variable_hashes(fence, mode, "", max_hashes)
            .inspect_err(|e| log_limit(e, mode))?;
        check_limit(hashes.len(), max_hashes).inspect_err(|e| log_limit(e, mode))?;

        if !self.config.fixed_precision {
            log::debug!(
                "Filled polygon with {} variable precision hashes (mode: {:?}, max precision: {})",
                hashes.len(),
                mode,
                self.config.max_precision
            );
            return Ok(hashes);
        }

        let mut out = Vec::with_capacity(hashes.len());
        for hash in &hashes {
            let extended = self
                .extend_hash_to_max_precision(hash, max_hashes)
                .inspect_err(|e| log_limit(e, mode))?;
            out.extend(extended);
            check_limit(out.len(), max_hashes).inspect_err(|e| log_limit(e, mode))?;
        }

        log::debug!(
            "Expanded {} variable precision hashes to {} hashes at precision {} (mode: {:?})",
            hashes.len(),
            out.len(),
            self.config.max_precision,
            mode
        );
        Ok(out)
    }
}

/// Fail once `count` exceeds `limit`.
pub(crate) fn check_limit(count: usize, limit: usize) -> Result<()> {
    if count > limit {
        return Err(FillError::HashLimitExceeded { limit, count });
    }
    Ok(())
}

fn log_limit(err: &FillError, mode: FillMode) {
    if let FillError::HashLimitExceeded { limit, count } = err {
        log::warn!(
            "Aborting {:?} fill: {} hashes exceed the limit of {}",
            mode,
            count,
            limit
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FillerBuilder;
    use crate::cell::cell_polygon;
    use crate::predicates::FnPredicates;

    #[test]
    fn test_check_limit() {
        assert!(check_limit(0, 0).is_ok());
        assert!(check_limit(10, 10).is_ok());
        assert_eq!(
            check_limit(11, 10).unwrap_err(),
            FillError::HashLimitExceeded {
                limit: 10,
                count: 11
            }
        );
    }

    #[test]
    fn test_default_filler() {
        let filler = RecursiveFiller::default();
        assert_eq!(filler.max_precision(), 6);
        assert!(!filler.is_fixed_precision());
        assert_eq!(*filler.predicates(), GeoPredicates);
    }

    #[test]
    fn test_fill_mode_serde() {
        let json = serde_json::to_string(&FillMode::Intersects).unwrap();
        assert_eq!(json, "\"intersects\"");
        let mode: FillMode = serde_json::from_str("\"contains\"").unwrap();
        assert_eq!(mode, FillMode::Contains);
    }

    #[test]
    fn test_variable_output_never_exceeds_limit() {
        let fence = cell_polygon("").unwrap();
        let filler = FillerBuilder::new().max_precision(0).build();

        assert_eq!(filler.fill(&fence, FillMode::Contains, 1).unwrap(), vec![""]);
        assert!(
            filler
                .fill(&fence, FillMode::Contains, 0)
                .unwrap_err()
                .is_hash_limit()
        );
    }

    #[test]
    fn test_expansion_overflow_after_successful_search() {
        let preds = FnPredicates::new(
            |_: &Polygon<f64>, cell: &str| Ok(cell == "s" || cell == "t"),
            |_: &Polygon<f64>, cell: &str| Ok(cell.is_empty() || cell == "s" || cell == "t"),
        );
        let fence = cell_polygon("s").unwrap();
        let variable = FillerBuilder::new().max_precision(2).predicates(&preds).build();
        assert_eq!(
            variable.fill(&fence, FillMode::Contains, 40).unwrap(),
            vec!["s", "t"]
        );

        let fixed = FillerBuilder::new()
            .max_precision(2)
            .fixed_precision()
            .predicates(&preds)
            .build();
        let err = fixed.fill(&fence, FillMode::Contains, 40).unwrap_err();
        assert_eq!(
            err,
            FillError::HashLimitExceeded {
                limit: 40,
                count: 64
            }
        );
        assert_eq!(fixed.fill(&fence, FillMode::Contains, 64).unwrap().len(), 64);
    }
}
