//! Geometric predicates consulted by the filler.
//!
//! Both tests live on one trait so the pair is always swapped as a unit. Implementations
//! must be consistent: a cell reported as contained must also be reported as intersecting.

use crate::cell::cell_bounds;
use crate::error::Result;
use geo::{Contains, Intersects, Polygon};

/// The contains/intersects capability pair.
pub trait CellPredicates {
    /// True if `polygon` fully encloses the area of `cell`.
    fn contains(&self, polygon: &Polygon<f64>, cell: &str) -> Result<bool>;

    /// True if `polygon` overlaps the area of `cell` at all, touching included.
    fn intersects(&self, polygon: &Polygon<f64>, cell: &str) -> Result<bool>;
}

impl<T: CellPredicates + ?Sized> CellPredicates for &T {
    fn contains(&self, polygon: &Polygon<f64>, cell: &str) -> Result<bool> {
        (**self).contains(polygon, cell)
    }

    fn intersects(&self, polygon: &Polygon<f64>, cell: &str) -> Result<bool> {
        (**self).intersects(polygon, cell)
    }
}

/// Planar predicates evaluated with the `geo` crate against the decoded cell rectangle.
///
/// # Examples
///
/// ```
/// use hashfill::cell::cell_polygon;
/// use hashfill::predicates::{CellPredicates, GeoPredicates};
///
/// let fence = cell_polygon("9q").unwrap();
/// assert!(GeoPredicates.contains(&fence, "9q8").unwrap());
/// assert!(GeoPredicates.intersects(&fence, "9").unwrap());
/// assert!(!GeoPredicates.intersects(&fence, "u").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoPredicates;

impl CellPredicates for GeoPredicates {
    fn contains(&self, polygon: &Polygon<f64>, cell: &str) -> Result<bool> {
        let rect = cell_bounds(cell)?;
        Ok(polygon.contains(&rect))
    }

    fn intersects(&self, polygon: &Polygon<f64>, cell: &str) -> Result<bool> {
        let rect = cell_bounds(cell)?;
        Ok(polygon.intersects(&rect))
    }
}

/// Predicate pair backed by two closures.
///
/// ```
/// use hashfill::predicates::{CellPredicates, FnPredicates};
/// use geo::{Polygon, polygon};
///
/// let preds = FnPredicates::new(
///     |_: &Polygon<f64>, cell: &str| Ok(cell == "u"),
///     |_: &Polygon<f64>, cell: &str| Ok(cell.is_empty() || cell.starts_with('u')),
/// );
/// let fence = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)];
/// assert!(preds.contains(&fence, "u").unwrap());
/// assert!(!preds.intersects(&fence, "9").unwrap());
/// ```
pub struct FnPredicates<C, I> {
    contains: C,
    intersects: I,
}

impl<C, I> FnPredicates<C, I>
where
    C: Fn(&Polygon<f64>, &str) -> Result<bool>,
    I: Fn(&Polygon<f64>, &str) -> Result<bool>,
{
    pub fn new(contains: C, intersects: I) -> Self {
        Self {
            contains,
            intersects,
        }
    }
}

impl<C, I> CellPredicates for FnPredicates<C, I>
where
    C: Fn(&Polygon<f64>, &str) -> Result<bool>,
    I: Fn(&Polygon<f64>, &str) -> Result<bool>,
{
    fn contains(&self, polygon: &Polygon<f64>, cell: &str) -> Result<bool> {
        (self.contains)(polygon, cell)
    }

    fn intersects(&self, polygon: &Polygon<f64>, cell: &str) -> Result<bool> {
        (self.intersects)(polygon, cell)
    }
}

impl<C, I> std::fmt::Debug for FnPredicates<C, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPredicates").finish_non_exhaustive()
    }
}
