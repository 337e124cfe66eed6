#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar convex hulls.
//!
//! Two independent builders share one geometric kernel:
//!
//! * [`gift_wrapping::convex_hull`](algorithms::convex_hull::gift_wrapping::convex_hull)
//!   walks the boundary one extreme point at a time. $O(n h)$. Points lying on
//!   a hull edge may be reported as vertices.
//! * [`monotone_chain::convex_hull`](algorithms::convex_hull::monotone_chain::convex_hull)
//!   sorts once and builds a lower and an upper chain. $O(n \log n)$. Points
//!   lying on a hull edge are never reported.
//!
//! ```rust
//! # use rhull::algorithms::convex_hull;
//! # use rhull::data::Point;
//! let pts = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([1.0, 0.0]),
//!   Point::new([0.5, 0.5]),
//!   Point::new([1.0, 1.0]),
//!   Point::new([0.0, 1.0]),
//! ];
//! let hull = convex_hull(pts).unwrap();
//! assert_eq!(hull.len(), 4);
//! ```
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::Debug;

pub mod algorithms;
pub mod data;
mod orientation;
pub mod predicates;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A coordinate is NaN or infinite.
  NonFiniteCoordinate,
  DuplicatePoints,
  /// Three consecutive vertices turn clockwise, or a straight turn doubles back.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::NonFiniteCoordinate => write!(f, "Coordinate is NaN or infinite"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate type accepted by the hull builders.
///
/// Arithmetic (differences, dot products, normalization) happens in `Self`.
/// Turn directions are decided exactly on the lossless `f64` widening so that
/// every builder agrees on what counts as collinear.
pub trait HullScalar: Float + Debug + Into<f64> {
  /// Exact sign of the cross product `(q - p) x (r - p)`.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        // `orient2d` is adaptive: exact sign, but only pays for extended
        // precision when the fast estimate is ambiguous.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
