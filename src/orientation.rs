use std::cmp::Ordering;

use crate::HullScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// This is the exact sign of [`cross`](crate::predicates::cross)`(p1, p2, p3)`.
  /// The sign is computed with adaptive precision, so it is never wrong even
  /// when the floating point cross product rounds to the wrong side of zero.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use rhull::data::Point;
  /// # use rhull::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: HullScalar,
  {
    match T::cmp_slope(p1, p2, p3) {
      Ordering::Less => ClockWise,
      Ordering::Equal => CoLinear,
      Ordering::Greater => CounterClockWise,
    }
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }
}
