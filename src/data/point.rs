use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use crate::{HullScalar, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }
}

// Methods on two-dimensional points.
impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T: HullScalar> Point<T, 2> {
  /// Neither coordinate is NaN or infinite.
  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  pub fn orientation(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Total order on `(x, y)`. `-0.0` and `0.0` compare equal, as they do
  /// under `==`.
  pub fn lex_cmp(&self, other: &Point<T, 2>) -> Ordering {
    self.lex_key().cmp(&other.lex_key())
  }

  pub(crate) fn lex_key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
    (
      OrderedFloat(self.array[0].into()),
      OrderedFloat(self.array[1].into()),
    )
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<Point<T, 2>> for (T, T) {
  fn from(point: Point<T, 2>) -> (T, T) {
    let [x, y] = point.array;
    (x, y)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

mod sub;

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
pub mod tests {
  use super::*;
  use crate::testing::*;
  use crate::Orientation::*;
  use crate::data::Vector;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn from_tuple() {
    let pt: Point<f64> = (1.5, -2.0).into();
    assert_eq!(pt, Point::new([1.5, -2.0]));
    assert_eq!(<(f64, f64)>::from(pt), (1.5, -2.0));
  }

  #[test]
  fn finite() {
    assert!(Point::new([0.0, 1.0]).is_finite());
    assert!(!Point::new([f64::NAN, 1.0]).is_finite());
    assert!(!Point::new([0.0, f64::NEG_INFINITY]).is_finite());
  }

  #[test]
  fn lexicographic() {
    let a = Point::new([0.0, 5.0]);
    let b = Point::new([1.0, -5.0]);
    let c = Point::new([1.0, 0.0]);
    assert_eq!(a.lex_cmp(&b), Ordering::Less);
    assert_eq!(b.lex_cmp(&c), Ordering::Less);
    assert_eq!(
      Point::new([-0.0, 0.0]).lex_cmp(&Point::new([0.0, -0.0])),
      Ordering::Equal
    );
  }

  #[test]
  fn turns() {
    assert_eq!(
      Point::new([0.0, 0.0]).orientation(&Point::new([0.0, 1.0]), &Point::new([2.0, 2.0])),
      ClockWise
    );
    assert_eq!(
      Point::new([1.0, 0.0]).orientation(&Point::new([2.0, 0.0]), &Point::new([1.0, 0.0])),
      CoLinear
    );
    assert_eq!(
      Point::new([1.0, 0.0]).orientation(&Point::new([0.0, 6.0]), &Point::new([0.0, 8.0])),
      ClockWise
    );
  }

  #[test]
  fn difference() {
    let p = Point::new([1.0, 2.0]);
    let q = Point::new([4.0, -2.0]);
    assert_eq!(&q - &p, Vector([3.0, -4.0]));
    assert_eq!(&p - &p, Vector([0.0, 0.0]));
  }

  #[proptest]
  fn lex_cmp_consistent_with_eq(
    #[strategy(any_pt())] p: Point<f64>,
    #[strategy(any_pt())] q: Point<f64>,
  ) {
    prop_assert_eq!(p.lex_cmp(&q) == Ordering::Equal, p == q);
  }
}
