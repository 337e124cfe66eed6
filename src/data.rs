mod hull;
pub(crate) mod point;
mod vector;

#[doc(inline)]
pub use hull::Hull;
pub use point::Point;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
